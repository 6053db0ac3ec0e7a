/*!
 * Common test utilities for the quizparse test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use chrono::NaiveDate;
use tempfile::TempDir;
use quizparse::QuizParser;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Installs a test logger so parser debug output shows up with --nocapture
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Date stamped on documents by `test_parser`
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
}

/// Parser with a fixed conversion date
pub fn test_parser() -> QuizParser {
    QuizParser::with_date(test_date())
}

/// A two-round transcript in the shape produced by PDF extraction
pub const SAMPLE_TRANSCRIPT: &str = "\
INTERNATIONAL QUIZ CHAMPIONSHIP
ROUND ONE
PLAYER ONE
QUESTION ONE
What is the capital of France?
ANS: Paris (accept Paris, France)
French: Quelle est la capitale de la France?
German: Was ist die Hauptstadt von Frankreich?
QUESTION TWO
Which city hosted the
1964 Summer Olympics?
ANS: Tokyo or Kyoto
PLAYER TWO
QUESTION ONE
Who painted the Mona Lisa?
ANS: Leonardo da Vinci
ROUND TWO
PLAYER ONE
QUESTION ONE
TIEBREAKER
How many strings does a standard violin have?
ANS: Four
Danish: accept fire
";

/// Absolute path to a file under tests/resources
pub fn test_resource_path(relative_path: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("resources");
    path.push(relative_path);
    path
}

/// Creates the sample transcript as a text file
pub fn create_sample_transcript(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_TRANSCRIPT)
}
