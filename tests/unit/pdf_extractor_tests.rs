/*!
 * Tests for PDF text extraction
 */

use quizparse::errors::ExtractionError;
use quizparse::pdf_extractor;
use crate::common;

/// Test text comes out of a real PDF line by line
#[test]
fn test_extractText_withValidPdf_shouldReturnTranscriptLines() {
    let text = pdf_extractor::extract_text(common::test_resource_path("quiz_round_one.pdf"))
        .expect("fixture PDF should extract");

    let lines: Vec<&str> = text.lines().map(str::trim).filter(|line| !line.is_empty()).collect();
    assert!(lines.contains(&"ROUND ONE"), "lines: {:?}", lines);
    assert!(lines.contains(&"QUESTION ONE"), "lines: {:?}", lines);
}

/// Test a missing file is reported as a read failure with its path
#[test]
fn test_extractText_withMissingFile_shouldReturnReadFailed() {
    let error = pdf_extractor::extract_text("missing_quiz.pdf").unwrap_err();

    assert!(matches!(error, ExtractionError::ReadFailed { .. }));
    assert!(error.to_string().contains("missing_quiz.pdf"));
}

/// Test undecodable bytes are reported as a decode failure
#[test]
fn test_extractText_withGarbageFile_shouldReturnDecodeFailed() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "broken.pdf", "garbage")?;

    let error = pdf_extractor::extract_text(&path).unwrap_err();

    assert!(matches!(error, ExtractionError::DecodeFailed { .. }));
    Ok(())
}
