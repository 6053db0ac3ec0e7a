use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::file_utils::{FileManager, FileType};
use crate::pdf_extractor;
use crate::quiz_index::{QuizIndex, QuizIndexEntry};
use crate::quiz_parser::{QuizDocument, QuizParser};

// @module: Application controller for quiz conversion

/// Options for converting a single file
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Output JSON path; defaults to the input path with a `.json` extension
    pub output: Option<PathBuf>,

    /// Quiz title; defaults to the input file stem
    pub title: Option<String>,

    /// Source name; defaults to the input file name
    pub source: Option<String>,

    /// Overwrite an existing output file
    pub force_overwrite: bool,
}

/// Outcome of one successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub title: String,
    pub source: String,
    pub output_path: PathBuf,
    pub rounds: usize,
    pub questions: usize,
}

impl ConversionSummary {
    fn new(document: &QuizDocument, output_path: PathBuf) -> Self {
        ConversionSummary {
            title: document.metadata.title.clone(),
            source: document.metadata.source.clone(),
            output_path,
            rounds: document.metadata.rounds,
            questions: document.total_questions(),
        }
    }
}

/// Outcome of a batch conversion
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Files converted, in processing order
    pub converted: Vec<ConversionSummary>,

    /// Files that failed, with the reason
    pub failed: Vec<(PathBuf, String)>,

    /// Files left alone because their JSON already existed
    pub skipped: usize,

    /// Where the index was written, if anything was converted
    pub index_path: Option<PathBuf>,
}

/// Main application controller for quiz conversion
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Transcript parser
    parser: QuizParser,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        Ok(Self {
            config,
            parser: QuizParser::new(),
        })
    }

    /// Replace the parser, e.g. to pin the conversion date
    pub fn with_parser(mut self, parser: QuizParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the transcript text of a PDF or a text file
    pub fn load_transcript(&self, input_file: &Path) -> Result<String> {
        match FileManager::detect_file_type(input_file)? {
            FileType::Pdf => {
                debug!("Extracting text from PDF {:?}", input_file);
                Ok(pdf_extractor::extract_text(input_file)?)
            }
            FileType::Text => FileManager::read_to_string(input_file),
            FileType::Unknown => Err(anyhow!("Unsupported input file: {:?}", input_file)),
        }
    }

    /// Parse an input file into a document with title and source filled in
    pub fn convert_document(&self, input_file: &Path, title: Option<&str>, source: Option<&str>) -> Result<QuizDocument> {
        let text = self.load_transcript(input_file)?;

        let mut document = self.parser.parse(&text);
        document.metadata.title = title
            .map(str::to_string)
            .unwrap_or_else(|| FileManager::file_stem(input_file));
        document.metadata.source = source
            .map(str::to_string)
            .unwrap_or_else(|| FileManager::file_name(input_file));

        Ok(document)
    }

    /// Convert one input file to JSON
    ///
    /// Returns `None` when the output already exists and overwriting was not requested.
    pub fn run(&self, input_file: &Path, options: &ConvertOptions) -> Result<Option<ConversionSummary>> {
        let start_time = std::time::Instant::now();

        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output_path = options
            .output
            .clone()
            .unwrap_or_else(|| input_file.with_extension("json"));

        if output_path.exists() && !options.force_overwrite {
            warn!("Skipping file, output already exists (use -f to force overwrite): {:?}", output_path);
            return Ok(None);
        }

        info!("Converting {:?}", input_file);
        let document = self.convert_document(input_file, options.title.as_deref(), options.source.as_deref())?;
        self.write_document(&document, &output_path)?;

        let summary = ConversionSummary::new(&document, output_path);
        info!("Success: {}", summary.output_path.display());
        info!("Total rounds: {}", summary.rounds);
        info!("Total questions: {}", summary.questions);
        debug!("Conversion took {}", Self::format_duration(start_time.elapsed()));

        Ok(Some(summary))
    }

    /// Convert every PDF directly inside `input_dir` and write the quiz index
    ///
    /// A failure on one file is logged and recorded; the remaining files are
    /// still converted.
    pub fn run_folder(&self, input_dir: &Path, output_dir: &Path, index_path: &Path) -> Result<BatchReport> {
        let start_time = std::time::Instant::now();

        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        FileManager::ensure_dir(output_dir)?;

        let pdf_files = FileManager::find_files(input_dir, "pdf")?;
        let mut report = BatchReport::default();

        if pdf_files.is_empty() {
            warn!("No PDF files found in {:?}", input_dir);
            return Ok(report);
        }

        info!("Found {} PDF file(s)", pdf_files.len());

        let progress_bar = ProgressBar::new(pdf_files.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("█▓▒░"));

        let mut index = QuizIndex::new();

        for pdf_file in &pdf_files {
            let file_name = FileManager::file_name(pdf_file);
            progress_bar.set_message(file_name.clone());

            let output_path = FileManager::generate_output_path(pdf_file, output_dir, "json");
            if self.config.skip_existing && output_path.exists() {
                debug!("Skipping {}, {:?} already exists", file_name, output_path);
                report.skipped += 1;
                progress_bar.inc(1);
                continue;
            }

            match self.convert_pdf(pdf_file, &output_path) {
                Ok(document) => {
                    let summary = ConversionSummary::new(&document, output_path.clone());
                    progress_bar.suspend(|| {
                        info!("Saved {} ({} rounds, {} questions)", output_path.display(), summary.rounds, summary.questions);
                    });
                    index.push(QuizIndexEntry::from_document(&document, &output_path, &self.config.index_url_prefix));
                    report.converted.push(summary);
                }
                Err(e) => {
                    progress_bar.suspend(|| error!("Error processing {}: {:#}", file_name, e));
                    report.failed.push((pdf_file.clone(), format!("{:#}", e)));
                }
            }

            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();

        if !index.is_empty() {
            index.write_to_file(index_path)?;
            info!("Quiz index created: {}", index_path.display());
            report.index_path = Some(index_path.to_path_buf());
        }

        info!("Total quizzes: {}", index.len());
        info!("Successful: {}", report.converted.len());
        info!("Failed: {}", report.failed.len());
        if report.skipped > 0 {
            info!("Skipped: {}", report.skipped);
        }
        info!("Finished in {}", Self::format_duration(start_time.elapsed()));

        Ok(report)
    }

    fn convert_pdf(&self, pdf_file: &Path, output_path: &Path) -> Result<QuizDocument> {
        let text = pdf_extractor::extract_text(pdf_file)?;

        let mut document = self.parser.parse(&text);
        document.metadata.title = FileManager::file_stem(pdf_file);
        document.metadata.source = FileManager::file_name(pdf_file);

        self.write_document(&document, output_path)?;
        Ok(document)
    }

    fn write_document(&self, document: &QuizDocument, output_path: &Path) -> Result<()> {
        let json = document
            .to_json(self.config.pretty_json)
            .context("Failed to serialize quiz document")?;
        FileManager::write_to_file(output_path, &json)
            .with_context(|| format!("Error writing output file: {:?}", output_path))
    }

    // Format duration in a human-readable format (HH:MM:SS)
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
