use anyhow::{Result, Context};
use std::fs;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::pdf_extractor;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    // @generates: Output path for a converted quiz
    // @params: input_file, output_dir, extension
    pub fn generate_output_path<P1: AsRef<Path>, P2: AsRef<Path>>(
        input_file: P1,
        output_dir: P2,
        extension: &str,
    ) -> PathBuf {
        let input_file = input_file.as_ref();
        let output_dir = output_dir.as_ref();

        let mut output_filename = Self::file_stem(input_file);
        output_filename.push('.');
        output_filename.push_str(extension.trim_start_matches('.'));

        output_dir.join(output_filename)
    }

    /// File name without its extension, lossily converted
    pub fn file_stem<P: AsRef<Path>>(path: P) -> String {
        path.as_ref()
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }

    /// File name including its extension, lossily converted
    pub fn file_name<P: AsRef<Path>>(path: P) -> String {
        path.as_ref()
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }

    /// Find files with a specific extension directly inside a directory
    ///
    /// Subdirectories are not searched. Results are sorted by path.
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();
        let wanted = extension.trim_start_matches('.');

        for entry in WalkDir::new(dir.as_ref()).min_depth(1).max_depth(1).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    if ext.to_string_lossy().eq_ignore_ascii_case(wanted) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        result.sort();
        Ok(result)
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Detect whether a file is a PDF or a plain-text transcript
    pub fn detect_file_type<P: AsRef<Path>>(path: P) -> Result<FileType> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(anyhow::anyhow!("File does not exist: {:?}", path));
        }

        // Check file extension
        if let Some(ext) = path.extension() {
            match ext.to_string_lossy().to_lowercase().as_str() {
                "pdf" => return Ok(FileType::Pdf),
                "txt" | "text" => return Ok(FileType::Text),
                _ => {}
            }
        }

        // Fall back to examining file contents
        let mut head = Vec::with_capacity(1024);
        File::open(path)
            .with_context(|| format!("Failed to open file: {:?}", path))?
            .take(1024)
            .read_to_end(&mut head)
            .with_context(|| format!("Failed to read file: {:?}", path))?;

        if pdf_extractor::looks_like_pdf(&head) {
            return Ok(FileType::Pdf);
        }

        let is_text = match std::str::from_utf8(&head) {
            Ok(_) => true,
            // A character cut off at the end of the sample still counts
            Err(e) => e.error_len().is_none(),
        };
        if is_text {
            return Ok(FileType::Text);
        }

        Ok(FileType::Unknown)
    }
}

/// Enum representing the input files the converter understands
#[derive(Debug, PartialEq, Eq)]
pub enum FileType {
    /// PDF document
    Pdf,
    /// Already extracted text transcript
    Text,
    /// Unknown file type
    Unknown,
}
