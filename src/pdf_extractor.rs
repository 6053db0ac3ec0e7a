use std::fs;
use std::path::Path;
use log::debug;

use crate::errors::ExtractionError;

// @module: PDF text extraction

/// Extract the text of every page of a PDF, pages joined with `\n`
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String, ExtractionError> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|e| ExtractionError::ReadFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    extract_text_from_bytes(&bytes).map_err(|message| ExtractionError::DecodeFailed {
        path: path.to_path_buf(),
        message,
    })
}

/// Extract page text from in-memory PDF bytes
pub fn extract_text_from_bytes(bytes: &[u8]) -> Result<String, String> {
    // pdf-extract panics on some malformed documents instead of returning an error
    let pages = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
        .map_err(|_| "PDF decoder panicked".to_string())?
        .map_err(|e| e.to_string())?;

    debug!("Extracted {} page(s) of text", pages.len());

    Ok(pages.join("\n"))
}

/// Whether the bytes start with the PDF magic header
pub fn looks_like_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(b"%PDF-")
}
