/*!
 * Error types for the quizparse application.
 *
 * The transcript parser itself never fails. PDF extraction reports its
 * failures through `ExtractionError`; file system and JSON errors in the
 * workflows are carried as `anyhow::Error` with context.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while pulling text out of a PDF
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The PDF file could not be read from disk
    #[error("Failed to read PDF {path:?}: {message}")]
    ReadFailed {
        /// Path of the PDF
        path: PathBuf,
        /// Underlying I/O error
        message: String,
    },

    /// The PDF library could not decode the document
    #[error("Failed to extract text from PDF {path:?}: {message}")]
    DecodeFailed {
        /// Path of the PDF
        path: PathBuf,
        /// Error reported by the PDF library
        message: String,
    },
}
