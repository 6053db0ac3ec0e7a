/*!
 * # quizparse - quiz transcript to JSON converter
 *
 * A Rust library for turning the text of trivia-contest PDFs into a structured
 * JSON document of rounds, players, questions, answers, accepted alternatives
 * and per-language translations.
 *
 * ## Features
 *
 * - Line-oriented transcript parser that never fails on unexpected input
 * - `ROUND`/`PLAYER`/`QUESTION` headers with word (`THREE`) or digit (`3`) numbers
 * - `ANS:` lines with `(accept ...)` and `... or ...` alternates
 * - Translations for a fixed set of languages
 * - PDF text extraction and batch conversion with a summary index
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `quiz_parser`: The transcript state machine and document model
 * - `language_utils`: Recognised translation languages
 * - `pdf_extractor`: PDF to text extraction
 * - `file_utils`: File system operations
 * - `quiz_index`: Batch summary index
 * - `app_config`: Configuration management
 * - `app_controller`: Single-file and batch conversion workflows
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod quiz_parser;
pub mod quiz_index;
pub mod pdf_extractor;
pub mod app_controller;
pub mod language_utils;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use quiz_parser::{parse_transcript, Player, Question, QuizDocument, QuizMetadata, QuizParser, Round};
pub use language_utils::TranslationLanguage;
pub use errors::ExtractionError;
