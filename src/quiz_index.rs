use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::file_utils::FileManager;
use crate::quiz_parser::QuizDocument;

// @module: Summary index of converted quizzes

/// One converted quiz as listed in the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizIndexEntry {
    /// Quiz title
    pub name: String,

    /// Location of the JSON file as served to consumers
    pub file: String,

    /// Short human-readable summary, e.g. "3 rounds, 48 questions"
    pub description: String,
}

impl QuizIndexEntry {
    /// Build an entry for a document written to `output_file`
    pub fn from_document<P: AsRef<Path>>(document: &QuizDocument, output_file: P, url_prefix: &str) -> Self {
        QuizIndexEntry {
            name: document.metadata.title.clone(),
            file: format!(
                "{}/{}",
                url_prefix.trim_end_matches('/'),
                FileManager::file_name(output_file)
            ),
            description: format!(
                "{} rounds, {} questions",
                document.metadata.rounds,
                document.total_questions()
            ),
        }
    }
}

/// Index of all quizzes produced by a batch conversion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizIndex {
    pub quizzes: Vec<QuizIndexEntry>,
}

impl QuizIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: QuizIndexEntry) {
        self.quizzes.push(entry);
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }

    /// Write the index as pretty-printed JSON, creating parent directories
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize quiz index")?;
        FileManager::write_to_file(path, &json)
    }

    /// Load an index written by `write_to_file`
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = FileManager::read_to_string(&path)?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse quiz index: {:?}", path.as_ref()))
    }
}
