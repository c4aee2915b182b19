//! Core data structures for document representation
//!
//! A scanned document is deliberately flat: the body paragraphs in document
//! order, plus a little metadata about the file they came from.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub metadata: DocumentMetadata,
    /// Untrimmed paragraph text, one entry per top-level body paragraph
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub file_path: String,
    pub file_size: u64,
    pub paragraph_count: usize,
    pub word_count: usize,
}

impl Document {
    /// Paragraphs that still have text after trimming, with their original index
    pub fn non_empty_paragraphs(&self) -> impl Iterator<Item = (usize, &str)> {
        self.paragraphs
            .iter()
            .enumerate()
            .map(|(index, text)| (index, text.trim()))
            .filter(|(_, text)| !text.is_empty())
    }
}
