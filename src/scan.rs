//! RSR scanning
//!
//! A scan walks a document's paragraphs once, tagging every non-empty
//! paragraph as RSR data or plain content. When nothing matches the RSR
//! term, a second pass tags paragraphs that mention any related keyword.

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::document::{load_document, Document, DocumentError, DocumentMetadata, TermMatcher};

/// Default substring marking a paragraph as RSR data
pub const DEFAULT_TERM: &str = "rsr";

/// Keywords searched for when a document has no RSR data
pub const DEFAULT_RELATED_TERMS: [&str; 5] = ["climate", "data", "agency", "earthscape", "big data"];

#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub term: TermMatcher,
    pub related: TermMatcher,
}

impl ScanOptions {
    pub fn new<I, S>(term: &str, related_terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            term: TermMatcher::new([term]),
            related: TermMatcher::new(related_terms),
        }
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::new(DEFAULT_TERM, DEFAULT_RELATED_TERMS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Rsr,
    Content,
    Related,
}

impl LineKind {
    pub fn label(self) -> &'static str {
        match self {
            LineKind::Rsr => "RSR Data",
            LineKind::Content => "Content",
            LineKind::Related => "Related",
        }
    }
}

/// One tagged paragraph, in the order it is reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanLine {
    pub kind: LineKind,
    pub paragraph_index: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    pub title: String,
    pub metadata: DocumentMetadata,
    /// Trimmed text of every RSR paragraph, in document order
    pub entries: Vec<String>,
    pub lines: Vec<ScanLine>,
}

impl ScanReport {
    /// True when the related-term pass ran
    pub fn searched_related(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn related(&self) -> impl Iterator<Item = &ScanLine> {
        self.lines
            .iter()
            .filter(|line| line.kind == LineKind::Related)
    }
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Document not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("Error reading document: {source}")]
    DocumentReadFailure {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },
}

impl ScanError {
    pub fn path(&self) -> &Path {
        match self {
            ScanError::MissingFile { path } | ScanError::DocumentReadFailure { path, .. } => path,
        }
    }
}

/// Load the document at `path` and scan it
///
/// A missing path is reported without any attempt to open it. Every
/// failure while opening or parsing collapses into `DocumentReadFailure`;
/// no entries are returned from a document that failed to load.
pub fn scan(path: &Path, options: &ScanOptions) -> Result<ScanReport, ScanError> {
    if !path.exists() {
        return Err(ScanError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let document = load_document(path).map_err(|source| ScanError::DocumentReadFailure {
        path: path.to_path_buf(),
        source,
    })?;

    let report = scan_document(&document, options);
    info!(
        path = %path.display(),
        entries = report.entries.len(),
        related = report.related().count(),
        "scan finished"
    );
    Ok(report)
}

/// Scan an already loaded document
pub fn scan_document(document: &Document, options: &ScanOptions) -> ScanReport {
    let mut entries = Vec::new();
    let mut lines = Vec::new();

    for (paragraph_index, text) in document.non_empty_paragraphs() {
        let kind = if options.term.matches(text) {
            entries.push(text.to_string());
            LineKind::Rsr
        } else {
            LineKind::Content
        };
        lines.push(ScanLine {
            kind,
            paragraph_index,
            text: text.to_string(),
        });
    }

    if entries.is_empty() {
        debug!(terms = ?options.related.terms(), "no RSR data, searching related terms");
        lines.extend(
            document
                .non_empty_paragraphs()
                .filter(|(_, text)| options.related.matches(text))
                .map(|(paragraph_index, text)| ScanLine {
                    kind: LineKind::Related,
                    paragraph_index,
                    text: text.to_string(),
                }),
        );
    }

    ScanReport {
        title: document.title.clone(),
        metadata: document.metadata.clone(),
        entries,
        lines,
    }
}
