//! rsrscan: scan .docx documents for RSR entries
//!
//! This library loads the body paragraphs of a Microsoft Word document,
//! picks out the paragraphs mentioning RSR and, when there are none, the
//! paragraphs mentioning related climate-data keywords.

pub mod config;
pub mod document;
pub mod report;
pub mod scan;

/// Output format options
#[derive(clap::ValueEnum, Clone, Debug, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

// Re-export commonly used types
pub use config::ScanConfig;
pub use document::{load_document, Document, DocumentError};
pub use scan::{scan, scan_document, LineKind, ScanError, ScanLine, ScanOptions, ScanReport};
