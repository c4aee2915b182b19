//! Document loading
//!
//! `load_document()` validates a .docx file, parses it with docx-rs and
//! collects the top-level body paragraphs into our internal `Document`.

use std::path::Path;
use tracing::debug;

use super::io::{validate_docx_file, DocumentError};
use super::models::*;
use super::parsing::text::extract_paragraph_text;

/// Load a .docx file into a `Document`
///
/// Only paragraphs that are direct children of the document body are kept;
/// tables, headers, footers and text boxes are not visited. Empty
/// paragraphs are kept so paragraph indices match the source document.
pub fn load_document(file_path: &Path) -> Result<Document, DocumentError> {
    // Validate file type before attempting to parse
    validate_docx_file(file_path)?;

    let file_size = std::fs::metadata(file_path)?.len();
    let file_data = std::fs::read(file_path)?;
    let docx = docx_rs::read_docx(&file_data)?;

    let title = file_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled Document")
        .to_string();

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            docx_rs::DocumentChild::Paragraph(para) => Some(extract_paragraph_text(para)),
            _ => None,
        })
        .collect();

    let word_count = paragraphs
        .iter()
        .map(|text| text.split_whitespace().count())
        .sum();

    debug!(
        path = %file_path.display(),
        file_size,
        paragraphs = paragraphs.len(),
        word_count,
        "loaded document"
    );

    Ok(Document {
        title,
        metadata: DocumentMetadata {
            file_path: file_path.to_string_lossy().to_string(),
            file_size,
            paragraph_count: paragraphs.len(),
            word_count,
        },
        paragraphs,
    })
}
