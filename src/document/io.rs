//! File I/O operations and validation
//!
//! This module checks that a file is a .docx container before it is handed
//! to the parser, and defines the errors document loading can produce.

use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use zip::ZipArchive;

/// Everything that can go wrong while opening or parsing a document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid .docx archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("failed to parse document: {0}")]
    Parse(#[from] docx_rs::ReaderError),

    #[error("malformed word/document.xml: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("{0}")]
    InvalidFormat(String),
}

/// Part holding the document body
const DOCUMENT_PART: &str = "word/document.xml";

/// Validates that the file is a legitimate .docx file
///
/// The format is identified by content, not by extension: the file must be
/// a zip archive whose `word/document.xml` is well-formed XML.
pub(crate) fn validate_docx_file(file_path: &Path) -> Result<(), DocumentError> {
    let file = File::open(file_path)?;
    let mut archive = ZipArchive::new(file)?;

    let Some(index) = archive.index_for_name(DOCUMENT_PART) else {
        if archive.index_for_name("xl/workbook.xml").is_some() {
            return Err(DocumentError::InvalidFormat(
                "This appears to be an Excel file (.xlsx), not a Word document (.docx)."
                    .to_string(),
            ));
        }

        return Err(DocumentError::InvalidFormat(
            "Invalid .docx file: missing word/document.xml\n\
            This file may be corrupted or is not a valid Word document."
                .to_string(),
        ));
    };

    let mut body = Vec::new();
    archive.by_index(index)?.read_to_end(&mut body)?;
    check_well_formed(&body)
}

/// Reads `xml` to the end, failing on syntax errors, mismatched or unclosed
/// tags, and a missing root element
pub(crate) fn check_well_formed(xml: &[u8]) -> Result<(), DocumentError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(_) => {
                if depth == 0 && seen_root {
                    return Err(malformed("has more than one root element"));
                }
                depth += 1;
                seen_root = true;
            }
            Event::Empty(_) => {
                if depth == 0 {
                    if seen_root {
                        return Err(malformed("has more than one root element"));
                    }
                    seen_root = true;
                }
            }
            Event::End(_) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| malformed("has a closing tag without an opening tag"))?;
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err(malformed("has no root element"));
    }
    if depth > 0 {
        return Err(malformed("ends inside an open element"));
    }
    Ok(())
}

fn malformed(reason: &str) -> DocumentError {
    DocumentError::InvalidFormat(format!("Invalid .docx file: {DOCUMENT_PART} {reason}"))
}
