//! Text extraction utilities
//!
//! This module flattens docx-rs paragraph and run elements into plain text.

/// Extract plain text from a paragraph, handling various child elements
pub(crate) fn extract_paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    push_paragraph_children(&para.children, &mut text);
    text
}

fn push_paragraph_children(children: &[docx_rs::ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            docx_rs::ParagraphChild::Run(run) => {
                text.push_str(&extract_run_text(run));
            }
            docx_rs::ParagraphChild::Insert(insert) => {
                // Tracked insertions are part of the visible text
                for child in &insert.children {
                    if let docx_rs::InsertChild::Run(run) = child {
                        text.push_str(&extract_run_text(run));
                    }
                }
            }
            docx_rs::ParagraphChild::Hyperlink(link) => {
                push_paragraph_children(&link.children, text);
            }
            docx_rs::ParagraphChild::Delete(_) => {
                // Skip deletions (track changes)
            }
            _ => {}
        }
    }
}

/// Extract text from a run
pub(crate) fn extract_run_text(run: &docx_rs::Run) -> String {
    let mut text = String::new();

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => {
                text.push_str(&text_elem.text);
            }
            docx_rs::RunChild::Tab(_) => {
                text.push('\t');
            }
            docx_rs::RunChild::Break(br) => {
                // Page and column breaks carry no text
                if *br == docx_rs::Break::new(docx_rs::BreakType::TextWrapping) {
                    text.push('\n');
                }
            }
            docx_rs::RunChild::CarriageReturn(_) => {
                text.push('\n');
            }
            _ => {}
        }
    }

    text
}
