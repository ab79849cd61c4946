//! Conversions between files on disk and the editor's text content.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use docx_rs::{read_docx, DocumentChild, Docx, Paragraph, ParagraphChild, Run, RunChild, Text};

use crate::app::domain::DocumentFormat;
use crate::app::infrastructure::error::{EditorError, Result};

/// Read a whole file as UTF-8 text.
pub fn load_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes)
        .map_err(|e| EditorError::Format(format!("file is not valid UTF-8 text: {}", e)))
}

/// Read a Word document, one line per paragraph. Formatting is discarded.
pub fn load_structured_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let docx = read_docx(&bytes).map_err(|e| EditorError::Format(e.to_string()))?;

    let escaped = run_text_is_escaped();
    let mut content = String::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let text = paragraph_text(paragraph);
            if escaped {
                content.push_str(&decode_entities(&text));
            } else {
                content.push_str(&text);
            }
            content.push('\n');
        }
    }
    Ok(content)
}

/// The reader rebuilds run text through `Text::new`; when that constructor
/// entity-escapes, the parsed text comes back escaped once.
fn run_text_is_escaped() -> bool {
    Text::new("&").text != "&"
}

/// Undo one level of XML entity escaping.
fn decode_entities(text: &str) -> String {
    const ENTITIES: [(&str, char); 6] = [
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&apos;", '\''),
        ("&#39;", '\''),
    ];

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(at) = rest.find('&') {
        out.push_str(&rest[..at]);
        rest = &rest[at..];
        match ENTITIES.iter().find(|(entity, _)| rest.starts_with(*entity)) {
            Some((entity, c)) => {
                out.push(*c);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(t) => text.push_str(&t.text),
                    RunChild::Tab(_) => text.push('\t'),
                    _ => {}
                }
            }
        }
    }
    text
}

/// Write `content` as plain text with trailing whitespace removed.
pub fn save_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content.trim_end())?;
    Ok(())
}

/// Write `content` as a Word document with one paragraph per line.
///
/// The archive is packed in memory first, so a packing failure leaves any
/// existing file at `path` untouched.
pub fn save_structured_document(path: &Path, content: &str) -> Result<()> {
    let docx = content.lines().fold(Docx::new(), |docx, line| {
        let paragraph = if line.is_empty() {
            Paragraph::new()
        } else {
            Paragraph::new().add_run(Run::new().add_text(line))
        };
        docx.add_paragraph(paragraph)
    });

    let mut archive = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut archive)
        .map_err(|e| EditorError::Format(e.to_string()))?;

    fs::write(path, archive.into_inner())?;
    Ok(())
}

/// Load `path` using the format implied by its extension.
pub fn load_document(path: &Path) -> Result<String> {
    match DocumentFormat::from_path(path) {
        DocumentFormat::Structured => load_structured_document(path),
        DocumentFormat::PlainText => load_text(path),
    }
}

/// Save `content` to `path` using the format implied by its extension.
pub fn save_document(path: &Path, content: &str) -> Result<()> {
    match DocumentFormat::from_path(path) {
        DocumentFormat::Structured => save_structured_document(path, content),
        DocumentFormat::PlainText => save_text(path, content),
    }
}
