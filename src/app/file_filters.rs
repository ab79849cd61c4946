use crate::app::controllers::FileKind;

/// Filter offered by the Open dialog and the document Save dialog.
///
/// FLTK format: "Description (pattern)" entries separated by tabs; the
/// first entry is selected initially.
pub fn document_filter() -> String {
    [
        "Documents (*.{docx,txt})",
        "Word Documents (*.docx)",
        "Text Files (*.txt)",
    ]
    .join("\t")
}

pub fn pdf_filter() -> String {
    "PDF Files (*.pdf)".to_string()
}

pub fn filter_for(kind: FileKind) -> String {
    match kind {
        FileKind::Document => document_filter(),
        FileKind::Pdf => pdf_filter(),
    }
}
