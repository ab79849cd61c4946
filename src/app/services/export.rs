//! PDF export: lay the text out on A4 pages in Helvetica 12 and write it.
//!
//! Layout is computed up front (`layout_pages`) so it can be tested without
//! rendering. The on-screen theme is never consulted.

use std::fs;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::app::infrastructure::error::{EditorError, Result};

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 10.0;
/// Bottom margin that triggers a page break.
pub const BREAK_MARGIN_MM: f32 = 20.0;
pub const LINE_HEIGHT_MM: f32 = 10.0;
pub const FONT_SIZE_PT: f32 = 12.0;
/// Inner padding of a text cell on each side.
const CELL_PADDING_MM: f32 = 1.0;

const MM_PER_PT: f32 = 25.4 / 72.0;
const TAB_REPLACEMENT: &str = "    ";
const SUBSTITUTE_CHAR: char = '?';

/// Helvetica advance widths (1/1000 em) for U+0020..=U+007E.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];
/// Width used for Latin-1 characters above U+00A0.
const LATIN1_DEFAULT_WIDTH: u16 = 556;

/// Width of the printable area of one text cell.
pub fn printable_width_mm() -> f32 {
    PAGE_WIDTH_MM - 2.0 * MARGIN_MM - 2.0 * CELL_PADDING_MM
}

/// Number of lines that fit on one page before the break margin.
pub fn lines_per_page() -> usize {
    let usable = PAGE_HEIGHT_MM - BREAK_MARGIN_MM - MARGIN_MM;
    (usable / LINE_HEIGHT_MM).floor() as usize
}

fn char_width_mm(c: char) -> f32 {
    let units = match c as u32 {
        code @ 0x20..=0x7e => HELVETICA_WIDTHS[(code - 0x20) as usize],
        _ => LATIN1_DEFAULT_WIDTH,
    };
    units as f32 / 1000.0 * FONT_SIZE_PT * MM_PER_PT
}

/// Rendered width of `text` in millimetres.
pub fn text_width_mm(text: &str) -> f32 {
    text.chars().map(char_width_mm).sum()
}

/// Replace characters the built-in font cannot encode.
///
/// Tabs become four spaces; anything outside printable Latin-1 becomes `?`.
pub fn sanitize_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for c in line.chars() {
        match c {
            '\t' => out.push_str(TAB_REPLACEMENT),
            ' '..='~' | '\u{a0}'..='\u{ff}' => out.push(c),
            _ => out.push(SUBSTITUTE_CHAR),
        }
    }
    out
}

/// Break one line into pieces no wider than `max_width` millimetres.
///
/// Breaks after spaces where possible; a word wider than the line is split
/// between characters. Concatenating the pieces gives back `line`.
pub fn wrap_line(line: &str, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;
    // Byte offset in `current` just after the last space, if any
    let mut last_break: Option<usize> = None;

    for c in line.chars() {
        let w = char_width_mm(c);
        if current_width + w > max_width && !current.is_empty() {
            match last_break {
                Some(at) if at < current.len() => {
                    let rest = current.split_off(at);
                    pieces.push(std::mem::replace(&mut current, rest));
                }
                _ => pieces.push(std::mem::take(&mut current)),
            }
            current_width = text_width_mm(&current);
            last_break = None;
        }
        current.push(c);
        current_width += w;
        if c == ' ' {
            last_break = Some(current.len());
        }
    }

    if !current.is_empty() || pieces.is_empty() {
        pieces.push(current);
    }
    pieces
}

/// Split `content` into pages of printable rows. Always yields at least one
/// (possibly empty) page.
pub fn layout_pages(content: &str) -> Vec<Vec<String>> {
    let width = printable_width_mm();
    let rows: Vec<String> = content
        .lines()
        .flat_map(|line| wrap_line(&sanitize_line(line), width))
        .collect();

    if rows.is_empty() {
        return vec![Vec::new()];
    }
    rows.chunks(lines_per_page()).map(|page| page.to_vec()).collect()
}

/// Export `content` to a PDF at `path`. Returns the number of pages written.
pub fn export_to_page_format(path: &Path, content: &str) -> Result<usize> {
    let pages = layout_pages(content);
    let title = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "Untitled".to_string());

    let (doc, first_page, first_layer) =
        PdfDocument::new(title.as_str(), Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| EditorError::Format(e.to_string()))?;

    let font_height_mm = FONT_SIZE_PT * MM_PER_PT;
    for (index, rows) in pages.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
            doc.get_page(page).get_layer(layer)
        };

        for (row, text) in rows.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            // Baseline sits in the vertical middle of the cell, measured from the top
            let top = MARGIN_MM + row as f32 * LINE_HEIGHT_MM;
            let baseline = top + LINE_HEIGHT_MM / 2.0 + 0.3 * font_height_mm;
            layer.use_text(
                text.as_str(),
                FONT_SIZE_PT,
                Mm(MARGIN_MM + CELL_PADDING_MM),
                Mm(PAGE_HEIGHT_MM - baseline),
                &font,
            );
        }
    }

    let mut writer = BufWriter::new(Vec::new());
    doc.save(&mut writer)
        .map_err(|e| EditorError::Format(e.to_string()))?;
    let bytes = writer
        .into_inner()
        .map_err(|e| EditorError::Io(e.into_error()))?;
    fs::write(path, bytes)?;

    Ok(pages.len())
}
