//! Table blocks as supplied by an external table-detection collaborator.

use crate::geometry::BBox;

/// A detected table: its bounding box on the page plus a grid of cell text.
///
/// Rows may be jagged; [`TableBlock::normalized_rows`] pads them to the
/// widest row. Glyphs whose vertical position falls inside `bbox`'s
/// `[top, bottom]` span are excluded from line assembly so table content
/// is never emitted twice.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableBlock {
    /// Bounding box in top-left origin coordinates.
    pub bbox: BBox,
    /// Cell text, row-major. Rows may have differing lengths.
    pub rows: Vec<Vec<String>>,
}

impl TableBlock {
    /// Cleaned, rectangular cell grid.
    ///
    /// Cell text is trimmed, rows with no non-empty cell are dropped, and
    /// every remaining row is right-padded with empty strings to the
    /// widest row's length. Returns an empty grid when nothing survives.
    pub fn normalized_rows(&self) -> Vec<Vec<String>> {
        let mut cleaned: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.trim().to_string()).collect())
            .filter(|row: &Vec<String>| row.iter().any(|cell| !cell.is_empty()))
            .collect();

        let width = cleaned.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut cleaned {
            row.resize(width, String::new());
        }
        cleaned
    }
}
