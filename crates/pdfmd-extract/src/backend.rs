//! Extraction collaborator boundaries.
//!
//! Structure inference consumes positioned glyphs and detected table
//! grids; both arrive through traits so a higher-fidelity extractor or a
//! real table detector can be plugged in without touching the pipeline.

use pdfmd_core::{GlyphRecord, TableBlock};

use crate::error::ExtractError;

/// Supplies positioned glyph records, one list per page.
///
/// Glyph ordering within a page is arbitrary; the line assembler re-sorts.
pub trait GlyphSource {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// All glyphs on the page at the given 0-based index.
    ///
    /// # Errors
    ///
    /// Returns an error if the page content cannot be read. A page that
    /// simply contains no text yields an empty list, not an error.
    fn page_glyphs(&self, index: usize) -> Result<Vec<GlyphRecord>, ExtractError>;
}

/// Supplies detected table regions, one list per page.
///
/// Table detection happens outside this crate; implement this trait to
/// feed a detector's output into the pipeline.
pub trait TableSource {
    /// Detected tables on the page at the given 0-based index.
    ///
    /// # Errors
    ///
    /// Returns an error if detection failed for the page.
    fn page_tables(&self, index: usize) -> Result<Vec<TableBlock>, ExtractError>;
}

/// A [`TableSource`] that detects nothing. The default when no external
/// detector is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTables;

impl TableSource for NoTables {
    fn page_tables(&self, _index: usize) -> Result<Vec<TableBlock>, ExtractError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_tables_yields_empty() {
        assert!(NoTables.page_tables(0).unwrap().is_empty());
        assert!(NoTables.page_tables(99).unwrap().is_empty());
    }
}
