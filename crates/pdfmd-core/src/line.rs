//! Grouping of page glyphs into visual lines.

use crate::glyph::GlyphRecord;
use crate::table::TableBlock;

/// Vertical tolerance for clustering glyphs into the same line (points).
pub const Y_TOLERANCE: f64 = 3.0;

/// An ordered run of glyphs judged to belong to one reading line.
///
/// The line owns its contributing glyphs, so emphasis and heading
/// attribution read font metadata directly from membership instead of
/// re-deriving it from the rendered text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualLine {
    /// Glyphs in reading order (ascending `x0`).
    pub glyphs: Vec<GlyphRecord>,
}

impl VisualLine {
    /// Concatenated glyph text.
    pub fn text(&self) -> String {
        self.glyphs.iter().map(|g| g.text.as_str()).collect()
    }

    /// Mean font size over glyphs with a known size.
    ///
    /// Falls back to `base_size` when no glyph carries a size.
    pub fn avg_size(&self, base_size: f64) -> f64 {
        let sizes: Vec<f64> = self.glyphs.iter().filter_map(|g| g.size).collect();
        if sizes.is_empty() {
            base_size
        } else {
            sizes.iter().sum::<f64>() / sizes.len() as f64
        }
    }

    /// Fraction of glyphs whose font name indicates bold.
    pub fn bold_ratio(&self) -> f64 {
        self.ratio(GlyphRecord::is_bold)
    }

    /// Fraction of glyphs whose font name indicates italic.
    pub fn italic_ratio(&self) -> f64 {
        self.ratio(GlyphRecord::is_italic)
    }

    fn ratio(&self, pred: fn(&GlyphRecord) -> bool) -> f64 {
        if self.glyphs.is_empty() {
            return 0.0;
        }
        let hits = self.glyphs.iter().filter(|g| pred(g)).count();
        hits as f64 / self.glyphs.len() as f64
    }
}

/// Group a page's glyphs into ordered visual lines.
///
/// Glyphs whose vertical position falls within any table's `[top, bottom]`
/// span are excluded (table content is emitted separately from the cell
/// grid). The rest are sorted by `(top, x0)` and walked in order: a glyph
/// starts a new line when its `top` differs from the running reference
/// `top` by more than `y_tolerance`. A page with zero non-table glyphs
/// produces zero lines.
pub fn assemble_lines(
    glyphs: &[GlyphRecord],
    tables: &[TableBlock],
    y_tolerance: f64,
) -> Vec<VisualLine> {
    let mut sorted: Vec<&GlyphRecord> = glyphs
        .iter()
        .filter(|g| !tables.iter().any(|t| t.bbox.spans_y(g.top)))
        .collect();
    if sorted.is_empty() {
        return Vec::new();
    }

    sorted.sort_by(|a, b| {
        a.top
            .partial_cmp(&b.top)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.x0.partial_cmp(&b.x0).unwrap_or(std::cmp::Ordering::Equal))
    });

    let mut lines: Vec<VisualLine> = Vec::new();
    let mut current: Vec<GlyphRecord> = Vec::new();
    let mut reference_top = f64::NAN;

    for glyph in sorted {
        if current.is_empty() || (glyph.top - reference_top).abs() <= y_tolerance {
            current.push(glyph.clone());
        } else {
            lines.push(VisualLine { glyphs: current });
            current = vec![glyph.clone()];
        }
        reference_top = glyph.top;
    }
    lines.push(VisualLine { glyphs: current });

    // Left-to-right within each line; the (top, x0) pre-sort can interleave
    // glyphs of slightly different tops out of x-order.
    for line in &mut lines {
        line.glyphs
            .sort_by(|a, b| a.x0.partial_cmp(&b.x0).unwrap_or(std::cmp::Ordering::Equal));
    }

    lines
}
