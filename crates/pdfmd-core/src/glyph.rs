/// A single positioned character extracted from a PDF page.
///
/// Glyph records are produced by an extraction backend and are immutable
/// from this crate's point of view. Only the attributes that structure
/// inference reads are carried: position for line assembly, font name and
/// size for heading/emphasis classification.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphRecord {
    /// The text content of this glyph (one character or a ligature).
    pub text: String,
    /// 0-based page index.
    pub page: usize,
    /// Left edge, in points.
    pub x0: f64,
    /// Distance from the top of the page, in points.
    pub top: f64,
    /// Font name as reported by the PDF (e.g. `Helvetica-Bold`).
    pub fontname: String,
    /// Font size in points, when the backend knows it.
    pub size: Option<f64>,
}

impl GlyphRecord {
    /// Whether the font name indicates a bold face.
    pub fn is_bold(&self) -> bool {
        let lower = self.fontname.to_lowercase();
        lower.contains("bold") || lower.contains("heavy") || lower.contains("black")
    }

    /// Whether the font name indicates an italic face.
    pub fn is_italic(&self) -> bool {
        let lower = self.fontname.to_lowercase();
        lower.contains("italic") || lower.contains("oblique")
    }
}
