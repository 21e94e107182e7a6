use pdfmd_core::{EmitOptions, Y_TOLERANCE};

/// Options for a PDF → Markdown conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Vertical tolerance for clustering glyphs into lines (in points).
    pub y_tolerance: f64,
    /// Detect bullet and numbered list prefixes.
    pub detect_lists: bool,
    /// Wrap majority-bold/italic lines in emphasis markers.
    pub detect_emphasis: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            y_tolerance: Y_TOLERANCE,
            detect_lists: true,
            detect_emphasis: true,
        }
    }
}

impl ConvertOptions {
    pub(crate) fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            detect_lists: self.detect_lists,
            detect_emphasis: self.detect_emphasis,
        }
    }
}
