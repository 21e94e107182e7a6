//! Whole-line emphasis inference.
//!
//! The decision is a majority vote over the line's glyph font names:
//! sub-line emphasis spans are not attempted, because mapping raw glyph
//! positions back to visible word boundaries is unreliable without the
//! extraction library's word grouping.

use crate::line::VisualLine;

/// Fraction of glyphs that must carry a bold or italic font name before
/// the whole line is wrapped.
pub const EMPHASIS_THRESHOLD: f64 = 0.7;

/// Wrap a line's text in Markdown emphasis markers when a strong majority
/// of its glyphs are bold and/or italic. Returns the text unmarked
/// otherwise.
pub fn apply_emphasis(line: &VisualLine, text: &str) -> String {
    let bold = line.bold_ratio() > EMPHASIS_THRESHOLD;
    let italic = line.italic_ratio() > EMPHASIS_THRESHOLD;

    match (bold, italic) {
        (true, true) => format!("***{text}***"),
        (true, false) => format!("**{text}**"),
        (false, true) => format!("*{text}*"),
        (false, false) => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::GlyphRecord;

    fn line_with_fonts(fonts: &[&str]) -> VisualLine {
        VisualLine {
            glyphs: fonts
                .iter()
                .enumerate()
                .map(|(i, fontname)| GlyphRecord {
                    text: "x".to_string(),
                    page: 0,
                    x0: i as f64 * 6.0,
                    top: 0.0,
                    fontname: fontname.to_string(),
                    size: Some(12.0),
                })
                .collect(),
        }
    }

    #[test]
    fn test_mostly_bold_line_wrapped_double() {
        // 4 of 5 glyphs bold (80% > 70%), no italics.
        let line = line_with_fonts(&[
            "Helvetica-Bold",
            "Helvetica-Bold",
            "Helvetica-Bold",
            "Helvetica-Bold",
            "Helvetica",
        ]);
        assert_eq!(apply_emphasis(&line, "text"), "**text**");
    }

    #[test]
    fn test_mostly_italic_line_wrapped_single() {
        let line = line_with_fonts(&["Times-Italic", "Times-Italic", "Times-Italic"]);
        assert_eq!(apply_emphasis(&line, "text"), "*text*");
    }

    #[test]
    fn test_bold_italic_line_wrapped_triple() {
        let line = line_with_fonts(&["Helvetica-BoldOblique", "Helvetica-BoldOblique"]);
        assert_eq!(apply_emphasis(&line, "text"), "***text***");
    }

    #[test]
    fn test_minority_weight_left_unmarked() {
        // Exactly 50% bold does not pass the 70% threshold.
        let line = line_with_fonts(&["Helvetica-Bold", "Helvetica"]);
        assert_eq!(apply_emphasis(&line, "text"), "text");
    }

    #[test]
    fn test_threshold_is_strict() {
        // Exactly 70% is not a strong enough majority.
        let line = line_with_fonts(&[
            "Helvetica-Bold",
            "Helvetica-Bold",
            "Helvetica-Bold",
            "Helvetica-Bold",
            "Helvetica-Bold",
            "Helvetica-Bold",
            "Helvetica-Bold",
            "Helvetica",
            "Helvetica",
            "Helvetica",
        ]);
        assert_eq!(apply_emphasis(&line, "text"), "text");
    }
}
