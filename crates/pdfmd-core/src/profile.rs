//! Document-wide font size analysis.
//!
//! The profile is computed once, over every glyph of every page, before
//! any line is classified: heading thresholds are relative to the global
//! size distribution, not to a single page.

use std::collections::HashMap;

use crate::glyph::GlyphRecord;

/// Nominal body size used when a document yields no sized glyphs.
pub const DEFAULT_BASE_SIZE: f64 = 12.0;

/// The document's observed font size distribution.
///
/// `base_size` is the most frequent size rounded to one decimal place,
/// taken as the body-text size. Ties break toward the smaller size, so
/// body text wins over a rare larger run of equal count.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontProfile {
    /// The inferred body-text size in points.
    pub base_size: f64,
    /// All rounded sizes seen, sorted descending.
    pub distinct_sizes: Vec<f64>,
}

impl Default for FontProfile {
    fn default() -> Self {
        Self {
            base_size: DEFAULT_BASE_SIZE,
            distinct_sizes: Vec::new(),
        }
    }
}

/// Round a size to one decimal place, as a histogram key in tenths.
fn tenths(size: f64) -> i64 {
    (size * 10.0).round() as i64
}

impl FontProfile {
    /// Build the profile from all glyphs of a document.
    ///
    /// A document with no sized glyphs (e.g. a scanned PDF) produces the
    /// default profile; that is not an error condition.
    pub fn from_glyphs<'a, I>(glyphs: I) -> Self
    where
        I: IntoIterator<Item = &'a GlyphRecord>,
    {
        let mut counts: HashMap<i64, usize> = HashMap::new();
        for glyph in glyphs {
            if let Some(size) = glyph.size {
                *counts.entry(tenths(size)).or_insert(0) += 1;
            }
        }

        if counts.is_empty() {
            return Self::default();
        }

        // Mode, ties broken by the smaller size.
        let base_key = counts
            .iter()
            .map(|(&key, &count)| (count, std::cmp::Reverse(key)))
            .max()
            .map(|(_, std::cmp::Reverse(key))| key)
            .unwrap_or(tenths(DEFAULT_BASE_SIZE));

        let mut keys: Vec<i64> = counts.keys().copied().collect();
        keys.sort_unstable_by(|a, b| b.cmp(a));

        Self {
            base_size: base_key as f64 / 10.0,
            distinct_sizes: keys.into_iter().map(|k| k as f64 / 10.0).collect(),
        }
    }

    /// The largest observed size, if any glyph carried one.
    pub fn max_size(&self) -> Option<f64> {
        self.distinct_sizes.first().copied()
    }
}
