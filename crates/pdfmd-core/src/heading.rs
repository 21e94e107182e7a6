//! Heading classification from a line's aggregate font metrics.
//!
//! Two tiers are combined deliberately. Absolute size ratios alone misfire
//! on documents whose body and heading sizes sit close together; pure
//! relative position misfires on documents with one giant outlier size
//! (a single cover-page title). The relative-band tier runs first, and the
//! absolute-ratio tier only when it yields nothing.

use crate::profile::FontProfile;

/// Minimum relative excess over the base size for a level-6 heading.
const LEVEL_SIX_MIN_EXCESS: f64 = 1.05;

/// Map a line's average font size and bold majority to a heading level.
///
/// Returns `None` for body text. A document with a single font size can
/// never produce a heading: the relative tier's denominator guard
/// disables it, and `avg_size <= base_size` rejects everything else.
pub fn classify_heading(avg_size: f64, bold_majority: bool, profile: &FontProfile) -> Option<u8> {
    if avg_size <= profile.base_size {
        return None;
    }
    relative_band(avg_size, bold_majority, profile)
        .or_else(|| ratio_fallback(avg_size, bold_majority, profile.base_size))
}

/// Tier one: position of the size within the document's observed range,
/// normalized to [0, 1].
fn relative_band(avg_size: f64, bold_majority: bool, profile: &FontProfile) -> Option<u8> {
    let max_size = profile.max_size()?;
    let span = max_size - profile.base_size;
    if span <= 0.0 {
        return None;
    }
    let relative = (avg_size - profile.base_size) / span;

    if relative >= 0.85 {
        Some(1)
    } else if relative >= 0.65 {
        Some(2)
    } else if relative >= 0.45 {
        Some(3)
    } else if relative >= 0.25 && bold_majority {
        Some(4)
    } else if relative >= 0.10 && bold_majority {
        Some(5)
    } else if bold_majority && avg_size > profile.base_size * LEVEL_SIX_MIN_EXCESS {
        Some(6)
    } else {
        None
    }
}

/// Tier two: absolute size ratio against the base, for documents whose
/// size spread is too narrow for the relative bands to separate.
fn ratio_fallback(avg_size: f64, bold_majority: bool, base_size: f64) -> Option<u8> {
    if base_size <= 0.0 {
        return None;
    }
    let ratio = avg_size / base_size;

    if ratio >= 1.8 {
        Some(1)
    } else if ratio >= 1.5 {
        Some(2)
    } else if ratio >= 1.3 {
        Some(3)
    } else if ratio >= 1.15 && bold_majority {
        Some(4)
    } else {
        None
    }
}
