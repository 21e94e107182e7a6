//! Per-line block classification and structural-unit emission.

use std::sync::LazyLock;

use regex::Regex;

use crate::emphasis::apply_emphasis;
use crate::heading::classify_heading;
use crate::line::VisualLine;
use crate::profile::FontProfile;
use crate::table::TableBlock;

/// One classified block of output.
///
/// Units accumulate in an append-only buffer; insertion order is reading
/// order and nothing is removed or reordered after emission.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StructuralUnit {
    Heading { level: u8, text: String },
    BulletItem(String),
    /// The index is the literal integer captured from the source text.
    /// Gaps and resets in the source numbering are preserved, never
    /// recomputed.
    OrderedItem { index: u64, text: String },
    Rule,
    TableRow(Vec<String>),
    TableHeaderSeparator { columns: usize },
    Paragraph(String),
    BlankLine,
}

/// Toggles for the classification passes.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Detect bullet and numbered list prefixes.
    pub detect_lists: bool,
    /// Wrap majority-bold/italic lines in emphasis markers.
    pub detect_emphasis: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            detect_lists: true,
            detect_emphasis: true,
        }
    }
}

static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\u{2022}\u{2023}\u{25E6}\u{2043}\u{2219}\u{25CF}\u{25CB}-]\s*(.+)$").unwrap());

static ORDERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)[.)\]]\s*(.+)$").unwrap());

static RULE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-_=]{3,}$").unwrap());

/// Append one page's structural units to the output buffer.
///
/// Tables are emitted first, then the page's assembled lines in reading
/// order. (Hoisting tables to page start rather than interleaving them at
/// their true vertical position is a deliberate simplification.)
pub fn emit_page(
    lines: &[VisualLine],
    tables: &[TableBlock],
    profile: &FontProfile,
    options: &EmitOptions,
    out: &mut Vec<StructuralUnit>,
) {
    for table in tables {
        emit_table(table, out);
    }
    for line in lines {
        emit_line(line, profile, options, out);
    }
}

fn emit_table(table: &TableBlock, out: &mut Vec<StructuralUnit>) {
    let rows = table.normalized_rows();
    let Some((header, body)) = rows.split_first() else {
        return;
    };

    push_blank(out);
    out.push(StructuralUnit::TableRow(header.clone()));
    out.push(StructuralUnit::TableHeaderSeparator {
        columns: header.len(),
    });
    for row in body {
        out.push(StructuralUnit::TableRow(row.clone()));
    }
    push_blank(out);
}

/// Classify one line, in priority order: blank, heading, bullet item,
/// ordered item, rule, paragraph.
fn emit_line(
    line: &VisualLine,
    profile: &FontProfile,
    options: &EmitOptions,
    out: &mut Vec<StructuralUnit>,
) {
    let text = line.text();
    let text = text.trim();
    if text.is_empty() {
        push_blank(out);
        return;
    }

    let bold_majority = line.bold_ratio() > 0.5;
    if let Some(level) = classify_heading(line.avg_size(profile.base_size), bold_majority, profile)
    {
        out.push(StructuralUnit::Heading {
            level,
            text: text.to_string(),
        });
        return;
    }

    if options.detect_lists {
        if let Some(caps) = BULLET_RE.captures(text) {
            out.push(StructuralUnit::BulletItem(caps[1].to_string()));
            return;
        }
        if let Some(caps) = ORDERED_RE.captures(text) {
            // Digit runs too long for u64 fall through to paragraph.
            if let Ok(index) = caps[1].parse::<u64>() {
                out.push(StructuralUnit::OrderedItem {
                    index,
                    text: caps[2].to_string(),
                });
                return;
            }
        }
    }

    let despaced: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if RULE_RE.is_match(&despaced) {
        out.push(StructuralUnit::Rule);
        return;
    }

    let rendered = if options.detect_emphasis {
        apply_emphasis(line, text)
    } else {
        text.to_string()
    };
    out.push(StructuralUnit::Paragraph(rendered));
}

/// Push a blank, collapsing consecutive blanks at emission time.
fn push_blank(out: &mut Vec<StructuralUnit>) {
    if !matches!(out.last(), Some(StructuralUnit::BlankLine) | None) {
        out.push(StructuralUnit::BlankLine);
    }
}
