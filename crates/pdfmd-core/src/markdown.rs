//! Serialization of structural units into Markdown text.

use std::sync::LazyLock;

use regex::Regex;

use crate::block::StructuralUnit;

static EXCESS_BLANKS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Render an ordered unit sequence as a Markdown document.
///
/// Headings and rules are surrounded by blank lines, paragraphs are
/// followed by one, and any run of three or more newlines collapses to a
/// single blank line. Leading and trailing blank lines are trimmed.
pub fn serialize(units: &[StructuralUnit]) -> String {
    let mut lines: Vec<String> = Vec::new();

    for unit in units {
        match unit {
            StructuralUnit::Heading { level, text } => {
                let hashes = "#".repeat(usize::from(*level));
                lines.push(String::new());
                lines.push(format!("{hashes} {text}"));
                lines.push(String::new());
            }
            StructuralUnit::BulletItem(text) => lines.push(format!("- {text}")),
            StructuralUnit::OrderedItem { index, text } => lines.push(format!("{index}. {text}")),
            StructuralUnit::Rule => {
                lines.push(String::new());
                lines.push("---".to_string());
                lines.push(String::new());
            }
            StructuralUnit::TableRow(cells) => {
                let escaped: Vec<String> = cells.iter().map(|c| escape_cell(c)).collect();
                lines.push(format!("| {} |", escaped.join(" | ")));
            }
            StructuralUnit::TableHeaderSeparator { columns } => {
                let dashes = vec!["---"; *columns];
                lines.push(format!("| {} |", dashes.join(" | ")));
            }
            StructuralUnit::Paragraph(text) => {
                lines.push(text.clone());
                lines.push(String::new());
            }
            StructuralUnit::BlankLine => lines.push(String::new()),
        }
    }

    let joined = lines.join("\n");
    let collapsed = EXCESS_BLANKS_RE.replace_all(&joined, "\n\n");
    collapsed.trim_matches('\n').to_string()
}

/// Escape literal pipes and flatten newlines so cell text cannot break
/// the table row syntax.
fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|").replace('\n', " ")
}
