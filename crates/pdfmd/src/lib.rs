//! PDF → Markdown conversion by structure inference.
//!
//! A PDF page stream carries no semantic markup, only positioned glyphs
//! with typographic attributes. This crate reconstructs the authorial
//! structure (headings, lists, tables, paragraphs, emphasis) from
//! layout geometry and font metadata, and serializes it as Markdown.
//!
//! ```no_run
//! use pdfmd::Converter;
//!
//! let converter = Converter::new("report.pdf", None)?;
//! let output = converter.convert()?;
//! println!("wrote {}", output.display());
//! # Ok::<(), pdfmd::ConvertError>(())
//! ```
//!
//! Custom extraction backends plug in through
//! [`convert_source`] and the traits re-exported from `pdfmd-extract`.

mod convert;
mod error;
mod options;

pub use convert::{Converter, convert_source};
pub use error::ConvertError;
pub use options::ConvertOptions;

pub use pdfmd_core::{BBox, FontProfile, GlyphRecord, StructuralUnit, TableBlock};
pub use pdfmd_extract::{ExtractError, GlyphSource, LopdfSource, NoTables, TableSource};
