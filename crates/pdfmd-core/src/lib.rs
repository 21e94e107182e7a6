//! Backend-independent document-structure inference.
//!
//! Reconstructs authorial structure (headings, lists, tables, paragraphs,
//! emphasis) from positioned glyphs with typographic attributes, and
//! serializes it as Markdown. The pipeline runs strictly forward:
//!
//! 1. [`FontProfile`]: one whole-document scan establishing the body
//!    size and the set of distinct sizes.
//! 2. [`assemble_lines`]: per page, glyphs outside table regions grouped
//!    into ordered [`VisualLine`]s.
//! 3. [`emit_page`]: lines and table grids classified into
//!    [`StructuralUnit`]s, appended in reading order.
//! 4. [`serialize`]: units joined into Markdown with blank-line
//!    collapsing.
//!
//! The profile pass must complete before any page is classified, because
//! heading thresholds are relative to the global size distribution. Within
//! that constraint pages are independent.

pub mod block;
pub mod emphasis;
pub mod geometry;
pub mod glyph;
pub mod heading;
pub mod line;
pub mod markdown;
pub mod profile;
pub mod table;

pub use block::{EmitOptions, StructuralUnit, emit_page};
pub use emphasis::apply_emphasis;
pub use geometry::BBox;
pub use glyph::GlyphRecord;
pub use heading::classify_heading;
pub use line::{VisualLine, Y_TOLERANCE, assemble_lines};
pub use markdown::serialize;
pub use profile::{DEFAULT_BASE_SIZE, FontProfile};
pub use table::TableBlock;
