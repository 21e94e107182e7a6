//! Extraction collaborators for pdfmd.
//!
//! Exposes the [`GlyphSource`] and [`TableSource`] trait boundaries the
//! structure-inference pipeline consumes, plus [`LopdfSource`], a slim
//! lopdf-backed glyph source good enough for text-bearing PDFs with
//! simple (non-CID) fonts.

pub mod backend;
pub mod error;
pub mod lopdf_backend;

pub use backend::{GlyphSource, NoTables, TableSource};
pub use error::ExtractError;
pub use lopdf_backend::LopdfSource;
