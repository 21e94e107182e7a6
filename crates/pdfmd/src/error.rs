//! Fatal conversion errors.
//!
//! Only conditions that stop a conversion outright live here. A document
//! that yields zero glyphs (a scanned, image-only PDF) is NOT an error:
//! the pipeline degrades to an empty or near-empty output document.

use std::path::PathBuf;

use thiserror::Error;

pub use pdfmd_extract::ExtractError;

/// All fatal errors returned by [`Converter`](crate::Converter).
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input path does not exist. Reported before any processing.
    #[error("input file not found: {path}")]
    InputNotFound { path: PathBuf },

    /// The input path does not carry a `.pdf` extension. Reported before
    /// any processing.
    #[error("input file must be a .pdf file: {path}")]
    WrongFormat { path: PathBuf },

    /// An extraction collaborator failed. There is no partial-output or
    /// retry path: structure inference has no meaningful partial-success
    /// state.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
