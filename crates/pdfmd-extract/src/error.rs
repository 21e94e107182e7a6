use thiserror::Error;

/// Errors from the extraction collaborators.
///
/// Any per-page failure is fatal to the conversion: structure inference
/// has no meaningful partial-success state, so there is no retry or
/// partial-output path.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The bytes do not form a readable PDF document.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// A single page's content could not be extracted.
    #[error("page {page}: {detail}")]
    Page { page: usize, detail: String },
}
