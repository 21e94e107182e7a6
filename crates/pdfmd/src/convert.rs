//! Whole-document conversion orchestration.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use pdfmd_core::{FontProfile, GlyphRecord, StructuralUnit, TableBlock, assemble_lines, emit_page};
use pdfmd_extract::{GlyphSource, LopdfSource, NoTables, TableSource};

use crate::error::ConvertError;
use crate::options::ConvertOptions;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One-shot PDF → Markdown converter for a single file.
///
/// Input validation happens at construction: a missing path or a
/// non-`.pdf` extension is rejected before any processing. The output
/// path defaults to the input with its extension replaced by `.md`.
pub struct Converter {
    input: PathBuf,
    output: PathBuf,
    options: ConvertOptions,
}

impl Converter {
    /// Validate the input path and fix the output path.
    ///
    /// # Errors
    ///
    /// [`ConvertError::InputNotFound`] if the path does not exist,
    /// [`ConvertError::WrongFormat`] if it does not end in `.pdf`
    /// (case-insensitive).
    pub fn new(
        input: impl Into<PathBuf>,
        output: Option<PathBuf>,
    ) -> Result<Self, ConvertError> {
        let input = input.into();

        if !input.exists() {
            return Err(ConvertError::InputNotFound { path: input });
        }
        let is_pdf = input
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if !is_pdf {
            return Err(ConvertError::WrongFormat { path: input });
        }

        let output = output.unwrap_or_else(|| input.with_extension("md"));
        Ok(Self {
            input,
            output,
            options: ConvertOptions::default(),
        })
    }

    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// Where the Markdown will be written.
    pub fn output_path(&self) -> &Path {
        &self.output
    }

    /// Convert and write the output file. Returns the output path.
    pub fn convert(&self) -> Result<PathBuf, ConvertError> {
        let markdown = self.convert_to_string()?;
        fs::write(&self.output, markdown)?;
        info!(input = %self.input.display(), output = %self.output.display(), "converted");
        Ok(self.output.clone())
    }

    /// Convert without writing, using the built-in lopdf glyph source and
    /// no table detector.
    pub fn convert_to_string(&self) -> Result<String, ConvertError> {
        let bytes = fs::read(&self.input)?;
        let source = LopdfSource::open(&bytes)?;
        convert_source(&source, &NoTables, &self.options)
    }
}

/// Run the full pipeline over arbitrary extraction collaborators.
///
/// The font profile pass covers every page before any page is classified;
/// heading thresholds depend on the global size distribution. Page
/// classification itself is independent per page and runs in parallel
/// under the `parallel` feature, with units reassembled in page order.
pub fn convert_source<G, T>(
    glyphs: &G,
    tables: &T,
    options: &ConvertOptions,
) -> Result<String, ConvertError>
where
    G: GlyphSource,
    T: TableSource,
{
    let page_count = glyphs.page_count();
    info!(pages = page_count, "starting conversion");

    let mut pages: Vec<(Vec<GlyphRecord>, Vec<TableBlock>)> = Vec::with_capacity(page_count);
    for index in 0..page_count {
        pages.push((glyphs.page_glyphs(index)?, tables.page_tables(index)?));
    }

    let profile = FontProfile::from_glyphs(pages.iter().flat_map(|(g, _)| g.iter()));
    debug!(
        base_size = profile.base_size,
        sizes = profile.distinct_sizes.len(),
        "font profile"
    );

    let emit_options = options.emit_options();
    let process = |(page_glyphs, page_tables): &(Vec<GlyphRecord>, Vec<TableBlock>)| {
        let lines = assemble_lines(page_glyphs, page_tables, options.y_tolerance);
        let mut units = Vec::new();
        emit_page(&lines, page_tables, &profile, &emit_options, &mut units);
        units
    };

    #[cfg(feature = "parallel")]
    let page_units: Vec<Vec<StructuralUnit>> = pages.par_iter().map(process).collect();
    #[cfg(not(feature = "parallel"))]
    let page_units: Vec<Vec<StructuralUnit>> = pages.iter().map(process).collect();

    let mut units: Vec<StructuralUnit> = Vec::new();
    for (index, page) in page_units.into_iter().enumerate() {
        debug!(page = index, units = page.len(), "classified page");
        units.extend(page);
    }

    Ok(pdfmd_core::serialize(&units))
}
