use std::path::PathBuf;

use clap::Parser;

/// Convert PDF documents to Markdown files.
#[derive(Debug, Parser)]
#[command(name = "pdfmd", about, version)]
pub struct Cli {
    /// Input PDF file(s) to convert
    #[arg(value_name = "FILE", required = true)]
    pub input_files: Vec<PathBuf>,

    /// Output file path (only valid with a single input file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Vertical tolerance for grouping glyphs into lines (points)
    #[arg(long, default_value_t = 3.0)]
    pub y_tolerance: f64,

    /// Do not detect bullet/numbered list prefixes
    #[arg(long)]
    pub no_lists: bool,

    /// Do not infer bold/italic emphasis from font names
    #[arg(long)]
    pub no_emphasis: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
