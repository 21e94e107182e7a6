mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pdfmd::{ConvertOptions, Converter};

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(code) = run(&cli) {
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> Result<(), i32> {
    if cli.output.is_some() && cli.input_files.len() > 1 {
        eprintln!("Error: -o/--output can only be used with a single input file");
        return Err(2);
    }

    let options = ConvertOptions {
        y_tolerance: cli.y_tolerance,
        detect_lists: !cli.no_lists,
        detect_emphasis: !cli.no_emphasis,
    };

    let mut failed = false;
    for input in &cli.input_files {
        let result = Converter::new(input, cli.output.clone())
            .map(|c| c.with_options(options.clone()))
            .and_then(|c| c.convert());

        match result {
            Ok(output) => {
                println!("[OK] Converted: {} -> {}", input.display(), output.display());
            }
            Err(e) => {
                eprintln!("[ERROR] Error converting {}: {e}", input.display());
                failed = true;
            }
        }
    }

    if failed { Err(1) } else { Ok(()) }
}
