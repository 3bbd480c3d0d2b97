//! latex-delims - rewrite LaTeX math delimiters in a Markdown file

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use latex_delims::{process_file, ProcessConfig};

#[derive(Parser)]
#[command(name = "latex-delims")]
#[command(version, about = "Rewrite \\( \\) and \\[ \\] math in Markdown as $ and $$", long_about = None)]
#[command(after_help = "EXAMPLES:
    latex-delims doc.md    Write doc_processed.md next to doc.md")]
struct Cli {
    /// Markdown file to normalize
    #[arg(value_name = "FILENAME", allow_hyphen_values = true)]
    input: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    // Logs go to stderr; stdout carries only the confirmation lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match process_file(&cli.input, &ProcessConfig::default()) {
        Ok(output) => {
            println!("Successfully processed '{}'", cli.input.display());
            println!("Output written to '{}'", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
