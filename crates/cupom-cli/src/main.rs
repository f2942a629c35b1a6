mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cupom",
    version,
    about = "Line-item reader for Brazilian fiscal receipt (cupom fiscal) PDFs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a cupom fiscal PDF into line items and totals
    Process {
        /// Path to the receipt PDF
        pdf_file: PathBuf,

        /// Keep repeated items separate instead of grouping identical ones
        #[arg(long)]
        no_group: bool,

        /// Max line distance for binding a discount annotation to its item
        #[arg(long, default_value_t = 1, value_name = "LINES")]
        discount_window: usize,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the result as semicolon-delimited CSV
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Extraction backend: pdftotext (default) or embedded
        #[arg(long, default_value = "pdftotext")]
        backend: String,
    },
    /// Compare a list of returned product codes against a cupom (devolução)
    Devolucao {
        /// Path to the receipt PDF
        pdf_file: PathBuf,

        /// File with one product code per line, or "-" for stdin
        #[arg(short, long, value_name = "FILE")]
        codes: PathBuf,

        /// Keep repeated items separate instead of grouping identical ones
        #[arg(long)]
        no_group: bool,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the comparison report as semicolon-delimited CSV
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Extraction backend: pdftotext (default) or embedded
        #[arg(long, default_value = "pdftotext")]
        backend: String,
    },
    /// Dump the raw extracted text (troubleshooting aid)
    Text {
        /// Path to the receipt PDF
        pdf_file: PathBuf,

        /// Extraction backend: pdftotext (default) or embedded
        #[arg(long, default_value = "pdftotext")]
        backend: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Process {
            pdf_file,
            no_group,
            discount_window,
            output,
            out,
            backend,
        } => commands::process::run(pdf_file, no_group, discount_window, &output, out, &backend),
        Commands::Devolucao {
            pdf_file,
            codes,
            no_group,
            output,
            out,
            backend,
        } => commands::devolucao::run(pdf_file, codes, no_group, &output, out, &backend),
        Commands::Text { pdf_file, backend } => commands::text::run(pdf_file, &backend),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
