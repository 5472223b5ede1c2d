mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dabs",
    version,
    about = "Extract the notice table and chart from a DABS airspace bulletin"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the notice table from a bulletin PDF
    Extract {
        /// Path to the bulletin PDF
        pdf_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write extracted output to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Skip malformed records instead of failing the whole extraction
        #[arg(long)]
        skip_malformed: bool,

        /// Bulletin layout variant (default: latest)
        #[arg(long, value_name = "NAME")]
        layout: Option<String>,
    },
    /// Render the chart page of a bulletin PDF to a PNG file
    Map {
        /// Path to the bulletin PDF
        pdf_file: PathBuf,

        /// Path where to save the chart PNG
        out_png: PathBuf,
    },
    /// Print the raw mudraw text dump of a bulletin PDF
    Dump {
        /// Path to the bulletin PDF
        pdf_file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            pdf_file,
            output,
            out,
            skip_malformed,
            layout,
        } => commands::extract::run(pdf_file, &output, out, skip_malformed, layout.as_deref()),
        Commands::Map { pdf_file, out_png } => commands::map::run(pdf_file, out_png),
        Commands::Dump { pdf_file } => commands::dump::run(pdf_file),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
