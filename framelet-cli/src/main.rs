mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "framelet")]
#[command(about = "Framelet - compact framing codec for byte streams", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack payloads into framelet frames
    Pack {
        /// Input JSON file (array of payload strings)
        #[arg(short, long)]
        input: String,

        /// Output file for the packed frame stream
        #[arg(short, long)]
        output: String,

        /// Starting frame counter
        #[arg(long, default_value = "0")]
        start_counter: u16,
    },

    /// Scan a damaged stream and recover frames
    Scan {
        /// Input file to scan
        #[arg(short, long)]
        input: String,

        /// Output JSON file for recovered frames
        #[arg(short, long)]
        output: Option<String>,

        /// Show statistics only
        #[arg(long)]
        stats_only: bool,
    },

    /// Strictly decode a single frame and report its fields
    Verify {
        /// Input file holding exactly one frame
        #[arg(short, long)]
        input: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Pack {
            input,
            output,
            start_counter,
        } => commands::pack::execute(&input, &output, start_counter),

        Commands::Scan {
            input,
            output,
            stats_only,
        } => commands::scan::execute(&input, output.as_deref(), stats_only),

        Commands::Verify { input } => commands::verify::execute(&input),
    }
}
