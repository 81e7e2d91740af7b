#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    CommandStrategy, ExtractInput, ExtractStrategy, InfoStrategy, InitStrategy, NormalizeInput,
    NormalizeStrategy, TrainInput, TrainStrategy, VersionStrategy,
};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "lawbert")]
#[command(about = "Court-decision preprocessing and fine-tuning pipeline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract case records from judgment XML files
    Extract {
        /// Input directories (overrides config)
        #[arg(short = 'i', long)]
        input: Vec<PathBuf>,

        /// Output directory for record files (overrides config)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Normalize the raw corpus for tokenization
    Normalize {
        /// Output file, one normalized document per line (overrides config)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Fine-tune the classifier on extracted records
    Train {
        /// Pretrained model id to use (overrides config)
        #[arg(short = 'M', long)]
        model: Option<String>,
    },
    /// Show resolved configuration and corpus counts
    Info,
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract { input, output } => {
            ExtractStrategy.execute(ExtractInput { input, output })
        }
        Commands::Normalize { output } => NormalizeStrategy.execute(NormalizeInput { output }),
        Commands::Train { model } => TrainStrategy.execute(TrainInput { model }),
        Commands::Info => InfoStrategy.execute(()),
        Commands::Init => InitStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
    }
}
