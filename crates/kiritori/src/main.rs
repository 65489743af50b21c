//! Kiritori command-line interface.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kiritori::{Renamer, load_path_list, preview};
use kiritori_core::TitleNormalizer;
use tracing::{Level, info};

/// CLI arguments
#[derive(Parser)]
#[command(name = "kiritori")]
#[command(about = "Rename TV episode files to \"Show Title - S##E##.ext\"")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rename every file listed in a path list
    Rename {
        /// Text file with one path per line
        #[arg(default_value = "file_list.txt")]
        list: PathBuf,

        /// Print the planned renames without touching any file
        #[arg(short = 'n', long)]
        dry_run: bool,
    },
    /// Read filenames from stdin and print their normalized form as JSON lines
    Preview,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(io::stderr)
        .init();

    let normalizer = TitleNormalizer::new().context("Failed to build title normalizer")?;

    match cli.command {
        Commands::Rename { list, dry_run } => {
            let paths = load_path_list(&list)
                .with_context(|| format!("Failed to read path list {}", list.display()))?;
            info!(count = paths.len(), list = %list.display(), dry_run, "loaded path list");

            let report = Renamer::new(&normalizer)
                .with_dry_run(dry_run)
                .run(&paths, |outcome| println!("{outcome}"));

            println!("Done: {} paths, {report}", report.total());
        }
        Commands::Preview => {
            let stdin = io::stdin();
            let count = preview::write_preview(&normalizer, stdin.lock(), io::stdout().lock())?;
            info!(count, "previewed names");
        }
    }

    Ok(())
}
