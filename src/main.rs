mod cli;
mod config;
mod display;
mod error;
mod prompt;
mod scaffold;
mod validate;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::app::{self, ScaffoldRequest};
use error::{Result, ScaffoldError};

/// Create a directory with an uplatex report template inside it.
///
/// The author name and an optional preamble file copied next to the
/// template are read from ~/.texdirmakerrc.
#[derive(Parser)]
#[command(name = "texdirmaker", version)]
struct Cli {
    /// Name of the directory to create in the current directory
    dir_name: String,

    /// Template file name without extension (defaults to the directory name)
    #[arg(long)]
    filename: Option<String>,

    /// Reserved; existing directories are never overwritten
    #[arg(long)]
    force: bool,

    /// Document title
    #[arg(long, default_value = "")]
    title: String,

    /// Path to config file (defaults to ~/.texdirmakerrc)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print debug diagnostics
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(level)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config_path = app::resolve_config_path(cli.config)?;
    let cwd = std::env::current_dir()?;

    let request = ScaffoldRequest {
        dir_name: cli.dir_name,
        filename: cli.filename,
        title: cli.title,
        force: cli.force,
    };

    let scaffold = app::run(&request, &cwd, &config_path, prompt::stdio().as_mut())?;
    tracing::debug!(
        dir = %scaffold.dir.display(),
        file = %scaffold.file.display(),
        preamble = ?scaffold.preamble,
        "scaffold complete"
    );

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        if !matches!(e, ScaffoldError::Cancelled) {
            eprintln!("Error: {}", e);
        }
        std::process::exit(e.exit_code());
    }
}
