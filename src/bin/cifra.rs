//! Command-line interface for cifra
//! Parses a chord sheet and prints the resulting song tree.
//!
//! Usage:
//!   cifra `<path>` [--format `<format>`] [--config `<file>`] [-v...]   - Parse and print a chord sheet
//!   cifra --list-formats                                           - List available output formats

use cifra::config::{CifraConfig, Loader};
use cifra::formats::{FormatError, FormatRegistry, TreevizFormatter, TreevizOptions};
use cifra::loader::{LoaderError, SongLoader};
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "cifra", version)]
#[command(about = "Parse plain-text chord sheets and print the song tree")]
struct Args {
    /// Path to the chord sheet
    #[arg(required_unless_present = "list_formats")]
    path: Option<PathBuf>,

    /// Output format (treeviz, json, yaml); defaults to inspect.format from the config
    #[arg(long, short = 'f')]
    format: Option<String>,

    /// TOML file layered over the built-in defaults
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    verbose: u8,

    /// List available output formats
    #[arg(long)]
    list_formats: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Format(#[from] FormatError),
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match (&args.path, args.list_formats) {
        (_, true) => {
            handle_list_formats_command();
            Ok(())
        }
        (Some(path), false) => handle_parse_command(path, &args),
        (None, false) => Ok(()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(args: &Args) -> Result<CifraConfig, CliError> {
    let mut loader = Loader::new();
    if let Some(path) = &args.config {
        loader = loader.with_file(path);
    }
    if let Some(format) = &args.format {
        loader = loader.set_override("inspect.format", format.as_str())?;
    }
    Ok(loader.build()?)
}

/// Handle the parse command
fn handle_parse_command(path: &Path, args: &Args) -> Result<(), CliError> {
    let config = load_config(args)?;
    debug!(path = %path.display(), format = %config.inspect.format, "parsing chord sheet");

    let song = SongLoader::from_path(path)?.parse_with(&config.parser)?;

    let mut registry = FormatRegistry::with_defaults();
    registry.register(TreevizFormatter::new(TreevizOptions::from(&config.inspect)));
    let output = registry.serialize(&song, &config.inspect.format)?;

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        println!("  {}", name);
        if let Some(formatter) = registry.get(&name) {
            println!("    {}", formatter.description());
        }
        println!();
    }
}
