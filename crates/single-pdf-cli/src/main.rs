//! single-pdf: Pandoc filter for combining markdown documents into one PDF

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config::{CONFIG_FILE_NAME, Config};
use single_pdf_core::run_filter;

#[derive(Parser, Debug)]
#[command(name = "single-pdf")]
#[command(about = "Pandoc filter that prepares separate markdown documents for one combined PDF")]
#[command(version)]
#[command(after_help = "Examples:
  pandoc --filter single-pdf a.md b.md -o book.pdf
  pandoc -t json a.md b.md | single-pdf | pandoc -f json -o book.pdf
  single-pdf init                   # Write _single-pdf.toml
  single-pdf init --schema          # Print the config JSON schema")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Target output format (pandoc passes this to every filter)
    format: Option<String>,

    /// Config file (defaults to _single-pdf.toml in the working directory, if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode - only show errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a sample configuration file
    Init {
        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the configuration JSON schema instead
        #[arg(long)]
        schema: bool,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    match &cli.command {
        Some(Commands::Init {
            output,
            schema,
            force,
        }) => init_config(output.as_deref(), *schema, *force, cli.quiet),
        None => filter_stdin(
            cli.format.as_deref().unwrap_or_default(),
            cli.config.as_deref(),
        ),
    }
}

/// Log to stderr; stdout carries the document
fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .without_time()
        .init();
}

/// Read a JSON AST from stdin, filter it, write it to stdout
fn filter_stdin(format: &str, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let chain = config.filter_chain();
    debug!(rules = ?chain.rule_names(), format, "filter chain ready");

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read document from stdin")?;

    let (output, stats) =
        run_filter(&input, format, &chain).context("Failed to filter document")?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write document to stdout")?;

    for (rule, count) in &stats.rewritten {
        info!(rule, count, "rewrote elements");
    }
    info!(visited = stats.visited, "done");

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => {
            let config = Config::load_from_dir(Path::new("."))?;
            if config.is_some() {
                debug!("using {}", CONFIG_FILE_NAME);
            }
            Ok(config.unwrap_or_default())
        }
    }
}

/// Write a sample config, or print the JSON schema
fn init_config(output: Option<&Path>, schema: bool, force: bool, quiet: bool) -> Result<()> {
    if schema {
        println!("{}", Config::json_schema_string()?);
        return Ok(());
    }

    let path = output.unwrap_or(Path::new(CONFIG_FILE_NAME));
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let content = Config::sample().to_toml_with_schema()?;
    fs::write(path, content).with_context(|| format!("Failed to write: {}", path.display()))?;

    if !quiet {
        println!("{}", path.display());
    }

    Ok(())
}
