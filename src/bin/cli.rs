//! relref CLI
//!
//! Resolves relative URI references against a base URI, one-shot or in
//! batch from a file of references.

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use relref::{batch, error::Result, models::Config, resolver, uri};

/// relref - Relative URI Reference Resolver
#[derive(Parser, Debug)]
#[command(
    name = "relref",
    version,
    about = "Resolves relative URI references against a base URI"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "relref.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a single reference
    Resolve {
        /// The (possibly relative) reference to resolve
        reference: String,

        /// Base URI (default: resolver.default_base from the config)
        #[arg(short, long)]
        base: Option<String>,
    },

    /// Resolve every reference listed in a file, one per line
    Batch {
        /// Input file with one reference per line
        input: PathBuf,

        /// Base URI (default: resolver.default_base from the config)
        #[arg(short, long)]
        base: Option<String>,

        /// Write results to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit a JSON array of {reference, resolved} records
        #[arg(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Resolve { reference, base } => {
            let base = base.or_else(|| config.resolver.default_base.clone());
            if base.is_none() {
                log::warn!("No base URI given; returning the reference unchanged.");
            }

            let resolved = resolver::resolve(base.as_deref(), &reference);
            if let Some(host) = uri::host(&resolved) {
                log::debug!("Resolved host: {host}");
            }

            println!("{resolved}");
        }

        Command::Batch {
            input,
            base,
            output,
            json,
        } => {
            let base = base.or_else(|| config.resolver.default_base.clone());
            let resolutions = batch::resolve_file(&input, base.as_deref(), &config.batch)?;

            log::info!(
                "Resolved {} references from {}",
                resolutions.len(),
                input.display()
            );

            let mut rendered = if json {
                serde_json::to_string_pretty(&resolutions)?
            } else {
                resolutions
                    .iter()
                    .map(|r| r.resolved.as_str())
                    .collect::<Vec<_>>()
                    .join("\n")
            };
            rendered.push('\n');

            match output {
                Some(path) => {
                    fs::write(&path, rendered)?;
                    log::info!("Results written to {}", path.display());
                }
                None => print!("{rendered}"),
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            let config = Config::load(&cli.config)?;
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");

            if let Some(base) = &config.resolver.default_base {
                log::info!("Default base: {base}");
            }
        }
    }

    Ok(())
}
