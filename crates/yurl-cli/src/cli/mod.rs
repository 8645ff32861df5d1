//! CLI for the yurl URL toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use yurl_core::config;
use yurl_core::UrlCache;

use commands::{run_join, run_normalize, run_parse, run_validate, ParseOptions};

/// Top-level CLI for yurl.
#[derive(Debug, Parser)]
#[command(name = "yurl")]
#[command(about = "yurl: split, validate and resolve URLs (RFC 3986)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Split URLs into their seven components.
    Parse {
        /// URLs or relative references to split.
        #[arg(required = true)]
        urls: Vec<String>,

        /// Print components as JSON.
        #[arg(long)]
        json: bool,

        /// Fail on the first URL with an invalid component.
        #[arg(long)]
        validate: bool,
    },

    /// Resolve references against a base URL.
    Join {
        /// Base URL.
        base: String,

        /// References to resolve, each against the base.
        #[arg(required = true)]
        references: Vec<String>,
    },

    /// Check URLs against the component grammar.
    Validate {
        /// URLs to check.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Print the canonical serialization of URLs.
    Normalize {
        /// URLs to normalize.
        #[arg(required = true)]
        urls: Vec<String>,

        /// Also remove "." and ".." path segments.
        #[arg(long)]
        remove_dots: bool,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let mut cache = UrlCache::new(cfg.cache_capacity);
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match cli.command {
            CliCommand::Parse {
                urls,
                json,
                validate,
            } => {
                let opts = ParseOptions {
                    json: json || cfg.json,
                    validate: validate || cfg.validate,
                };
                run_parse(&mut cache, &urls, opts, &mut out)?;
            }
            CliCommand::Join { base, references } => {
                run_join(&mut cache, &base, &references, &mut out)?;
            }
            CliCommand::Validate { urls } => run_validate(&mut cache, &urls, &mut out)?,
            CliCommand::Normalize { urls, remove_dots } => {
                run_normalize(&mut cache, &urls, remove_dots, &mut out)?;
            }
        }

        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
