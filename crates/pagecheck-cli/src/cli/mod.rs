//! CLI for the pagecheck deployment validator.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use pagecheck_core::check::CheckKind;
use std::path::PathBuf;

use commands::{run_check, run_completions, run_manpage, run_show_config, CheckOptions};

/// Top-level CLI for pagecheck.
#[derive(Debug, Parser)]
#[command(name = "pagecheck")]
#[command(about = "Validate a GitHub Pages deployment URL", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the deployment checks and exit non-zero if any fails.
    Check {
        /// URL to check instead of the configured one.
        #[arg(long)]
        url: Option<String>,
        /// Config file to read instead of ~/.config/pagecheck/config.toml.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
        /// Run only this check (repeatable).
        #[arg(long = "only", value_name = "CHECK", value_enum, ignore_case = true)]
        only: Vec<CheckKind>,
        /// Per-request timeout in seconds (default from config, 10).
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
        /// Print reports as a JSON array.
        #[arg(long)]
        json: bool,
    },

    /// Show the config file location and the configured URL.
    Config {
        /// Config file to read instead of the default.
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print a man page (roff).
    Manpage,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Check {
                url,
                config,
                only,
                timeout,
                json,
            } => {
                let opts = CheckOptions {
                    url,
                    config,
                    only,
                    timeout,
                    json,
                };
                run_check(&opts).await?;
            }
            CliCommand::Config { config } => run_show_config(config.as_deref())?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Manpage => run_manpage()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
