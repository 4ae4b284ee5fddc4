//! `pagecheck check` – run the deployment checks.

use anyhow::{Context, Result};
use pagecheck_core::check::{self, CheckKind, CheckReport};
use pagecheck_core::config::{self, PagesConfig};
use std::path::PathBuf;

/// Flags of the `check` subcommand.
#[derive(Debug, Default)]
pub struct CheckOptions {
    pub url: Option<String>,
    pub config: Option<PathBuf>,
    pub only: Vec<CheckKind>,
    pub timeout: Option<u64>,
    pub json: bool,
}

impl CheckOptions {
    /// Checks to run: `--only` selection, or all of them.
    pub fn kinds(&self) -> Vec<CheckKind> {
        if self.only.is_empty() {
            CheckKind::ALL.to_vec()
        } else {
            self.only.clone()
        }
    }

    /// Applies `--url` and `--timeout` on top of the loaded config.
    pub fn apply(&self, cfg: &mut PagesConfig) -> Result<()> {
        if let Some(url) = &self.url {
            cfg.url = url.clone();
        }
        if let Some(secs) = self.timeout {
            anyhow::ensure!(secs > 0, "--timeout must be at least 1 second");
            cfg.timeout_secs = secs;
        }
        Ok(())
    }
}

fn print_reports(reports: &[CheckReport]) {
    println!("{:<14} {:<6} {:>8}  {}", "CHECK", "RESULT", "TIME(ms)", "DETAIL");
    for r in reports {
        println!(
            "{:<14} {:<6} {:>8}  {}",
            r.kind.as_str(),
            if r.passed() { "PASS" } else { "FAIL" },
            r.elapsed.as_millis(),
            r.message().unwrap_or_default()
        );
    }
}

fn print_json(reports: &[CheckReport]) -> Result<()> {
    let records: Vec<_> = reports.iter().map(CheckReport::record).collect();
    let out = serde_json::to_string_pretty(&records).context("serialize reports")?;
    println!("{}", out);
    Ok(())
}

pub async fn run_check(opts: &CheckOptions) -> Result<()> {
    let mut cfg = config::load(opts.config.as_deref())?;
    opts.apply(&mut cfg)?;
    tracing::debug!("loaded config: {:?}", cfg);

    let target = cfg.target();
    let kinds = opts.kinds();
    tracing::info!(url = %target, checks = kinds.len(), "running checks");

    let reports = check::run_checks(&kinds, &target, &cfg.fetch_settings()).await?;
    if opts.json {
        print_json(&reports)?;
    } else {
        println!("Target: {}", target);
        print_reports(&reports);
    }

    let summary = check::summarize(&reports);
    if !summary.all_passed() {
        anyhow::bail!(
            "{} of {} checks failed for {}",
            summary.failed,
            reports.len(),
            target
        );
    }
    Ok(())
}
