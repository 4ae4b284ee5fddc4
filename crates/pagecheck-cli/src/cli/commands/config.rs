//! `pagecheck config` – show where the URL comes from.

use anyhow::Result;
use pagecheck_core::config;
use pagecheck_core::logging;
use std::path::Path;

pub fn run_show_config(explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    let cfg = config::load(explicit)?;

    println!("config:  {}", path.display());
    println!("url:     {}", cfg.url);
    println!("timeout: {}s", cfg.timeout_secs);
    if let Ok(log) = logging::log_path() {
        println!("log:     {}", log.display());
    }
    if cfg.target().has_placeholder() {
        println!(
            "note: url is still a placeholder; edit {} or set {}",
            path.display(),
            config::URL_ENV
        );
    }
    Ok(())
}
