use crate::fetch::{FetchSettings, DEFAULT_TIMEOUT};
use crate::target::{TargetUrl, KNOWN_PLACEHOLDER};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides the configured URL.
pub const URL_ENV: &str = "PAGECHECK_URL";

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

/// Configuration loaded from `~/.config/pagecheck/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagesConfig {
    /// Deployed site, e.g. `https://octocat.github.io/hello-world/`.
    pub url: String,
    /// Per-request timeout in seconds for the reachability and content checks.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            url: KNOWN_PLACEHOLDER.to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl PagesConfig {
    pub fn target(&self) -> TargetUrl {
        TargetUrl::new(self.url.as_str())
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be at least 1");
        }
        Ok(())
    }

    /// Replaces the URL with `value` unless it is blank.
    fn override_url(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|u| !u.trim().is_empty()) {
            self.url = url;
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pagecheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the default path, creating a default file if none exists.
pub fn load_or_init() -> Result<PagesConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PagesConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file. The file must exist.
pub fn load_from(path: &Path) -> Result<PagesConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: PagesConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Loads `explicit` (or the default file) and applies `PAGECHECK_URL`.
pub fn load(explicit: Option<&Path>) -> Result<PagesConfig> {
    let mut cfg = match explicit {
        Some(path) => load_from(path)?,
        None => load_or_init()?,
    };
    cfg.override_url(std::env::var(URL_ENV).ok());
    Ok(cfg)
}
