use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::diagnostics::warn;

/// Generation ranges for a verification run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VerifyConfig {
    pub iterations: usize,
    pub min_size: usize,
    pub max_size: usize,
    pub lower_bound: i64,
    /// The upper bound of each sample is drawn from `[min_upper, max_upper]`.
    pub min_upper: i64,
    pub max_upper: i64,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            iterations: 10,
            min_size: 1,
            max_size: 100,
            lower_bound: 0,
            min_upper: 10,
            max_upper: 1000,
        }
    }
}

/// Widest `[lower_bound, max_upper]` range accepted. Keeps the O(range)
/// scan bounded and the triangular cost `d * (d - 1)` inside `i64`.
pub const MAX_SPAN: i64 = 1_000_000;

impl VerifyConfig {
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            bail!("iterations must be at least 1");
        }
        if self.min_size > self.max_size {
            bail!("min_size ({}) exceeds max_size ({})", self.min_size, self.max_size);
        }
        if self.lower_bound >= self.min_upper {
            bail!(
                "lower_bound ({}) must be below min_upper ({})",
                self.lower_bound,
                self.min_upper
            );
        }
        if self.min_upper > self.max_upper {
            bail!("min_upper ({}) exceeds max_upper ({})", self.min_upper, self.max_upper);
        }
        match self.max_upper.checked_sub(self.lower_bound) {
            Some(span) if span <= MAX_SPAN => {}
            _ => bail!(
                "range [{}, {}] is wider than {}",
                self.lower_bound,
                self.max_upper,
                MAX_SPAN
            ),
        }
        Ok(())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.fuel_align/verify.toml
    dirs_next::home_dir().map(|h| h.join(".fuel_align").join("verify.toml"))
}

/// Explicit CLI path wins; otherwise the default path, if a home dir exists.
pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

pub fn parse_config(text: &str) -> Result<VerifyConfig> {
    let cfg: VerifyConfig = toml::from_str(text).context("Parse verify config")?;
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_config(path: &Path) -> Result<VerifyConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Read config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("Invalid config {}", path.display()))
}

/// Loads the config for a run. A missing file at the default location means
/// defaults; a missing file the user named is an error.
pub fn load_or_default(cli_path: &Option<PathBuf>) -> Result<VerifyConfig> {
    match resolve_config_path(cli_path) {
        Some(path) if cli_path.is_some() || path.exists() => load_config(&path),
        Some(_) => Ok(VerifyConfig::default()),
        None => {
            warn("no home directory found; using built-in ranges");
            Ok(VerifyConfig::default())
        }
    }
}
