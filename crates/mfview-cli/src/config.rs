use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";
pub const DEFAULT_DB_FILE: &str = "mfview.db";

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. MFVIEW_PATH environment variable (with tilde expansion)
/// 3. Platform data directory
/// 4. ~/.mfview
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("MFVIEW_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("mfview"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".mfview"));
    }

    anyhow::bail!("Could not determine data directory: no HOME or platform data directory found")
}

/// Expand a leading `~/` to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_qexp_prec_max() -> usize {
    10
}

fn default_float_prec() -> usize {
    6
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Store location; relative paths are taken from the data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,

    /// Truncation of displayed q-expansions
    #[serde(default = "default_qexp_prec_max")]
    pub qexp_prec_max: usize,

    /// Prefix for character links
    #[serde(default)]
    pub base_url: String,

    /// Decimal places for embeddings and Satake parameters
    #[serde(default = "default_float_prec")]
    pub float_prec: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: None,
            qexp_prec_max: default_qexp_prec_max(),
            base_url: String::new(),
            float_prec: default_float_prec(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Database file for a data directory
    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        match &self.database {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => data_dir.join(path),
            None => data_dir.join(DEFAULT_DB_FILE),
        }
    }
}
