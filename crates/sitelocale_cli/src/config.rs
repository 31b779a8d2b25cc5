//! sitelocale configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "sitelocale.toml";

/// Top-level configuration (sitelocale.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SiteLocaleConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Data file overrides. Relative paths are taken from the config file's
/// directory; unset entries use the builtin tables.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DataConfig {
    /// YAML anomaly table
    #[serde(default)]
    pub anomalies: Option<PathBuf>,
    /// YAML locale catalog
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl SiteLocaleConfig {
    /// Load an explicit config file, or `./sitelocale.toml` when present.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file {} does not exist", path.display());
                }
                Self::load_file(path)
            }
            None => {
                let path = Path::new(CONFIG_FILE);
                if path.exists() {
                    Self::load_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let mut config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.data.rebase(base);
        }
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl DataConfig {
    fn rebase(&mut self, base: &Path) {
        for path in [&mut self.anomalies, &mut self.catalog].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
