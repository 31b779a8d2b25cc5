//! Data table loading (builtin or YAML overrides)

use anyhow::{Context, Result};
use sitelocale_core::{AnomalyTable, SupportedLocaleCatalog};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::config::DataConfig;

/// The tables a resolver runs over for this invocation.
pub struct Tables {
    pub anomalies: Cow<'static, AnomalyTable>,
    pub catalog: Cow<'static, SupportedLocaleCatalog>,
}

impl Tables {
    pub fn load(data: &DataConfig) -> Result<Self> {
        let anomalies = match &data.anomalies {
            Some(path) => {
                let src = read(path)?;
                let table = AnomalyTable::from_yaml_str(&src)
                    .with_context(|| format!("Invalid anomaly table {}", path.display()))?;
                tracing::info!(path = %path.display(), entries = table.len(), "using anomaly table");
                Cow::Owned(table)
            }
            None => Cow::Borrowed(AnomalyTable::builtin()),
        };

        let catalog = match &data.catalog {
            Some(path) => {
                let src = read(path)?;
                let catalog = SupportedLocaleCatalog::from_yaml_str(&src)
                    .with_context(|| format!("Invalid locale catalog {}", path.display()))?;
                tracing::info!(path = %path.display(), locales = catalog.len(), "using locale catalog");
                Cow::Owned(catalog)
            }
            None => Cow::Borrowed(SupportedLocaleCatalog::builtin()),
        };

        Ok(Self { anomalies, catalog })
    }
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
