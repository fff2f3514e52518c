//! YAML profile configuration.
//!
//! Every field is optional; command-line flags override whatever the file
//! sets, and built-in defaults fill the rest.

use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::report::DEFAULT_MAX_SAMPLES;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_column: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_samples: Option<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_encoding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infer_types: Option<bool>,
}

impl ProfileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| format!("Opening config {path:?}"))?;
        let config: ProfileConfig =
            serde_yaml::from_str(&raw).with_context(|| format!("Parsing config {path:?}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let serialized = serde_yaml::to_string(self).context("Serializing config")?;
        fs::write(path, serialized).with_context(|| format!("Writing config {path:?}"))
    }

    /// Template written by `init-config`.
    pub fn template() -> Self {
        Self {
            table_name: Some("my_table".to_string()),
            date_column: Some("week_date".to_string()),
            max_samples: Some(DEFAULT_MAX_SAMPLES),
            columns: Vec::new(),
            limit: Some(10_000),
            delimiter: Some(",".to_string()),
            input_encoding: Some("utf-8".to_string()),
            infer_types: Some(true),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_samples == Some(0) {
            return Err(anyhow!("max_samples must be at least 1"));
        }
        if let Some(delimiter) = &self.delimiter {
            crate::cli::parse_delimiter(delimiter).map_err(|err| anyhow!(err))?;
        }
        Ok(())
    }

    pub fn delimiter_byte(&self) -> Option<u8> {
        self.delimiter
            .as_deref()
            .and_then(|value| crate::cli::parse_delimiter(value).ok())
    }
}
