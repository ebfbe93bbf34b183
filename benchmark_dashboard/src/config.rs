//!
//! The benchmark dashboard configuration file.
//!

use std::path::PathBuf;

use crate::model::document::Encoding;

///
/// The benchmark dashboard configuration, read from an optional JSON file.
///
/// Command line flags take precedence over the values here.
///
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Identifier the data document is assigned to in newly created files.
    pub data_identifier: String,
    /// Default series name.
    pub series: Option<String>,
    /// Maximum number of runs retained per series after an append.
    pub max_items: Option<usize>,
    /// Repository URL written to newly created files.
    pub repo_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_identifier: Encoding::DEFAULT_IDENTIFIER.to_owned(),
            series: None,
            max_items: None,
            repo_url: None,
        }
    }
}

impl Config {
    ///
    /// Reads the configuration from a JSON file and validates its correctness.
    ///
    /// # Errors
    ///
    /// 1. File cannot be read.
    /// 2. Deserialization from JSON file failed.
    /// 3. Configuration validation failed.
    ///
    pub fn try_from_path(path: PathBuf) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::de::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    ///
    /// Checks that the configuration is well-formed.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        let Config {
            data_identifier,
            series,
            max_items,
            repo_url: _,
        } = self;

        if !Encoding::is_valid_identifier(data_identifier.as_str()) {
            anyhow::bail!(
                "The `data_identifier` field in the configuration is not a valid identifier: `{data_identifier}`"
            )
        }
        if series.as_deref().is_some_and(str::is_empty) {
            anyhow::bail!("The `series` field in the configuration is empty")
        }
        if *max_items == Some(0) {
            anyhow::bail!("The `max_items` field in the configuration must be positive")
        }
        Ok(())
    }

    ///
    /// Returns the data encoding for newly created files.
    ///
    pub fn encoding(&self) -> Encoding {
        Encoding::Script {
            identifier: self.data_identifier.clone(),
        }
    }
}
