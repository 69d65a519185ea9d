//! Run configuration, loaded from a TOML file.
//!
//! Tool tables are ordered maps: the order in which tools appear in the
//! file is the order in which they run.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::data_structs::enums::Kingdom;
use crate::error::{Error, Result};

/// Per-tool switch: `false` disables the tool, `true` enables it without a
/// parameter, a string enables it with that parameter (a model database
/// path for the identifiers, a database-set name for the searchers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolSetting {
    Enabled(bool),
    Param(String),
}

impl ToolSetting {
    pub fn is_enabled(&self) -> bool {
        match self {
            ToolSetting::Enabled(enabled) => *enabled,
            ToolSetting::Param(_) => true,
        }
    }

    pub fn param(&self) -> Option<&str> {
        match self {
            ToolSetting::Param(param) => Some(param),
            ToolSetting::Enabled(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Picks the reference-database search order; never changes the set.
    pub kingdom: Kingdom,
    /// Root directory holding the reference protein databases.
    pub db_dir:  Option<PathBuf>,
}

/// The whole run configuration: which tools identify features, which tool
/// reannotates coding genes, and against what.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub general:  GeneralConfig,
    /// Feature-identification tools, in execution order.
    pub features: IndexMap<String, ToolSetting>,
    /// Homology-search tools mapped to their database-set target.
    pub cds:      IndexMap<String, String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        let mut features = IndexMap::new();
        features.insert("prodigal".to_string(), ToolSetting::Enabled(true));
        features.insert("minced".to_string(), ToolSetting::Enabled(true));

        let mut cds = IndexMap::new();
        cds.insert("diamond".to_string(), "uniref".to_string());

        Self {
            general: GeneralConfig::default(),
            features,
            cds,
        }
    }
}

impl PipelineConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text)
            .map_err(|e| Error::Configuration(format!("bad configuration: {}", e)))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_toml(&fs::read_to_string(path)?)
    }

    /// Tools that will actually run, in configured order.
    pub fn enabled_features(&self) -> impl Iterator<Item = (&str, &ToolSetting)> {
        self.features
            .iter()
            .filter(|(_, setting)| setting.is_enabled())
            .map(|(name, setting)| (name.as_str(), setting))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.general.kingdom, Kingdom::Bacteria);
        assert_eq!(config.enabled_features().count(), 2);
        assert_eq!(config.cds.get("diamond").map(String::as_str), Some("uniref"));
    }

    #[test]
    fn test_from_toml_preserves_order_and_settings() {
        let config = PipelineConfig::from_toml(
            r#"
            [general]
            kingdom = "archaea"
            db_dir = "/data/db"

            [features]
            cmscan = "/data/db/Rfam.cm"
            prodigal = true
            transterm = false

            [cds]
            diamond = "uniref"
            "#,
        )
        .unwrap();

        assert_eq!(config.general.kingdom, Kingdom::Archaea);
        let enabled: Vec<&str> = config.enabled_features().map(|(n, _)| n).collect();
        assert_eq!(enabled, vec!["cmscan", "prodigal"]);
        assert_eq!(
            config.features.get("cmscan").and_then(ToolSetting::param),
            Some("/data/db/Rfam.cm")
        );
    }

    #[test]
    fn test_bad_toml_is_a_configuration_error() {
        let result = PipelineConfig::from_toml("[general]\nkingdom = \"plants\"");
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}
