//! Configuration file support for mdsite CLI
//!
//! Loads settings from `_mdsite.toml` configuration file.

use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "_mdsite.toml";

/// Schema location written into generated config files, relative to the config
pub const SCHEMA_PATH: &str = "./mdsite.schema.json";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// Site layout configuration
    #[serde(skip_serializing_if = "SiteConfig::is_empty")]
    pub site: SiteConfig,
}

/// Site layout configuration
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory of markdown pages (default: "content")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_dir: Option<PathBuf>,
    /// Directory of static assets mirrored into the output (default: "static")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_dir: Option<PathBuf>,
    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders (default: "template.html")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
    /// Output directory, cleared on every build (default: "public")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// URL prefix for root-relative links (default: "/")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    /// Number of parallel jobs (default: number of CPUs)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,
}

impl SiteConfig {
    fn is_empty(&self) -> bool {
        self.content_dir.is_none()
            && self.static_dir.is_none()
            && self.template.is_none()
            && self.output_dir.is_none()
            && self.base_path.is_none()
            && self.jobs.is_none()
    }
}

impl Config {
    /// Load configuration from a specific file path
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Try to load configuration from a directory (looks for `_mdsite.toml`)
    ///
    /// Returns `Ok(None)` if the config file doesn't exist.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Generate JSON schema for the configuration
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Generate JSON schema as a string
    pub fn json_schema_string() -> Result<String> {
        let schema = Self::json_schema();
        serde_json::to_string_pretty(&schema).context("Failed to serialize JSON schema")
    }

    /// Serialize configuration to TOML string with schema directive
    pub fn to_toml_with_schema(&self) -> Result<String> {
        let toml_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        Ok(format!("#:schema {}\n\n{}", SCHEMA_PATH, toml_content))
    }

    /// Create a sample configuration with the defaults spelled out for init command
    pub fn sample() -> Self {
        Config {
            site: SiteConfig {
                content_dir: Some(PathBuf::from("content")),
                static_dir: Some(PathBuf::from("static")),
                template: Some(PathBuf::from("template.html")),
                output_dir: Some(PathBuf::from("public")),
                base_path: Some("/".to_string()),
                jobs: None, // use all CPUs
            },
        }
    }
}
