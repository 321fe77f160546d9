//! Configuration file support for the single-pdf filter
//!
//! Loads settings from a `_single-pdf.toml` file in the working directory.

use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use single_pdf_core::{
    DEFAULT_EXEMPT_PREFIXES, DEFAULT_LINK_EXTENSION, FilterChain, HeaderLevelOptions,
    HeaderLevelRule, LinkTargetOptions, LinkTargetRule,
};
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "_single-pdf.toml";

/// Schema location written into generated config files (see `init --schema`)
pub const SCHEMA_PATH: &str = "./single-pdf.schema.json";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// Rule selection and order
    #[serde(skip_serializing_if = "FilterConfig::is_empty")]
    pub filter: FilterConfig,
    /// Header demotion configuration
    #[serde(skip_serializing_if = "HeadersConfig::is_empty")]
    pub headers: HeadersConfig,
    /// Local link rewriting configuration
    #[serde(skip_serializing_if = "LinksConfig::is_empty")]
    pub links: LinksConfig,
}

/// A rule that can be enabled in `[filter] rules`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Demote top-level headers
    Headers,
    /// Rewrite links to local markdown files into anchors
    Links,
}

/// Rule selection and order
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct FilterConfig {
    /// Rules to run, in order (default: ["headers", "links"])
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<RuleKind>>,
}

impl FilterConfig {
    fn is_empty(&self) -> bool {
        self.rules.is_none()
    }
}

/// Header demotion configuration
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct HeadersConfig {
    /// Header level that gets demoted (default: 1)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    /// Headers starting with one of these keep their level (default: ["Chapter", "Disclaimer"])
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exempt_prefixes: Option<Vec<String>>,
}

impl HeadersConfig {
    fn is_empty(&self) -> bool {
        self.level.is_none() && self.exempt_prefixes.is_none()
    }
}

/// Local link rewriting configuration
#[derive(Debug, Default, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(default)]
pub struct LinksConfig {
    /// Link suffix that marks a local markdown document (default: ".md")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Directory to resolve link targets in (default: the working directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
}

impl LinksConfig {
    fn is_empty(&self) -> bool {
        self.extension.is_none() && self.base_dir.is_none()
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

    /// Try to load configuration from a directory (looks for `_single-pdf.toml`)
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

    pub fn header_options(&self) -> HeaderLevelOptions {
        let defaults = HeaderLevelOptions::default();
        HeaderLevelOptions {
            level: self.headers.level.unwrap_or(defaults.level),
            exempt_prefixes: self
                .headers
                .exempt_prefixes
                .clone()
                .unwrap_or(defaults.exempt_prefixes),
        }
    }

    pub fn link_options(&self) -> LinkTargetOptions {
        LinkTargetOptions {
            extension: self
                .links
                .extension
                .clone()
                .unwrap_or_else(|| DEFAULT_LINK_EXTENSION.to_string()),
            base_dir: self.links.base_dir.clone(),
        }
    }

    /// Build the rule chain this configuration describes
    pub fn filter_chain(&self) -> FilterChain {
        let rules = self
            .filter
            .rules
            .clone()
            .unwrap_or_else(|| vec![RuleKind::Headers, RuleKind::Links]);

        let mut chain = FilterChain::new();
        for kind in rules {
            match kind {
                RuleKind::Headers => chain.push(Box::new(HeaderLevelRule::new(self.header_options()))),
                RuleKind::Links => chain.push(Box::new(LinkTargetRule::new(self.link_options()))),
            }
        }
        chain
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

    /// Create a sample configuration spelling out the defaults, for the init command
    pub fn sample() -> Self {
        Config {
            filter: FilterConfig {
                rules: Some(vec![RuleKind::Headers, RuleKind::Links]),
            },
            headers: HeadersConfig {
                level: Some(1),
                exempt_prefixes: Some(
                    DEFAULT_EXEMPT_PREFIXES
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                ),
            },
            links: LinksConfig {
                extension: Some(DEFAULT_LINK_EXTENSION.to_string()),
                base_dir: None, // working directory
            },
        }
    }
}
