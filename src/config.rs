//! TOML configuration for the linkmap CLI
//!
//! ```toml
//! rules = "linkmap.txt"
//!
//! [logging]
//! level = "info"
//!
//! [[rule]]
//! input = "docs/$1.{md}"
//! output = "https://example.com/docs/$1"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::rules::{LoadError, RuleError, RuleSet};

/// Errors that can occur when loading a config file or the rules it names
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid inline rule: {0}")]
    InlineRule(#[from] RuleError),
    /// The rule file failed to load; `text` holds its contents for diagnostics
    #[error("Failed to load rules from {}: {source}", .path.display())]
    Rules {
        path: PathBuf,
        text: String,
        source: LoadError,
    },
}

/// Resolved CLI configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Rule file, already resolved against the config file's directory
    pub rules_file: Option<PathBuf>,
    /// Log filter used when neither `-v` nor `RUST_LOG` is given
    pub log_level: String,
    /// Rules written directly in the config file
    pub inline_rules: Vec<(String, String)>,
}

/// TOML structure for deserializing configs
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    rules: Option<PathBuf>,
    logging: Option<TomlLogging>,
    #[serde(default)]
    rule: Vec<TomlRule>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlLogging {
    level: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlRule {
    input: String,
    output: String,
}

const DEFAULT_LOG_LEVEL: &str = "warn";

impl Default for Config {
    fn default() -> Self {
        Self {
            rules_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            inline_rules: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from a TOML file; a relative `rules` path is taken
    /// relative to the file's directory
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_str(&content)?;
        if let (Some(rules), Some(dir)) = (&config.rules_file, path.parent()) {
            if rules.is_relative() {
                config.rules_file = Some(dir.join(rules));
            }
        }
        Ok(config)
    }

    /// Load config from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;

        Ok(Config {
            rules_file: parsed.rules,
            log_level: parsed
                .logging
                .and_then(|l| l.level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            inline_rules: parsed
                .rule
                .into_iter()
                .map(|r| (r.input, r.output))
                .collect(),
        })
    }

    /// Override the rule file, e.g. from a command-line flag
    pub fn with_rules_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.rules_file = Some(path.into());
        self
    }

    /// Build the rule set from the rule file (if any) followed by inline rules
    pub fn load_rules(&self) -> Result<RuleSet, ConfigError> {
        let mut rules = match &self.rules_file {
            Some(path) => {
                let text =
                    std::fs::read_to_string(path).map_err(|err| ConfigError::Rules {
                        path: path.clone(),
                        text: String::new(),
                        source: LoadError::Io(err),
                    })?;
                RuleSet::parse(&text)
                    .map_err(|source| ConfigError::Rules {
                        path: path.clone(),
                        text: text.clone(),
                        source,
                    })?
                    .into_rules()
            }
            None => Vec::new(),
        };
        rules.extend(RuleSet::build(self.inline_rules.iter().cloned())?.into_rules());
        Ok(RuleSet::from_rules(rules))
    }
}
