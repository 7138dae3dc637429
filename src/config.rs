//! JSON configuration describing the options of a tool built on the parser.

use crate::parser::{ParserConfig, DEFAULT_DELIMITER, HELP_OPTIONS};
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

/// Environment variable prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "KVARGS_";

/// Errors that can occur during config parsing and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse JSON config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("option name must not be empty")]
    EmptyName,

    #[error("duplicate option name: {0}")]
    DuplicateName(String),

    #[error("option name '{0}' contains the delimiter '{1}'")]
    NameContainsDelimiter(String, char),

    #[error("option name '{0}' is reserved for help")]
    ReservedName(String),

    #[error("'choices' on option '{0}' is empty: must have at least one valid value")]
    EmptyChoices(String),

    #[error("'choices' on option '{0}' has duplicate value: {1}")]
    DuplicateChoice(String, String),

    #[error("'choices' cannot be used on flag '{0}'")]
    ChoicesOnFlag(String),

    #[error("default '{1}' for option '{0}' is not one of its choices")]
    DefaultNotInChoices(String, String),
}

/// Configuration for a single option.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionConfig {
    /// Option name as typed on the command line (the part before the delimiter)
    pub name: String,
    /// Help text for this option
    pub help: Option<String>,
    /// Value used when the option is not given
    pub default: Option<String>,
    /// A bare flag that takes no value
    #[serde(default)]
    pub flag: bool,
    /// Allowed values for this option
    #[serde(default)]
    pub choices: Option<Vec<String>>,
}

/// Top-level configuration for a tool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolConfig {
    /// Program name to show in usage when none is given on the command line
    pub name: Option<String>,
    /// Description of the tool
    pub description: Option<String>,
    /// Option/value delimiter (default: '=')
    pub delimiter: Option<char>,
    /// Skip unrecognized options instead of failing (default: false)
    #[serde(default)]
    pub lenient: bool,
    /// Environment variable prefix for shell output (default: "KVARGS_")
    pub prefix: Option<String>,
    /// List of option configurations
    #[serde(default)]
    pub options: Vec<OptionConfig>,
}

impl ToolConfig {
    /// Parse a JSON string into a ToolConfig.
    pub fn from_json(json: &str) -> Result<ToolConfig, ConfigError> {
        let config: ToolConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let delimiter = self.effective_delimiter();
        let mut names = HashSet::new();

        for option in &self.options {
            if option.name.is_empty() {
                return Err(ConfigError::EmptyName);
            }
            if !names.insert(&option.name) {
                return Err(ConfigError::DuplicateName(option.name.clone()));
            }
            if option.name.contains(delimiter) {
                return Err(ConfigError::NameContainsDelimiter(
                    option.name.clone(),
                    delimiter,
                ));
            }
            if HELP_OPTIONS.contains(&option.name.as_str()) {
                return Err(ConfigError::ReservedName(option.name.clone()));
            }
            Self::validate_choices(option)?;
        }

        Ok(())
    }

    fn validate_choices(option: &OptionConfig) -> Result<(), ConfigError> {
        let Some(ref choices) = option.choices else {
            return Ok(());
        };

        if option.flag {
            return Err(ConfigError::ChoicesOnFlag(option.name.clone()));
        }
        if choices.is_empty() {
            return Err(ConfigError::EmptyChoices(option.name.clone()));
        }

        let mut seen = HashSet::new();
        for choice in choices {
            if !seen.insert(choice) {
                return Err(ConfigError::DuplicateChoice(
                    option.name.clone(),
                    choice.clone(),
                ));
            }
        }

        if let Some(ref default) = option.default {
            if !choices.contains(default) {
                return Err(ConfigError::DefaultNotInChoices(
                    option.name.clone(),
                    default.clone(),
                ));
            }
        }
        Ok(())
    }

    pub fn effective_delimiter(&self) -> char {
        self.delimiter.unwrap_or(DEFAULT_DELIMITER)
    }

    /// Get the effective prefix, using the default if none is set.
    pub fn effective_prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or(DEFAULT_PREFIX)
    }

    /// Parser settings derived from this config.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            delimiter: self.effective_delimiter(),
            exit_on_unsupported: !self.lenient,
        }
    }

    pub fn find(&self, name: &str) -> Option<&OptionConfig> {
        self.options.iter().find(|o| o.name == name)
    }
}
