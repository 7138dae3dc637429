//! An [`Extension`] driven by a [`ToolConfig`].

use crate::config::{OptionConfig, ToolConfig};
use crate::extension::Extension;
use crate::usage::format_entry;
use std::collections::BTreeMap;
use tracing::warn;

/// Value recorded for a flag that was present.
pub const FLAG_SET: &str = "true";

/// Options declared in a [`ToolConfig`], with the values seen so far.
#[derive(Debug, Clone)]
pub struct ConfiguredOptions {
    config: ToolConfig,
    values: BTreeMap<String, String>,
}

impl ConfiguredOptions {
    pub fn new(config: ToolConfig) -> Self {
        Self {
            config,
            values: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Value given on the command line for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// All values, with defaults filled in for options not given.
    pub fn values(&self) -> BTreeMap<String, String> {
        let mut values = self.values.clone();
        for option in &self.config.options {
            if let Some(ref default) = option.default {
                values
                    .entry(option.name.clone())
                    .or_insert_with(|| default.clone());
            }
        }
        values
    }

    fn accepts(option: &OptionConfig, value: &str) -> bool {
        if option.flag {
            return value.is_empty();
        }
        if value.is_empty() {
            return false;
        }
        match option.choices {
            Some(ref choices) => choices.iter().any(|c| c == value),
            None => true,
        }
    }

    fn describe_option(&self, option: &OptionConfig) -> String {
        let syntax = if option.flag {
            option.name.clone()
        } else {
            format!("{}{}<value>", option.name, self.config.effective_delimiter())
        };

        let mut description = option.help.clone().unwrap_or_default();
        if let Some(ref choices) = option.choices {
            description.push_str(&format!(" [choices: {}]", choices.join(", ")));
        }
        if let Some(ref default) = option.default {
            description.push_str(&format!(" [default: {}]", default));
        }

        format_entry(&syntax, description.trim_start())
    }
}

impl Extension for ConfiguredOptions {
    fn handle_option(&mut self, option: &str, value: &str) -> bool {
        let Some(config) = self.config.find(option) else {
            return false;
        };

        if !Self::accepts(config, value) {
            warn!(option, value, "rejected value");
            return false;
        }

        let value = if config.flag { FLAG_SET } else { value };
        self.values.insert(option.to_string(), value.to_string());
        true
    }

    fn describe_usage(&self) -> String {
        let mut usage = String::new();
        if let Some(ref description) = self.config.description {
            usage.push_str(&format!("  {}\n\n", description));
        }
        for option in &self.config.options {
            usage.push_str(&self.describe_option(option));
        }
        usage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(json: &str) -> ConfiguredOptions {
        let config = ToolConfig::from_json(json).unwrap();
        config.validate().unwrap();
        ConfiguredOptions::new(config)
    }

    fn capture_options() -> ConfiguredOptions {
        options(
            r#"{"options": [
                {"name": "freq", "help": "Center frequency", "default": "100e6"},
                {"name": "verbose", "flag": true, "help": "Chatty output"},
                {"name": "mode", "choices": ["am", "fm"]}
            ]}"#,
        )
    }

    #[test]
    fn test_records_value() {
        let mut ext = capture_options();
        assert!(ext.handle_option("freq", "91.5e6"));
        assert_eq!(ext.get("freq"), Some("91.5e6"));
    }

    #[test]
    fn test_unknown_option() {
        let mut ext = capture_options();
        assert!(!ext.handle_option("gain", "10"));
        assert!(!ext.handle_option("", "value"));
        assert!(ext.get("gain").is_none());
    }

    #[test]
    fn test_flag() {
        let mut ext = capture_options();
        assert!(ext.handle_option("verbose", ""));
        assert_eq!(ext.get("verbose"), Some(FLAG_SET));
    }

    #[test]
    fn test_flag_rejects_value() {
        let mut ext = capture_options();
        assert!(!ext.handle_option("verbose", "yes"));
        assert!(ext.get("verbose").is_none());
    }

    #[test]
    fn test_option_requires_value() {
        let mut ext = capture_options();
        assert!(!ext.handle_option("freq", ""));
    }

    #[test]
    fn test_choices() {
        let mut ext = capture_options();
        assert!(ext.handle_option("mode", "fm"));
        assert!(!ext.handle_option("mode", "usb"));
        assert_eq!(ext.get("mode"), Some("fm"));
    }

    #[test]
    fn test_later_value_wins() {
        let mut ext = capture_options();
        ext.handle_option("freq", "1");
        ext.handle_option("freq", "2");
        assert_eq!(ext.get("freq"), Some("2"));
    }

    #[test]
    fn test_values_fill_defaults() {
        let mut ext = capture_options();
        let values = ext.values();
        assert_eq!(values.get("freq").map(String::as_str), Some("100e6"));
        assert!(!values.contains_key("mode"));

        ext.handle_option("freq", "7");
        ext.handle_option("mode", "am");
        let values = ext.values();
        assert_eq!(values["freq"], "7");
        assert_eq!(values["mode"], "am");
    }

    #[test]
    fn test_describe_usage() {
        let ext = capture_options();
        let usage = ext.describe_usage();
        let lines: Vec<&str> = usage.lines().collect();
        assert_eq!(lines[0], "  freq=<value>");
        assert!(lines[1].trim_start().starts_with("Center frequency [default: 100e6]"));
        assert_eq!(lines[2], "  verbose");
        assert_eq!(lines[4], "  mode=<value>");
        assert_eq!(lines[5].trim_start(), "[choices: am, fm]");
        assert_eq!(usage, ext.describe_usage());
    }

    #[test]
    fn test_describe_usage_uses_delimiter_and_description() {
        let ext = options(
            r#"{"description": "Tune a radio", "delimiter": ":", "options": [{"name": "freq"}]}"#,
        );
        let usage = ext.describe_usage();
        assert!(usage.starts_with("  Tune a radio\n\n  freq:<value>\n"));
    }

    #[test]
    fn test_describe_usage_empty() {
        let ext = options("{}");
        assert_eq!(ext.describe_usage(), "");
    }
}
