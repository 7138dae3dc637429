//! kvargs - reusable `key=value` command-line argument parsing.
//!
//! The [`ArgumentParser`] splits each argument on a delimiter, answers
//! `-h`/`--help` itself and hands every other option to an [`Extension`]
//! supplied by the embedding tool. Parsing never exits the process; it
//! returns a [`ParseOutcome`] that the caller turns into an exit status.

pub mod config;
pub mod extension;
pub mod options;
pub mod output;
pub mod parser;
pub mod tokenizer;
pub mod usage;

pub use config::{ConfigError, OptionConfig, ToolConfig};
pub use extension::{Extension, FnExtension, NoOptions};
pub use options::ConfiguredOptions;
pub use output::{generate_json_string, generate_output_string};
pub use parser::{ArgumentParser, ParseError, ParseOutcome, ParserConfig, DEFAULT_DELIMITER};
pub use tokenizer::{separate_option_from_value, ParsedArgument, TokenizeError};
pub use usage::render_usage;
