//! The argument parser: tokenizes each raw argument and dispatches it to the
//! built-in help handler or the embedding tool's [`Extension`].

use crate::extension::Extension;
use crate::tokenizer::{separate_option_from_value, TokenizeError};
use crate::usage::render_usage;
use serde::Deserialize;
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, error, warn};

/// The default option/value delimiter.
pub const DEFAULT_DELIMITER: char = '=';

/// Option names that request the usage text.
pub const HELP_OPTIONS: [&str; 3] = ["h", "-h", "--help"];

/// Errors that end parsing with a failure exit status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid argument string: {raw}")]
    InvalidArgument {
        raw: String,
        #[source]
        source: TokenizeError,
    },

    #[error("unsupported option: {0}")]
    UnsupportedOption(String),
}

/// Terminal result of a call to [`ArgumentParser::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Every argument was handled.
    Success,
    /// No arguments at all were supplied; nothing was processed.
    EmptyInput,
    /// `-h`/`--help` was seen; usage has been printed.
    HelpRequested,
    /// Parsing stopped on a bad argument; diagnostics and usage have been printed.
    Fatal(ParseError),
}

impl ParseOutcome {
    /// The process exit status this outcome calls for, if the process should
    /// stop at all.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ParseOutcome::Success | ParseOutcome::EmptyInput => None,
            ParseOutcome::HelpRequested => Some(0),
            ParseOutcome::Fatal(_) => Some(1),
        }
    }
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

fn default_exit_on_unsupported() -> bool {
    true
}

/// Construction-time parser settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParserConfig {
    /// Character separating an option from its value
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Stop on options the extension does not recognize (default: true).
    /// When false they are logged and skipped.
    #[serde(default = "default_exit_on_unsupported")]
    pub exit_on_unsupported: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            exit_on_unsupported: true,
        }
    }
}

/// A `key=value` argument parser composed with an [`Extension`].
#[derive(Debug)]
pub struct ArgumentParser<E> {
    config: ParserConfig,
    program_name: String,
    extension: E,
}

impl<E: Extension> ArgumentParser<E> {
    /// Create a parser with the default `=` delimiter.
    pub fn new(extension: E) -> Self {
        Self::with_config(extension, ParserConfig::default())
    }

    /// Create a parser with a custom delimiter.
    pub fn with_delimiter(extension: E, delimiter: char) -> Self {
        Self::with_config(
            extension,
            ParserConfig {
                delimiter,
                ..ParserConfig::default()
            },
        )
    }

    pub fn with_config(extension: E, config: ParserConfig) -> Self {
        Self {
            config,
            program_name: String::new(),
            extension,
        }
    }

    /// The invocation name taken from the first argument; empty before parsing.
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    pub fn delimiter(&self) -> char {
        self.config.delimiter
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn extension(&self) -> &E {
        &self.extension
    }

    pub fn extension_mut(&mut self) -> &mut E {
        &mut self.extension
    }

    pub fn into_extension(self) -> E {
        self.extension
    }

    /// Parse `args`, writing diagnostics and usage to standard output.
    ///
    /// `args[0]` is the program name; the rest are option strings.
    pub fn parse<S: AsRef<str>>(&mut self, args: &[S]) -> io::Result<ParseOutcome> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.parse_to(args, &mut out)
    }

    /// Parse `args`, writing diagnostics and usage to `out`.
    ///
    /// Stops at the first help request or bad argument. The returned outcome
    /// tells the caller whether (and how) to exit.
    pub fn parse_to<S, W>(&mut self, args: &[S], out: &mut W) -> io::Result<ParseOutcome>
    where
        S: AsRef<str>,
        W: Write,
    {
        let Some((program, options)) = args.split_first() else {
            error!("unable to parse an empty argument list");
            writeln!(out, "ERROR: Unable to parse an empty argument list")?;
            return Ok(ParseOutcome::EmptyInput);
        };

        self.program_name = program.as_ref().to_string();

        for raw in options {
            let raw = raw.as_ref();
            let parsed = match separate_option_from_value(raw, self.config.delimiter) {
                Ok(parsed) => parsed,
                Err(source) => {
                    writeln!(out, "ERROR: Invalid argument string: {}", raw)?;
                    self.write_usage(out)?;
                    return Ok(ParseOutcome::Fatal(ParseError::InvalidArgument {
                        raw: raw.to_string(),
                        source,
                    }));
                }
            };

            if HELP_OPTIONS.contains(&parsed.option.as_str()) {
                self.write_usage(out)?;
                return Ok(ParseOutcome::HelpRequested);
            }

            if self.extension.handle_option(&parsed.option, &parsed.value) {
                debug!(option = %parsed.option, value = %parsed.value, "handled option");
                continue;
            }

            if !self.config.exit_on_unsupported {
                warn!(option = %parsed.option, "skipping unsupported option");
                continue;
            }

            writeln!(out, "ERROR: Unsupported option: {}", parsed.option)?;
            self.write_usage(out)?;
            return Ok(ParseOutcome::Fatal(ParseError::UnsupportedOption(
                parsed.option,
            )));
        }

        Ok(ParseOutcome::Success)
    }

    /// The full usage text: built-in help entry followed by the extension's.
    pub fn usage(&self) -> String {
        render_usage(&self.program_name, &self.extension.describe_usage())
    }

    /// Print the usage text to standard output.
    pub fn print_usage(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_usage(&mut out)
    }

    pub fn write_usage<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.usage().as_bytes())?;
        out.flush()
    }
}
