//! Splitting a single raw argument into an option/value pair.

use thiserror::Error;

/// Errors produced when a raw argument cannot be split.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    #[error("empty argument: {0:?}")]
    Empty(String),

    #[error("missing value after delimiter: {0}")]
    MissingValue(String),

    #[error("more than one delimiter: {0}")]
    MultipleDelimiters(String),
}

/// An option and its value as split from one raw argument.
///
/// Bare flags carry an empty `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgument {
    pub option: String,
    pub value: String,
}

/// Separate an option from its value using `delimiter`.
///
/// Exactly one delimiter (with a non-empty value after it) or no delimiter at
/// all (with a non-empty option) is accepted. A leading delimiter is let
/// through with an empty option; dispatch rejects it later.
pub fn separate_option_from_value(
    input: &str,
    delimiter: char,
) -> Result<ParsedArgument, TokenizeError> {
    let mut option = String::new();
    let mut value = String::new();
    let mut found_delimiter = false;

    for c in input.chars() {
        if c == delimiter {
            if found_delimiter {
                return Err(TokenizeError::MultipleDelimiters(input.to_string()));
            }
            found_delimiter = true;
        } else if found_delimiter {
            value.push(c);
        } else {
            option.push(c);
        }
    }

    if found_delimiter && value.is_empty() {
        return Err(TokenizeError::MissingValue(input.to_string()));
    }
    if !found_delimiter && option.is_empty() {
        return Err(TokenizeError::Empty(input.to_string()));
    }

    Ok(ParsedArgument { option, value })
}
