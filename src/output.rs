//! Rendering parsed option values for consumption by other programs.

use std::collections::BTreeMap;

/// Escape a string for safe use in a shell double-quoted context.
///
/// Escapes: $, `, \, ", and !
fn escape_shell_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '$' => escaped.push_str("\\$"),
            '`' => escaped.push_str("\\`"),
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '!' => escaped.push_str("\\!"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Convert an option name to a valid shell variable name.
///
/// Uppercases ASCII letters and digits; everything else becomes `_`.
fn to_shell_var_name(name: &str) -> String {
    name.trim_start_matches('-')
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Render `export PREFIX_NAME="value"` lines, sorted by option name.
pub fn generate_output_string(values: &BTreeMap<String, String>, prefix: &str) -> String {
    let mut output = String::new();
    for (name, value) in values {
        output.push_str(&format!(
            "export {}{}=\"{}\"\n",
            prefix,
            to_shell_var_name(name),
            escape_shell_value(value)
        ));
    }
    output
}

/// Render the values as a pretty-printed JSON object.
pub fn generate_json_string(values: &BTreeMap<String, String>) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(values)?;
    json.push('\n');
    Ok(json)
}
