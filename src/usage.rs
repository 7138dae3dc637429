//! Usage text rendering.

/// Column at which option descriptions start.
pub const DESCRIPTION_INDENT: usize = 23;

/// Render a two-line usage entry: the option on its own line, the
/// description below it indented to [`DESCRIPTION_INDENT`].
pub fn format_entry(option: &str, description: &str) -> String {
    format!(
        "  {}\n{:indent$}{}\n",
        option,
        "",
        description,
        indent = DESCRIPTION_INDENT
    )
}

/// Render the full usage text for `program_name`.
///
/// The built-in help entry always comes first; `extension_usage` is appended
/// verbatim.
pub fn render_usage(program_name: &str, extension_usage: &str) -> String {
    let mut usage = format!("Usage: {} <options>\n\n", program_name);
    usage.push_str(&format_entry(
        "-h,--help",
        "display usage information (this message)",
    ));
    usage.push('\n');
    usage.push_str(extension_usage);
    usage
}
