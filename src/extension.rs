//! Tool-specific option handling plugged into the generic parser.

/// Custom option handling supplied by an embedding tool.
///
/// The defaults describe a tool with no options of its own: every option is
/// rejected and no extra usage text is printed.
pub trait Extension {
    /// Try to interpret one option/value pair.
    ///
    /// Returns `true` if the option was recognized. Unrecognized options must
    /// be reported through the return value, never by panicking.
    fn handle_option(&mut self, option: &str, value: &str) -> bool {
        let _ = (option, value);
        false
    }

    /// Preformatted, already indented usage text for the custom options.
    ///
    /// Must be idempotent; it is called once per usage print.
    fn describe_usage(&self) -> String {
        String::new()
    }
}

impl<E: Extension + ?Sized> Extension for &mut E {
    fn handle_option(&mut self, option: &str, value: &str) -> bool {
        (**self).handle_option(option, value)
    }

    fn describe_usage(&self) -> String {
        (**self).describe_usage()
    }
}

impl<E: Extension + ?Sized> Extension for Box<E> {
    fn handle_option(&mut self, option: &str, value: &str) -> bool {
        (**self).handle_option(option, value)
    }

    fn describe_usage(&self) -> String {
        (**self).describe_usage()
    }
}

/// An extension with no custom options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOptions;

impl Extension for NoOptions {}

/// An extension built from a pair of closures.
pub struct FnExtension<H, U> {
    handle: H,
    usage: U,
}

impl<H, U> FnExtension<H, U>
where
    H: FnMut(&str, &str) -> bool,
    U: Fn() -> String,
{
    /// Create an extension from an option handler and a usage describer.
    pub fn new(handle: H, usage: U) -> Self {
        Self { handle, usage }
    }
}

impl<H, U> Extension for FnExtension<H, U>
where
    H: FnMut(&str, &str) -> bool,
    U: Fn() -> String,
{
    fn handle_option(&mut self, option: &str, value: &str) -> bool {
        (self.handle)(option, value)
    }

    fn describe_usage(&self) -> String {
        (self.usage)()
    }
}
