//! Statement Formatter - positional placeholder substitution with escapes
//!
//! Replaces each `?` in a template with the next argument, left to right.
//! A backslash before the placeholder keeps it literal, and a doubled
//! backslash keeps one literal backslash while still substituting.
//!
//! # Example
//!
//! ```rust
//! use statement_formatter::{format, Value};
//!
//! let out = format(Some("this is ? for ?"), &[Value::from("a"), Value::from("b")]);
//! assert_eq!(out, "this is a for b");
//!
//! let out = format(Some(r"this is \? for ?"), &[Value::from("a"), Value::from("b")]);
//! assert_eq!(out, "this is ? for a");
//!
//! let out = format(Some(r"this is \\? for ?"), &[Value::from("a"), Value::from("b")]);
//! assert_eq!(out, r"this is \a for b");
//! ```

pub mod charset;
pub mod error;
pub mod formatter;
pub mod value;

pub use charset::Charset;
pub use error::{CharsetError, ConfigError};
pub use formatter::{Formatter, FormatterConfig, DEFAULT_PLACEHOLDER};
pub use value::{decode_buffer, NullBytePolicy, Value, NULL_TEXT};

/// Format a template with the default `?` placeholder
///
/// An absent template yields `"null"`. With no arguments, or a blank template,
/// the template comes back unchanged.
///
/// ```rust
/// use statement_formatter::{format, Value};
///
/// assert_eq!(format(None, &[Value::from(1)]), "null");
/// assert_eq!(format(Some("id = ?"), &[Value::from(7)]), "id = 7");
/// ```
pub fn format(template: Option<&str>, args: &[Value]) -> String {
    Formatter::default().format(template, args)
}

/// Format a template with an explicit placeholder token
///
/// ```rust
/// use statement_formatter::{format_with, Value};
///
/// let out = format_with("{} + {}", "{}", &[Value::from(1), Value::from(2)]);
/// assert_eq!(out, "1 + 2");
/// ```
pub fn format_with(template: &str, placeholder: &str, args: &[Value]) -> String {
    Formatter::default().format_with(template, placeholder, args)
}

/// Count `?` placeholders, without regard to escapes
pub fn count_placeholders(template: &str) -> usize {
    formatter::count_matches(template, DEFAULT_PLACEHOLDER)
}

/// Count occurrences of an arbitrary placeholder, without regard to escapes
pub fn count_matches(template: &str, placeholder: &str) -> usize {
    formatter::count_matches(template, placeholder)
}

/// Format a template with inline arguments of any convertible type
///
/// ```rust
/// use statement_formatter::statement;
///
/// let sql = statement!("select * from t where id = ? and name = ?", 3, "bob");
/// assert_eq!(sql, "select * from t where id = 3 and name = bob");
/// ```
#[macro_export]
macro_rules! statement {
    ($template:expr $(,)?) => {
        $crate::format(::core::option::Option::Some($template), &[])
    };
    ($template:expr, $($arg:expr),+ $(,)?) => {
        $crate::format(
            ::core::option::Option::Some($template),
            &[$($crate::Value::from($arg)),+],
        )
    };
}
