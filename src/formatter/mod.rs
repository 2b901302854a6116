//! Placeholder formatter
//!
//! [`Formatter`] pairs a [`FormatterConfig`] with the escape-aware scan in
//! [`scan`]. It holds no mutable state and can be shared freely.

pub mod config;
pub mod scan;

pub use config::{FormatterConfig, DEFAULT_PLACEHOLDER};
pub use scan::{count_matches, is_blank};

use crate::value::{Value, NULL_TEXT};

/// Formats templates with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: FormatterConfig,
}

impl Formatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Format a possibly absent template with the configured placeholder
    ///
    /// An absent template yields `"null"`.
    pub fn format(&self, template: Option<&str>, args: &[Value]) -> String {
        match template {
            None => NULL_TEXT.to_string(),
            Some(template) => self.format_with(template, &self.config.placeholder, args),
        }
    }

    /// Format a template with an explicit placeholder token
    pub fn format_with(&self, template: &str, placeholder: &str, args: &[Value]) -> String {
        let FormatterConfig {
            charset,
            null_bytes,
            ..
        } = self.config;
        scan::substitute(template, placeholder, args, |value, out| {
            match value.stringify_with(Some(charset), null_bytes) {
                Some(text) => out.push_str(&text),
                None => out.push_str(NULL_TEXT),
            }
        })
    }

    /// Count placeholders in `template`, ignoring escapes
    pub fn count(&self, template: &str) -> usize {
        count_matches(template, &self.config.placeholder)
    }

    /// Render a single argument the way it would be substituted
    pub fn render_value(&self, value: &Value) -> String {
        value
            .stringify_with(Some(self.config.charset), self.config.null_bytes)
            .map_or_else(|| NULL_TEXT.to_string(), |text| text.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::Charset;
    use crate::value::NullBytePolicy;

    #[test]
    fn test_absent_template() {
        let formatter = Formatter::default();
        assert_eq!(formatter.format(None, &[]), "null");
        assert_eq!(formatter.format(None, &[Value::from("a")]), "null");
    }

    #[test]
    fn test_null_argument_renders_null() {
        let formatter = Formatter::default();
        let out = formatter.format(Some("a=? b=?"), &[Value::Null, Value::from(2)]);
        assert_eq!(out, "a=null b=2");
    }

    #[test]
    fn test_configured_placeholder() {
        let formatter = Formatter::new(FormatterConfig::new().with_placeholder("%s"));
        let out = formatter.format(Some("%s-%s ?"), &[Value::from("x"), Value::from("y")]);
        assert_eq!(out, "x-y ?");
        assert_eq!(formatter.count("%s %s ?"), 2);
    }

    #[test]
    fn test_configured_charset_decodes_bytes() {
        let formatter = Formatter::new(FormatterConfig::new().with_charset(Charset::Iso8859_1));
        let out = formatter.format(Some("name=?"), &[Value::Bytes(vec![b'J', 0xF6, b'n'])]);
        assert_eq!(out, "name=J\u{f6}n");
    }

    #[test]
    fn test_configured_null_byte_policy() {
        let formatter = Formatter::new(FormatterConfig::new().with_null_bytes(NullBytePolicy::Skip));
        let value = Value::NullableBytes(vec![Some(b'h' as i8), None, Some(b'i' as i8)]);
        assert_eq!(formatter.render_value(&value), "hi");
        assert_eq!(formatter.format(Some("say ?"), &[value]), "say hi");
    }

    #[test]
    fn test_render_null_value() {
        assert_eq!(Formatter::default().render_value(&Value::Null), "null");
    }
}
