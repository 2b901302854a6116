//! Escape-aware placeholder scanning
//!
//! A placeholder preceded by one backslash is emitted literally and does not
//! consume an argument. A placeholder preceded by two backslashes is still
//! substituted, and one of the two backslashes is dropped from the output.
//!
//! ```text
//! this is ? for ?      a, b  =>  this is a for b
//! this is \? for ?     a, b  =>  this is ? for a
//! this is \\? for ?    a, b  =>  this is \a for b
//! ```

use log::{debug, trace};

use crate::value::Value;

const BACKSLASH: u8 = b'\\';

/// Extra room reserved on top of the template length for substituted text
const GROWTH_HINT: usize = 50;

/// True for an empty or all-whitespace string
///
/// Whitespace here is the JVM's notion of it: ASCII controls U+0009..U+000D
/// and U+001C..U+001F count, non-breaking spaces and U+0085 do not.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(is_jvm_whitespace)
}

fn is_jvm_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{9}'..='\u{d}'
            | '\u{1c}'..='\u{1f}'
            | ' '
            | '\u{1680}'
            | '\u{2000}'..='\u{2006}'
            | '\u{2008}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{205f}'
            | '\u{3000}'
    )
}

/// Count non-overlapping occurrences of `placeholder` in `template`
///
/// Escapes are ignored. An empty placeholder counts as zero matches.
pub fn count_matches(template: &str, placeholder: &str) -> usize {
    if template.is_empty() || placeholder.is_empty() {
        return 0;
    }
    template.matches(placeholder).count()
}

/// Substitute `args` into `template` at each unescaped `placeholder`
///
/// `render` appends the text of one argument to the output. Arguments left
/// over once the template runs out of placeholders are ignored.
pub fn substitute<F>(template: &str, placeholder: &str, args: &[Value], mut render: F) -> String
where
    F: FnMut(&Value, &mut String),
{
    if is_blank(template) || is_blank(placeholder) || args.is_empty() {
        debug!("nothing to substitute, returning template as is");
        return template.to_string();
    }

    let bytes = template.as_bytes();
    // `placeholder` is not blank, so it has a first char
    let first = placeholder.chars().next().unwrap_or_default();

    let mut out = String::with_capacity(template.len() + GROWTH_HINT);
    let mut handled = 0;
    let mut arg_index = 0;

    while arg_index < args.len() {
        let Some(offset) = template[handled..].find(placeholder) else {
            if handled == 0 {
                debug!("no placeholder in template, returning it as is");
                return template.to_string();
            }
            trace!("{} unused argument(s) dropped", args.len() - arg_index);
            break;
        };
        let delim = handled + offset;

        // Markers before `handled` belong to an earlier match and never escape
        let escaped = delim > handled && bytes[delim - 1] == BACKSLASH;
        let double_escaped = escaped && delim - 1 > handled && bytes[delim - 2] == BACKSLASH;

        if double_escaped {
            trace!("double escape at {}, substituting argument {}", delim, arg_index);
            out.push_str(&template[handled..delim - 1]);
            render(&args[arg_index], &mut out);
            handled = delim + placeholder.len();
            arg_index += 1;
        } else if escaped {
            trace!("escaped placeholder at {}", delim);
            out.push_str(&template[handled..delim - 1]);
            out.push(first);
            handled = delim + first.len_utf8();
        } else {
            out.push_str(&template[handled..delim]);
            render(&args[arg_index], &mut out);
            handled = delim + placeholder.len();
            arg_index += 1;
        }
    }

    out.push_str(&template[handled..]);
    out
}
