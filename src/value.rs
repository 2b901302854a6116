//! Argument values and their textual rendering
//!
//! Every argument handed to the formatter is a [`Value`]. Text passes through
//! untouched, raw bytes are decoded with a [`Charset`], and lists render in a
//! braced `{a,b,c}` form.

use std::borrow::Cow;
use std::fmt;
use std::io::Cursor;

use serde::Deserialize;

use crate::charset::Charset;

/// Text substituted for a null argument
pub const NULL_TEXT: &str = "null";

/// Text for a null element inside a rendered list
const NULL_ELEMENT: &str = "<null>";

/// What to do with `None` entries when decoding [`Value::NullableBytes`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullBytePolicy {
    /// Replace each null entry with a fixed byte before decoding
    Substitute(u8),
    /// Drop null entries
    Skip,
}

impl Default for NullBytePolicy {
    /// `0xFF`, the two's complement of the signed `-1` older callers expect
    fn default() -> Self {
        NullBytePolicy::Substitute(0xFF)
    }
}

impl NullBytePolicy {
    fn resolve(&self, bytes: &[Option<i8>]) -> Vec<u8> {
        match self {
            NullBytePolicy::Substitute(sentinel) => bytes
                .iter()
                .map(|b| b.map_or(*sentinel, |b| b as u8))
                .collect(),
            NullBytePolicy::Skip => bytes.iter().flatten().map(|&b| b as u8).collect(),
        }
    }
}

/// A single substitution argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Text(String),
    Bytes(Vec<u8>),
    /// Signed bytes where individual entries may be missing
    NullableBytes(Vec<Option<i8>>),
    /// Buffered bytes; only the bytes from the read position onward are rendered
    Buffer(Cursor<Vec<u8>>),
    List(Vec<Value>),
    /// Pre-rendered text of any other displayable value
    Display(String),
}

impl Value {
    /// Wrap anything displayable
    pub fn display(value: impl fmt::Display) -> Self {
        Value::Display(value.to_string())
    }

    /// Build a list value from anything convertible
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Render this value as text, or `None` for [`Value::Null`]
    ///
    /// Byte values are decoded with `charset`, falling back to UTF-8. Null
    /// entries in [`Value::NullableBytes`] follow the default
    /// [`NullBytePolicy`].
    pub fn stringify(&self, charset: Option<Charset>) -> Option<Cow<'_, str>> {
        self.stringify_with(charset, NullBytePolicy::default())
    }

    /// Like [`stringify`](Self::stringify), with an explicit null byte policy
    pub fn stringify_with(
        &self,
        charset: Option<Charset>,
        null_bytes: NullBytePolicy,
    ) -> Option<Cow<'_, str>> {
        let charset = charset.unwrap_or_default();
        let text = match self {
            Value::Null => return None,
            Value::Text(s) | Value::Display(s) => Cow::Borrowed(s.as_str()),
            Value::Bytes(bytes) => charset.decode(bytes),
            Value::NullableBytes(bytes) => {
                Cow::Owned(charset.decode(&null_bytes.resolve(bytes)).into_owned())
            }
            Value::Buffer(cursor) => charset.decode(remaining(cursor)),
            Value::List(items) => {
                let mut out = String::new();
                write_list(&mut out, items, charset, null_bytes);
                Cow::Owned(out)
            }
        };
        Some(text)
    }
}

/// Decode the unread part of a buffer and advance it to the end
pub fn decode_buffer(buffer: &mut Cursor<Vec<u8>>, charset: Option<Charset>) -> String {
    let text = charset.unwrap_or_default().decode(remaining(buffer)).into_owned();
    let end = buffer.get_ref().len() as u64;
    buffer.set_position(end);
    text
}

fn remaining(cursor: &Cursor<Vec<u8>>) -> &[u8] {
    let data = cursor.get_ref();
    let pos = usize::try_from(cursor.position())
        .unwrap_or(usize::MAX)
        .min(data.len());
    &data[pos..]
}

fn write_list(out: &mut String, items: &[Value], charset: Charset, null_bytes: NullBytePolicy) {
    out.push('{');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if item.is_null() {
            out.push_str(NULL_ELEMENT);
            continue;
        }
        match item {
            Value::List(nested) => write_list(out, nested, charset, null_bytes),
            // Nested byte arrays print as their signed numeric contents
            Value::Bytes(bytes) => {
                let signed: Vec<String> = bytes.iter().map(|&b| (b as i8).to_string()).collect();
                out.push('{');
                out.push_str(&signed.join(","));
                out.push('}');
            }
            Value::NullableBytes(bytes) => {
                let signed: Vec<String> = bytes
                    .iter()
                    .map(|b| b.map_or_else(|| NULL_ELEMENT.to_string(), |b| b.to_string()))
                    .collect();
                out.push('{');
                out.push_str(&signed.join(","));
                out.push('}');
            }
            other => {
                if let Some(text) = other.stringify_with(Some(charset), null_bytes) {
                    out.push_str(&text);
                }
            }
        }
    }
    out.push('}');
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stringify(None) {
            Some(text) => f.write_str(&text),
            None => f.write_str(NULL_TEXT),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::Text(s.clone())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl From<Vec<Option<i8>>> for Value {
    fn from(bytes: Vec<Option<i8>>) -> Self {
        Value::NullableBytes(bytes)
    }
}

impl From<Cursor<Vec<u8>>> for Value {
    fn from(buffer: Cursor<Vec<u8>>) -> Self {
        Value::Buffer(buffer)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Display(v.to_string())
                }
            }
        )*
    };
}

impl_from_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char);
