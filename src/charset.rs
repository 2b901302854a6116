//! Charsets for turning raw byte arguments into text
//!
//! Only the handful of charsets every JVM is required to ship are supported.
//! Malformed input never fails: undecodable sequences become U+FFFD, and
//! unencodable characters become `?`.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::CharsetError;

const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;
const UNMAPPABLE: u8 = b'?';

/// A named character encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Charset {
    /// 7-bit ASCII
    UsAscii,
    /// Latin-1, one byte per code point up to U+00FF
    Iso8859_1,
    #[default]
    Utf8,
    Utf16Be,
    Utf16Le,
    /// UTF-16 with byte order mark detection; big-endian when absent
    Utf16,
}

impl Charset {
    pub const ALL: [Charset; 6] = [
        Charset::UsAscii,
        Charset::Iso8859_1,
        Charset::Utf8,
        Charset::Utf16Be,
        Charset::Utf16Le,
        Charset::Utf16,
    ];

    /// Look up a charset by canonical name or alias, ignoring case
    pub fn for_name(name: &str) -> Result<Self, CharsetError> {
        let normalized = name.trim().to_ascii_uppercase().replace('_', "-");
        let charset = match normalized.as_str() {
            "US-ASCII" | "ASCII" | "ISO646-US" => Charset::UsAscii,
            "ISO-8859-1" | "ISO8859-1" | "LATIN1" | "LATIN-1" | "L1" => Charset::Iso8859_1,
            "UTF-8" | "UTF8" => Charset::Utf8,
            "UTF-16BE" | "UTF16BE" => Charset::Utf16Be,
            "UTF-16LE" | "UTF16LE" => Charset::Utf16Le,
            "UTF-16" | "UTF16" => Charset::Utf16,
            _ => {
                return Err(CharsetError::Unsupported {
                    name: name.to_string(),
                })
            }
        };
        Ok(charset)
    }

    /// Canonical name of the charset
    pub fn name(&self) -> &'static str {
        match self {
            Charset::UsAscii => "US-ASCII",
            Charset::Iso8859_1 => "ISO-8859-1",
            Charset::Utf8 => "UTF-8",
            Charset::Utf16Be => "UTF-16BE",
            Charset::Utf16Le => "UTF-16LE",
            Charset::Utf16 => "UTF-16",
        }
    }

    /// Decode bytes into text, replacing malformed input
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Cow<'a, str> {
        match self {
            Charset::Utf8 => String::from_utf8_lossy(bytes),
            Charset::UsAscii => {
                if bytes.is_ascii() {
                    // ASCII is valid UTF-8
                    String::from_utf8_lossy(bytes)
                } else {
                    Cow::Owned(
                        bytes
                            .iter()
                            .map(|&b| if b.is_ascii() { b as char } else { REPLACEMENT })
                            .collect(),
                    )
                }
            }
            Charset::Iso8859_1 => Cow::Owned(bytes.iter().map(|&b| b as char).collect()),
            Charset::Utf16Be => Cow::Owned(decode_utf16(bytes, u16::from_be_bytes)),
            Charset::Utf16Le => Cow::Owned(decode_utf16(bytes, u16::from_le_bytes)),
            Charset::Utf16 => match bytes {
                [0xFE, 0xFF, rest @ ..] => Cow::Owned(decode_utf16(rest, u16::from_be_bytes)),
                [0xFF, 0xFE, rest @ ..] => Cow::Owned(decode_utf16(rest, u16::from_le_bytes)),
                _ => Cow::Owned(decode_utf16(bytes, u16::from_be_bytes)),
            },
        }
    }

    /// Encode text into bytes, replacing unmappable characters
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Charset::Utf8 => text.as_bytes().to_vec(),
            Charset::UsAscii => text
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { UNMAPPABLE })
                .collect(),
            Charset::Iso8859_1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).unwrap_or(UNMAPPABLE))
                .collect(),
            Charset::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            Charset::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            Charset::Utf16 => [0xFE, 0xFF]
                .into_iter()
                .chain(text.encode_utf16().flat_map(u16::to_be_bytes))
                .collect(),
        }
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let chunks = bytes.chunks_exact(2);
    let dangling = !chunks.remainder().is_empty();
    let units = chunks.map(|pair| unit([pair[0], pair[1]]));

    let mut out: String = char::decode_utf16(units)
        .map(|r| r.unwrap_or(REPLACEMENT))
        .collect();
    if dangling {
        out.push(REPLACEMENT);
    }
    out
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = CharsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::for_name(s)
    }
}

impl TryFrom<String> for Charset {
    type Error = CharsetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::for_name(&value)
    }
}
