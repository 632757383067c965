//! Escaping of term values into the lexical form used by N-Triples and N-Quads.
//!
//! Every code point that is not printable ASCII is written as a `\uXXXX` or `\UXXXXXXXX` escape
//! with uppercase hexadecimal digits. Tab, line feed and carriage return use their short escapes,
//! and the double quote and backslash are escaped with a backslash. The output is therefore pure
//! ASCII, which makes it suitable as a stable key for hashing and comparisons.

use crate::EncodeError;
use std::fmt;
use std::fmt::Write;

/// Returns the canonical escaped form of `value`.
///
/// ```
/// use rdf_graph_model::encode;
///
/// assert_eq!(encode("say \"hi\""), "say \\\"hi\\\"");
/// assert_eq!(encode("caf\u{e9}"), "caf\\u00E9");
/// ```
pub fn encode(value: &str) -> String {
    EncodedStr(value).to_string()
}

/// Returns the canonical escaped form of a UTF-16 encoded value.
///
/// Surrogate pairs are combined into a single code point before they are escaped. A surrogate
/// that is not part of a pair is rejected.
pub fn encode_utf16(units: &[u16]) -> Result<String, EncodeError> {
    let value = char::decode_utf16(units.iter().copied())
        .collect::<Result<String, _>>()
        .map_err(|error| EncodeError::UnpairedSurrogate(error.unpaired_surrogate()))?;
    Ok(encode(&value))
}

/// Returns the canonical escaped form of a sequence of code points.
///
/// Returns an error for any value that is not a Unicode scalar value.
pub fn encode_code_points(
    code_points: impl IntoIterator<Item = u32>,
) -> Result<String, EncodeError> {
    let value = code_points
        .into_iter()
        .map(|cp| char::from_u32(cp).ok_or(EncodeError::InvalidCodePoint(cp)))
        .collect::<Result<String, _>>()?;
    Ok(encode(&value))
}

/// Writes the canonical escaped form of the wrapped string when displayed.
///
/// This avoids allocating an intermediate string when a term is written into a larger
/// buffer (e.g., when formatting a whole quad).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodedStr<'value>(pub &'value str);

impl fmt::Display for EncodedStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        let mut unescaped_from = 0;
        for (position, c) in value.char_indices() {
            if is_unescaped(c) {
                continue;
            }
            f.write_str(&value[unescaped_from..position])?;
            write_escape(f, c)?;
            unescaped_from = position + c.len_utf8();
        }
        f.write_str(&value[unescaped_from..])
    }
}

/// Printable ASCII except for the double quote and the backslash.
fn is_unescaped(c: char) -> bool {
    matches!(c, ' '..='~') && c != '"' && c != '\\'
}

fn write_escape(f: &mut impl Write, c: char) -> fmt::Result {
    match c {
        '\t' => f.write_str("\\t"),
        '\n' => f.write_str("\\n"),
        '\r' => f.write_str("\\r"),
        '"' => f.write_str("\\\""),
        '\\' => f.write_str("\\\\"),
        c if u32::from(c) >= 0x1_0000 => write!(f, "\\U{:08X}", u32::from(c)),
        c => write!(f, "\\u{:04X}", u32::from(c)),
    }
}
