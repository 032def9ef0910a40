//! Canonical text form of rendered payloads.
//!
//! Compact output separates entries with `", "` and keys with `": "`. Indented
//! output is standard pretty printing with the requested width. Both escape
//! every character outside printable ASCII as `\uXXXX`.

use std::io;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};

/// Serializes `payload`, compactly when `indent` is `None`.
pub fn to_text(payload: &Value, indent: Option<usize>) -> String {
    let indent_bytes = indent.map(|width| vec![b' '; width]);
    let formatter = match &indent_bytes {
        Some(bytes) => CardFormatter::Pretty(PrettyFormatter::with_indent(bytes)),
        None => CardFormatter::Spaced,
    };
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    // Writing a `Value` into memory only fails on non-string map keys, which a `Value` cannot hold,
    // so the empty fallbacks below are unreachable.
    let written = payload.serialize(&mut serializer);
    debug_assert!(written.is_ok(), "serializing a payload into memory failed");
    if written.is_err() {
        return String::new();
    }
    let text = String::from_utf8(buffer);
    debug_assert!(text.is_ok(), "serializer wrote invalid UTF-8");
    text.unwrap_or_default()
}

enum CardFormatter<'a> {
    Spaced,
    Pretty(PrettyFormatter<'a>),
}

impl Formatter for CardFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        match self {
            CardFormatter::Spaced => writer.write_all(b"["),
            CardFormatter::Pretty(pretty) => pretty.begin_array(writer),
        }
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        match self {
            CardFormatter::Spaced => writer.write_all(b"]"),
            CardFormatter::Pretty(pretty) => pretty.end_array(writer),
        }
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        match self {
            CardFormatter::Spaced if first => Ok(()),
            CardFormatter::Spaced => writer.write_all(b", "),
            CardFormatter::Pretty(pretty) => pretty.begin_array_value(writer, first),
        }
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        match self {
            CardFormatter::Spaced => Ok(()),
            CardFormatter::Pretty(pretty) => pretty.end_array_value(writer),
        }
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        match self {
            CardFormatter::Spaced => writer.write_all(b"{"),
            CardFormatter::Pretty(pretty) => pretty.begin_object(writer),
        }
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        match self {
            CardFormatter::Spaced => writer.write_all(b"}"),
            CardFormatter::Pretty(pretty) => pretty.end_object(writer),
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        match self {
            CardFormatter::Spaced if first => Ok(()),
            CardFormatter::Spaced => writer.write_all(b", "),
            CardFormatter::Pretty(pretty) => pretty.begin_object_key(writer, first),
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        match self {
            CardFormatter::Spaced => writer.write_all(b": "),
            CardFormatter::Pretty(pretty) => pretty.begin_object_value(writer),
        }
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        match self {
            CardFormatter::Spaced => Ok(()),
            CardFormatter::Pretty(pretty) => pretty.end_object_value(writer),
        }
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..index])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}
