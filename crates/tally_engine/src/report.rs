use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use tally_core::TokenCountTable;
use thiserror::Error;

pub const REPORT_FILENAME: &str = "token_counts.json";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Single-line JSON with `", "` and `": "` separators and ASCII-only output,
/// matching what downstream consumers of `token_counts.json` already parse.
#[derive(Debug, Default, Clone, Copy)]
struct ReportFormatter;

impl Formatter for ReportFormatter {
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

/// Render the table as a flat JSON object, keys in table order.
pub fn render_counts(table: &TokenCountTable) -> Result<String, ReportError> {
    let mut buffer = Vec::with_capacity(16 * table.len() + 2);
    let mut serializer = Serializer::with_formatter(&mut buffer, ReportFormatter);
    table.serialize(&mut serializer)?;
    // The formatter escapes everything outside ASCII.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
