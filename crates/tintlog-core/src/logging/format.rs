//! Record formatting and parsing
//!
//! A record is a single line:
//!
//! ```text
//! <color>[<module>] <RFC3339 timestamp><reset>: <message><reset>
//! ```
//!
//! The same text goes to the console and, unless colors are disabled for the
//! file, to the log file. The plain form drops the color and both resets and
//! leaves the message untouched.

use std::fmt::{self, Write as _};

use chrono::{DateTime, FixedOffset, Local, SecondsFormat};

use super::level::Severity;

/// ANSI sequence that closes every colored span
pub const RESET: &str = "\x1b[0m";

/// Marker appended when a `Display` impl fails mid-format
pub const FORMAT_ERROR_MARKER: &str = "%!(FORMAT ERROR)";

/// Current local wall-clock time in RFC3339 with second precision
pub fn timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Build a colored record line (without the trailing newline)
pub fn format_record(severity: Severity, module: &str, timestamp: &str, message: &str) -> String {
    let color = severity.color();
    let mut line = String::with_capacity(
        color.len() + module.len() + timestamp.len() + message.len() + 2 * RESET.len() + 5,
    );
    line.push_str(color);
    line.push('[');
    line.push_str(module);
    line.push_str("] ");
    line.push_str(timestamp);
    line.push_str(RESET);
    line.push_str(": ");
    line.push_str(message);
    line.push_str(RESET);
    line
}

/// Build a record line without color framing
pub fn format_plain_record(module: &str, timestamp: &str, message: &str) -> String {
    let mut line = String::with_capacity(module.len() + timestamp.len() + message.len() + 5);
    line.push('[');
    line.push_str(module);
    line.push_str("] ");
    line.push_str(timestamp);
    line.push_str(": ");
    line.push_str(message);
    line
}

/// Render format arguments without ever panicking.
///
/// `ToString` panics when a `Display` impl reports an error; here the text
/// written so far is kept and a marker is appended instead.
pub fn render_args(args: fmt::Arguments<'_>) -> String {
    if let Some(s) = args.as_str() {
        return s.to_string();
    }
    let mut out = String::new();
    if out.write_fmt(args).is_err() {
        out.push_str(FORMAT_ERROR_MARKER);
    }
    out
}

/// A record recovered from a written line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    /// Known only when the line still carries its color prefix
    pub severity: Option<Severity>,
    pub module: String,
    pub timestamp: DateTime<FixedOffset>,
    pub message: String,
}

/// Parse a line written by the logger, colored or plain.
///
/// Only the logger's own framing is removed; the message comes back exactly
/// as it was logged, escape sequences included. Returns `None` if the line
/// does not have the record shape.
pub fn parse_record(line: &str) -> Option<ParsedRecord> {
    let line = line.trim_end_matches(['\n', '\r']);

    let severity = Severity::EMITTABLE
        .into_iter()
        .find(|s| line.starts_with(s.color()));

    let (body, separator) = match severity {
        Some(severity) => {
            let body = line[severity.color().len()..].strip_suffix(RESET)?;
            (body, format!("{RESET}: "))
        }
        None => (line, ": ".to_string()),
    };
    let body = body.strip_prefix('[')?;

    // Module names are free-form, so try each "] " until a timestamp follows
    let mut search_from = 0;
    while let Some(offset) = body[search_from..].find("] ") {
        let close = search_from + offset;
        let rest = &body[close + 2..];
        if let Some(sep) = rest.find(separator.as_str()) {
            if let Ok(timestamp) = DateTime::parse_from_rfc3339(&rest[..sep]) {
                return Some(ParsedRecord {
                    severity,
                    module: body[..close].to_string(),
                    timestamp,
                    message: rest[sep + separator.len()..].to_string(),
                });
            }
        }
        search_from = close + 1;
    }
    None
}
