//! Log line codec
//!
//! One event per line, six tab-separated fields:
//!
//! ```text
//! timestamp <TAB> category <TAB> verb <TAB> url <TAB> elapsed <TAB> message
//! ```
//!
//! Absent optionals are empty. Backslash, tab, CR and LF inside text fields
//! are escaped so every event stays on one line.

use chrono::{DateTime, SecondsFormat, Utc};

use super::event::{Category, LogEvent};

const FIELDS: usize = 6;

/// Render `event` as a single line, without the trailing newline
pub fn format_line(event: &LogEvent) -> String {
    let elapsed = event.elapsed.map(|e| e.to_string()).unwrap_or_default();
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        event.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true),
        event.category.as_str(),
        escape(event.verb.as_deref().unwrap_or("")),
        escape(event.url.as_deref().unwrap_or("")),
        elapsed,
        escape(&event.message),
    )
}

/// Parse one line produced by [`format_line`]
///
/// # Errors
///
/// Returns a description of the first problem found.
pub fn parse_line(line: &str) -> Result<LogEvent, String> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.splitn(FIELDS, '\t').collect();
    if fields.len() != FIELDS {
        return Err(format!(
            "expected {FIELDS} tab-separated fields, found {}",
            fields.len()
        ));
    }

    let timestamp = DateTime::parse_from_rfc3339(fields[0])
        .map_err(|e| format!("bad timestamp `{}`: {e}", fields[0]))?
        .with_timezone(&Utc);
    let category: Category = fields[1].parse()?;
    let elapsed = match fields[4] {
        "" => None,
        raw => Some(
            raw.parse::<f64>()
                .map_err(|e| format!("bad elapsed time `{raw}`: {e}"))?,
        ),
    };

    Ok(LogEvent {
        timestamp,
        category,
        verb: optional(fields[2])?,
        url: optional(fields[3])?,
        elapsed,
        message: unescape(fields[5])?,
    })
}

fn optional(field: &str) -> Result<Option<String>, String> {
    if field.is_empty() {
        Ok(None)
    } else {
        unescape(field).map(Some)
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

fn unescape(text: &str) -> Result<String, String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => return Err(format!("unknown escape `\\{other}`")),
            None => return Err("dangling escape at end of field".to_string()),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use http::Method;

    use super::*;
    use crate::cache::CacheKey;

    #[test]
    fn http_line_layout() {
        let timestamp = DateTime::parse_from_rfc3339("2026-10-18T09:30:00.125Z")
            .unwrap()
            .with_timezone(&Utc);
        let event = LogEvent::http(
            &Method::GET,
            &CacheKey::from_raw("https://h.example/a"),
            Duration::from_millis(1500),
            200,
        )
        .with_timestamp(timestamp);

        assert_eq!(
            format_line(&event),
            "2026-10-18T09:30:00.125000Z\tHTTP\tGET\thttps://h.example/a\t1.5\t200"
        );
    }

    #[test]
    fn lines_parse_back_into_identical_events() {
        let events = [
            LogEvent::http(
                &Method::DELETE,
                &CacheKey::from_raw("https://h.example/p/1"),
                Duration::from_nanos(123_456_789),
                204,
            ),
            LogEvent::cache_drop(&CacheKey::from_raw("https://h.example/p/1/users")),
            LogEvent::cache_hit(&Method::GET, &CacheKey::from_raw("https://h.example/p/2")),
            LogEvent::message("multi\tpart\nmessage with \\ backslash"),
            LogEvent::error(""),
        ];
        for event in events {
            assert_eq!(parse_line(&format_line(&event)), Ok(event));
        }
    }

    #[test]
    fn timestamps_always_render_six_fraction_digits() {
        let whole = DateTime::parse_from_rfc3339("2026-10-18T09:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let line = format_line(&LogEvent::message("on the second").with_timestamp(whole));
        assert!(line.starts_with("2026-10-18T09:30:00.000000Z\t"), "{line}");
    }

    #[test]
    fn malformed_lines_are_rejected() {
        assert!(parse_line("not a log line").is_err());
        assert!(parse_line("yesterday\tHTTP\tGET\tu\t0.1\t200").is_err());
        assert!(parse_line("2026-10-18T09:30:00Z\tCACHE MISS\t\tu\t\t").is_err());
        assert!(parse_line("2026-10-18T09:30:00Z\tHTTP\tGET\tu\tfast\t200").is_err());
        assert!(parse_line("2026-10-18T09:30:00Z\tMESSAGE\t\t\t\tbad \\q").is_err());
    }
}
