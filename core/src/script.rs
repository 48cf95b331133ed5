//! Request-script parsing.
//!
//! Line format: `HH:MM:SS FROM TO COUNT`. Lines starting with `#` and blank
//! lines are skipped. A malformed line is skipped with a diagnostic and
//! counted — never fatal; the load always runs to the end of the file.

use crate::generator::Request;
use crate::types::Floor;
use std::fs;
use std::io;
use std::path::Path;

/// Outcome of parsing a whole script.
#[derive(Debug, Default)]
pub struct ParsedScript {
    pub requests: Vec<Request>,
    pub skipped_lines: usize,
}

/// Parse a script file from disk. Only the open/read can fail; bad lines are
/// handled per line.
pub fn parse_script_file(path: &Path) -> io::Result<ParsedScript> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_script(&contents))
}

/// Parse script text. Every valid line becomes one `Request`.
pub fn parse_script(contents: &str) -> ParsedScript {
    let mut parsed = ParsedScript::default();
    for (number, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match parse_line(trimmed) {
            Some(request) => parsed.requests.push(request),
            None => {
                log::warn!("skipping malformed request line {}: {trimmed:?}", number + 1);
                parsed.skipped_lines += 1;
            }
        }
    }
    parsed
}

fn parse_line(line: &str) -> Option<Request> {
    let mut fields = line.split_whitespace();
    let clock = fields.next()?;
    let from: Floor = fields.next()?.parse().ok()?;
    let to: Floor = fields.next()?.parse().ok()?;
    let count: u32 = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }

    let mut parts = clock.split(':');
    let hour: u32 = parts.next()?.parse().ok()?;
    let minute: u32 = parts.next()?.parse().ok()?;
    let second: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() || hour > 23 || minute > 59 || second > 59 {
        return None;
    }

    let time_hours = f64::from(hour) + f64::from(minute) / 60.0 + f64::from(second) / 3600.0;
    Some(Request { from, to, count, time_hours })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_lines_and_skips_comments() {
        let script = "\
# morning rush
07:00:00 1 5 2

07:30:00 1 9 1
";
        let parsed = parse_script(script);
        assert_eq!(parsed.skipped_lines, 0);
        assert_eq!(parsed.requests.len(), 2);
        assert_eq!(parsed.requests[0].from, 1);
        assert_eq!(parsed.requests[0].to, 5);
        assert_eq!(parsed.requests[0].count, 2);
        assert!((parsed.requests[0].time_hours - 7.0).abs() < 1e-9);
        assert!((parsed.requests[1].time_hours - 7.5).abs() < 1e-9);
    }

    #[test]
    fn malformed_lines_are_skipped_not_fatal() {
        let script = "\
07:00:00 1 5 2
not a line
25:00:00 1 5 2
07:00 1 5 2
08:00:00 3 7 1
";
        let parsed = parse_script(script);
        assert_eq!(parsed.requests.len(), 2);
        assert_eq!(parsed.skipped_lines, 3);
    }
}
