//! Minimal delimited-text decoding for the alumni-outcomes fixture.
//!
//! Comma-separated, header line first, no quoting or escaping: a field
//! containing a literal comma is split incorrectly, silently. That
//! limitation is acceptable for the controlled fixture data this parser
//! is fed, and callers must not feed it anything else.

use std::collections::HashMap;

/// Ordered header list plus one name-to-value mapping per data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCsv {
    pub headers: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
}

/// Splits raw CSV text into headers and rows. Fields are trimmed; data
/// lines shorter than the header default their trailing fields to `""`.
/// Extra fields beyond the header are dropped.
pub fn parse_csv(text: &str) -> ParsedCsv {
    let mut lines = text.trim().lines();

    let headers: Vec<String> = lines
        .next()
        .unwrap_or_default()
        .split(',')
        .map(|h| h.trim().to_string())
        .collect();

    let rows = lines
        .map(|line| {
            let values: Vec<&str> = line.split(',').map(str::trim).collect();
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let value = values.get(i).copied().unwrap_or("");
                    (header.clone(), value.to_string())
                })
                .collect()
        })
        .collect();

    ParsedCsv { headers, rows }
}

/// Splits a semicolon-joined compound field (`"Python;SQL"`) into trimmed
/// items. Used for columns whose values CSV's own structure cannot express.
pub fn split_skill_list(field: &str) -> Vec<String> {
    field.split(';').map(|s| s.trim().to_string()).collect()
}
