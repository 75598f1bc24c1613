//! Date parsing for heterogeneous claim feeds
//!
//! Claim exports carry dates as ISO strings, datetime strings, regional
//! formats, compact digit runs, or epoch milliseconds depending on which
//! upstream system produced them. Parsing tries an ordered format list and
//! falls back to heuristic format detection; anything unparseable becomes
//! `None` rather than an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Configuration for date format handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatConfig {
    /// List of date format strings to try when parsing dates
    pub date_formats: Vec<String>,
    /// Enable heuristic format detection
    pub enable_format_detection: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d".to_string(), // ISO format: 2009-01-15
                "%m/%d/%Y".to_string(), // US: 01/15/2009
                "%d-%m-%Y".to_string(), // European: 15-01-2009
                "%Y%m%d".to_string(),   // Compact: 20090115
                "%d %b %Y".to_string(), // 15 Jan 2009
            ],
            enable_format_detection: true,
        }
    }
}

/// Parse a date string with multiple format attempts
#[must_use]
pub fn parse_date_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    // Datetime forms first: RFC 3339 and naive T-separated timestamps
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }

    for format in &config.date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    if config.enable_format_detection {
        if let Some(detected_format) = detect_date_format(s) {
            if let Ok(date) = NaiveDate::parse_from_str(s, &detected_format) {
                return Some(date);
            }
        }
    }

    None
}

/// Parse a raw JSON date value to a date
///
/// Strings go through the format list; numbers are interpreted as epoch
/// milliseconds, matching how the upstream feed serialized its timestamps.
#[must_use]
pub fn parse_date_value(value: Option<&Value>, config: &DateFormatConfig) -> Option<NaiveDate> {
    match value? {
        Value::String(s) => parse_date_string(s, config),
        Value::Number(n) => {
            let millis = n.as_i64()?;
            DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive())
        }
        _ => None,
    }
}

/// Try to detect the date format based on string patterns
fn detect_date_format(s: &str) -> Option<String> {
    // ISO-like with dashes (YYYY-MM-DD)
    if s.len() == 10 && s.chars().nth(4) == Some('-') && s.chars().nth(7) == Some('-') {
        return Some("%Y-%m-%d".to_string());
    }

    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() == 3 {
            if parts[0].len() == 4 {
                return Some("%Y/%m/%d".to_string());
            } else if parts[2].len() == 4 {
                if let Ok(first_num) = parts[0].parse::<u8>() {
                    if first_num > 12 {
                        return Some("%d/%m/%Y".to_string());
                    }
                    // Ambiguous; the feed is US-sourced, so month first
                    return Some("%m/%d/%Y".to_string());
                }
            }
        }
    }

    // Compact digit run (YYYYMMDD)
    if s.len() == 8 && s.chars().all(|c| c.is_ascii_digit()) {
        return Some("%Y%m%d".to_string());
    }

    None
}
