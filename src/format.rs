//! Display helpers for history rows: byte sizes and timestamps.

use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Label used for missing or zero sizes.
pub const ZERO_BYTES: &str = "0 Bytes";

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Formats a byte count with binary prefixes: `1536` becomes `"1.5 KB"`.
///
/// `None` and `0` yield [`ZERO_BYTES`]. Units stop at GB, larger values are
/// expressed as a (possibly large) GB count. `decimals` below zero count as zero;
/// trailing zeros are dropped, so `1048576` is `"1 MB"` rather than `"1.00 MB"`.
pub fn format_bytes(bytes: Option<u64>, decimals: i32) -> String {
    let bytes = match bytes {
        Some(b) if b > 0 => b,
        _ => return ZERO_BYTES.to_string(),
    };
    let dm = decimals.max(0);
    // floor(log1024(bytes)) in integers, exact at unit boundaries
    let mut i = 0usize;
    while i + 1 < UNITS.len() && bytes >= 1024u64.pow(i as u32 + 1) {
        i += 1;
    }
    let value = bytes as f64 / 1024f64.powi(i as i32);
    let factor = 10f64.powi(dm);
    let rounded = (value * factor).round() / factor;
    format!("{} {}", rounded, UNITS[i])
}

/// Default pattern for [`format_timestamp`].
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses the backend's ISO-ish timestamps.
///
/// Zoned values (RFC 3339) are converted to local time; values without zone are
/// taken as local time already, the way a browser reads them.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }
    let naive = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;
    Local.from_local_datetime(&naive).earliest()
}

/// Formats a timestamp for display, falling back to the raw string.
///
/// Never fails: unparseable input and broken patterns both return `raw` verbatim.
pub fn format_timestamp(raw: &str, pattern: &str) -> String {
    let Some(dt) = parse_timestamp(raw) else {
        return raw.to_string();
    };
    let mut out = String::new();
    if write!(out, "{}", dt.format(pattern)).is_err() {
        tracing::debug!("date pattern {:?} rejected, showing raw timestamp", pattern);
        return raw.to_string();
    }
    out
}

/// True when `pattern` contains only valid strftime items.
pub fn is_valid_date_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}
