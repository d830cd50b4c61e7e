use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("Invalid time expression: '{0}'")]
    InvalidInstant(String),

    #[error("Invalid interval: '{0}'")]
    InvalidInterval(String),

    #[error("Unrecognized integer time magnitude: {0}")]
    Magnitude(i128),
}

/// Utility for parsing time window bounds and interval strings.
pub struct TimeParser;

impl TimeParser {
    /// Parse a time window bound into a UTC instant.
    /// Supports `now`, `now±<interval>`, RFC3339/ISO-8601, date-only
    /// (YYYY-MM-DD) and integer epochs of any common magnitude.
    pub fn parse_instant(input: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, TimeParseError> {
        let s = input.trim();
        if let Some(rest) = s.strip_prefix("now") {
            return Self::apply_relative(rest, now)
                .ok_or_else(|| TimeParseError::InvalidInstant(input.to_string()));
        }
        // Try RFC3339/ISO-8601 first
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&Utc));
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            let midnight = date
                .and_hms_opt(0, 0, 0)
                .ok_or_else(|| TimeParseError::InvalidInstant(input.to_string()))?;
            return Ok(Utc.from_utc_datetime(&midnight));
        }
        if let Ok(num) = s.parse::<i128>() {
            let secs = Self::normalize_integer_epoch(num).ok_or(TimeParseError::Magnitude(num))?;
            return Utc
                .timestamp_opt(secs, 0)
                .single()
                .ok_or_else(|| TimeParseError::InvalidInstant(input.to_string()));
        }
        Err(TimeParseError::InvalidInstant(input.to_string()))
    }

    /// Parse an interval such as `30s`, `5m`, `1h`, `7d`, `2w`, `1M`, `1y`
    /// or `250ms`. A bare number is read as seconds.
    pub fn parse_interval(input: &str) -> Result<Duration, TimeParseError> {
        let s = input.trim();
        let invalid = || TimeParseError::InvalidInterval(input.to_string());

        let split = s
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(s.len());
        let (number, unit) = s.split_at(split);
        if number.is_empty() {
            return Err(invalid());
        }
        let value: f64 = number.parse().map_err(|_| invalid())?;

        let unit_ms: f64 = match unit {
            "ms" => 1.0,
            "" | "s" => 1_000.0,
            "m" => 60_000.0,
            "h" => 3_600_000.0,
            "d" => 86_400_000.0,
            "w" => 604_800_000.0,
            "M" => 2_592_000_000.0,
            "y" => 31_536_000_000.0,
            _ => return Err(invalid()),
        };

        let millis = value * unit_ms;
        if !millis.is_finite() || millis > i64::MAX as f64 {
            return Err(invalid());
        }
        Ok(Duration::milliseconds(millis.round() as i64))
    }

    fn apply_relative(rest: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let rest = rest.trim();
        if rest.is_empty() {
            return Some(now);
        }
        let mut chars = rest.chars();
        let (sign, interval) = match chars.next() {
            Some('-') => (-1, chars.as_str()),
            Some('+') => (1, chars.as_str()),
            _ => return None,
        };
        let offset = Self::parse_interval(interval).ok()?;
        if sign < 0 {
            now.checked_sub_signed(offset)
        } else {
            now.checked_add_signed(offset)
        }
    }

    /// Heuristic normalization of integer magnitudes to seconds.
    /// - up to 11 digits: seconds
    /// - 12..=14: milliseconds
    /// - 15..=16: microseconds
    /// - 17..=19: nanoseconds
    fn normalize_integer_epoch(n: i128) -> Option<i64> {
        let abs = n.unsigned_abs();
        let digits = num_digits_u128(abs);
        let secs = match digits {
            0..=11 => n,
            12..=14 => n / 1_000,
            15..=16 => n / 1_000_000,
            17..=19 => n / 1_000_000_000,
            _ => return None,
        };
        i64::try_from(secs).ok()
    }
}

fn num_digits_u128(mut x: u128) -> u32 {
    if x == 0 {
        return 1;
    }
    let mut c = 0;
    while x > 0 {
        x /= 10;
        c += 1;
    }
    c
}
