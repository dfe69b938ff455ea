//! Generation Time Ranges
//!
//! A closed interval of wall-clock time that event timestamps are drawn
//! from. Construction rejects inverted ranges, so downstream code never
//! has to re-check the bounds.
//!
//! # Example
//!
//! ```
//! use ops_events::TimeRange;
//!
//! let range = TimeRange::parse("2023-01-01", "2024-12-31").unwrap();
//! assert!(range.span_seconds() > 0);
//! ```

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::fmt;

/// Error type for constructing or parsing a [`TimeRange`].
#[derive(Debug, Clone, PartialEq)]
pub enum TimeRangeError {
    /// The start instant is after the end instant.
    Inverted {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    /// A bound could not be parsed as a `YYYY-MM-DD` date.
    InvalidDate(String),
}

impl fmt::Display for TimeRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRangeError::Inverted { start, end } => {
                write!(f, "inverted time range: start {} is after end {}", start, end)
            }
            TimeRangeError::InvalidDate(s) => {
                write!(f, "invalid date: '{}', expected 'YYYY-MM-DD'", s)
            }
        }
    }
}

impl std::error::Error for TimeRangeError {}

/// A validated, closed time interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeRange {
    /// Creates a range, rejecting `start > end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, TimeRangeError> {
        if start > end {
            return Err(TimeRangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parses a range from `YYYY-MM-DD` bounds.
    ///
    /// The start bound is midnight at the start of its day; the end bound is
    /// midnight at the start of its day, so a single-day range has zero span.
    pub fn parse(start: &str, end: &str) -> Result<Self, TimeRangeError> {
        Self::new(parse_day(start)?, parse_day(end)?)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whole seconds between the bounds. Zero for a degenerate range.
    pub fn span_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }

    /// True if the instant falls within the closed interval.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

fn parse_day(s: &str) -> Result<DateTime<Utc>, TimeRangeError> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| TimeRangeError::InvalidDate(s.to_string()))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| TimeRangeError::InvalidDate(s.to_string()))?;
    Ok(Utc.from_utc_datetime(&midnight))
}
