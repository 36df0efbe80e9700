//! Defines the [`TimeStamp`] type, the creation time of a post. It is parsed
//! once from the post's metadata block and never changes afterward.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use std::cmp::Ordering;
use std::fmt;

/// Layouts accepted for the `date` metadata field, tried in order.
const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// The creation time of a post.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeStamp(NaiveDateTime);

impl TimeStamp {
    /// Returns the sortable magnitude of the timestamp: the digits
    /// `YYYYMMDDhhmmss` read as one integer. Later times never have a smaller
    /// magnitude, which is what makes `{magnitude}-{slug}.html` file names
    /// sort by time.
    pub fn stamp_size(&self) -> i64 {
        let d = &self.0;
        i64::from(d.year()) * 10_000_000_000
            + i64::from(d.month()) * 100_000_000
            + i64::from(d.day()) * 1_000_000
            + i64::from(d.hour()) * 10_000
            + i64::from(d.minute()) * 100
            + i64::from(d.second())
    }

    /// Returns `true` if `a` is chronologically after `b`.
    pub fn is_bigger_stamp(a: &TimeStamp, b: &TimeStamp) -> bool {
        a.0 > b.0
    }

    /// Orders two timestamps newest-first.
    pub fn newest_first(a: &TimeStamp, b: &TimeStamp) -> Ordering {
        if TimeStamp::is_bigger_stamp(a, b) {
            Ordering::Less
        } else if TimeStamp::is_bigger_stamp(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Formats the timestamp with a [`chrono::format::strftime`] layout.
    pub fn format(&self, layout: &str) -> String {
        self.0.format(layout).to_string()
    }

    pub fn datetime(&self) -> &NaiveDateTime {
        &self.0
    }
}

impl std::str::FromStr for TimeStamp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<TimeStamp, ParseError> {
        let s = s.trim();
        for layout in DATETIME_LAYOUTS {
            if let Ok(datetime) = NaiveDateTime::parse_from_str(s, layout) {
                return Ok(TimeStamp(datetime));
            }
        }
        for layout in DATE_LAYOUTS {
            if let Some(datetime) = NaiveDate::parse_from_str(s, layout)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
            {
                return Ok(TimeStamp(datetime));
            }
        }
        Err(ParseError(s.to_owned()))
    }
}

/// Returned when a `date` value matches none of the accepted layouts.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError(String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unrecognized date `{}`", self.0)
    }
}

impl std::error::Error for ParseError {}
