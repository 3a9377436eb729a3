// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timeline date parsing and normalization.
//!
//! Timeline dates are written `year[/month[/day]]`, where the year may carry
//! a leading `-` for dates before the reference era:
//!
//! ```text
//! 1940/9/9     -231/8/3     701     2020/02
//! ```
//!
//! [`normalize`] maps them onto a single signed integer that orders exactly
//! like the calendar. Missing month or day segments mean the start of the
//! period, so `701` and `701/1/1` normalize to the same value.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Separator between the segments of a timeline date.
pub const DATE_DELIMITER: char = '/';

/// Weight of the year in the normalized encoding.
const YEAR_WEIGHT: i64 = 10_000;
/// Weight of the month in the normalized encoding.
const MONTH_WEIGHT: i64 = 100;

/// A parsed, calendar-valid timeline date with reduced precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimelineDate {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
    start: NaiveDate,
}

impl TimelineDate {
    /// Parse a timeline date, returning `None` for anything malformed.
    ///
    /// Rejects empty segments, signs on month or day, more than three
    /// segments, and days that do not exist in the (proleptic Gregorian)
    /// calendar.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let mut segments = input.split(DATE_DELIMITER);
        let year = parse_year(segments.next()?)?;
        let month = match segments.next() {
            Some(segment) => Some(parse_unsigned(segment)?),
            None => None,
        };
        let day = match segments.next() {
            Some(segment) => Some(parse_unsigned(segment)?),
            None => None,
        };
        if segments.next().is_some() {
            return None;
        }

        let start = NaiveDate::from_ymd_opt(year, month.unwrap_or(1), day.unwrap_or(1))?;
        Some(TimelineDate {
            year,
            month,
            day,
            start,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    /// The first calendar day covered by this date (`701` is `0701-01-01`).
    pub fn start_of_period(&self) -> NaiveDate {
        self.start
    }

    /// Order-preserving integer form of this date.
    pub fn normalized(&self) -> NormalizedDate {
        let month = i64::from(self.month.unwrap_or(1));
        let day = i64::from(self.day.unwrap_or(1));
        NormalizedDate(i64::from(self.year) * YEAR_WEIGHT + month * MONTH_WEIGHT + day)
    }
}

impl fmt::Display for TimelineDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.year)?;
        if let Some(month) = self.month {
            write!(f, "{}{}", DATE_DELIMITER, month)?;
        }
        if let Some(day) = self.day {
            write!(f, "{}{}", DATE_DELIMITER, day)?;
        }
        Ok(())
    }
}

/// A timeline date encoded as `year * 10000 + month * 100 + day`.
///
/// Month and day are always added as positive offsets, so the encoding stays
/// monotonic across the era boundary: `-231/8/3` is `-2309197`, which sorts
/// before `-231/8/4` (`-2309196`) and before `100/1/1` (`1000101`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NormalizedDate(i64);

impl NormalizedDate {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NormalizedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalize optional timeline date text.
///
/// Absent or unparsable input yields `None`, meaning "unknown"; callers
/// must not treat it as zero.
pub fn normalize(input: Option<&str>) -> Option<NormalizedDate> {
    input
        .and_then(TimelineDate::parse)
        .map(|date| date.normalized())
}

fn parse_year(segment: &str) -> Option<i32> {
    let (negative, digits) = match segment.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, segment),
    };
    let magnitude = i32::try_from(parse_unsigned(digits)?).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

fn parse_unsigned(segment: &str) -> Option<u32> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

#[cfg(test)]
#[path = "date_tests.rs"]
mod tests;
