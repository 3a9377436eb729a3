// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Date ranges with optionally open bounds.

use serde::Serialize;

use crate::date::{normalize, NormalizedDate};

/// A closed date range whose bounds may be unset.
///
/// An unset `start` extends to negative infinity and an unset `end` to
/// positive infinity. Bounds are stored normalized, so comparisons always
/// follow calendar order rather than string order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: Option<NormalizedDate>,
    pub end: Option<NormalizedDate>,
}

impl DateRange {
    pub fn new(start: Option<NormalizedDate>, end: Option<NormalizedDate>) -> Self {
        DateRange { start, end }
    }

    /// Build a range from date text; unparsable bounds are left open.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Self {
        DateRange::new(normalize(start), normalize(end))
    }

    /// A zero-width range covering a single date.
    pub fn point(date: NormalizedDate) -> Self {
        DateRange::new(Some(date), Some(date))
    }

    /// Fully unbounded range.
    pub fn unbounded() -> Self {
        DateRange::default()
    }

    /// True when both bounds are set and the start lies after the end.
    pub fn is_inverted(&self) -> bool {
        matches!((self.start, self.end), (Some(start), Some(end)) if start > end)
    }

    /// Whether `date` falls inside this range.
    pub fn contains(&self, date: NormalizedDate) -> bool {
        self.start.is_none_or(|start| start <= date) && self.end.is_none_or(|end| date <= end)
    }
}

/// Whether two ranges share at least one date.
///
/// Open bounds never exclude anything, so two fully unbounded ranges
/// intersect.
pub fn intersects(a: &DateRange, b: &DateRange) -> bool {
    bound_le(a.start, b.end) && bound_le(b.start, a.end)
}

/// `start <= end`, where an unset bound is unbounded on its side.
fn bound_le(start: Option<NormalizedDate>, end: Option<NormalizedDate>) -> bool {
    match (start, end) {
        (Some(start), Some(end)) => start <= end,
        _ => true,
    }
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
