// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timeline event records.
//!
//! A [`TimelineEvent`] is built once per extraction pass (see
//! [`crate::extract`]) and never mutated while filtering. Date fields keep
//! the author's text; they are normalized on demand.

use serde::{Deserialize, Serialize};

use crate::date::{normalize, NormalizedDate};
use crate::range::DateRange;
use crate::value::{ScalarValue, Unit};

/// A date-anchored event extracted from a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    /// Groups events of the same kind; `"unknown"` when the source omits it.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_end: Option<String>,
    /// Free-text label shown instead of the computed date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_description: Option<String>,
    /// Explicit identifier, overriding the one derived from dates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_tags: Option<Vec<String>>,
    /// Image path, relative to the source document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<bool>,
}

impl TimelineEvent {
    pub fn new(name: impl Into<String>) -> Self {
        TimelineEvent {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Effective start: `date` if present, else `dateStart`.
    pub fn start(&self) -> Option<&str> {
        self.date.as_deref().or(self.date_start.as_deref())
    }

    /// Effective end: `dateEnd` if present, else the start (point event).
    pub fn end(&self) -> Option<&str> {
        self.date_end.as_deref().or_else(|| self.start())
    }

    /// The temporal extent of this event. Unparsable bounds are open.
    pub fn date_range(&self) -> DateRange {
        DateRange::new(normalize(self.start()), normalize(self.end()))
    }

    /// Event tags in source order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.event_tags.iter().flatten().map(String::as_str)
    }

    /// True when the event carries at least one tag.
    pub fn has_tags(&self) -> bool {
        self.event_tags.as_ref().is_some_and(|tags| !tags.is_empty())
    }

    /// Identifier derived from the event's dates.
    ///
    /// `dateId` wins when set. Otherwise `date` alone, then a
    /// `dateStart`-`dateEnd` pair, then `dateStart` alone, each rendered as
    /// normalized values.
    pub fn id(&self) -> Option<String> {
        if let Some(id) = &self.date_id {
            return Some(id.clone());
        }
        if let Some(date) = normalize(self.date.as_deref()) {
            return Some(date.to_string());
        }
        let start = normalize(self.date_start.as_deref());
        let end = normalize(self.date_end.as_deref());
        match (start, end) {
            (Some(start), Some(end)) => Some(format!("{}-{}", start, end)),
            (Some(start), None) => Some(start.to_string()),
            _ => None,
        }
    }

    /// Text describing when the event happened.
    pub fn date_description(&self) -> Option<String> {
        self.date_description.clone().or_else(|| self.id())
    }

    /// Normalized effective start, if known.
    pub fn start_date(&self) -> Option<NormalizedDate> {
        normalize(self.start())
    }

    /// Ordering key: chronological by start, unknown dates last.
    pub fn sort_key(&self) -> (bool, Option<NormalizedDate>) {
        let start = self.start_date();
        (start.is_none(), start)
    }

    /// The event's value as a quantity, when both magnitude and unit are set.
    pub fn quantity(&self) -> Option<ScalarValue> {
        Some(ScalarValue::new(self.value?, self.unit?))
    }

    pub fn is_milestone(&self) -> bool {
        self.milestone.unwrap_or(false)
    }
}

/// Stable chronological sort, placing events with unknown dates last.
pub fn sort_events(events: &mut [TimelineEvent]) {
    events.sort_by_key(TimelineEvent::sort_key);
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
