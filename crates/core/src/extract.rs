// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validation boundary between host-extracted data and typed events.
//!
//! The host scans documents and hands over one untyped key/value bag per
//! event (a [`Dataset`]). Here each bag is turned into a [`TimelineEvent`],
//! defaulting or dropping malformed fields so that nothing downstream has
//! to deal with loose shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::event::TimelineEvent;
use crate::store::{Document, EventStore};
use crate::value::{ScalarValue, Unit};

/// Untyped event attributes as scanned from a document.
pub type Dataset = serde_json::Map<String, Value>;

/// Name given to events whose source does not provide one.
pub const UNKNOWN_EVENT_NAME: &str = "unknown";

/// Separator between event tags in a single attribute value.
pub const EVENT_TAG_SEPARATOR: char = ';';

/// One scanned document as delivered by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Host identifier; hosts reading from disk may fill it from the path.
    #[serde(default)]
    pub id: String,
    /// Document-level tags, consulted by the document filter.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub events: Vec<Dataset>,
}

impl SourceDocument {
    /// Decode a document from its JSON form.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Validate every dataset into a typed document.
    pub fn to_document(&self) -> Document {
        Document {
            id: self.id.clone(),
            tags: self.tags.clone(),
            events: self.events.iter().map(TimelineEvent::from_dataset).collect(),
        }
    }
}

/// Validate all documents into a fresh store, keeping document order.
pub fn extract_events(documents: &[SourceDocument]) -> EventStore {
    let mut store = EventStore::new();
    for document in documents {
        store.replace(document.to_document());
    }
    store
}

impl TimelineEvent {
    /// Build an event from a scanned dataset.
    ///
    /// - `name` defaults to `"unknown"`.
    /// - `eventTags` is split on `;` (or taken from an array), trimmed, and
    ///   left unset when no tag remains.
    /// - `value` may be a number, numeric text, or quantity text like `5km`;
    ///   an explicit `unit` takes precedence over a unit in the value text.
    /// - `milestone` is true only for `true`.
    /// - Blank text fields are treated as absent.
    pub fn from_dataset(dataset: &Dataset) -> TimelineEvent {
        let name = text(dataset, "name").unwrap_or_else(|| {
            debug!("timeline event without a name, using '{}'", UNKNOWN_EVENT_NAME);
            UNKNOWN_EVENT_NAME.to_string()
        });

        let (value, value_unit) = parse_value(dataset.get("value"));
        let unit = text(dataset, "unit").and_then(|u| match u.parse::<Unit>() {
            Ok(unit) => Some(unit),
            Err(e) => {
                debug!("dropping unit of event '{}': {}", name, e);
                None
            }
        });

        TimelineEvent {
            title: text(dataset, "title"),
            class: text(dataset, "class"),
            date: text(dataset, "date"),
            date_start: text(dataset, "dateStart"),
            date_end: text(dataset, "dateEnd"),
            date_description: text(dataset, "dateDescription"),
            date_id: text(dataset, "dateId"),
            event_tags: parse_event_tags(dataset.get("eventTags")),
            img: text(dataset, "img"),
            value,
            unit: unit.or(value_unit),
            milestone: parse_milestone(dataset.get("milestone")),
            name,
        }
    }
}

/// Read a scalar field as trimmed, non-empty text.
fn text(dataset: &Dataset, key: &str) -> Option<String> {
    match dataset.get(key)? {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        other => {
            debug!("ignoring non-scalar field '{}': {}", key, other);
            None
        }
    }
}

fn parse_event_tags(value: Option<&Value>) -> Option<Vec<String>> {
    let tags: Vec<String> = match value? {
        Value::String(s) => s
            .split(EVENT_TAG_SEPARATOR)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect(),
        other => {
            debug!("ignoring malformed eventTags: {}", other);
            Vec::new()
        }
    };
    (!tags.is_empty()).then_some(tags)
}

fn parse_value(value: Option<&Value>) -> (Option<f64>, Option<Unit>) {
    match value {
        Some(Value::Number(n)) => (n.as_f64(), None),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return (None, None);
            }
            if let Ok(number) = s.parse::<f64>() {
                if number.is_finite() {
                    return (Some(number), None);
                }
            }
            match s.parse::<ScalarValue>() {
                Ok(quantity) => (Some(quantity.magnitude), Some(quantity.unit)),
                Err(e) => {
                    debug!("dropping event value '{}': {}", s, e);
                    (None, None)
                }
            }
        }
        Some(Value::Null) | None => (None, None),
        Some(other) => {
            debug!("dropping non-scalar event value: {}", other);
            (None, None)
        }
    }
}

fn parse_milestone(value: Option<&Value>) -> Option<bool> {
    match value? {
        Value::Bool(b) => Some(*b),
        Value::String(s) if !s.trim().is_empty() => Some(s.trim() == "true"),
        _ => None,
    }
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
