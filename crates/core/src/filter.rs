// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Event filtering by tag membership and date-range intersection.
//!
//! Both criteria are optional and narrow the input in sequence: tags first,
//! then dates. The output is always an order-preserving subsequence of the
//! input.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::event::TimelineEvent;
use crate::range::{intersects, DateRange};
use crate::tag::expand;

/// Tag in an event tag criterion selecting events that have no tags.
pub const NO_TAGS_SENTINEL: &str = "none";

/// Separator between tags in an event tag criterion.
pub const CRITERIA_TAG_SEPARATOR: char = ';';

/// Criteria for narrowing a list of events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// `;`-separated tags; an event matches if it carries any of them (or a
    /// descendant). `none` selects events without tags.
    ///
    /// Matching is hierarchical in one direction only: criterion `a` keeps
    /// an event tagged `a/x`, but criterion `a/x` does not keep an event
    /// tagged only `a`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_tags: Option<String>,
    /// Lower bound of the query window, as timeline date text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_start: Option<String>,
    /// Upper bound of the query window, as timeline date text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_end: Option<String>,
}

impl FilterCriteria {
    /// The tag set of the tag criterion, or `None` when it selects nothing
    /// specific and filtering by tag is a no-op.
    pub fn tag_set(&self) -> Option<HashSet<&str>> {
        let tags: HashSet<&str> = self
            .event_tags
            .as_deref()?
            .split(CRITERIA_TAG_SEPARATOR)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        (!tags.is_empty()).then_some(tags)
    }

    /// The query window, or `None` when neither bound is given.
    pub fn date_range(&self) -> Option<DateRange> {
        let start = non_blank(self.date_start.as_deref());
        let end = non_blank(self.date_end.as_deref());
        if start.is_none() && end.is_none() {
            return None;
        }
        Some(DateRange::parse(start, end))
    }

    /// Reject a fully bounded query whose start lies after its end.
    ///
    /// Unparsable bounds count as open and never fail this check.
    pub fn validate(&self) -> Result<()> {
        match self.date_range() {
            Some(range) if range.is_inverted() => Err(Error::InvalidRange {
                start: self.date_start.clone().unwrap_or_default(),
                end: self.date_end.clone().unwrap_or_default(),
            }),
            _ => Ok(()),
        }
    }

    /// Whether a single event passes every criterion.
    pub fn matches(&self, event: &TimelineEvent) -> bool {
        if let Some(tags) = self.tag_set() {
            if !matches_tag_set(&tags, event) {
                return false;
            }
        }
        match self.date_range() {
            Some(query) => intersects(&event.date_range(), &query),
            None => true,
        }
    }
}

/// Narrow `events` to those matching `criteria`.
///
/// Without criteria the input is returned unchanged. The inverted-range
/// guard is not applied here; see [`FilterCriteria::validate`].
pub fn filter(events: &[TimelineEvent], criteria: Option<&FilterCriteria>) -> Vec<TimelineEvent> {
    let Some(criteria) = criteria else {
        return events.to_vec();
    };

    let mut result: Vec<TimelineEvent> = match criteria.tag_set() {
        Some(tags) => events
            .iter()
            .filter(|event| matches_tag_set(&tags, event))
            .cloned()
            .collect(),
        None => events.to_vec(),
    };

    if let Some(query) = criteria.date_range() {
        result.retain(|event| intersects(&event.date_range(), &query));
    }

    result
}

/// An event matches when one of its tags, or an ancestor of one, is in the
/// set, or when it has no tags and the set holds the `none` sentinel.
fn matches_tag_set(tags: &HashSet<&str>, event: &TimelineEvent) -> bool {
    if event
        .tags()
        .any(|tag| expand(tag).iter().any(|t| tags.contains(t.as_str())))
    {
        return true;
    }
    tags.contains(NO_TAGS_SENTINEL) && !event.has_tags()
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
