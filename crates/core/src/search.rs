// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Store-wide search: document selection followed by event filtering.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::event::TimelineEvent;
use crate::filter::{filter, FilterCriteria};
use crate::store::{Document, EventStore};

/// Decides whether a document takes part in a search, from its metadata.
///
/// The implementor owns its expression, usually parsed from the caller's
/// `tags` string before the search starts.
pub trait DocumentFilter {
    fn matches(&self, document: &Document) -> bool;
}

impl<F> DocumentFilter for F
where
    F: Fn(&Document) -> bool,
{
    fn matches(&self, document: &Document) -> bool {
        self(document)
    }
}

/// Accepts every document.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllDocuments;

impl DocumentFilter for AllDocuments {
    fn matches(&self, _document: &Document) -> bool {
        true
    }
}

/// Parameters of a store-wide search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Document-level tag expression, interpreted by the [`DocumentFilter`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(flatten)]
    pub criteria: FilterCriteria,
}

/// Search every document of the store.
///
/// Documents are selected with `documents` when `params.tags` is set, then
/// each selected document's events are filtered with `params.criteria`.
/// Results are concatenated in document-then-event order.
///
/// A fully bounded date window whose start lies after its end rejects the
/// whole search with [`crate::Error::InvalidRange`] before anything is
/// filtered.
pub fn search<D>(store: &EventStore, params: &SearchParams, documents: &D) -> Result<Vec<TimelineEvent>>
where
    D: DocumentFilter + ?Sized,
{
    if let Err(e) = params.criteria.validate() {
        warn!(
            start = params.criteria.date_start.as_deref().unwrap_or_default(),
            end = params.criteria.date_end.as_deref().unwrap_or_default(),
            "rejecting timeline search: {}",
            e
        );
        return Err(e);
    }

    let select_documents = params.tags.as_deref().is_some_and(|t| !t.trim().is_empty());

    let mut results = Vec::new();
    let mut selected = 0usize;
    for document in store {
        if select_documents && !documents.matches(document) {
            continue;
        }
        selected += 1;
        results.extend(filter(&document.events, Some(&params.criteria)));
    }

    debug!(
        "timeline search matched {} events in {}/{} documents",
        results.len(),
        selected,
        store.len()
    );
    Ok(results)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
