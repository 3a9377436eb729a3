// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Caller-owned cache of extracted events, keyed by document.
//!
//! The host re-extracts a document whenever it changes and swaps the whole
//! entry in with [`EventStore::replace`]; events are never edited in place.

use serde::{Deserialize, Serialize};

use crate::event::TimelineEvent;

/// Extracted events of a single document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
}

/// Documents in insertion order, at most one entry per id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventStore {
    documents: Vec<Document>,
}

impl EventStore {
    pub fn new() -> Self {
        EventStore::default()
    }

    /// Insert a document, or replace the entry with the same id in place.
    ///
    /// Returns the previous entry, if any.
    pub fn replace(&mut self, document: Document) -> Option<Document> {
        match self.documents.iter_mut().find(|d| d.id == document.id) {
            Some(slot) => Some(std::mem::replace(slot, document)),
            None => {
                self.documents.push(document);
                None
            }
        }
    }

    /// Drop a document's entry.
    pub fn remove(&mut self, id: &str) -> Option<Document> {
        let idx = self.documents.iter().position(|d| d.id == id)?;
        Some(self.documents.remove(idx))
    }

    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// All events in document-then-event order.
    pub fn events(&self) -> impl Iterator<Item = &TimelineEvent> {
        self.documents.iter().flat_map(|d| d.events.iter())
    }
}

impl FromIterator<Document> for EventStore {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        let mut store = EventStore::new();
        for document in iter {
            store.replace(document);
        }
        store
    }
}

impl<'a> IntoIterator for &'a EventStore {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
