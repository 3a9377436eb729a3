// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hierarchical tag expansion.
//!
//! Tags may be scoped with `/`: `#hello/i/am` is a descendant of
//! `#hello/i`, which is a descendant of `#hello`. Matching against an
//! ancestor tag is done by expanding the specific tag into its ancestor
//! chain.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::event::TimelineEvent;

/// Separator between hierarchy levels of a tag.
pub const TAG_DELIMITER: char = '/';

/// Expand a tag into itself followed by all of its ancestors.
///
/// The most specific tag comes first and the root last:
/// `A/B/C` yields `[A/B/C, A/B, A]`. Surrounding whitespace is trimmed and
/// an empty tag yields nothing.
pub fn expand(tag: &str) -> Vec<String> {
    let mut tag = tag.trim();
    if tag.is_empty() {
        return Vec::new();
    }

    let mut tags = vec![tag.to_string()];
    while let Some(idx) = tag.rfind(TAG_DELIMITER) {
        tag = &tag[..idx];
        if tag.is_empty() {
            break;
        }
        tags.push(tag.to_string());
    }
    tags
}

/// Like [`expand`], pairing each tag with its immediate parent.
///
/// The root entry has no parent.
pub fn expand_with_parent(tag: &str) -> Vec<(String, Option<String>)> {
    let tags = expand(tag);
    let parents = tags.iter().skip(1).cloned().map(Some).chain(std::iter::once(None));
    tags.iter().cloned().zip(parents).collect()
}

/// Whether `tag` equals `ancestor` or lies beneath it in the hierarchy.
pub fn is_descendant_or_self(tag: &str, ancestor: &str) -> bool {
    expand(tag).iter().any(|t| t == ancestor.trim())
}

/// One node of the event tag inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagEntry {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Number of events carrying this tag or one of its descendants.
    pub count: usize,
}

/// Build the tag inventory for a set of events, sorted by tag.
///
/// Every event tag contributes itself and all of its ancestors. An event
/// counts at most once per inventory entry, even when several of its tags
/// share an ancestor.
pub fn tag_index<'a, I>(events: I) -> Vec<TagEntry>
where
    I: IntoIterator<Item = &'a TimelineEvent>,
{
    let mut nodes: BTreeMap<String, (Option<String>, usize)> = BTreeMap::new();

    for event in events {
        let mut seen: BTreeMap<String, Option<String>> = BTreeMap::new();
        for tag in event.tags() {
            for (tag, parent) in expand_with_parent(tag) {
                seen.entry(tag).or_insert(parent);
            }
        }
        for (tag, parent) in seen {
            let node = nodes.entry(tag).or_insert((parent, 0));
            node.1 += 1;
        }
    }

    nodes
        .into_iter()
        .map(|(tag, (parent, count))| TagEntry { tag, parent, count })
        .collect()
}

#[cfg(test)]
#[path = "tag_tests.rs"]
mod tests;
