// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluation of tag expressions against document tags.

use tl_core::{expand, Document, DocumentFilter};

use super::expr::{strip_hash, TagExpr};

impl TagExpr {
    /// Evaluate this expression against a set of tags.
    ///
    /// Each tag counts as carrying all of its ancestors, so `work` matches
    /// a document tagged `#work/meeting`.
    pub fn matches<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        match self {
            TagExpr::Tag(wanted) => tags
                .iter()
                .any(|tag| expand(strip_hash(tag.as_ref())).iter().any(|t| t == wanted)),
            TagExpr::Not(inner) => !inner.matches(tags),
            TagExpr::And(l, r) => l.matches(tags) && r.matches(tags),
            TagExpr::Or(l, r) => l.matches(tags) || r.matches(tags),
        }
    }
}

impl DocumentFilter for TagExpr {
    fn matches(&self, document: &Document) -> bool {
        TagExpr::matches(self, document.tags.as_slice())
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;
