// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tag expression syntax tree.

use std::fmt;

/// A parsed tag expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagExpr {
    /// A single tag, stored without its leading `#`.
    Tag(String),
    Not(Box<TagExpr>),
    And(Box<TagExpr>, Box<TagExpr>),
    Or(Box<TagExpr>, Box<TagExpr>),
}

impl TagExpr {
    pub fn tag(name: &str) -> Self {
        TagExpr::Tag(strip_hash(name).to_string())
    }

    pub fn not(inner: TagExpr) -> Self {
        TagExpr::Not(Box::new(inner))
    }

    pub fn and(left: TagExpr, right: TagExpr) -> Self {
        TagExpr::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: TagExpr, right: TagExpr) -> Self {
        TagExpr::Or(Box::new(left), Box::new(right))
    }
}

impl fmt::Display for TagExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagExpr::Tag(tag) => write!(f, "{}", tag),
            TagExpr::Not(inner) => write!(f, "!{}", inner),
            TagExpr::And(l, r) => write!(f, "({} && {})", l, r),
            TagExpr::Or(l, r) => write!(f, "({} || {})", l, r),
        }
    }
}

/// Drop a single leading `#`.
pub(crate) fn strip_hash(tag: &str) -> &str {
    let tag = tag.trim();
    tag.strip_prefix('#').unwrap_or(tag)
}
