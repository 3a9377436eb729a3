// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod expand;
pub mod normalize;
pub mod search;
pub mod sum;
pub mod tags;

use tl_core::{AllDocuments, EventStore, SearchParams, TimelineEvent};

use crate::error::Result;
use crate::filter::parse_tag_expr;

/// Run a store-wide search, parsing the document tag expression if set.
pub(crate) fn search_store(store: &EventStore, params: &SearchParams) -> Result<Vec<TimelineEvent>> {
    let expression = params.tags.as_deref().map(str::trim).filter(|t| !t.is_empty());
    let events = match expression {
        Some(expression) => {
            let expr = parse_tag_expr(expression)?;
            tl_core::search(store, params, &expr)?
        }
        None => tl_core::search(store, params, &AllDocuments)?,
    };
    Ok(events)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
