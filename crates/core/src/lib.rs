// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tl-core: Temporal event filtering engine.
//!
//! This crate normalizes partial, era-signed timeline dates into a total
//! order, expands hierarchical tags, adds unit-tagged quantities, and
//! narrows collections of extracted timeline events by tag membership and
//! date-range intersection.
//!
//! Documents are scanned by the host application; this crate only sees the
//! extracted records (see [`extract`]) and the explicit [`EventStore`] the
//! caller owns.

pub mod date;
pub mod error;
pub mod event;
pub mod extract;
pub mod filter;
pub mod range;
pub mod search;
pub mod store;
pub mod tag;
pub mod value;

pub use date::{normalize, NormalizedDate, TimelineDate};
pub use error::{Error, Result};
pub use event::{sort_events, TimelineEvent};
pub use extract::{extract_events, Dataset, SourceDocument};
pub use filter::{filter, FilterCriteria, NO_TAGS_SENTINEL};
pub use range::{intersects, DateRange};
pub use search::{search, AllDocuments, DocumentFilter, SearchParams};
pub use store::{Document, EventStore};
pub use tag::{expand, expand_with_parent, tag_index, TagEntry};
pub use value::{totals_by_family, DistanceUnit, ScalarValue, TimeUnit, Unit, UnitFamily};
