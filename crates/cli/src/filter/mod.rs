// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tag expressions for selecting documents by their tags.
//!
//! Expressions combine tag terms with boolean operators:
//!
//! ```text
//! term            # document carries the tag (or a descendant of it)
//! !term           # document does not carry the tag
//! a && b          # both
//! a || b          # either
//! ( ... )         # grouping
//! ```
//!
//! `!` binds tightest, then `&&`, then `||`. A leading `#` on a term is
//! ignored, so `#work` and `work` are the same tag.
//!
//! # Examples
//!
//! ```text
//! project
//! tag1 && (tag2 || tag3)
//! #journal && !journal/private
//! ```

mod eval;
mod expr;
mod parser;

pub use expr::TagExpr;
pub use parser::parse_tag_expr;
