// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use tl_core::{TagEntry, TimelineDate, TimelineEvent};

/// Placeholder for dates that cannot be read.
pub const UNKNOWN_DATE: &str = "unknown";

/// Width of the date column; fits negative years such as `-0231-08-03`.
const DATE_WIDTH: usize = 11;

/// Calendar day on which an event starts, or `unknown`.
pub fn format_start(event: &TimelineEvent) -> String {
    event
        .start()
        .and_then(TimelineDate::parse)
        .map(|date| date.start_of_period().to_string())
        .unwrap_or_else(|| UNKNOWN_DATE.to_string())
}

/// Format an event as a single line: `start  name  title  [tags]`.
pub fn format_event_line(event: &TimelineEvent) -> String {
    let mut line = format!("{:<width$}  {}", format_start(event), event.name, width = DATE_WIDTH);
    if let Some(title) = event.title.as_deref().filter(|t| !t.is_empty()) {
        line.push_str("  ");
        line.push_str(title);
    }
    if event.has_tags() {
        let tags: Vec<&str> = event.tags().collect();
        line.push_str(&format!("  [{}]", tags.join(", ")));
    }
    line
}

/// Format a tag inventory entry: `tag  (count)`, indented by depth.
pub fn format_tag_line(entry: &TagEntry) -> String {
    let depth = entry.tag.matches(tl_core::tag::TAG_DELIMITER).count();
    format!("{}{} ({})", "  ".repeat(depth), entry.tag, entry.count)
}

/// Format an expanded tag: `tag<TAB>parent`, `-` for the root.
pub fn format_expansion(tag: &str, parent: Option<&str>) -> String {
    format!("{}\t{}", tag, parent.unwrap_or("-"))
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
