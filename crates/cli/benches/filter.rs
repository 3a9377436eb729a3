// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmarks for tag expression parsing and event filtering.

#![allow(clippy::expect_used)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tl_core::{filter, normalize, FilterCriteria, TimelineEvent};
use tlrs::filter::parse_tag_expr;

fn tag_expr_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("tag_expr_parsing");

    let inputs = [
        ("single", "history"),
        ("negated", "#history && !history/ancient"),
        ("grouped", "project && (work || home) && !draft"),
    ];

    for (name, input) in inputs {
        group.bench_with_input(BenchmarkId::new("parse_tag_expr", name), input, |b, i| {
            b.iter(|| parse_tag_expr(i))
        });
    }
    group.finish();
}

fn tag_expr_evaluation(c: &mut Criterion) {
    let expr = parse_tag_expr("project && (work || home) && !draft").expect("valid expression");
    let tags = ["#project/alpha", "home/garden", "reading"];
    c.bench_function("tag_expr_matches", |b| b.iter(|| expr.matches(black_box(&tags[..]))));
}

fn date_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    for input in ["1940/9/9", "-231/8/3", "701", "not a date"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, i| {
            b.iter(|| normalize(Some(i)))
        });
    }
    group.finish();
}

fn event_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_events");

    let criteria = [
        (
            "tags",
            FilterCriteria {
                event_tags: Some("war;politics".to_string()),
                ..FilterCriteria::default()
            },
        ),
        (
            "window",
            FilterCriteria {
                date_start: Some("1900".to_string()),
                date_end: Some("1950/6".to_string()),
                ..FilterCriteria::default()
            },
        ),
        (
            "tags_and_window",
            FilterCriteria {
                event_tags: Some("war;none".to_string()),
                date_start: Some("-500".to_string()),
                date_end: Some("2000".to_string()),
            },
        ),
    ];

    for size in [100usize, 10_000] {
        let events = create_events(size);
        for (name, criteria) in &criteria {
            group.bench_with_input(BenchmarkId::new(*name, size), &events, |b, events| {
                b.iter(|| filter(events, Some(criteria)))
            });
        }
    }
    group.finish();
}

fn create_events(count: usize) -> Vec<TimelineEvent> {
    const TAGS: [&str; 4] = ["war/battle", "politics", "science/physics", "art"];
    (0..count)
        .map(|i| {
            let year = i as i64 % 4000 - 2000;
            TimelineEvent {
                date: Some(format!("{}/{}/{}", year, i % 12 + 1, i % 28 + 1)),
                event_tags: (i % 5 != 0).then(|| vec![TAGS[i % TAGS.len()].to_string()]),
                ..TimelineEvent::new(format!("event-{}", i))
            }
        })
        .collect()
}

criterion_group!(
    benches,
    tag_expr_parsing,
    tag_expr_evaluation,
    date_normalization,
    event_filtering
);
criterion_main!(benches);
