// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use yare::parameterized;

fn v(text: &str) -> ScalarValue {
    text.parse().unwrap()
}

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Units
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    second = { "sec", 1.0 },
    minute = { "min", 60.0 },
    hour = { "h", 3_600.0 },
    day = { "d", 86_400.0 },
    week = { "w", 604_800.0 },
    month = { "mo", 2_592_000.0 },
    year = { "yr", 31_536_000.0 },
    millimeter = { "mm", 0.001 },
    centimeter = { "cm", 0.01 },
    meter = { "m", 1.0 },
    kilometer = { "km", 1000.0 },
)]
fn unit_factor(text: &str, factor: f64) {
    let unit: Unit = text.parse().unwrap();
    approx(unit.factor(), factor);
    assert_eq!(unit.to_string(), text);
}

#[test]
fn unit_unknown() {
    let err = "parsec".parse::<Unit>().unwrap_err();
    assert!(matches!(err, Error::UnknownUnit(ref u) if u == "parsec"));
}

#[test]
fn unit_families_are_disjoint() {
    for unit in Unit::all() {
        let same = Unit::all().filter(|u| u.as_str() == unit.as_str()).count();
        assert_eq!(same, 1, "unit text {} is ambiguous", unit);
    }
}

#[test]
fn unit_serializes_as_text() {
    let json = serde_json::to_string(&Unit::Time(TimeUnit::Minute)).unwrap();
    assert_eq!(json, "\"min\"");
    let unit: Unit = serde_json::from_str("\"km\"").unwrap();
    assert_eq!(unit, Unit::Distance(DistanceUnit::Kilometer));
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    compact = { "5km", 5.0, "km" },
    spaced = { "40 min", 40.0, "min" },
    fractional = { "1.5h", 1.5, "h" },
    negative = { "-2d", -2.0, "d" },
    padded = { "  3mo ", 3.0, "mo" },
    exponent = { "1e3km", 1000.0, "km" },
    spaced_exponent = { "1.5E2 m", 150.0, "m" },
    millimetres_not_metres = { "4mm", 4.0, "mm" },
)]
fn parse_quantity(text: &str, magnitude: f64, unit: &str) {
    let value = v(text);
    approx(value.magnitude, magnitude);
    assert_eq!(value.unit.as_str(), unit);
}

#[parameterized(
    no_unit = { "5" },
    no_number = { "km" },
    empty = { "" },
    garbage_number = { "five km" },
)]
fn parse_quantity_invalid(text: &str) {
    assert!(text.parse::<ScalarValue>().is_err());
}

#[test]
fn parse_quantity_unknown_unit() {
    assert!(matches!("5 parsec".parse::<ScalarValue>(), Err(Error::UnknownUnit(ref u)) if u == "parsec"));
    assert!(matches!("5 furlong".parse::<ScalarValue>(), Err(Error::UnknownUnit(ref u)) if u == "furlong"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Addition
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn add_minutes_and_seconds_in_base_unit() {
    let sum = v("5min").add(&v("30sec")).unwrap();
    approx(sum.magnitude, 330.0);
    assert_eq!(sum.unit, Unit::Time(TimeUnit::Second));
}

#[test]
fn add_distances_in_meters() {
    let sum = v("1.2km").add(&v("300m")).unwrap();
    approx(sum.magnitude, 1500.0);
    assert_eq!(sum.unit, Unit::Distance(DistanceUnit::Meter));
}

#[parameterized(
    month_is_thirty_days = { "1mo", "0.5d", 30.5 * 86_400.0 },
    year_is_365_days = { "1yr", "1w", 372.0 * 86_400.0 },
)]
fn add_uses_approximate_calendar_factors(a: &str, b: &str, seconds: f64) {
    approx(v(a).add(&v(b)).unwrap().magnitude, seconds);
}

#[test]
fn add_zero_left_returns_right_unchanged() {
    let right = v("5min");
    let sum = v("0km").add(&right).unwrap();
    assert_eq!(sum, right);
}

#[test]
fn add_zero_right_returns_left_unchanged() {
    let left = v("2h");
    let sum = left.add(&v("0m")).unwrap();
    assert_eq!(sum, left);
}

#[test]
fn add_mismatched_families_fails() {
    let err = v("5km").add(&v("3min")).unwrap_err();
    match err {
        Error::TypeMismatch { left, right } => {
            assert_eq!(left, "5km");
            assert_eq!(right, "3min");
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversion and totals
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn convert_within_family() {
    let hours = v("90min").convert(Unit::Time(TimeUnit::Hour)).unwrap();
    approx(hours.magnitude, 1.5);
    assert_eq!(hours.to_string(), "1.5h");
}

#[test]
fn convert_across_families_fails() {
    let result = v("90min").convert(Unit::Distance(DistanceUnit::Meter));
    assert!(matches!(result, Err(Error::TypeMismatch { .. })));
}

#[test]
fn sum_empty_is_none() {
    assert_eq!(ScalarValue::sum(Vec::new()).unwrap(), None);
}

#[test]
fn sum_single_keeps_unit() {
    let total = ScalarValue::sum(vec![v("5km")]).unwrap().unwrap();
    assert_eq!(total, v("5km"));
}

#[test]
fn sum_same_family() {
    let total = ScalarValue::sum(vec![v("1h"), v("30min"), v("30sec")])
        .unwrap()
        .unwrap();
    approx(total.magnitude, 5_430.0);
}

#[test]
fn sum_mixed_families_fails() {
    let result = ScalarValue::sum(vec![v("1h"), v("2km")]);
    assert!(matches!(result, Err(Error::TypeMismatch { .. })));
}

#[test]
fn totals_by_family_splits_families() {
    let totals = totals_by_family(vec![v("1km"), v("1h"), v("500m"), v("15min")]);
    assert_eq!(totals.len(), 2);
    approx(totals[0].magnitude, 1500.0);
    assert_eq!(totals[0].family(), UnitFamily::Distance);
    approx(totals[1].magnitude, 4_500.0);
    assert_eq!(totals[1].family(), UnitFamily::Time);
}

#[test]
fn totals_by_family_only_present_families() {
    let totals = totals_by_family(vec![v("3d")]);
    assert_eq!(totals.len(), 1);
    assert_eq!(totals[0].unit, Unit::Time(TimeUnit::Second));
    assert!(totals_by_family(Vec::new()).is_empty());
}
