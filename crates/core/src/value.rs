// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit-aware scalar quantities.
//!
//! A [`ScalarValue`] is a magnitude tagged with a [`Unit`] from one of two
//! disjoint families: distance (base unit metre) and time duration (base
//! unit second). Arithmetic converts both operands to the family's base
//! unit first and yields a base-unit result.
//!
//! Month and year durations use fixed factors (30-day month, 365-day
//! year). They are approximations kept for compatibility with recorded
//! totals, not calendar arithmetic.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The family a unit belongs to. Only same-family values combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitFamily {
    Distance,
    Time,
}

impl UnitFamily {
    /// The canonical unit every value of this family converts to.
    pub fn base_unit(&self) -> Unit {
        match self {
            UnitFamily::Distance => Unit::Distance(DistanceUnit::Meter),
            UnitFamily::Time => Unit::Time(TimeUnit::Second),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitFamily::Distance => "distance",
            UnitFamily::Time => "time",
        }
    }
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Units of length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceUnit {
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
}

impl DistanceUnit {
    pub const ALL: [DistanceUnit; 4] = [
        DistanceUnit::Millimeter,
        DistanceUnit::Centimeter,
        DistanceUnit::Meter,
        DistanceUnit::Kilometer,
    ];

    /// Metres per unit.
    pub fn factor(&self) -> f64 {
        match self {
            DistanceUnit::Millimeter => 0.001,
            DistanceUnit::Centimeter => 0.01,
            DistanceUnit::Meter => 1.0,
            DistanceUnit::Kilometer => 1000.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Millimeter => "mm",
            DistanceUnit::Centimeter => "cm",
            DistanceUnit::Meter => "m",
            DistanceUnit::Kilometer => "km",
        }
    }
}

/// Units of time duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Year,
    ];

    /// Seconds per unit. Month is 30 days and year is 365 days.
    pub fn factor(&self) -> f64 {
        match self {
            TimeUnit::Second => 1.0,
            TimeUnit::Minute => 60.0,
            TimeUnit::Hour => 3_600.0,
            TimeUnit::Day => 86_400.0,
            TimeUnit::Week => 604_800.0,
            TimeUnit::Month => 2_592_000.0,
            TimeUnit::Year => 31_536_000.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Second => "sec",
            TimeUnit::Minute => "min",
            TimeUnit::Hour => "h",
            TimeUnit::Day => "d",
            TimeUnit::Week => "w",
            TimeUnit::Month => "mo",
            TimeUnit::Year => "yr",
        }
    }
}

/// A unit from either family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Distance(DistanceUnit),
    Time(TimeUnit),
}

impl Unit {
    pub fn family(&self) -> UnitFamily {
        match self {
            Unit::Distance(_) => UnitFamily::Distance,
            Unit::Time(_) => UnitFamily::Time,
        }
    }

    /// Base units per one of this unit.
    pub fn factor(&self) -> f64 {
        match self {
            Unit::Distance(unit) => unit.factor(),
            Unit::Time(unit) => unit.factor(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Distance(unit) => unit.as_str(),
            Unit::Time(unit) => unit.as_str(),
        }
    }

    /// Every known unit, distance first.
    pub fn all() -> impl Iterator<Item = Unit> {
        DistanceUnit::ALL
            .into_iter()
            .map(Unit::Distance)
            .chain(TimeUnit::ALL.into_iter().map(Unit::Time))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Unit::all()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| Error::UnknownUnit(s.to_string()))
    }
}

impl Serialize for Unit {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A magnitude tagged with a unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarValue {
    pub magnitude: f64,
    pub unit: Unit,
}

impl ScalarValue {
    pub fn new(magnitude: f64, unit: Unit) -> Self {
        ScalarValue { magnitude, unit }
    }

    pub fn family(&self) -> UnitFamily {
        self.unit.family()
    }

    /// This value expressed in its family's base unit.
    pub fn to_base(&self) -> ScalarValue {
        ScalarValue::new(self.magnitude * self.unit.factor(), self.family().base_unit())
    }

    /// Add two values of the same family, yielding a base-unit result.
    ///
    /// A zero-magnitude operand returns the other operand unchanged, even
    /// when the families differ. Otherwise mismatched families fail with
    /// [`Error::TypeMismatch`].
    pub fn add(&self, other: &ScalarValue) -> Result<ScalarValue> {
        if other.magnitude == 0.0 {
            return Ok(*self);
        }
        if self.magnitude == 0.0 {
            return Ok(*other);
        }
        self.ensure_same_family(other)?;

        let base = self.family().base_unit();
        Ok(ScalarValue::new(
            self.to_base().magnitude + other.to_base().magnitude,
            base,
        ))
    }

    /// Express this value in another unit of the same family.
    pub fn convert(&self, unit: Unit) -> Result<ScalarValue> {
        if unit.family() != self.family() {
            return Err(Error::TypeMismatch {
                left: self.to_string(),
                right: unit.to_string(),
            });
        }
        Ok(ScalarValue::new(
            self.to_base().magnitude / unit.factor(),
            unit,
        ))
    }

    /// Fold values with [`ScalarValue::add`]; `None` when there are none.
    pub fn sum<I>(values: I) -> Result<Option<ScalarValue>>
    where
        I: IntoIterator<Item = ScalarValue>,
    {
        let mut total: Option<ScalarValue> = None;
        for value in values {
            total = Some(match total {
                Some(acc) => acc.add(&value)?,
                None => value,
            });
        }
        Ok(total)
    }

    fn ensure_same_family(&self, other: &ScalarValue) -> Result<()> {
        if self.family() == other.family() {
            Ok(())
        } else {
            Err(Error::TypeMismatch {
                left: self.to_string(),
                right: other.to_string(),
            })
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.magnitude, self.unit)
    }
}

impl FromStr for ScalarValue {
    type Err = Error;

    /// Parse quantity text such as `5km`, `40 min`, `-1.5h` or `1e3m`.
    ///
    /// The unit is the longest known unit the text ends with, so exponent
    /// notation in the number is kept intact.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let unit = Unit::all()
            .filter(|unit| s.ends_with(unit.as_str()))
            .max_by_key(|unit| unit.as_str().len());
        let number = match unit {
            Some(unit) => &s[..s.len() - unit.as_str().len()],
            None => s,
        };

        let letters = &s[s.trim_end_matches(char::is_alphabetic).len()..];
        if number.ends_with(char::is_alphabetic) || (unit.is_none() && !letters.is_empty()) {
            return Err(Error::UnknownUnit(letters.to_string()));
        }
        let unit = unit.ok_or_else(|| Error::InvalidValue(s.to_string()))?;

        let magnitude: f64 = number
            .trim()
            .parse()
            .map_err(|_| Error::InvalidValue(s.to_string()))?;
        if !magnitude.is_finite() {
            return Err(Error::InvalidValue(s.to_string()));
        }
        Ok(ScalarValue::new(magnitude, unit))
    }
}

/// Sum values per family, returning one base-unit total per family present.
///
/// Unlike [`ScalarValue::sum`] this never mixes families, so it cannot fail.
pub fn totals_by_family<I>(values: I) -> Vec<ScalarValue>
where
    I: IntoIterator<Item = ScalarValue>,
{
    let mut distance = 0.0;
    let mut time = 0.0;
    let mut seen = (false, false);

    for value in values {
        let base = value.to_base().magnitude;
        match value.family() {
            UnitFamily::Distance => {
                distance += base;
                seen.0 = true;
            }
            UnitFamily::Time => {
                time += base;
                seen.1 = true;
            }
        }
    }

    let mut totals = Vec::new();
    if seen.0 {
        totals.push(ScalarValue::new(distance, UnitFamily::Distance.base_unit()));
    }
    if seen.1 {
        totals.push(ScalarValue::new(time, UnitFamily::Time.base_unit()));
    }
    totals
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
