// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Generic calendar–parameterised date.
//!
//! [`Date<C>`] is the core type of the crate.  It stores a plain
//! `(year, month, day)` triple whose *meaning* is determined by the
//! compile-time marker `C: Calendar`.  Ordering, display, tuple conversion
//! and serialisation are implemented once for every calendar.
//!
//! Fields are **not** range-checked on construction: every conversion is a
//! total function and out-of-range months or days flow through the
//! arithmetic, producing a consistent (if meaningless) result.  Callers that
//! want rejection use [`Date::try_new`] or [`Date::validate`].
//!
//! Domain-specific methods that only make sense for a particular calendar
//! (e.g. `Date::<Gregorian>::to_naive_date`) are placed in inherent
//! `impl` blocks gated on the concrete marker type.

use super::calendar::{CalendarKind, Gregorian, Islamic, Jalaali};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// Calendar trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for calendars.
///
/// A **calendar** defines:
///
/// 1. A human-readable **label** and a runtime [`CalendarKind`] tag.
/// 2. Its leap-year and month-length rules.
/// 3. A pair of conversion functions between its dates and the **proleptic
///    Gregorian** date, the canonical representation every cross-calendar
///    conversion routes through.
///
/// Both conversion functions must be total: they return a date for every
/// input triple and never panic.
pub trait Calendar:
    Copy + Clone + fmt::Debug + PartialEq + Eq + Hash + PartialOrd + Ord + 'static
{
    /// Display label, e.g. `"Jalaali"`.
    const LABEL: &'static str;

    /// Runtime tag for this calendar.
    const KIND: CalendarKind;

    /// Whether `year` has an intercalary day.
    fn is_leap_year(year: i32) -> bool;

    /// Days in `month` of `year`, or `None` when `month` is outside `1..=12`.
    fn month_length(year: i32, month: i32) -> Option<i32>;

    /// Convert a date in this calendar to the proleptic Gregorian calendar.
    fn to_gregorian(date: Date<Self>) -> GregorianDate;

    /// Convert a proleptic Gregorian date to this calendar.
    fn from_gregorian(date: GregorianDate) -> Date<Self>;
}

// ═══════════════════════════════════════════════════════════════════════════
// Date<C>
// ═══════════════════════════════════════════════════════════════════════════

/// A `(year, month, day)` triple in calendar `C`.
///
/// The struct is `Copy` and zero-cost: `PhantomData` is zero-sized, so
/// `Date<C>` is layout-identical to three `i32`s.  Ordering is
/// lexicographic on `(year, month, day)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date<C: Calendar> {
    year: i32,
    month: i32,
    day: i32,
    _calendar: PhantomData<C>,
}

/// Proleptic Gregorian date.
pub type GregorianDate = Date<Gregorian>;

/// Jalaali (Persian solar Hijri) date.
pub type JalaaliDate = Date<Jalaali>;

/// Tabular Islamic (lunar Hijri) date.
pub type IslamicDate = Date<Islamic>;

impl<C: Calendar> Date<C> {
    /// Create a date from its fields without validation.
    #[inline]
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self {
            year,
            month,
            day,
            _calendar: PhantomData,
        }
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> i32 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> i32 {
        self.day
    }

    /// The `(year, month, day)` triple.
    #[inline]
    pub const fn ymd(&self) -> (i32, i32, i32) {
        (self.year, self.month, self.day)
    }

    /// Convert this date to another calendar.
    ///
    /// The conversion routes through the canonical Gregorian date:
    ///
    /// ```text
    /// self → Gregorian → target
    /// ```
    ///
    /// Gregorian legs are the identity, so `Jalaali → Gregorian` is a single
    /// step.  Any leg through [`Islamic`] inherits its ±1 day precision.
    ///
    /// ```
    /// use gahshomar::{GregorianDate, Jalaali};
    ///
    /// let nowruz = GregorianDate::new(2025, 3, 21).to::<Jalaali>();
    /// assert_eq!(nowruz.ymd(), (1404, 1, 1));
    /// ```
    #[inline]
    pub fn to<T: Calendar>(&self) -> Date<T> {
        T::from_gregorian(C::to_gregorian(*self))
    }

    /// Whether this date's year is a leap year in calendar `C`.
    #[inline]
    pub fn is_leap_year(&self) -> bool {
        C::is_leap_year(self.year)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Generic trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display ───────────────────────────────────────────────────────────────

/// Renders as `YYYY/MM/DD` with zero-padded month and day.
impl<C: Calendar> fmt::Display for Date<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

// ── Tuples ────────────────────────────────────────────────────────────────

impl<C: Calendar> From<(i32, i32, i32)> for Date<C> {
    #[inline]
    fn from((year, month, day): (i32, i32, i32)) -> Self {
        Self::new(year, month, day)
    }
}

impl<C: Calendar> From<Date<C>> for (i32, i32, i32) {
    #[inline]
    fn from(date: Date<C>) -> Self {
        date.ymd()
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<C: Calendar> Serialize for Date<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Date", 3)?;
        s.serialize_field("year", &self.year)?;
        s.serialize_field("month", &self.month)?;
        s.serialize_field("day", &self.day)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, C: Calendar> Deserialize<'de> for Date<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i32,
            month: i32,
            day: i32,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Self::new(raw.year, raw.month, raw.day))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Gregorian-only extensions
// ═══════════════════════════════════════════════════════════════════════════

impl Date<Gregorian> {
    /// Convert to a `chrono::NaiveDate`.
    ///
    /// Returns `None` if the triple is not a valid Gregorian date or falls
    /// outside chrono's representable range.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let month = u32::try_from(self.month).ok()?;
        let day = u32::try_from(self.day).ok()?;
        NaiveDate::from_ymd_opt(self.year, month, day)
    }
}

impl From<NaiveDate> for Date<Gregorian> {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month() as i32, date.day() as i32)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
