// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar marker types.
//!
//! Each zero-sized type identifies one calendar and encodes how dates in
//! that calendar relate to the canonical **proleptic Gregorian** date, which
//! is the hub every cross-calendar conversion routes through.
//!
//! | Marker | Calendar | Route to Gregorian | Precision |
//! |--------|----------|--------------------|-----------|
//! | [`Gregorian`] | Proleptic Gregorian | identity | exact |
//! | [`Jalaali`] | Persian solar Hijri (Shamsi) | 33-year cycle arithmetic | exact |
//! | [`Islamic`] | Tabular lunar Hijri | Julian Day bridge | ±1 day |

use super::date::{Calendar, Date, GregorianDate};
use super::{islamic, jalaali};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Runtime tag naming a calendar, carried by validation errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CalendarKind {
    Gregorian,
    Jalaali,
    Islamic,
}

impl fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CalendarKind::Gregorian => "gregorian",
            CalendarKind::Jalaali => "jalaali",
            CalendarKind::Islamic => "islamic",
        })
    }
}

// ---------------------------------------------------------------------------
// Gregorian
// ---------------------------------------------------------------------------

/// Proleptic Gregorian calendar, the identity route.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Gregorian;

impl Calendar for Gregorian {
    const LABEL: &'static str = "Gregorian";
    const KIND: CalendarKind = CalendarKind::Gregorian;

    #[inline]
    fn is_leap_year(year: i32) -> bool {
        is_gregorian_leap_year(year)
    }

    #[inline]
    fn month_length(year: i32, month: i32) -> Option<i32> {
        gregorian_month_length(year, month)
    }

    #[inline(always)]
    fn to_gregorian(date: Date<Self>) -> GregorianDate {
        date
    }

    #[inline(always)]
    fn from_gregorian(date: GregorianDate) -> Date<Self> {
        date
    }
}

/// Gregorian leap-year rule: every 4th year, except centuries not divisible by 400.
#[inline]
pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month, or `None` if `month` is not in `1..=12`.
pub const fn gregorian_month_length(year: i32, month: i32) -> Option<i32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_gregorian_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Jalaali
// ---------------------------------------------------------------------------

/// Persian solar Hijri calendar, converted exactly.
///
/// Months 1–6 have 31 days, months 7–11 have 30 days and Esfand (month 12)
/// has 29 days, or 30 in leap years. Leap years follow the arithmetic
/// 33-year cycle (8 leap years per cycle) used by [`to_jalaali`](crate::to_jalaali).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Jalaali;

impl Calendar for Jalaali {
    const LABEL: &'static str = "Jalaali";
    const KIND: CalendarKind = CalendarKind::Jalaali;

    #[inline]
    fn is_leap_year(year: i32) -> bool {
        jalaali::is_jalaali_leap_year(year)
    }

    #[inline]
    fn month_length(year: i32, month: i32) -> Option<i32> {
        jalaali::jalaali_month_length(year, month)
    }

    #[inline]
    fn to_gregorian(date: Date<Self>) -> GregorianDate {
        jalaali::to_gregorian(date)
    }

    #[inline]
    fn from_gregorian(date: GregorianDate) -> Date<Self> {
        jalaali::to_jalaali(date)
    }
}

// ---------------------------------------------------------------------------
// Islamic
// ---------------------------------------------------------------------------

/// Tabular Islamic (lunar Hijri) calendar.
///
/// This is an **arithmetic approximation**: 11 leap days per 30-year cycle,
/// odd months of 30 days and even months of 29 days. Observed Islamic
/// calendars depend on lunar crescent visibility, so dates produced here may
/// differ from an announced date by **±1 day**.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Islamic;

impl Calendar for Islamic {
    const LABEL: &'static str = "Islamic";
    const KIND: CalendarKind = CalendarKind::Islamic;

    #[inline]
    fn is_leap_year(year: i32) -> bool {
        islamic::is_islamic_leap_year(year)
    }

    #[inline]
    fn month_length(year: i32, month: i32) -> Option<i32> {
        islamic::islamic_month_length(year, month)
    }

    #[inline]
    fn to_gregorian(date: Date<Self>) -> GregorianDate {
        islamic::hijri_to_gregorian(date)
    }

    #[inline]
    fn from_gregorian(date: GregorianDate) -> Date<Self> {
        islamic::gregorian_to_hijri(date)
    }
}
