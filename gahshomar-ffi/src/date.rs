// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! FFI bindings for dates and calendar conversions.

use crate::catch_panic;
use crate::error::GahshomarStatus;
use gahshomar::{
    gregorian_month_length, gregorian_to_hijri, hijri_to_gregorian, is_gregorian_leap_year,
    is_islamic_leap_year, is_jalaali_leap_year, islamic_month_length, jalaali_month_length,
    to_gregorian, to_jalaali, Calendar, Date, Gregorian, GregorianDate, Islamic, Jalaali,
};

// ═══════════════════════════════════════════════════════════════════════════
// C-repr types
// ═══════════════════════════════════════════════════════════════════════════

/// A `(year, month, day)` triple for C interop.
///
/// The calendar it belongs to is given by the function it is passed to.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GahshomarDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl GahshomarDate {
    /// Convert to the Rust `Date<C>`.
    pub fn to_date<C: Calendar>(self) -> Date<C> {
        Date::new(self.year, self.month, self.day)
    }

    /// Convert from the Rust `Date<C>`.
    pub fn from_date<C: Calendar>(date: Date<C>) -> Self {
        let (year, month, day) = date.ymd();
        Self { year, month, day }
    }
}

impl<C: Calendar> From<Date<C>> for GahshomarDate {
    fn from(date: Date<C>) -> Self {
        Self::from_date(date)
    }
}

/// Calendar tag for the generic entry points.
///
/// cbindgen:prefix-with-name
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GahshomarCalendar {
    Gregorian = 0,
    Jalaali = 1,
    Islamic = 2,
}

impl GahshomarCalendar {
    fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Gregorian),
            1 => Some(Self::Jalaali),
            2 => Some(Self::Islamic),
            _ => None,
        }
    }

    fn to_gregorian(self, date: GahshomarDate) -> GregorianDate {
        match self {
            Self::Gregorian => date.to_date::<Gregorian>(),
            Self::Jalaali => date.to_date::<Jalaali>().to::<Gregorian>(),
            Self::Islamic => date.to_date::<Islamic>().to::<Gregorian>(),
        }
    }

    fn from_gregorian(self, date: GregorianDate) -> GahshomarDate {
        match self {
            Self::Gregorian => GahshomarDate::from_date(date),
            Self::Jalaali => GahshomarDate::from_date(date.to::<Jalaali>()),
            Self::Islamic => GahshomarDate::from_date(date.to::<Islamic>()),
        }
    }

    fn validate(self, date: GahshomarDate) -> GahshomarStatus {
        match self {
            Self::Gregorian => date.to_date::<Gregorian>().validate().into(),
            Self::Jalaali => date.to_date::<Jalaali>().validate().into(),
            Self::Islamic => date.to_date::<Islamic>().validate().into(),
        }
    }

    fn month_length(self, year: i32, month: i32) -> Option<i32> {
        match self {
            Self::Gregorian => gregorian_month_length(year, month),
            Self::Jalaali => jalaali_month_length(year, month),
            Self::Islamic => islamic_month_length(year, month),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Direct conversions
// ═══════════════════════════════════════════════════════════════════════════

/// Convert a Gregorian date to the Jalaali calendar (exact).
#[no_mangle]
pub extern "C" fn gahshomar_to_jalaali(date: GahshomarDate) -> GahshomarDate {
    GahshomarDate::from_date(to_jalaali(date.to_date::<Gregorian>()))
}

/// Convert a Jalaali date to the Gregorian calendar (exact).
#[no_mangle]
pub extern "C" fn gahshomar_to_gregorian(date: GahshomarDate) -> GahshomarDate {
    GahshomarDate::from_date(to_gregorian(date.to_date::<Jalaali>()))
}

/// Convert a Gregorian date to the tabular Islamic calendar (±1 day).
#[no_mangle]
pub extern "C" fn gahshomar_gregorian_to_hijri(date: GahshomarDate) -> GahshomarDate {
    GahshomarDate::from_date(gregorian_to_hijri(date.to_date::<Gregorian>()))
}

/// Convert a tabular Islamic date to the Gregorian calendar (±1 day).
#[no_mangle]
pub extern "C" fn gahshomar_hijri_to_gregorian(date: GahshomarDate) -> GahshomarDate {
    GahshomarDate::from_date(hijri_to_gregorian(date.to_date::<Islamic>()))
}

// ═══════════════════════════════════════════════════════════════════════════
// Tagged conversion
// ═══════════════════════════════════════════════════════════════════════════

/// Convert `date` from calendar `from` to calendar `to`, routing through
/// the Gregorian calendar.
///
/// Does not validate `date`; call [`gahshomar_validate`] first to reject
/// malformed input.
///
/// # Safety
/// `out` must be a valid, writable pointer to `GahshomarDate`.
#[no_mangle]
pub unsafe extern "C" fn gahshomar_convert(
    date: GahshomarDate,
    from: i32,
    to: i32,
    out: *mut GahshomarDate,
) -> GahshomarStatus {
    catch_panic!(GahshomarStatus::Panic, {
        if out.is_null() {
            return GahshomarStatus::NullPointer;
        }
        let (Some(from), Some(to)) = (
            GahshomarCalendar::from_raw(from),
            GahshomarCalendar::from_raw(to),
        ) else {
            return GahshomarStatus::InvalidCalendar;
        };
        let converted = to.from_gregorian(from.to_gregorian(date));
        // SAFETY: `out` is non-null and the caller guarantees it is writable.
        unsafe { *out = converted };
        GahshomarStatus::Ok
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Validation and calendar rules
// ═══════════════════════════════════════════════════════════════════════════

/// Check that `date` is a real date of `calendar`.
///
/// Returns `Ok`, `InvalidMonth`, `InvalidDay` or `InvalidCalendar`.
#[no_mangle]
pub extern "C" fn gahshomar_validate(date: GahshomarDate, calendar: i32) -> GahshomarStatus {
    match GahshomarCalendar::from_raw(calendar) {
        Some(calendar) => calendar.validate(date),
        None => GahshomarStatus::InvalidCalendar,
    }
}

/// Whether `year` is a leap year of `calendar`.  Unknown tags yield `false`.
#[no_mangle]
pub extern "C" fn gahshomar_is_leap_year(year: i32, calendar: i32) -> bool {
    match GahshomarCalendar::from_raw(calendar) {
        Some(GahshomarCalendar::Gregorian) => is_gregorian_leap_year(year),
        Some(GahshomarCalendar::Jalaali) => is_jalaali_leap_year(year),
        Some(GahshomarCalendar::Islamic) => is_islamic_leap_year(year),
        None => false,
    }
}

/// Number of days in `month` of `year` in `calendar`.
///
/// # Safety
/// `out` must be a valid, writable pointer to `i32`.
#[no_mangle]
pub unsafe extern "C" fn gahshomar_month_length(
    year: i32,
    month: i32,
    calendar: i32,
    out: *mut i32,
) -> GahshomarStatus {
    if out.is_null() {
        return GahshomarStatus::NullPointer;
    }
    let Some(calendar) = GahshomarCalendar::from_raw(calendar) else {
        return GahshomarStatus::InvalidCalendar;
    };
    match calendar.month_length(year, month) {
        Some(length) => {
            // SAFETY: `out` is non-null and the caller guarantees it is writable.
            unsafe { *out = length };
            GahshomarStatus::Ok
        }
        None => GahshomarStatus::InvalidMonth,
    }
}
