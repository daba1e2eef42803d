// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Gregorian ⇄ Jalaali (exact)
//!
//! Both directions are closed-form day counts against a shared epoch:
//! **1 Farvardin 979 AP = 20 March 1600 CE**.  The day count is reduced
//! through nested intercalation cycles to recover the target year, and the
//! remainder inside the year gives month and day.
//!
//! ## Cycles
//!
//! | Calendar | Cycle | Days |
//! |----------|-------|------|
//! | Jalaali | 33 years (8 leap) | 12 053 |
//! | Jalaali | 4 years (1 leap) | 1 461 |
//! | Gregorian | 400 years | 146 097 |
//! | Gregorian | 100 years | 36 524 / 36 525 |
//! | Gregorian | 4 years | 1 461 |
//!
//! Every division is a floor division and every remainder is Euclidean, so
//! the epoch extends proleptically in both directions and
//! `to_gregorian(to_jalaali(d)) == d` holds for every valid Gregorian date,
//! including the years around 1600.
//!
//! The leap years produced are those of the arithmetic 33-year cycle, which
//! agrees with the official (astronomical) Persian calendar over the modern
//! era.

use super::date::{GregorianDate, JalaaliDate};

/// Gregorian year containing the epoch.
const GREGORIAN_EPOCH_YEAR: i64 = 1600;

/// Jalaali year starting at the epoch.
const JALAALI_EPOCH_YEAR: i64 = 979;

/// Shifts the Gregorian day count so that 1 Farvardin of the epoch year is day 0.
const NOWRUZ_OFFSET: i64 = 80;

/// Zero-based day of the epoch year (from 1 January) preceding 1 Farvardin.
const GREGORIAN_YEAR_START_OFFSET: i64 = 78;

/// Cumulative days before each month of a common Gregorian year.
const DAYS_BEFORE_GREGORIAN_MONTH: [i64; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

const DAYS_PER_33_YEARS: i64 = 12_053;
const DAYS_PER_4_YEARS: i64 = 1_461;
const DAYS_PER_400_YEARS: i64 = 146_097;
const DAYS_PER_100_YEARS: i64 = 36_524;
const DAYS_PER_YEAR: i64 = 365;

/// Days in the six 31-day months opening the Jalaali year.
const FIRST_HALF_DAYS: i64 = 186;

/// Narrow to `i32`, saturating at the bounds.
#[inline]
fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Convert a proleptic Gregorian date to the Jalaali calendar.
///
/// Months outside `1..=12` are folded into the year (month 13 is January of
/// the following year, month 0 is December of the previous one); days are
/// used as an offset from the start of the month, so `(2025, 3, 0)` is the
/// day before `(2025, 3, 1)`.  The output month is always in `1..=12`.
///
/// ```
/// use gahshomar::{to_jalaali, GregorianDate};
///
/// let jalaali = to_jalaali(GregorianDate::new(2025, 8, 28));
/// assert_eq!(jalaali.ymd(), (1404, 6, 6));
/// ```
pub fn to_jalaali(date: GregorianDate) -> JalaaliDate {
    let month_index = i64::from(date.month()) - 1;
    let gy = i64::from(date.year()) + month_index.div_euclid(12) - GREGORIAN_EPOCH_YEAR;
    let gm = month_index.rem_euclid(12);

    // Leap days are counted through the end of February of `gy2`.
    let gy2 = if gm > 1 { gy + 1 } else { gy };
    let mut days = DAYS_PER_YEAR * gy
        + (gy2 + 3).div_euclid(4)
        - (gy2 + 99).div_euclid(100)
        + (gy2 + 399).div_euclid(400)
        - NOWRUZ_OFFSET
        + i64::from(date.day())
        + DAYS_BEFORE_GREGORIAN_MONTH[gm as usize];

    let mut jy = JALAALI_EPOCH_YEAR + 33 * days.div_euclid(DAYS_PER_33_YEARS);
    days = days.rem_euclid(DAYS_PER_33_YEARS);

    jy += 4 * (days / DAYS_PER_4_YEARS);
    days %= DAYS_PER_4_YEARS;

    // The first year of each 4-year block is the long one.
    if days > DAYS_PER_YEAR {
        jy += (days - 1) / DAYS_PER_YEAR;
        days = (days - 1) % DAYS_PER_YEAR;
    }

    let (jm, jd) = if days < FIRST_HALF_DAYS {
        (1 + days / 31, 1 + days % 31)
    } else {
        let rest = days - FIRST_HALF_DAYS;
        (7 + rest / 30, 1 + rest % 30)
    };

    JalaaliDate::new(saturate(jy), jm as i32, jd as i32)
}

/// Convert a Jalaali date to the proleptic Gregorian calendar.
///
/// Months outside `1..=12` and days outside the month extend the day count
/// linearly from 1 Farvardin; the output month is always in `1..=12`.
///
/// ```
/// use gahshomar::{to_gregorian, JalaaliDate};
///
/// let gregorian = to_gregorian(JalaaliDate::new(1404, 6, 6));
/// assert_eq!(gregorian.ymd(), (2025, 8, 28));
/// ```
pub fn to_gregorian(date: JalaaliDate) -> GregorianDate {
    let jy = i64::from(date.year()) - JALAALI_EPOCH_YEAR;
    let jm = i64::from(date.month());
    let jd = i64::from(date.day());

    let days_before_month = if jm < 7 {
        (jm - 1) * 31
    } else {
        (jm - 7) * 30 + FIRST_HALF_DAYS
    };
    let mut days = DAYS_PER_YEAR * jy
        + 8 * jy.div_euclid(33)
        + (jy.rem_euclid(33) + 3) / 4
        + GREGORIAN_YEAR_START_OFFSET
        + jd
        + days_before_month;

    let mut gy = GREGORIAN_EPOCH_YEAR + 400 * days.div_euclid(DAYS_PER_400_YEARS);
    days = days.rem_euclid(DAYS_PER_400_YEARS);

    let mut leap = true;
    if days > DAYS_PER_100_YEARS {
        // Past the first (leap) century of the 400-year cycle.
        days -= 1;
        gy += 100 * (days / DAYS_PER_100_YEARS);
        days %= DAYS_PER_100_YEARS;
        if days >= DAYS_PER_YEAR {
            days += 1;
        } else {
            leap = false;
        }
    }

    gy += 4 * (days / DAYS_PER_4_YEARS);
    days %= DAYS_PER_4_YEARS;

    if days > DAYS_PER_YEAR {
        leap = false;
        days -= 1;
        gy += days / DAYS_PER_YEAR;
        days %= DAYS_PER_YEAR;
    }

    let month_lengths: [i64; 12] = [
        31,
        if leap { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];
    let mut gm = 0;
    while gm < 11 && days >= month_lengths[gm] {
        days -= month_lengths[gm];
        gm += 1;
    }

    GregorianDate::new(saturate(gy), gm as i32 + 1, days as i32 + 1)
}

/// Whether `year` is a leap year in the arithmetic 33-year Jalaali cycle.
///
/// Years whose position in the cycle (counted from 979 AP) is one of
/// `0, 4, 8, …, 28` have a 30-day Esfand.
pub fn is_jalaali_leap_year(year: i32) -> bool {
    let position = (i64::from(year) - JALAALI_EPOCH_YEAR).rem_euclid(33);
    position % 4 == 0 && position < 32
}

/// Number of days in a Jalaali month, or `None` if `month` is not in `1..=12`.
pub fn jalaali_month_length(year: i32, month: i32) -> Option<i32> {
    match month {
        1..=6 => Some(31),
        7..=11 => Some(30),
        12 if is_jalaali_leap_year(year) => Some(30),
        12 => Some(29),
        _ => None,
    }
}
