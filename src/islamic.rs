// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Gregorian ⇄ Islamic (tabular approximation)
//!
//! The Islamic (lunar Hijri) calendar used in practice begins each month on
//! the sighting of the new crescent, which no closed-form rule reproduces.
//! This module implements the **tabular** Islamic calendar instead:
//!
//! * 30-year cycle of 10 631 days with 11 leap years,
//! * odd months of 30 days, even months of 29 days,
//! * a 30th day of Dhu al-Hijjah (month 12) in leap years.
//!
//! ## Precision
//!
//! Results are accurate to **±1 day** against an observed Islamic calendar.
//! The approximation is deliberate and stable; it is not refined towards
//! astronomical new moons.
//!
//! Both directions pass through the crate-private [`JulianDay`]:
//!
//! ```text
//! Gregorian → JulianDay → Islamic
//! Islamic   → JulianDay → Gregorian
//! ```
//!
//! Over the tabular calendar the two legs invert each other, so an Islamic
//! round trip comes back to the same Gregorian date in practice; callers
//! should still only rely on the ±1 day bound.

use super::date::{GregorianDate, IslamicDate};
use super::julian_day::JulianDay;
use tracing::trace;

/// Calendar epoch constant of the tabular day count.
const ISLAMIC_EPOCH: f64 = 1_948_440.0;

/// Alignment applied to [`ISLAMIC_EPOCH`]: days, then half a day onto the
/// midnight boundary.
const EPOCH_ALIGNMENT: f64 = 385.0 + 0.5;

/// Midnight before 1 Muharram AH 1, the origin of the year estimate.
const YEAR_ESTIMATE_ORIGIN: f64 = 1_948_439.5;

/// Days in a 30-year cycle.
const DAYS_PER_30_YEARS: f64 = 10_631.0;

/// Half-cycle bias centring the year estimate inside its year.
const YEAR_ESTIMATE_BIAS: f64 = 10_646.0;

/// Mean month length used to estimate the month index.
const MEAN_MONTH_DAYS: f64 = 29.5;

/// Julian Day of an Islamic date given as raw floating-point fields.
fn julian_day_of(year: f64, month: f64, day: f64) -> JulianDay {
    JulianDay::new(
        ((11.0 * year + 3.0) / 30.0).floor() + 354.0 * year + 30.0 * month
            - ((month - 1.0) / 2.0).floor()
            + day
            + ISLAMIC_EPOCH
            - EPOCH_ALIGNMENT,
    )
}

/// Julian Day at midnight starting an Islamic date.
pub(crate) fn islamic_to_julian_day(date: IslamicDate) -> JulianDay {
    julian_day_of(
        f64::from(date.year()),
        f64::from(date.month()),
        f64::from(date.day()),
    )
}

/// Islamic date containing a Julian Day.
///
/// The year comes from the mean cycle ratio, the month from a ceiling over
/// the mean month length capped at 12, and the day from the offset against
/// that month's first day.
pub(crate) fn julian_day_to_islamic(jd: JulianDay) -> IslamicDate {
    let jd = jd.midnight();
    let year = ((30.0 * (jd.value() - YEAR_ESTIMATE_ORIGIN) + YEAR_ESTIMATE_BIAS)
        / DAYS_PER_30_YEARS)
        .floor();

    let year_start = julian_day_of(year, 1.0, 1.0);
    let estimate = ((jd - year_start).value() - 29.0) / MEAN_MONTH_DAYS;
    let mut month = estimate.ceil() + 1.0;
    if month > 12.0 {
        trace!(year, month, "islamic month estimate capped at 12");
        month = 12.0;
    }

    let month_start = julian_day_of(year, month, 1.0);
    let day = (jd - month_start).value().floor() + 1.0;

    IslamicDate::new(year as i32, month as i32, day as i32)
}

/// Convert a proleptic Gregorian date to the tabular Islamic calendar.
///
/// **Approximate (±1 day).**  See the [module documentation](self).
///
/// ```
/// use gahshomar::{gregorian_to_hijri, GregorianDate};
///
/// let hijri = gregorian_to_hijri(GregorianDate::new(2025, 8, 28));
/// assert_eq!(hijri.ymd(), (1447, 3, 4));
/// ```
pub fn gregorian_to_hijri(date: GregorianDate) -> IslamicDate {
    julian_day_to_islamic(JulianDay::from_gregorian(date))
}

/// Convert a tabular Islamic date to the proleptic Gregorian calendar.
///
/// **Approximate (±1 day).**  `hijri_to_gregorian(gregorian_to_hijri(d))` is
/// not guaranteed to equal `d`; it is guaranteed to be within one day of it.
///
/// ```
/// use gahshomar::{hijri_to_gregorian, IslamicDate};
///
/// let gregorian = hijri_to_gregorian(IslamicDate::new(1447, 2, 3));
/// assert_eq!(gregorian.ymd(), (2025, 7, 29));
/// ```
pub fn hijri_to_gregorian(date: IslamicDate) -> GregorianDate {
    islamic_to_julian_day(date).to_gregorian()
}

/// Whether `year` is one of the 11 leap years of its 30-year cycle.
pub fn is_islamic_leap_year(year: i32) -> bool {
    let year = i64::from(year);
    (11 * year + 14).div_euclid(30) > (11 * year + 3).div_euclid(30)
}

/// Number of days in a tabular Islamic month, or `None` if `month` is not in
/// `1..=12`.
pub fn islamic_month_length(year: i32, month: i32) -> Option<i32> {
    match month {
        12 if is_islamic_leap_year(year) => Some(30),
        1..=12 if month % 2 == 1 => Some(30),
        1..=12 => Some(29),
        _ => None,
    }
}
