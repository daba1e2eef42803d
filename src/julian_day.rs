// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day bridge between Gregorian and Islamic dates.
//!
//! The Islamic conversions do not map onto the Gregorian calendar directly;
//! both sides go through a continuous day count instead.  [`JulianDay`] is
//! that count: a [`Days`] quantity on the standard Julian Day axis, always
//! pointing at **midnight** (`x.5`) for whole calendar dates.
//!
//! The type is crate-private.  The public surface only ever exchanges
//! `(year, month, day)` triples.
//!
//! Floor operations on `x.5` values are load-bearing: the rounding below is
//! what pins each date to a single day boundary, so the arithmetic stays in
//! `f64` to reproduce it.

use super::date::GregorianDate;
use qtty::Days;
use std::ops::{Add, Sub};

/// A point on the Julian Day axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub(crate) struct JulianDay {
    quantity: Days,
}

impl JulianDay {
    /// Create from a raw Julian Day value.
    #[inline]
    pub(crate) const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// The underlying scalar value in days.
    #[inline]
    pub(crate) const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Move onto the `x.5` day boundary (floor, then half a day on).
    ///
    /// Identity for values already on a boundary.
    #[inline]
    pub(crate) fn midnight(self) -> Self {
        Self::new(self.value().floor() + 0.5)
    }

    /// Julian Day at midnight starting a proleptic Gregorian date.
    ///
    /// January and February are treated as months 13 and 14 of the previous
    /// year so the leap day falls at the end of the counting year.
    pub(crate) fn from_gregorian(date: GregorianDate) -> Self {
        let mut year = f64::from(date.year());
        let mut month = f64::from(date.month());
        if month <= 2.0 {
            year -= 1.0;
            month += 12.0;
        }
        let century = (year / 100.0).floor();
        let correction = 2.0 - century + (century / 4.0).floor();
        Self::new(
            (365.25 * (year + 4716.0)).floor()
                + (30.6001 * (month + 1.0)).floor()
                + f64::from(date.day())
                + correction
                - 1524.5,
        )
    }

    /// Proleptic Gregorian date containing this Julian Day.
    ///
    /// Fliegel–Van Flandern style inverse; the century correction is always
    /// applied, so dates before 1582 come out proleptic rather than Julian.
    pub(crate) fn to_gregorian(self) -> GregorianDate {
        let jd = self.value() + 0.5;
        let z = jd.floor();
        let fraction = jd - z;

        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        let a = z + 1.0 + alpha - (alpha / 4.0).floor();
        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        let day = b - d - (30.6001 * e).floor() + fraction;
        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

        GregorianDate::new(year as i32, month as i32, day.floor() as i32)
    }
}

impl Add<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self {
            quantity: self.quantity + rhs,
        }
    }
}

impl Sub for JulianDay {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}
