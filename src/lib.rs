// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar conversion
//!
//! This crate converts dates between the Gregorian, Jalaali (Persian solar
//! Hijri) and tabular Islamic (lunar Hijri) calendars.  Every conversion is a
//! pure, stateless function over a `(year, month, day)` triple: no I/O, no
//! shared state, safe to call from any number of threads.
//!
//! # Core types
//!
//! - [`Date<C>`]: a date parameterised by a [`Calendar`] marker.
//! - [`Calendar`]: trait that defines a calendar (leap rules + route to Gregorian).
//! - [`GregorianDate`]: type alias for `Date<Gregorian>`.
//! - [`JalaaliDate`]: type alias for `Date<Jalaali>`.
//! - [`IslamicDate`]: type alias for `Date<Islamic>`.
//! - [`CalendarError`]: returned only by the optional validation layer.
//!
//! # Conversions
//!
//! | Function | Direction | Precision |
//! |----------|-----------|-----------|
//! | [`to_jalaali`] | Gregorian → Jalaali | exact |
//! | [`to_gregorian`] | Jalaali → Gregorian | exact |
//! | [`gregorian_to_hijri`] | Gregorian → Islamic | ±1 day |
//! | [`hijri_to_gregorian`] | Islamic → Gregorian | ±1 day |
//!
//! [`Date::to`] composes them for any pair of calendars.
//!
//! The Jalaali pair is an exact bijection: `to_gregorian(to_jalaali(d)) == d`
//! for every valid Gregorian date.  The Islamic pair is a *tabular*
//! approximation of a calendar that is defined by lunar observation; a
//! converted date may differ from the announced one by a day, and the
//! Gregorian → Islamic → Gregorian round trip is only guaranteed to land
//! within one day of its start.
//!
//! # Totality
//!
//! No conversion validates, fails or panics.  Out-of-range months and days
//! are absorbed by the arithmetic; results outside `i32` saturate.  Use
//! [`Date::try_new`] or [`Date::validate`] to reject malformed input first.
//!
//! ```
//! use gahshomar::{GregorianDate, Islamic, Jalaali};
//!
//! let date = GregorianDate::new(2025, 8, 28);
//! assert_eq!(date.to::<Jalaali>().to_string(), "1404/06/06");
//! assert_eq!(date.to::<Islamic>().to_string(), "1447/03/04");
//! ```

mod calendar;
mod date;
mod error;
mod islamic;
mod jalaali;
mod julian_day;
mod validate;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{
    gregorian_month_length, is_gregorian_leap_year, CalendarKind, Gregorian, Islamic, Jalaali,
};
pub use date::{Calendar, Date, GregorianDate, IslamicDate, JalaaliDate};
pub use error::CalendarError;
pub use islamic::{
    gregorian_to_hijri, hijri_to_gregorian, is_islamic_leap_year, islamic_month_length,
};
pub use jalaali::{is_jalaali_leap_year, jalaali_month_length, to_gregorian, to_jalaali};
