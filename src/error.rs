// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for the optional validation layer.

use super::calendar::CalendarKind;

/// Error returned when a date triple is not a real date of its calendar.
///
/// Conversions never produce this error; it only comes from
/// [`Date::validate`](crate::Date::validate) and
/// [`Date::try_new`](crate::Date::try_new).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is outside `1..=12`.
    #[error("invalid {calendar} month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The calendar the date belongs to.
        calendar: CalendarKind,
        /// The invalid month number that was provided.
        month: i32,
    },

    /// Returned when a day number is outside the length of its month.
    #[error("invalid {calendar} day: {day} for {year}/{month} (must be 1..={max_day})")]
    InvalidDay {
        /// The calendar the date belongs to.
        calendar: CalendarKind,
        /// Year of the rejected date.
        year: i32,
        /// Month of the rejected date.
        month: i32,
        /// The invalid day number that was provided.
        day: i32,
        /// Number of days in that month.
        max_day: i32,
    },
}
