// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use gahshomar::CalendarError;

/// Status codes returned by gahshomar-ffi functions.
///
/// cbindgen:prefix-with-name
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GahshomarStatus {
    /// Success.
    Ok = 0,
    /// A required output pointer was null.
    NullPointer = 1,
    /// The month is outside 1..=12.
    InvalidMonth = 2,
    /// The day is outside the length of its month.
    InvalidDay = 3,
    /// The calendar tag is not one of the known calendars.
    InvalidCalendar = 4,
    /// A Rust panic was caught at the boundary.
    Panic = 5,
}

impl From<CalendarError> for GahshomarStatus {
    fn from(err: CalendarError) -> Self {
        match err {
            CalendarError::InvalidMonth { .. } => Self::InvalidMonth,
            CalendarError::InvalidDay { .. } => Self::InvalidDay,
        }
    }
}

impl From<Result<(), CalendarError>> for GahshomarStatus {
    fn from(result: Result<(), CalendarError>) -> Self {
        result.map_or_else(Self::from, |()| Self::Ok)
    }
}
