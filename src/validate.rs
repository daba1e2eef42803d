// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Optional input validation.
//!
//! The conversions accept any triple.  This layer sits on top for callers
//! that want to reject dates that do not exist in their calendar (month 13,
//! 30 February, Esfand 30 of a common year, …) before converting.  It uses
//! the same leap rules as the conversions, so a date accepted here always
//! round-trips through its own calendar.

use super::date::{Calendar, Date};
use super::error::CalendarError;
use tracing::debug;

impl<C: Calendar> Date<C> {
    /// Create a date, rejecting triples that are not real dates of `C`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month is outside `1..=12` or the day
    /// is outside the length of that month.
    ///
    /// ```
    /// use gahshomar::{CalendarError, JalaaliDate};
    ///
    /// assert!(JalaaliDate::try_new(1403, 12, 30).is_ok());
    /// assert!(matches!(
    ///     JalaaliDate::try_new(1404, 12, 30),
    ///     Err(CalendarError::InvalidDay { max_day: 29, .. })
    /// ));
    /// ```
    pub fn try_new(year: i32, month: i32, day: i32) -> Result<Self, CalendarError> {
        let date = Self::new(year, month, day);
        date.validate()?;
        Ok(date)
    }

    /// Check that this triple is a real date of `C`.
    ///
    /// # Errors
    ///
    /// See [`Date::try_new`].
    pub fn validate(&self) -> Result<(), CalendarError> {
        let Some(max_day) = C::month_length(self.year(), self.month()) else {
            debug!(calendar = C::LABEL, month = self.month(), "rejected month");
            return Err(CalendarError::InvalidMonth {
                calendar: C::KIND,
                month: self.month(),
            });
        };

        if !(1..=max_day).contains(&self.day()) {
            debug!(calendar = C::LABEL, date = %self, max_day, "rejected day");
            return Err(CalendarError::InvalidDay {
                calendar: C::KIND,
                year: self.year(),
                month: self.month(),
                day: self.day(),
                max_day,
            });
        }

        Ok(())
    }

    /// `true` if [`validate`](Self::validate) succeeds.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use crate::calendar::CalendarKind;
    use crate::{CalendarError, GregorianDate, IslamicDate, JalaaliDate};

    #[test]
    fn valid_dates() {
        assert!(GregorianDate::new(2024, 2, 29).is_valid());
        assert!(JalaaliDate::new(1403, 12, 30).is_valid());
        assert!(IslamicDate::new(1445, 12, 30).is_valid());
        assert!(GregorianDate::try_new(2025, 8, 28).is_ok());
    }

    #[test]
    fn invalid_month() {
        assert_eq!(
            GregorianDate::try_new(2025, 13, 1),
            Err(CalendarError::InvalidMonth {
                calendar: CalendarKind::Gregorian,
                month: 13,
            })
        );
        assert_eq!(
            IslamicDate::new(1447, 0, 1).validate(),
            Err(CalendarError::InvalidMonth {
                calendar: CalendarKind::Islamic,
                month: 0,
            })
        );
    }

    #[test]
    fn invalid_day() {
        assert_eq!(
            GregorianDate::try_new(2023, 2, 29),
            Err(CalendarError::InvalidDay {
                calendar: CalendarKind::Gregorian,
                year: 2023,
                month: 2,
                day: 29,
                max_day: 28,
            })
        );
        assert!(!JalaaliDate::new(1404, 7, 31).is_valid());
        assert!(!JalaaliDate::new(1404, 12, 30).is_valid());
        assert!(!IslamicDate::new(1446, 12, 30).is_valid());
        assert!(!IslamicDate::new(1446, 2, 30).is_valid());
        assert!(!GregorianDate::new(2025, 1, 0).is_valid());
    }

    #[test]
    fn validation_does_not_gate_conversion() {
        let invalid = GregorianDate::new(2023, 2, 29);
        assert!(!invalid.is_valid());
        assert_eq!(crate::to_jalaali(invalid), crate::to_jalaali(GregorianDate::new(2023, 3, 1)));
    }
}
