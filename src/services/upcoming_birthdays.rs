//! Upcoming birthday calculation.
//!
//! Given today's date and a window of `W` days, selects the stored birthdays
//! whose next occurrence falls in `[today, today + W]`. Occurrences on a
//! Saturday or Sunday are congratulated on the following Monday, and the
//! window check is made against that shifted date.

use super::clock::Clock;
use crate::domain::{format_date, BirthdayDate};
use crate::repositories::ContactRepository;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Serialize, Serializer};
use std::fmt;

/// Default window length in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact to congratulate and the day to do it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,

    #[serde(serialize_with = "serialize_date")]
    pub congratulation_date: NaiveDate,
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_date(*date))
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, format_date(self.congratulation_date))
    }
}

/// First `weekday` strictly after `date` (never `date` itself).
///
/// `None` only when that day lies past the last representable date.
pub fn next_weekday_after(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let current = date.weekday().num_days_from_monday();
    let target = weekday.num_days_from_monday();
    let days_ahead = (target + 7 - current - 1) % 7 + 1;

    date.checked_add_days(Days::new(u64::from(days_ahead)))
}

/// Move a Saturday or Sunday forward to the next Monday.
pub fn adjust_for_weekend(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => next_weekday_after(date, Weekday::Mon),
        _ => Some(date),
    }
}

/// Next occurrence of `birthday` on or after `today`.
///
/// Only this year and next year are considered.
pub fn next_occurrence(birthday: BirthdayDate, today: NaiveDate) -> Option<NaiveDate> {
    let candidate = birthday.occurrence_in(today.year())?;
    if candidate < today {
        return birthday.occurrence_in(today.year() + 1);
    }
    Some(candidate)
}

/// Select the birthdays to congratulate within `[today, today + window_days]`.
///
/// Output keeps the order of `entries`.
pub fn upcoming_birthdays<'a, I>(
    today: NaiveDate,
    window_days: u32,
    entries: I,
) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = (&'a str, BirthdayDate)>,
{
    let Some(window_end) = today.checked_add_days(Days::new(window_days as u64)) else {
        return Vec::new();
    };

    entries
        .into_iter()
        .filter_map(|(name, birthday)| {
            let occurrence = next_occurrence(birthday, today)?;
            let congratulation_date = adjust_for_weekend(occurrence)?;

            if today <= congratulation_date && congratulation_date <= window_end {
                Some(UpcomingBirthday {
                    name: name.to_string(),
                    congratulation_date,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Upcoming birthdays over a contact repository, using a clock for "today".
pub struct BirthdayService<C: Clock> {
    clock: C,
    window_days: u32,
}

impl<C: Clock> BirthdayService<C> {
    pub fn new(clock: C, window_days: u32) -> Self {
        Self { clock, window_days }
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Birthdays to congratulate within the configured window, in store order.
    pub fn upcoming<R: ContactRepository + ?Sized>(&self, repo: &R) -> Vec<UpcomingBirthday> {
        let today = self.clock.today();
        let result = upcoming_birthdays(today, self.window_days, repo.birthday_entries());

        tracing::debug!(
            today = %format_date(today),
            window_days = self.window_days,
            result_count = result.len(),
            "Upcoming birthdays computed"
        );

        result
    }
}
