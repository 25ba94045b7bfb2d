//! Application service layer.
//!
//! Services hold the date logic that sits between the contact repository
//! and the command handlers.

pub mod clock;
pub mod upcoming_birthdays;

pub use clock::{Clock, FixedClock, SystemClock};
pub use upcoming_birthdays::{
    adjust_for_weekend, next_occurrence, next_weekday_after, upcoming_birthdays,
    BirthdayService, UpcomingBirthday, DEFAULT_WINDOW_DAYS,
};
