//! Assistant Bot - a console contact manager with upcoming-birthday reminders.
//!
//! Contacts (a name, phone numbers and an optional birthday) live in an
//! in-memory address book for the length of one console session.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`PhoneNumber`, `BirthdayDate`)
//! - **models**: The contact `Record`
//! - **repositories**: `ContactRepository` trait and the in-memory `AddressBook`
//! - **services**: Clock and upcoming-birthday calculation
//! - **commands**: Line parsing and command handlers
//! - **session**: The read-print loop over stdin/stdout
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types
//! - **metrics**: Per-session counters

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod services;
pub mod session;

pub use commands::{Assistant, Command, Reply};
pub use config::Config;
pub use domain::{BirthdayDate, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError};
pub use metrics::{MetricsSummary, SessionMetrics};
pub use models::Record;
pub use repositories::{AddressBook, ContactRepository};
pub use services::{
    upcoming_birthdays, BirthdayService, Clock, FixedClock, SystemClock, UpcomingBirthday,
};
pub use session::run_session;
