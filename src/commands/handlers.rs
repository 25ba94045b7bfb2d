//! Command handlers for the assistant bot.
//!
//! Each handler turns one command's arguments into repository, record or
//! birthday-service calls and renders a one-line (or multi-line) reply.
//! Handlers return `CommandResult`; [`Assistant::handle_line`] is the single
//! place where an error becomes an `Error: <message>` reply.

use super::parser::{parse_input, Command};
use crate::domain::format_date;
use crate::error::{CommandError, CommandResult};
use crate::metrics::SessionMetrics;
use crate::repositories::ContactRepository;
use crate::services::{BirthdayService, Clock, DEFAULT_WINDOW_DAYS};

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";
pub const EMPTY_INPUT: &str = "You didn't enter any command.";
pub const EMPTY_BOOK: &str = "Address book is empty.";

const ADD_USAGE: &str = "add [name] [phone]";
const CHANGE_USAGE: &str = "change [name] [new_phone]";
const PHONE_USAGE: &str = "phone [name]";
const ADD_BIRTHDAY_USAGE: &str = "add-birthday [name] [DD.MM.YYYY]";
const SHOW_BIRTHDAY_USAGE: &str = "show-birthday [name]";

/// What the session should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and read the next line
    Continue(String),

    /// Print the message and end the session
    Exit(String),
}

impl Reply {
    pub fn message(&self) -> &str {
        match self {
            Self::Continue(message) | Self::Exit(message) => message,
        }
    }
}

/// The assistant: a contact repository plus the birthday service.
pub struct Assistant<R: ContactRepository, C: Clock> {
    repo: R,
    birthdays: BirthdayService<C>,
    metrics: SessionMetrics,
}

impl<R: ContactRepository, C: Clock> Assistant<R, C> {
    pub fn new(repo: R, clock: C, window_days: u32) -> Self {
        Self {
            repo,
            birthdays: BirthdayService::new(clock, window_days),
            metrics: SessionMetrics::new(),
        }
    }

    /// Create an assistant with the default seven-day birthday window.
    pub fn with_default_window(repo: R, clock: C) -> Self {
        Self::new(repo, clock, DEFAULT_WINDOW_DAYS)
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// Handle one raw console line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let Some(input) = parse_input(line) else {
            self.metrics.record_empty_line();
            return Reply::Continue(EMPTY_INPUT.to_string());
        };

        self.metrics.record_command(input.name);
        tracing::debug!(command = %input.name, args = input.args.len(), "Dispatching command");

        let Some(command) = Command::from_name(input.name) else {
            self.metrics.record_unknown_command();
            return Reply::Continue(INVALID_COMMAND.to_string());
        };

        match self.dispatch(command, &input.args) {
            Ok(reply) => reply,
            Err(err) => {
                self.metrics.record_error(err.kind());
                tracing::warn!(command = %input.name, kind = err.kind(), "Command failed: {}", err);
                Reply::Continue(format!("Error: {}", err))
            }
        }
    }

    /// Run a recognised command.
    pub fn dispatch(&mut self, command: Command, args: &[&str]) -> CommandResult<Reply> {
        let message = match command {
            Command::Exit => return Ok(Reply::Exit(FAREWELL.to_string())),
            Command::Hello => GREETING.to_string(),
            Command::Add => self.add_contact(args)?,
            Command::Change => self.change_contact(args)?,
            Command::Phone => self.show_phone(args)?,
            Command::All => self.show_all(),
            Command::AddBirthday => self.add_birthday(args)?,
            Command::ShowBirthday => self.show_birthday(args)?,
            Command::Birthdays => self.upcoming_birthdays(),
        };

        Ok(Reply::Continue(message))
    }

    /// `add [name] [phone]`: create or update a contact and append a phone.
    ///
    /// The contact is created before the phone is checked, so `add Bob 12`
    /// still leaves a `Bob` with no phones behind.
    pub fn add_contact(&mut self, args: &[&str]) -> CommandResult<String> {
        let [name, phone, ..] = args else {
            return Err(CommandError::MalformedCommand { usage: ADD_USAGE });
        };

        let (record, created) = self.repo.add_or_get(name);
        record.add_phone(phone)?;

        Ok(format!(
            "{} Phone number: {}",
            if created { "Contact added." } else { "Contact updated." },
            phone
        ))
    }

    /// `change [name] [new_phone]`: replace all phones with the new one.
    pub fn change_contact(&mut self, args: &[&str]) -> CommandResult<String> {
        let [name, new_phone] = args else {
            return Err(CommandError::MalformedCommand {
                usage: CHANGE_USAGE,
            });
        };

        let record = self
            .repo
            .find_by_name_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
        record.replace_phones(new_phone)?;

        Ok(format!("Phone number changed for {}.", name))
    }

    /// `phone [name]`: list a contact's phones.
    pub fn show_phone(&self, args: &[&str]) -> CommandResult<String> {
        let [name, ..] = args else {
            return Err(CommandError::MalformedCommand { usage: PHONE_USAGE });
        };

        let record = self
            .repo
            .find_by_name(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;

        Ok(match record.phones_display() {
            Some(phones) => format!("{}'s phone number is: {}", name, phones),
            None => format!("{} doesn't have a phone number set.", name),
        })
    }

    /// `all`: every contact with its phones, in insertion order.
    pub fn show_all(&self) -> String {
        if self.repo.is_empty() {
            return EMPTY_BOOK.to_string();
        }

        self.repo
            .list_all()
            .iter()
            .map(|record| match record.phones_display() {
                Some(phones) => format!("{}: {}", record.name(), phones),
                None => record.name().to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `add-birthday [name] [DD.MM.YYYY]`: set or overwrite a birthday.
    pub fn add_birthday(&mut self, args: &[&str]) -> CommandResult<String> {
        let [name, date, ..] = args else {
            return Err(CommandError::MalformedCommand {
                usage: ADD_BIRTHDAY_USAGE,
            });
        };

        let record = self
            .repo
            .find_by_name_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;
        record.set_birthday(date)?;

        Ok(format!("Birthday added for {}.", name))
    }

    /// `show-birthday [name]`: show a stored birthday.
    pub fn show_birthday(&self, args: &[&str]) -> CommandResult<String> {
        let [name, ..] = args else {
            return Err(CommandError::MalformedCommand {
                usage: SHOW_BIRTHDAY_USAGE,
            });
        };

        let record = self
            .repo
            .find_by_name(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;

        Ok(match record.birthday() {
            Some(birthday) => format!("{}'s birthday is: {}", name, birthday),
            None => format!("{} doesn't have a birthday set.", name),
        })
    }

    /// `birthdays`: who to congratulate within the window, and when.
    pub fn upcoming_birthdays(&self) -> String {
        let upcoming = self.birthdays.upcoming(&self.repo);

        if upcoming.is_empty() {
            return no_upcoming_message(self.birthdays.window_days());
        }

        tracing::info!(
            today = %format_date(self.birthdays.today()),
            count = upcoming.len(),
            "Upcoming birthdays found"
        );

        upcoming
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn no_upcoming_message(window_days: u32) -> String {
    if window_days == DEFAULT_WINDOW_DAYS {
        "No upcoming birthdays within the next week.".to_string()
    } else {
        format!("No upcoming birthdays within the next {} days.", window_days)
    }
}
