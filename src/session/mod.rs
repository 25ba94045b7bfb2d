//! Console session for the assistant bot.
//!
//! Reads one line at a time, hands it to the [`Assistant`] and prints the
//! reply, until `close`/`exit` or end of input.

use crate::commands::{Assistant, Reply};
use crate::repositories::ContactRepository;
use crate::services::Clock;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Run the read-print loop over arbitrary input and output streams.
///
/// # Returns
/// An error only if reading from `input` or writing to `output` fails
pub fn run_session<R, C, I, O>(
    assistant: &mut Assistant<R, C>,
    input: I,
    mut output: O,
) -> Result<()>
where
    R: ContactRepository,
    C: Clock,
    I: BufRead,
    O: Write,
{
    tracing::info!("Session started");
    writeln!(output, "{}", WELCOME).context("Failed to write welcome message")?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT).context("Failed to write prompt")?;
        output.flush().context("Failed to flush output")?;

        let Some(line) = lines.next() else {
            tracing::info!("End of input reached");
            writeln!(output).context("Failed to write output")?;
            break;
        };
        let line = line.context("Failed to read input line")?;

        match assistant.handle_line(&line) {
            Reply::Continue(message) => {
                writeln!(output, "{}", message).context("Failed to write reply")?;
            }
            Reply::Exit(message) => {
                writeln!(output, "{}", message).context("Failed to write reply")?;
                break;
            }
        }
    }

    output.flush().context("Failed to flush output")?;
    assistant.metrics().log_summary();
    tracing::info!("Session finished");

    Ok(())
}
