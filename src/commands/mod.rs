//! Console commands.
//!
//! - **parser**: split a line into a command name and arguments
//! - **handlers**: run a command against the address book and render a reply

pub mod handlers;
pub mod parser;

pub use handlers::{Assistant, Reply};
pub use parser::{parse_input, Command, ParsedInput};
