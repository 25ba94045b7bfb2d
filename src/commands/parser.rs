//! Splitting console lines into a command and its arguments.

/// Every command the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

impl Command {
    /// Match a command name exactly (case-sensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hello" => Some(Self::Hello),
            "add" => Some(Self::Add),
            "change" => Some(Self::Change),
            "phone" => Some(Self::Phone),
            "all" => Some(Self::All),
            "add-birthday" => Some(Self::AddBirthday),
            "show-birthday" => Some(Self::ShowBirthday),
            "birthdays" => Some(Self::Birthdays),
            "close" | "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// A non-blank input line split on whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput<'a> {
    pub name: &'a str,
    pub args: Vec<&'a str>,
}

/// Split a line into command name and arguments; `None` for a blank line.
pub fn parse_input(line: &str) -> Option<ParsedInput<'_>> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next()?;

    Some(ParsedInput {
        name,
        args: tokens.collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_splits_tokens() {
        let parsed = parse_input("  add   Alice  0501234567 ").unwrap();
        assert_eq!(parsed.name, "add");
        assert_eq!(parsed.args, vec!["Alice", "0501234567"]);
    }

    #[test]
    fn test_parse_blank_line() {
        assert!(parse_input("").is_none());
        assert!(parse_input("   \t ").is_none());
    }

    #[test]
    fn test_parse_command_without_args() {
        let parsed = parse_input("all").unwrap();
        assert_eq!(parsed.name, "all");
        assert!(parsed.args.is_empty());
    }

    #[test]
    fn test_command_from_name() {
        assert_eq!(Command::from_name("hello"), Some(Command::Hello));
        assert_eq!(Command::from_name("add-birthday"), Some(Command::AddBirthday));
        assert_eq!(Command::from_name("show-birthday"), Some(Command::ShowBirthday));
        assert_eq!(Command::from_name("close"), Some(Command::Exit));
        assert_eq!(Command::from_name("exit"), Some(Command::Exit));
        assert_eq!(Command::from_name("HELLO"), None);
        assert_eq!(Command::from_name("remove"), None);
    }
}
