use std::str::FromStr;

use thiserror::Error;

/// Errors raised while parsing user input, before the partition table
/// is ever consulted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown option {0:?}.")]
    UnknownOption(String),
    #[error("Expected an integer, got {0:?}.")]
    NotAnInteger(String),
}

/// Actions offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ShowTable,
    AddProcess,
    EndProcess,
    Convert,
    Exit,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::ShowTable,
        Command::AddProcess,
        Command::EndProcess,
        Command::Convert,
        Command::Exit,
    ];

    /// Menu entry, as printed before each prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Command::ShowTable => "Show memory table",
            Command::AddProcess => "Add process",
            Command::EndProcess => "End process",
            Command::Convert => "Convert virtual address to physical",
            Command::Exit => "Exit",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Command::ShowTable => "1",
            Command::AddProcess => "2",
            Command::EndProcess => "3",
            Command::Convert => "4",
            Command::Exit => "5",
        }
    }
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        Command::ALL
            .into_iter()
            .find(|command| command.key() == input)
            .ok_or_else(|| InputError::UnknownOption(input.to_string()))
    }
}

/// Parses a non-negative integer typed by the user.
pub fn parse_integer<T: FromStr>(input: &str) -> Result<T, InputError> {
    let input = input.trim();
    input
        .parse()
        .map_err(|_| InputError::NotAnInteger(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_menu_keys() {
        assert_eq!("1".parse(), Ok(Command::ShowTable));
        assert_eq!(" 4\n".parse(), Ok(Command::Convert));
        assert_eq!("5".parse(), Ok(Command::Exit));
    }

    #[test]
    fn rejects_unknown_options() {
        assert_eq!(
            "6".parse::<Command>(),
            Err(InputError::UnknownOption("6".into()))
        );
        assert!("".parse::<Command>().is_err());
        assert!("12".parse::<Command>().is_err());
    }

    #[test]
    fn negative_offsets_are_not_integers() {
        assert_eq!(parse_integer::<u64>(" 42 "), Ok(42));
        assert_eq!(
            parse_integer::<u64>("-3"),
            Err(InputError::NotAnInteger("-3".into()))
        );
        assert!(parse_integer::<u32>("abc").is_err());
    }
}
