use derive_more::{Display, Error};
use std::str::FromStr;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MenuCommand {
    Play,
    Insert,
    Quit,
}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    #[display("'{input}' is not a number")]
    NotANumber { input: String },
    #[display("{choice} is not a menu option")]
    UnknownOption { choice: i64 },
}

/// Lines of the options menu, in display order.
pub const MENU_LINES: [&str; 3] = [
    "1 - Play piece (dequeue)",
    "2 - Insert new piece (enqueue)",
    "0 - Quit",
];

impl MenuCommand {
    pub fn from_choice(choice: i64) -> Result<Self, MenuError> {
        match choice {
            1 => Ok(Self::Play),
            2 => Ok(Self::Insert),
            0 => Ok(Self::Quit),
            _ => Err(MenuError::UnknownOption { choice }),
        }
    }
}

impl FromStr for MenuCommand {
    type Err = MenuError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let trimmed = line.trim();
        let choice = trimmed
            .parse::<i64>()
            .map_err(|_| MenuError::NotANumber {
                input: trimmed.to_string(),
            })?;
        Self::from_choice(choice)
    }
}
