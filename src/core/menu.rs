//! # Menu Model
//!
//! The option list shown on the main screen and the parser that turns a line
//! of user input into a [`MenuChoice`].

use crate::core::messages::Messages;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub key: String,
    pub name: String,
}

impl MenuOption {
    fn new(key: &str, name: &str) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
        }
    }

    /// `"<key>: <name>"`, as drawn inside the option box.
    pub fn caption(&self) -> String {
        format!("{}: {}", self.key, self.name)
    }
}

/// Builds the main menu in display order.
///
/// The keys are the same in every language; only the labels are translated.
/// `Ctrl C` is informational, quitting is handled by the terminal's interrupt.
pub fn options(messages: &Messages) -> Vec<MenuOption> {
    vec![
        MenuOption::new("L", messages.option_read),
        MenuOption::new("E", messages.option_edit),
        MenuOption::new("C", messages.option_create),
        MenuOption::new("B", messages.option_delete),
        MenuOption::new("Ctrl C", messages.option_quit),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Read,
    Edit,
    Create,
    Delete,
    /// Unrecognised or empty input: draw the menu again.
    Redisplay,
}

impl MenuChoice {
    /// Dispatches on the uppercased first character of the trimmed input.
    pub fn from_input(input: &str) -> Self {
        let first = input.trim().chars().next().map(|c| c.to_ascii_uppercase());
        match first {
            Some('L') => MenuChoice::Read,
            Some('E') => MenuChoice::Edit,
            Some('C') => MenuChoice::Create,
            Some('B') => MenuChoice::Delete,
            _ => MenuChoice::Redisplay,
        }
    }
}
