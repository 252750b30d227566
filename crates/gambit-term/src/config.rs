//! Session options adjustable with `set`.

use crate::error::TermError;

/// Display options for a [`Session`](crate::session::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print the board after every move.
    pub show_board: bool,
    /// List the legal destinations when a move is rejected.
    pub show_hints: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_board: true,
            show_hints: false,
        }
    }
}

impl SessionConfig {
    /// Apply a parsed `set` command.
    pub fn apply(&mut self, setting: Setting) {
        match setting {
            Setting::ShowBoard(on) => self.show_board = on,
            Setting::ShowHints(on) => self.show_hints = on,
        }
    }
}

/// A single option change requested with `set <option> <value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    ShowBoard(bool),
    ShowHints(bool),
}

impl Setting {
    /// Parse an option name and its `on`/`off` value.
    pub fn parse(name: &str, value: &str) -> Result<Setting, TermError> {
        let option = match name.to_ascii_lowercase().as_str() {
            "board" => "board",
            "hints" => "hints",
            _ => {
                return Err(TermError::UnknownOption {
                    name: name.to_string(),
                });
            }
        };
        let on = parse_switch(value).ok_or_else(|| TermError::InvalidOptionValue {
            option,
            value: value.to_string(),
        })?;
        Ok(match option {
            "board" => Setting::ShowBoard(on),
            _ => Setting::ShowHints(on),
        })
    }

    /// Option name and value as the player would type them.
    pub fn describe(self) -> (&'static str, &'static str) {
        let (name, on) = match self {
            Setting::ShowBoard(on) => ("board", on),
            Setting::ShowHints(on) => ("hints", on),
        };
        (name, if on { "on" } else { "off" })
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
