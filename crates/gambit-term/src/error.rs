//! Terminal session errors.

use gambit_core::FenError;

/// Errors that can occur while reading and interpreting player input.
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    /// A square name is not a file letter followed by a rank digit.
    #[error("invalid square: \"{text}\"")]
    InvalidSquare {
        /// The text that failed to parse.
        text: String,
    },

    /// The line is not a recognized command.
    #[error("unrecognized command: \"{line}\" (type 'help' for a list)")]
    MalformedCommand {
        /// The offending input line.
        line: String,
    },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as typed.
        name: String,
    },

    /// `set` was given a value the option does not accept.
    #[error("invalid value for {option}: \"{value}\" (expected on or off)")]
    InvalidOptionValue {
        /// The option being set.
        option: &'static str,
        /// The rejected value.
        value: String,
    },

    /// `position` was given text that does not describe a valid board.
    #[error("invalid position: {source}")]
    InvalidPosition {
        /// The underlying parse error.
        #[from]
        source: FenError,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
