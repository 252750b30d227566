//! Terminal front end for gambit: command parsing and the prompt loop.

pub mod command;
pub mod config;
pub mod error;
pub mod session;

pub use config::SessionConfig;
pub use error::TermError;
pub use session::{GameEnd, Session};
