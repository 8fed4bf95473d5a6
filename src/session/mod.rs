//! The interactive translation session.
//!
//! Reads a line at a time, handles the `/back` and `/cls` commands and runs
//! everything else through a [`Pipeline`](crate::translation::Pipeline).

/// Session command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::{SessionEnd, TranslateSession, format_record};
