//! Terminal UI helpers: styling, spinner and screen control.

use std::io::{self, Write};

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// Clears the whole screen and moves the cursor to the top-left corner.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Moves the cursor up one line, erases it and returns to column zero.
pub const ERASE_PREVIOUS_LINE: &str = "\x1b[1A\x1b[2K\r";

/// Writes [`CLEAR_SCREEN`] and flushes.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(CLEAR_SCREEN.as_bytes())?;
    out.flush()
}

/// Formats a boolean setting for display.
pub fn on_off(enabled: bool) -> String {
    if enabled {
        Style::success("ON")
    } else {
        Style::secondary("OFF")
    }
}

/// Prints an error diagnostic to stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
}
