//! Session UI components.

use std::io::{self, Write};

use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Writes the session banner for a direction title such as `English -> Hungarian`.
pub fn print_banner<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} {} - {}",
        Style::header("nmt"),
        Style::version(format!("v{VERSION}")),
        Style::value(title)
    )?;
    writeln!(out, "Type a sentence and press Enter.")?;
    writeln!(
        out,
        "Commands: {} {}, {} {}",
        Style::command("/back"),
        Style::secondary("(main menu)"),
        Style::command("/cls"),
        Style::secondary("(clear screen)")
    )?;
    writeln!(out)?;
    out.flush()
}
