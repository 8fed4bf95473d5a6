//! Menu rendering.

use std::io::{self, Write};

use crate::config::Settings;
use crate::translation::{Direction, LanguagePair};
use crate::ui::{Style, on_off};

pub fn print_main_menu<W: Write>(out: &mut W, pair: &LanguagePair) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", Style::header("--- Main menu ---"))?;
    writeln!(out, "{} {}", Style::label("1."), pair.label(Direction::Forward))?;
    writeln!(out, "{} {}", Style::label("2."), pair.label(Direction::Backward))?;
    writeln!(out, "{} Settings", Style::label("3."))?;
    writeln!(out, "{} Exit", Style::label("4."))?;
    out.flush()
}

pub fn print_settings_menu<W: Write>(out: &mut W, settings: &Settings) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", Style::header("--- Settings ---"))?;
    writeln!(
        out,
        "{} Save to file: {} {}",
        Style::label("1."),
        on_off(settings.save_to_file),
        Style::hint(settings.output_path.display())
    )?;
    writeln!(
        out,
        "{} Single-line output: {}",
        Style::label("2."),
        on_off(settings.single_line_output)
    )?;
    writeln!(out, "{} Back to main menu", Style::label("3."))?;
    out.flush()
}
