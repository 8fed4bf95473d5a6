use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFAULT_OUTPUT_FILE, DEFAULT_SETTINGS_FILE};
use crate::translation::LanguagePair;

#[derive(Parser, Debug)]
#[command(name = "nmt")]
#[command(about = "Interactive offline translation console")]
#[command(version)]
pub struct Args {
    /// Directory containing the `<from>-<to>-f32` model directories
    #[arg(short = 'd', long, default_value = ".")]
    pub models_dir: PathBuf,

    /// First language code (menu item 1 translates from it)
    #[arg(short = 'f', long = "from", default_value = "en")]
    pub from: String,

    /// Second language code (menu item 2 translates from it)
    #[arg(short = 't', long = "to", default_value = "hu")]
    pub to: String,

    /// Settings file
    #[arg(short = 'c', long, default_value = DEFAULT_SETTINGS_FILE)]
    pub config: PathBuf,

    /// File translations are appended to when saving is enabled
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Suppress status messages
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

impl Args {
    pub fn language_pair(&self) -> LanguagePair {
        LanguagePair::new(&self.from, &self.to)
    }
}
