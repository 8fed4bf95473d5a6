use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal};

use nmt_cli::cli::Args;
use nmt_cli::config::SettingsManager;
use nmt_cli::input::{PromptLines, StdinLines};
use nmt_cli::menu::App;
use nmt_cli::output::{self, OutputConfig};
use nmt_cli::status;
use nmt_cli::translation::{Direction, ModelSet, validate_language};

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            e.print()?;
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };
    output::init(OutputConfig { quiet: args.quiet });

    validate_language(&args.from)?;
    validate_language(&args.to)?;
    let pair = args.language_pair();

    let manager = SettingsManager::new(&args.config);
    let mut settings = manager.load();
    settings.output_path.clone_from(&args.output);

    status!("Loading models...");
    let models = ModelSet::load(&args.models_dir, &pair)
        .with_context(|| format!("Failed to load models from {}", args.models_dir.display()))?;

    let mut app = App::new(
        models.pipeline(Direction::Forward),
        models.pipeline(Direction::Backward),
        pair,
        settings,
        manager,
    )
    .with_spinner(io::stdout().is_terminal());

    {
        let mut out = io::stdout().lock();
        if io::stdin().is_terminal() {
            app.run(&mut PromptLines::new(), &mut out)?;
        } else {
            app.run(&mut StdinLines::new(io::stdin().lock(), io::stdout()), &mut out)?;
        }
    }

    std::process::exit(exitcode::OK);
}
