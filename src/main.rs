//! Roster CLI - trainee and course management
//!
//! Usage: roster [OPTIONS] [COMMAND]...
//!
//! With a command line (e.g. `roster COURSE GETALL`) runs it once and exits.
//! Without one, starts the interactive prompt.

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use roster::config::{Config, LogLevel};
use roster::presentation::{create_roster, Cli};

use crate::ui::context::UiContext;
use crate::ui::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let ui = UiContext::new(cli.json, cli.color, &config);
    init_tracing(&cli, &config, ui.color);

    let roster = create_roster(&config);
    let printer = Printer::new(ui);

    match cli.command_line() {
        Some(line) => {
            if !commands::cmd_exec(&roster, &line, &printer)? {
                std::process::exit(1);
            }
            Ok(())
        }
        None => commands::cmd_interactive(&roster, &printer),
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let (mut config, warnings) = match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            (config.with_env_overrides(), warnings)
        }
        None => Config::load_or_default(std::env::current_dir().ok().as_deref()),
    };
    for warning in &warnings {
        eprintln!("warning: {}", warning);
    }

    if let Some(dir) = &cli.data_dir {
        config.storage.data_dir = dir.clone();
    }

    Ok(config)
}

fn init_tracing(cli: &Cli, config: &Config, ansi: bool) {
    let level = LogLevel::from_verbosity(cli.verbose).unwrap_or(config.log.level);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level.as_tracing())
        .with_target(false)
        .with_ansi(ansi)
        .init();
}
