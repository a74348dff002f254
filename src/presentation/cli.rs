//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Trailing words form a single command line, run once
//! - With no trailing words the binary starts the interactive loop

use std::path::PathBuf;

use clap::Parser;

use crate::config::ColorMode;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// Roster - trainee and course management
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'roster' without a command for the interactive prompt.")]
pub struct Cli {
    /// Path to a roster.toml config file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding trainees.json and courses.json
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Print outcomes as JSON
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Command line to run once, e.g. `COURSE GETALL`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl Cli {
    /// The trailing words rejoined into one command line, if any.
    ///
    /// Words containing whitespace are re-quoted so the tokenizer sees them
    /// as a single parameter again.
    pub fn command_line(&self) -> Option<String> {
        if self.command.is_empty() {
            return None;
        }
        let words: Vec<String> = self
            .command
            .iter()
            .map(|word| {
                if word.is_empty() || word.chars().any(|c| c.is_ascii_whitespace()) {
                    format!("\"{}\"", word)
                } else {
                    word.clone()
                }
            })
            .collect();
        Some(words.join(" "))
    }
}
