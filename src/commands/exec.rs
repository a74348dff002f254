use std::io;

use anyhow::Result;
use roster::application::Roster;
use roster::presentation::parse_command;

use crate::ui::output::Printer;

/// Run a single command line. Returns whether it succeeded.
///
/// Outcomes go to stdout, errors to stderr.
pub fn cmd_exec(roster: &Roster, line: &str, printer: &Printer) -> Result<bool> {
    let result = parse_command(line).and_then(|command| match command {
        Some(command) => roster.execute(command).map(Some),
        None => Ok(None),
    });

    match result {
        Ok(Some(outcome)) => {
            printer.outcome(&mut io::stdout().lock(), &outcome)?;
            Ok(true)
        }
        Ok(None) => Ok(true),
        Err(err) => {
            tracing::debug!(%line, "command failed");
            printer.error(&mut io::stderr().lock(), &err.into())?;
            Ok(false)
        }
    }
}
