use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use roster::application::Roster;
use roster::presentation::parse_command;

use crate::ui::output::Printer;

const BANNER: &str = "School Management CLI started.";
const FAREWELL: &str = "Goodbye!";

pub fn cmd_interactive(roster: &Roster, printer: &Printer) -> Result<()> {
    ctrlc::set_handler(|| {
        println!();
        std::process::exit(0);
    })
    .context("failed to install Ctrl+C handler")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(roster, printer, stdin.lock(), &mut stdout)
}

/// Read command lines until `q`/`QUIT` or end of input.
///
/// A failed command is reported and the session keeps going.
pub(crate) fn run_session(
    roster: &Roster,
    printer: &Printer,
    mut input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    printer.notice(out, BANNER)?;

    let mut line = String::new();
    loop {
        printer.prompt(out)?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
            printer.notice(out, FAREWELL)?;
            break;
        }

        let result = parse_command(trimmed).and_then(|command| match command {
            Some(command) => roster.execute(command).map(Some),
            None => Ok(None),
        });

        match result {
            Ok(Some(outcome)) => printer.outcome(out, &outcome)?,
            Ok(None) => {}
            Err(err) => printer.error(out, &err.into())?,
        }
    }

    out.flush()?;
    Ok(())
}
