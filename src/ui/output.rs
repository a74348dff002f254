use std::io::{self, Write};

use roster::application::Outcome;

use crate::ui::context::UiContext;
use crate::ui::error::format_error;
use crate::ui::json::write_event;
use crate::ui::theme::{colors, paint};

/// Writes outcomes and errors in the mode chosen by the `UiContext`.
pub struct Printer {
    ui: UiContext,
}

impl Printer {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }

    pub fn outcome(&self, out: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
        if self.ui.json {
            let event = serde_json::to_value(outcome)
                .unwrap_or_else(|e| serde_json::json!({ "event": "error", "message": e.to_string() }));
            return write_event(out, &event);
        }
        writeln!(out, "{}", outcome)
    }

    pub fn error(&self, out: &mut impl Write, err: &anyhow::Error) -> io::Result<()> {
        let message = format_error(err);
        if self.ui.json {
            return write_event(
                out,
                &serde_json::json!({ "event": "error", "message": message }),
            );
        }
        writeln!(out, "{}", paint(&message, colors::ERROR, self.ui.color))
    }

    pub fn notice(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
        if self.ui.json {
            return Ok(());
        }
        writeln!(out, "{}", message)
    }

    pub fn prompt(&self, out: &mut impl Write) -> io::Result<()> {
        if self.ui.json {
            return Ok(());
        }
        write!(out, "> ")?;
        out.flush()
    }
}
