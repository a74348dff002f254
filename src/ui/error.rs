use roster::RosterError;

/// Render an error as one user-facing line.
///
/// Roster errors already carry their `ERROR:` prefix; anything else from the
/// binary edge gets one added.
pub fn format_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<RosterError>() {
        Some(roster) => roster.to_string(),
        None => format!("ERROR: {:#}", err),
    }
}
