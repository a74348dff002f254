//! Name ordering shared by course listings and trainee course summaries.

use std::cmp::Ordering;

/// Case-insensitive comparison, falling back to byte order for ties so the
/// result is total and stable across runs.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
