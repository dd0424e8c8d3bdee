use anyhow::{bail, Result};
use cartel_core::{Clock, Month};
use std::collections::HashSet;
use std::path::Path;

use super::load_agenda;

/// Cancel the festivals at `venues` in `month` and print what remains.
pub fn cancel(path: &Path, clock: &dyn Clock, month: Month, venues: &[String]) -> Result<()> {
    let venues = venue_set(venues)?;
    let mut agenda = load_agenda(path)?;
    let today = clock.today();

    if agenda.month_count(month).is_none() {
        println!("No festivals in {month}, nothing to cancel.");
        return Ok(());
    }

    let cancelled = agenda.cancel_festivals(&venues, month, today);
    println!("Cancelled {cancelled} festival/es in {month}\n");
    print!("{}", agenda.report(today));

    Ok(())
}

/// Venues as the parser stores them: trimmed and upper-cased.
fn venue_set(venues: &[String]) -> Result<HashSet<String>> {
    let set: HashSet<String> = venues
        .iter()
        .map(|v| v.trim().to_uppercase())
        .filter(|v| !v.is_empty())
        .collect();

    if set.is_empty() {
        bail!("No venues given: pass at least one non-blank venue name");
    }

    Ok(set)
}
