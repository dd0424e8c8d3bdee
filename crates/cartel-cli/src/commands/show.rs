use anyhow::{Context, Result};
use cartel_core::Clock;
use std::path::Path;

use super::load_agenda;

/// Print the whole agenda, as text or as JSON.
pub fn show_agenda(path: &Path, clock: &dyn Clock, json: bool) -> Result<()> {
    let agenda = load_agenda(path)?;

    if json {
        let out = serde_json::to_string_pretty(&agenda).context("Failed to serialize agenda")?;
        println!("{out}");
    } else if agenda.is_empty() {
        println!("No festivals scheduled.");
    } else {
        print!("{}", agenda.report(clock.today()));
    }

    Ok(())
}
