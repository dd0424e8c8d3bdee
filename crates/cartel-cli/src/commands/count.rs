use anyhow::Result;
use cartel_core::Month;
use std::path::Path;

use super::load_agenda;

pub fn count_month(path: &Path, month: Month) -> Result<()> {
    let agenda = load_agenda(path)?;

    match agenda.month_count(month) {
        Some(count) => println!("{month}: {count} festival/es"),
        None => println!("{month}: no festivals scheduled"),
    }

    Ok(())
}
