use anyhow::Result;
use std::path::Path;

use super::load_agenda;

/// Parse the source and summarize it per month.
pub fn check_source(path: &Path) -> Result<()> {
    let agenda = load_agenda(path)?;

    println!("\n🎪 Cartel Check\n");
    println!("  Source: {}", path.display());
    println!("  Festivals: {}", agenda.len());

    for month in agenda.months() {
        println!("  {:<12} {}", month.to_string(), agenda.festivals_in_month(month));
    }

    if agenda.is_empty() {
        println!("\n  The source has no festivals");
    }

    Ok(())
}
