use anyhow::Result;
use std::path::Path;

use super::load_agenda;

/// Print every style with the names of its festivals.
pub fn show_styles(path: &Path) -> Result<()> {
    let agenda = load_agenda(path)?;

    for (style, festivals) in agenda.festivals_by_style() {
        let names: Vec<&str> = festivals.iter().map(|f| f.name()).collect();
        if names.is_empty() {
            println!("{style} (0)");
        } else {
            println!("{style} ({}): {}", names.len(), names.join(", "));
        }
    }

    Ok(())
}
