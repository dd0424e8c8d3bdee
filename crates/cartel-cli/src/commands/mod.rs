pub mod cancel;
pub mod check;
pub mod config;
pub mod count;
pub mod show;
pub mod styles;

use anyhow::{Context, Result};
use cartel_core::Agenda;
use std::path::Path;

pub use cancel::cancel;
pub use check::check_source;
pub use count::count_month;
pub use show::show_agenda;
pub use styles::show_styles;

/// Load the agenda from the festival source, with the path in any error.
fn load_agenda(path: &Path) -> Result<Agenda> {
    cartel_io::load_file(path)
        .with_context(|| format!("Failed to load festivals from {}", path.display()))
}
