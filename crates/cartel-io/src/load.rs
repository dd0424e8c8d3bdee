//! Loading a whole festival source into an [`Agenda`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use cartel_core::Agenda;

use crate::error::{LoadError, LoadResult};
use crate::parse::parse_line;

/// Read festivals line by line and add them to a new agenda in source order.
///
/// Blank lines are skipped. The first line that fails to parse aborts the
/// load; nothing is recovered from a bad line.
pub fn load_reader<R: BufRead>(reader: R) -> LoadResult<Agenda> {
    let mut agenda = Agenda::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let festival = parse_line(&line).map_err(|source| LoadError::Parse {
            line: index + 1,
            source,
        })?;
        agenda.add_festival(festival);
    }

    log::info!(
        "Loaded {} festivals across {} months",
        agenda.len(),
        agenda.months().count()
    );
    Ok(agenda)
}

/// Load festivals from in-memory text.
pub fn load_str(text: &str) -> LoadResult<Agenda> {
    load_reader(text.as_bytes())
}

/// Load festivals from a file.
pub fn load_file(path: &Path) -> LoadResult<Agenda> {
    log::debug!("Reading festivals from {}", path.display());
    let file = File::open(path)?;
    load_reader(BufReader::new(file))
}
