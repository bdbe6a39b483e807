use std::fs;
use std::io;
use std::path::Path;

use log::info;

use crate::profile;

/// Read a newline-delimited title list fully into memory, one entry per line.
///
/// Missing or unreadable files surface as the underlying `io::Error`. There
/// is no duplicate analysis to do without input, so callers propagate rather
/// than recover.
pub fn read_titles(path: &Path) -> io::Result<Vec<String>> {
    let _span = profile::span("lines::read_titles");
    info!("reading titles from {}", path.display());
    let text = fs::read_to_string(path)?;
    Ok(text.lines().map(str::to_owned).collect())
}
