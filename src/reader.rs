use acl::Result;

use std::{
    fs::File,
    path::Path,
};

use csv::{Reader, ReaderBuilder, Trim};

/// Builds a reader for ledger command rows. Trailing optional columns may be left off.
pub fn build_command_reader(filepath: &Path) -> Result<Reader<File>> {
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(filepath)?;

    return Ok(reader);
}
