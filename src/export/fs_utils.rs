//! Overwrite guard for export targets.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Succeeds when `path` may be written: it does not exist yet, `force` is
/// set, or the user answers `y`/`yes` on `input`. A directory is never
/// overwritten; no answer at all (closed input) keeps the file.
pub(crate) fn ensure_writable(path: &Path, force: bool, input: &mut impl BufRead) -> AppResult<()> {
    if path.is_dir() {
        return Err(AppError::Export(format!(
            "{} is a directory, not a file",
            path.display()
        )));
    }

    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    let read = input.read_line(&mut answer)?;

    if read > 0 && matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        info("Existing file will be overwritten.");
        return Ok(());
    }

    Err(AppError::Export(format!(
        "Export cancelled: {} not overwritten",
        path.display()
    )))
}
