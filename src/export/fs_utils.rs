// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Checks that the report may be created or replaced, asking on stdin.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    let stdin = io::stdin();
    confirm_overwrite(path, force, stdin.lock())
}

/// - destination missing, or `force` → Ok
/// - otherwise one answer line is read from `answers`; only `y`/`yes` proceeds.
///   EOF counts as "no".
pub(crate) fn confirm_overwrite<R: BufRead>(path: &Path, force: bool, mut answers: R) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("The report '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    answers.read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing report will be overwritten.");
            Ok(())
        }
        _ => Err(AppError::Export(format!(
            "Report cancelled: '{}' not overwritten",
            path.display()
        ))),
    }
}
