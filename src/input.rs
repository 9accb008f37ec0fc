use crate::error::{Result, ScoreError};
use std::path::Path;

/// Reads a newline-delimited URL file. Blank lines are skipped; a missing,
/// empty or non-ASCII file fails the whole batch.
pub fn read_locators(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(ScoreError::InputNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    if !bytes.is_ascii() {
        return Err(ScoreError::InputDecode(path.display().to_string()));
    }
    let content = String::from_utf8(bytes)
        .map_err(|_| ScoreError::InputDecode(path.display().to_string()))?;

    let locators = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>();

    if locators.is_empty() {
        return Err(ScoreError::EmptyInput(path.display().to_string()));
    }
    Ok(locators)
}
