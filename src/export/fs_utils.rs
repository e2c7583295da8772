// src/export/fs_utils.rs

use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::prompt::confirm;
use std::path::Path;

/// Check whether the output file can be created or overwritten.
///
/// - file does not exist → true
/// - exists and `force` → true
/// - exists otherwise → ask the user
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<bool> {
    if !path.exists() || force {
        return Ok(true);
    }

    if confirm(&format!("The file '{}' already exists. Overwrite?", path.display())) {
        info("Existing file will be overwritten.");
        Ok(true)
    } else {
        info("Export cancelled: existing file not overwritten.");
        Ok(false)
    }
}
