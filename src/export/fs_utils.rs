// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info};
use std::path::Path;

/// Make sure an export may write `path`.
///
/// A missing file or `--force` passes straight through; an existing file
/// is only replaced after the user agrees, and the export is aborted
/// otherwise so the previous report stays intact.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    let replace = confirm(format!(
        "Export file '{}' already exists. Replace it with the new report?",
        path.display()
    ))?;

    if replace {
        info("Previous export will be replaced.");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "'{}' kept, existing file not overwritten (use --force to replace it)",
            path.display()
        )))
    }
}
