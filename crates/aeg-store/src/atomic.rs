//! Atomic file replacement
//!
//! Writes go to a sibling temp file that is then renamed over the target, so a
//! reader never sees a half-written graph.

use std::fs;
use std::path::Path;

use crate::errors::{io_error, Result};

/// Atomically replace `target_path` with `content`, creating parent directories
///
/// # Errors
/// * `Io` - If a directory, the temp file or the rename fails
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error("create_parent_dir", e))?;
        }
    }

    let temp_path = target_path.with_extension("json.tmp");
    fs::write(&temp_path, content).map_err(|e| io_error("write_temp", e))?;
    fs::rename(&temp_path, target_path).map_err(|e| io_error("rename_temp", e))?;

    Ok(())
}
