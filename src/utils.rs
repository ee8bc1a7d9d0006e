use std::fs;
use std::path::Path;

use crate::error::{MeasureError, Result};

/// Create the directory `path` will be written into, if it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| MeasureError::io(parent, e))?;
        }
    }
    Ok(())
}
