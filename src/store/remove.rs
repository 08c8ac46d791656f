use std::fs;
use std::path::Path;

use crate::reply::Reply;
use crate::store::error::StoreError;

/// Remove the file or directory at `path`.
///
/// Directories are removed recursively. A missing path is reported as
/// [`StoreError::RemoveMissing`] so callers learn the removal did not
/// actually happen.
pub fn remove<P: AsRef<Path>>(path: P) -> Result<Reply, StoreError> {
    let p = path.as_ref();

    if !p.exists() {
        return Err(StoreError::RemoveMissing(p.to_path_buf()));
    }

    if p.is_dir() {
        fs::remove_dir_all(p)?;
    } else {
        fs::remove_file(p)?;
    }

    tracing::debug!("removed {}", p.display());

    Ok(Reply::success(format!(
        "the file '{}' has been deleted",
        p.display()
    )))
}
