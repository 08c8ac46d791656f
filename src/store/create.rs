use std::fs;
use std::path::Path;

use crate::reply::Reply;
use crate::store::error::StoreError;

/// Create the directory at `path` (and any missing parents) when it does not
/// already exist.
///
/// An existing directory is success, the reply message distinguishes the two
/// cases.
pub fn folder<P: AsRef<Path>>(path: P) -> Result<Reply, StoreError> {
    let p = path.as_ref();

    if p.exists() {
        return Ok(Reply::success(format!(
            "the directory '{}' already exists",
            p.display()
        )));
    }

    fs::create_dir_all(p)?;
    tracing::debug!("created directory {}", p.display());

    Ok(Reply::success(format!(
        "directory '{}' created",
        p.display()
    )))
}
