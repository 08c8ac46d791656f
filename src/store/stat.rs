use std::path::Path;

use crate::reply::Reply;
use crate::store::error::StoreError;

/// Lightweight classification of a filesystem path's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    /// The path does not exist.
    NotFound,
    /// The path exists and is a directory.
    Directory,
    /// The path exists and is a regular file.
    File,
    /// The path exists but is neither a regular file nor a directory
    /// (for example: socket, FIFO, block device, symlink without target).
    Other,
}

impl PathType {
    /// Classify `path` and return its `PathType`.
    ///
    /// Small, allocation-free helper intended for simple branching logic;
    /// avoids repeated calls to `exists`/`is_dir`/`is_file`.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        let p = path.as_ref();
        if !p.exists() {
            PathType::NotFound
        } else if p.is_dir() {
            PathType::Directory
        } else if p.is_file() {
            PathType::File
        } else {
            PathType::Other
        }
    }
}

/// Return `true` if the provided `path` exists.
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    !matches!(PathType::of(path), PathType::NotFound)
}

/// Return `true` if the provided `path` is a directory.
pub fn is_dir<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::Directory
}

/// Return `true` if the provided `path` is a regular file.
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::File
}

/// Report whether a file or folder exists at `path`.
///
/// Missing paths are reported as [`StoreError::NotFound`] so callers can
/// chain this check with `?` ahead of operations that need the path.
pub fn exist<P: AsRef<Path>>(path: P) -> Result<Reply, StoreError> {
    let p = path.as_ref();
    if !exists(p) {
        return Err(StoreError::NotFound(p.to_path_buf()));
    }
    Ok(Reply::success(format!(
        "the file/folder '{}' exists",
        p.display()
    )))
}
