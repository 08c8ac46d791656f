use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::store::error::StoreError;

/// List the entries directly under `dir` as full paths.
///
/// `.` and `..` are never included. Entries are returned sorted so listings
/// are stable across platforms.
pub fn view<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, StoreError> {
    let d = dir.as_ref();

    if !d.exists() {
        return Err(StoreError::NotFound(d.to_path_buf()));
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(d)? {
        entries.push(entry?.path());
    }
    entries.sort();

    Ok(entries)
}

/// Gather every regular file under `dir`, recursively.
pub fn get_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, StoreError> {
    let d = dir.as_ref();

    if !d.exists() {
        return Err(StoreError::NotFound(d.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(d).min_depth(1).follow_links(false) {
        let entry = entry.map_err(|e| StoreError::Io(io::Error::other(e)))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    files.sort();

    Ok(files)
}

/// Read the file at `path` as UTF-8 text.
pub fn get<P: AsRef<Path>>(path: P) -> Result<String, StoreError> {
    let p = path.as_ref();

    if !p.exists() {
        return Err(StoreError::NotFound(p.to_path_buf()));
    }

    Ok(fs::read_to_string(p)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn view_lists_direct_children_only() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("a.txt"), b"a").unwrap();
        fs::create_dir_all(td.path().join("sub")).unwrap();
        fs::write(td.path().join("sub/nested.txt"), b"n").unwrap();

        let entries = view(td.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|p| p.parent() == Some(td.path())));
    }

    #[test]
    fn view_missing_dir_is_not_found() {
        let td = tempdir().unwrap();
        let missing = td.path().join("nope");
        let err = view(&missing).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(p) if p == missing));
    }

    #[test]
    fn get_files_recurses_and_skips_directories() {
        let td = tempdir().unwrap();
        fs::write(td.path().join("top.txt"), b"t").unwrap();
        fs::create_dir_all(td.path().join("a/b")).unwrap();
        fs::write(td.path().join("a/one.txt"), b"1").unwrap();
        fs::write(td.path().join("a/b/two.txt"), b"2").unwrap();

        let files = get_files(td.path()).unwrap();
        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|p| p.is_file()));
    }

    #[test]
    fn get_returns_contents() {
        let td = tempdir().unwrap();
        let p = td.path().join("body.txt");
        fs::write(&p, "hello world").unwrap();
        assert_eq!(get(&p).unwrap(), "hello world");

        let missing = td.path().join("missing.txt");
        assert!(matches!(
            get(&missing).unwrap_err(),
            StoreError::NotFound(_)
        ));
    }
}
