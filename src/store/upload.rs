use std::fs;
use std::path::{Path, PathBuf};

use fs_extra::file::{copy as fs_extra_copy, CopyOptions};

use crate::reply::Reply;
use crate::store::create;
use crate::store::error::StoreError;

/// Directory uploads land in when the caller does not pick one.
pub const DEFAULT_UPLOAD_DIR: &str = "storage/upload-files/";

/// Move a staged temporary file into a managed directory.
///
/// The target directory (`dir`, defaulting to [`DEFAULT_UPLOAD_DIR`]) is
/// created when missing and the file ends up at `dir/name`. A plain rename
/// is attempted first; on failure (typically a cross-device move) the file
/// is copied and the original removed.
pub fn upload<P: AsRef<Path>>(tmp: P, name: &str, dir: Option<&Path>) -> Result<Reply, StoreError> {
    let dir = dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR));

    create::folder(&dir)?;

    let src = tmp.as_ref();
    let dest = dir.join(name);
    move_file(src, &dest)?;
    tracing::debug!("uploaded {} to {}", src.display(), dest.display());

    Ok(Reply::success(format!("the file '{name}' was uploaded")))
}

// Rename first, copy+remove fallback for cross-device moves.
fn move_file(src: &Path, dest: &Path) -> Result<(), StoreError> {
    if fs::rename(src, dest).is_ok() {
        return Ok(());
    }

    let mut options = CopyOptions::new();
    options.overwrite = true;
    fs_extra_copy(src, dest, &options).map_err(|e| StoreError::PathContext {
        src: src.to_path_buf(),
        dst: dest.to_path_buf(),
        msg: e.to_string(),
    })?;
    fs::remove_file(src)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn upload_moves_file_into_target_dir() {
        let td = tempdir().unwrap();
        let staged = td.path().join("tmp_upload");
        fs::write(&staged, b"payload").unwrap();

        let target = td.path().join("uploads");
        let reply = upload(&staged, "final.bin", Some(&target)).unwrap();

        assert!(reply.is_success());
        assert!(reply.message.contains("final.bin"));
        assert!(!staged.exists(), "staged file should be gone");
        assert_eq!(fs::read(target.join("final.bin")).unwrap(), b"payload");
    }

    #[test]
    fn upload_creates_missing_target_dir() {
        let td = tempdir().unwrap();
        let staged = td.path().join("tmp_upload");
        fs::write(&staged, b"x").unwrap();

        let target = td.path().join("deep/nested/uploads");
        upload(&staged, "f.txt", Some(&target)).unwrap();
        assert!(target.join("f.txt").is_file());
    }

    #[test]
    fn upload_missing_source_is_error() {
        let td = tempdir().unwrap();
        let staged = td.path().join("never_written");
        let target = td.path().join("uploads");
        assert!(upload(&staged, "f.txt", Some(&target)).is_err());
    }
}
