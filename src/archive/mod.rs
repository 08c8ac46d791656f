//! Thin wrapper over ZIP archives.
//!
//! [`Zip`] is a consuming builder: create an archive, chain `add` /
//! `add_upload` calls with `?`, and `save` to finalize. Files staged through
//! `add_upload` are deleted once the archive is written. Decompression is a
//! one-shot extract into a target directory.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::store;

/// Errors produced by the archive wrapper.
#[derive(Debug, Error)]
pub enum ZipError {
    /// Wrapper for underlying IO errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Wrapper for archive-format errors.
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A store helper failed while staging an upload.
    #[error(transparent)]
    Store(#[from] store::StoreError),

    /// The archive path could not be opened or created.
    #[error("the defined route is not valid: {}", .0.display())]
    InvalidPath(PathBuf),
}

/// In-progress ZIP archive.
#[derive(Debug)]
pub struct Zip {
    writer: ZipWriter<BufWriter<File>>,
    staged: Vec<PathBuf>,
}

impl Zip {
    /// Create (or truncate) the archive at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, ZipError> {
        let p = path.as_ref();
        let file = File::create(p).map_err(|_| ZipError::InvalidPath(p.to_path_buf()))?;

        Ok(Self {
            writer: ZipWriter::new(BufWriter::new(file)),
            staged: Vec::new(),
        })
    }

    /// Append each file in `files` to the archive under its basename.
    pub fn add<P: AsRef<Path>>(mut self, files: &[P]) -> Result<Self, ZipError> {
        for file in files {
            self.append_file(file.as_ref())?;
        }
        Ok(self)
    }

    /// Stage a received temporary file into `dir` via the store upload
    /// helper, append it to the archive, and remember it for deletion when
    /// the archive is saved.
    pub fn add_upload<P, Q>(mut self, dir: P, tmp: Q, name: &str) -> Result<Self, ZipError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let dir = dir.as_ref();
        store::upload(tmp, name, Some(dir))?;

        let staged = dir.join(name);
        self.append_file(&staged)?;
        self.staged.push(staged);
        Ok(self)
    }

    /// Finalize the archive, then delete every file staged by `add_upload`.
    pub fn save(self) -> Result<(), ZipError> {
        let mut inner = self.writer.finish()?;
        inner.flush()?;

        for file in &self.staged {
            if let Err(e) = store::remove(file) {
                tracing::error!("failed to clean up staged upload {}: {e}", file.display());
            }
        }

        Ok(())
    }

    /// Extract the archive at `from` into the directory `to`.
    pub fn decompress<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> Result<(), ZipError> {
        let from = from.as_ref();
        let file = File::open(from).map_err(|_| ZipError::InvalidPath(from.to_path_buf()))?;

        let mut archive = ZipArchive::new(BufReader::new(file))?;
        archive.extract(to.as_ref())?;
        tracing::debug!("extracted {} into {}", from.display(), to.as_ref().display());
        Ok(())
    }

    fn append_file(&mut self, file: &Path) -> Result<(), ZipError> {
        let entry_name = store::get_basename(file);
        self.writer
            .start_file(entry_name, SimpleFileOptions::default())?;

        let mut reader = File::open(file)?;
        io::copy(&mut reader, &mut self.writer)?;
        Ok(())
    }
}
