use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the store helpers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Wrapper for underlying IO errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The path does not exist.
    #[error("the file/folder '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    /// Removal was requested for a path that is not there.
    #[error("the file '{}' could not be removed because it does not exist", .0.display())]
    RemoveMissing(PathBuf),

    /// A file does not carry one of the allowed extensions.
    #[error("the file '{}' does not have the required extension", .0.display())]
    ExtensionRejected(PathBuf),

    /// A file weighs more than the requested maximum.
    #[error("the file '{}' is larger than the requested size", .0.display())]
    SizeExceeded(PathBuf),

    /// An image does not match the requested pixel dimensions.
    #[error("the file '{file}' does not have the requested dimensions '{expected}'")]
    DimensionsMismatch { file: String, expected: String },

    /// The image format could not be probed for dimensions.
    #[error("could not read image dimensions of '{file}': {reason}")]
    ImageProbe { file: String, reason: String },

    /// Contextual error that includes source and destination paths.
    #[error("operation failed from `{}` to `{}`: {msg}", .src.display(), .dst.display())]
    PathContext {
        src: PathBuf,
        dst: PathBuf,
        msg: String,
    },
}
