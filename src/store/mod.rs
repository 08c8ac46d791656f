//! Stateless filesystem helpers.
//!
//! Each operation is a synchronous, blocking call to the filesystem that
//! either returns the requested data or a uniform [`crate::Reply`] on
//! success, with failures carried as [`StoreError`]. The helpers live in
//! focused submodules; this module re-exports the full surface so callers
//! can import everything from `stowage::store`.

pub mod create;
pub mod encoding;
pub mod error;
pub mod name;
pub mod remove;
pub mod stat;
pub mod upload;
pub mod validate;
pub mod view;

pub use create::folder;
pub use encoding::replace;
pub use error::StoreError;
pub use name::{get_basename, get_extension, get_name, rename_file};
pub use remove::remove;
pub use stat::{exist, exists, is_dir, is_file, PathType};
pub use upload::{upload, DEFAULT_UPLOAD_DIR};
pub use validate::{image_size, size, validate};
pub use view::{get, get_files, view};
