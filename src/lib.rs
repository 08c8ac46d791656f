//! Stateless filesystem store helpers plus a thin ZIP archive wrapper.
//!
//! Every fallible store operation reports a uniform [`Reply`] record on
//! success and a typed [`StoreError`] on failure; `Reply::from` flattens an
//! error back into the same record shape for callers that want one.

pub mod archive;
pub mod reply;
pub mod store;

pub use crate::archive::{Zip, ZipError};
pub use crate::reply::{Reply, Status};
pub use crate::store::StoreError;
