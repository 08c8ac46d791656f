use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Outcome category carried by every [`Reply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Uniform status record returned by the store operations.
///
/// `status` and `message` are always both present; the record carries no
/// identity and is built fresh per call. It is serde-serializable so callers
/// can ship it across an API boundary unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub code: u16,
    pub status: Status,
    pub message: String,
}

impl Reply {
    /// Build a success record (code 200).
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            code: 200,
            status: Status::Success,
            message: message.into(),
        }
    }

    /// Build an error record (code 500).
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: 500,
            status: Status::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

/// Materialize the error side of a store `Result` into the uniform record.
impl From<&StoreError> for Reply {
    fn from(err: &StoreError) -> Self {
        Reply::error(err.to_string())
    }
}
