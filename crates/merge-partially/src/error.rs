//! Error types for merging and merge configuration.

use thiserror::Error;

/// Errors returned by the merge entry points and their helpers.
#[derive(Debug, Error)]
pub enum MergeError {
    /// The caller passed a seed or override the merge has no meaning for.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The override carried a key kind that the active options refuse.
    #[error("unsupported key {key} at {path}")]
    UnsupportedKey { path: String, key: String },
    /// A value that fits none of the mergeable kinds.
    #[error("Item of key name {key} had a type that is unsupported by this: {rendered}")]
    UnsupportedValue { key: String, rendered: String },
    /// Reading a merge options file failed.
    #[error("failed to read merge options: {0}")]
    OptionsRead(#[from] std::io::Error),
    /// Parsing merge options failed.
    #[error("failed to parse merge options: {0}")]
    OptionsParse(#[from] json5::Error),
    /// Converting a merged value back into a typed value failed.
    #[error("failed to decode merged value: {0}")]
    Decode(#[from] serde_json::Error),
}

impl MergeError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
