//! Pure partial-override merging for dynamic objects.
//!
//! Given a seed object and a partial override, produce a fresh copy of the
//! seed with every explicitly provided override value applied. `Undefined`
//! override values leave the seed untouched, arrays and nulls replace
//! wholesale, and plain objects merge recursively into plain-object seed
//! values. The seed and override are never modified.

mod error;
mod merge;
mod options;
mod shape;
mod typed;
mod value;

/// Public error type returned by merge entry points.
pub use error::MergeError;
/// Merge entry points and engine helpers.
pub use merge::{ValueKind, entries, fail, merge_deep, merge_shallow, merge_with_options};
/// Merge configuration.
pub use options::{MergeOptions, SymbolKeyPolicy};
/// Declared shapes and the deep-merge shape check.
pub use shape::{Field, Shape, ensure_deep_mergeable, merge_deep_checked};
/// Serde and JSON conveniences.
pub use typed::{merge_json, merge_typed, merge_typed_json};
/// Dynamic value model.
pub use value::{Callable, Key, Object, Opaque, Symbol, Value};

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}
