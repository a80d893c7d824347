//! Test helpers shared across merge-partially crates.

pub mod fixtures;
pub mod snapshot;

pub use fixtures::{
    deep_chain, nullable_seed, optional_prop_seed, profile_seed, profile_shape, wide_object,
};
pub use snapshot::Snapshot;
