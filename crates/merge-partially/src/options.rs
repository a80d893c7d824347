//! Merge configuration.

use crate::MergeError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// What to do with override keys that are symbol tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKeyPolicy {
    /// Fail with `MergeError::UnsupportedKey`.
    #[default]
    Reject,
    /// Ignore the key, leaving the seed untouched.
    Skip,
    /// Resolve the key like any other.
    Merge,
}

/// Options for [`crate::merge_with_options`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MergeOptions {
    /// Handling of symbol-keyed overrides.
    pub symbol_keys: SymbolKeyPolicy,
}

impl MergeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbol_keys(mut self, policy: SymbolKeyPolicy) -> Self {
        self.symbol_keys = policy;
        self
    }

    /// Load options from JSON5 contents.
    pub fn load_from_str(contents: &str) -> Result<Self, MergeError> {
        debug!("loading merge options from raw contents (len={})", contents.len());
        let options: MergeOptions = json5::from_str(contents)?;
        Ok(options)
    }

    /// Load options from a JSON5 file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, MergeError> {
        info!("loading merge options from path: {}", path.as_ref().display());
        let contents = fs::read_to_string(path)?;
        Self::load_from_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn defaults_reject_symbol_keys() {
        assert_eq!(MergeOptions::default().symbol_keys, SymbolKeyPolicy::Reject);
        assert_eq!(MergeOptions::load_from_str("{}").expect("options"), MergeOptions::new());
    }

    #[test]
    fn parses_policy_from_json5() {
        let options = MergeOptions::load_from_str("{ symbol_keys: 'skip' }").expect("options");
        assert_eq!(options.symbol_keys, SymbolKeyPolicy::Skip);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = MergeOptions::load_from_str("{ concat_arrays: true }").unwrap_err();
        assert!(matches!(err, MergeError::OptionsParse(_)));
        assert!(err.to_string().contains("concat_arrays"));
    }

    #[test]
    fn loads_from_file() {
        let temp = TempDir::new().expect("tmp");
        let path = temp.path().join("merge.json5");
        fs::write(&path, "{ // allow symbols\n symbol_keys: \"merge\" }").expect("write");
        let options = MergeOptions::load_from_path(&path).expect("options");
        assert_eq!(options, MergeOptions::new().with_symbol_keys(SymbolKeyPolicy::Merge));
    }

    #[test]
    fn missing_file_is_read_error() {
        let temp = TempDir::new().expect("tmp");
        let err = MergeOptions::load_from_path(temp.path().join("absent.json5")).unwrap_err();
        assert!(matches!(err, MergeError::OptionsRead(_)));
    }
}
