use merge_partially::Value;

/// Structural copy of a value taken before a call, for purity checks.
#[derive(Debug, Clone)]
pub struct Snapshot {
    before: Value,
}

impl Snapshot {
    pub fn of(value: &Value) -> Self {
        Self {
            before: value.clone(),
        }
    }

    /// Panic if `value` differs structurally from the snapshot.
    pub fn assert_unchanged(&self, value: &Value) {
        assert_eq!(&self.before, value, "value was mutated");
    }
}
