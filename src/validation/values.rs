//! Snapshot of form values taken for one validation pass

use std::fmt;

use zeroize::Zeroize;

use super::field::Field;

/// Field values read from the form, indexed by [`Field`]
///
/// Contents are wiped when the snapshot is dropped. The snapshot owns its
/// strings; the inputs they were read from wipe their own copies.
#[derive(Clone, Default, Zeroize)]
pub struct FieldValues {
    values: [String; 7],
}

impl FieldValues {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value (builder style)
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Set a value
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = &mut self.values[field.index()];
        slot.zeroize();
        *slot = value.into();
    }

    /// Get a value
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }
}

impl Drop for FieldValues {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for FieldValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for field in Field::ALL {
            if field.is_secret() {
                map.entry(&field.id(), &"***");
            } else {
                map.entry(&field.id(), &self.get(field));
            }
        }
        map.finish()
    }
}
