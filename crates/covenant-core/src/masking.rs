//! Value transforms and masking.
//!
//! A [`ValueTransform`] turns one diagnostic value into a display-safe string.
//! [`ValueMasker`] is the standard transform: it replaces every character of
//! the value's default string form with a mask character.
//!
//! A [`TransformRegistry`] binds transforms to field names. It is configured
//! once when a factory is constructed and is read-only afterwards, so a single
//! registry can be shared by any number of concurrent callers.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::fields::DiagnosticFields;
use crate::value::FieldValue;

/// A pure function from a diagnostic value to its display string.
pub trait ValueTransform: Send + Sync {
    fn transform(&self, value: &FieldValue) -> String;
}

impl<F> ValueTransform for F
where
    F: Fn(&FieldValue) -> String + Send + Sync,
{
    fn transform(&self, value: &FieldValue) -> String {
        self(value)
    }
}

/// Replaces each character of a value with a fixed mask character.
///
/// `Null` and empty values mask to the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueMasker {
    pub mask: char,
}

impl ValueMasker {
    pub const fn new(mask: char) -> Self {
        ValueMasker { mask }
    }

    pub fn mask(&self, value: &FieldValue) -> String {
        if value.is_null() {
            return String::new();
        }
        let count = value.to_string().chars().count();
        std::iter::repeat(self.mask).take(count).collect()
    }
}

impl Default for ValueMasker {
    fn default() -> Self {
        ValueMasker::new('*')
    }
}

impl ValueTransform for ValueMasker {
    fn transform(&self, value: &FieldValue) -> String {
        self.mask(value)
    }
}

/// Maps diagnostic field names to the transform applied to their values.
#[derive(Clone, Default)]
pub struct TransformRegistry {
    entries: Vec<(String, Arc<dyn ValueTransform>)>,
}

impl TransformRegistry {
    /// A registry that transforms nothing.
    pub const fn empty() -> Self {
        TransformRegistry {
            entries: Vec::new(),
        }
    }

    /// Binds one shared transform to every name in `field_names`.
    pub fn for_fields<I, S>(field_names: I, transform: impl ValueTransform + 'static) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let shared: Arc<dyn ValueTransform> = Arc::new(transform);
        let mut entries: Vec<(String, Arc<dyn ValueTransform>)> = Vec::new();
        for name in field_names {
            let name = name.into();
            if !entries.iter().any(|(existing, _)| *existing == name) {
                entries.push((name, Arc::clone(&shared)));
            }
        }
        TransformRegistry { entries }
    }

    /// Uses an explicit one-to-one mapping from field name to transform.
    pub fn from_map(map: IndexMap<String, Arc<dyn ValueTransform>>) -> Self {
        TransformRegistry {
            entries: map.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, field_name: &str) -> bool {
        self.lookup(field_name).is_some()
    }

    /// Returns a new field set in which every registered field carries its
    /// transformed string. Unregistered fields keep their original value and
    /// type. The input is left untouched.
    pub fn apply(&self, fields: &DiagnosticFields) -> DiagnosticFields {
        if self.entries.is_empty() {
            return fields.clone();
        }
        let transformed: IndexMap<String, FieldValue> = fields
            .iter()
            .map(|(name, value)| {
                let value = match self.lookup(name) {
                    Some(transform) => FieldValue::Text(transform.transform(value)),
                    None => value.clone(),
                };
                (name.to_string(), value)
            })
            .collect();
        tracing::trace!(registered = self.entries.len(), "applied value transforms");
        DiagnosticFields::from_map(transformed)
    }

    fn lookup(&self, field_name: &str) -> Option<&Arc<dyn ValueTransform>> {
        self.entries
            .iter()
            .find(|(name, _)| name == field_name)
            .map(|(_, transform)| transform)
    }
}

impl std::fmt::Debug for TransformRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformRegistry")
            .field("fields", &self.entries.iter().map(|(n, _)| n).collect::<Vec<_>>())
            .finish()
    }
}
