//! The diagnostic field set and its canonical field names.
//!
//! [`DiagnosticFields`] is an insertion-ordered, immutable mapping from field
//! name to [`FieldValue`]. It is produced once per failed check by the
//! [`DiagnosticFieldBuilder`](crate::builder::DiagnosticFieldBuilder), read by
//! the template renderer and the error factories, and then dropped.

use indexmap::IndexMap;
use serde::Serialize;

use crate::value::FieldValue;

/// Canonical diagnostic field names.
///
/// These are also the placeholder names accepted by message templates
/// (`{LowerBound}` etc.).
pub mod names {
    pub const REQUIREMENT_TYPE: &str = "RequirementType";
    pub const REQUIREMENT_NAME: &str = "RequirementName";
    pub const VALUE: &str = "Value";
    pub const VALUE_EXPRESSION: &str = "ValueExpression";
    pub const VALUE_TYPE_NAME: &str = "ValueTypeName";
    pub const TARGET: &str = "Target";
    pub const TARGET_EXPRESSION: &str = "TargetExpression";
    pub const LOWER_BOUND: &str = "LowerBound";
    pub const LOWER_BOUND_EXPRESSION: &str = "LowerBoundExpression";
    pub const UPPER_BOUND: &str = "UpperBound";
    pub const UPPER_BOUND_EXPRESSION: &str = "UpperBoundExpression";
    pub const MIN_LENGTH: &str = "MinLength";
    pub const MIN_LENGTH_EXPRESSION: &str = "MinLengthExpression";
    pub const MAX_LENGTH: &str = "MaxLength";
    pub const MAX_LENGTH_EXPRESSION: &str = "MaxLengthExpression";
    pub const EPSILON: &str = "Epsilon";
    pub const EPSILON_EXPRESSION: &str = "EpsilonExpression";
    pub const REGEX_PATTERN: &str = "RegexPattern";
    pub const REGEX_OPTIONS: &str = "RegexOptions";
    pub const STRING_COMPARISON: &str = "StringComparison";
    pub const CHECK_DIGIT_ALGORITHM: &str = "CheckDigitAlgorithm";
}

/// Ordered, immutable set of named diagnostic facts about one violation.
///
/// Keys are unique. Construction from an iterator keeps the first position of
/// a repeated key and the last value written to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DiagnosticFields {
    entries: IndexMap<String, FieldValue>,
}

impl DiagnosticFields {
    pub(crate) fn from_map(entries: IndexMap<String, FieldValue>) -> Self {
        DiagnosticFields { entries }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for DiagnosticFields {
    fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
        DiagnosticFields {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
