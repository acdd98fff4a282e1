//! Single-use builder for [`DiagnosticFields`].
//!
//! A guard creates one builder per failed check, appends the facts it knows
//! about the violation, and calls [`DiagnosticFieldBuilder::build`] exactly
//! once. Every `with_*` method that records a value alongside its source
//! expression rejects a missing or empty expression; values themselves are
//! stored as-is, including [`FieldValue::Null`].
//!
//! ```
//! use covenant_core::{DiagnosticFieldBuilder, RequirementKind};
//!
//! let mut builder = DiagnosticFieldBuilder::new();
//! builder
//!     .with_requirement(RequirementKind::Precondition, "Between")?
//!     .with_value(42, "value")?
//!     .with_lower_bound(0, "0")?
//!     .with_upper_bound(10, "10")?;
//! let fields = builder.build()?;
//! assert_eq!(fields.len(), 8);
//! # Ok::<(), covenant_core::UsageError>(())
//! ```

use indexmap::IndexMap;

use crate::error::UsageError;
use crate::fields::{names, DiagnosticFields};
use crate::kind::RequirementKind;
use crate::value::FieldValue;

/// Accumulates diagnostic fields in insertion order until built.
#[derive(Debug, Default)]
pub struct DiagnosticFieldBuilder {
    entries: IndexMap<String, FieldValue>,
    built: bool,
}

impl DiagnosticFieldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the requirement kind and the requirement name (e.g. `"Between"`).
    pub fn with_requirement(
        &mut self,
        kind: RequirementKind,
        name: &str,
    ) -> Result<&mut Self, UsageError> {
        self.ensure_open()?;
        let name = require_text(names::REQUIREMENT_NAME, Some(name))?;
        self.insert(names::REQUIREMENT_TYPE, kind.into())?;
        self.insert(names::REQUIREMENT_NAME, name.into())?;
        Ok(self)
    }

    /// Records the checked value and the expression it came from.
    pub fn with_value<'e>(
        &mut self,
        value: impl Into<FieldValue>,
        expression: impl Into<Option<&'e str>>,
    ) -> Result<&mut Self, UsageError> {
        self.pair(names::VALUE, names::VALUE_EXPRESSION, value.into(), expression.into())
    }

    /// Records the comparison target and its expression.
    pub fn with_target<'e>(
        &mut self,
        value: impl Into<FieldValue>,
        expression: impl Into<Option<&'e str>>,
    ) -> Result<&mut Self, UsageError> {
        self.pair(names::TARGET, names::TARGET_EXPRESSION, value.into(), expression.into())
    }

    pub fn with_lower_bound<'e>(
        &mut self,
        value: impl Into<FieldValue>,
        expression: impl Into<Option<&'e str>>,
    ) -> Result<&mut Self, UsageError> {
        self.pair(
            names::LOWER_BOUND,
            names::LOWER_BOUND_EXPRESSION,
            value.into(),
            expression.into(),
        )
    }

    pub fn with_upper_bound<'e>(
        &mut self,
        value: impl Into<FieldValue>,
        expression: impl Into<Option<&'e str>>,
    ) -> Result<&mut Self, UsageError> {
        self.pair(
            names::UPPER_BOUND,
            names::UPPER_BOUND_EXPRESSION,
            value.into(),
            expression.into(),
        )
    }

    pub fn with_min_length<'e>(
        &mut self,
        value: impl Into<FieldValue>,
        expression: impl Into<Option<&'e str>>,
    ) -> Result<&mut Self, UsageError> {
        self.pair(
            names::MIN_LENGTH,
            names::MIN_LENGTH_EXPRESSION,
            value.into(),
            expression.into(),
        )
    }

    pub fn with_max_length<'e>(
        &mut self,
        value: impl Into<FieldValue>,
        expression: impl Into<Option<&'e str>>,
    ) -> Result<&mut Self, UsageError> {
        self.pair(
            names::MAX_LENGTH,
            names::MAX_LENGTH_EXPRESSION,
            value.into(),
            expression.into(),
        )
    }

    pub fn with_epsilon<'e>(
        &mut self,
        value: impl Into<FieldValue>,
        expression: impl Into<Option<&'e str>>,
    ) -> Result<&mut Self, UsageError> {
        self.pair(names::EPSILON, names::EPSILON_EXPRESSION, value.into(), expression.into())
    }

    /// Records an arbitrary named field (regex pattern, algorithm name, ...).
    pub fn with_item(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<&mut Self, UsageError> {
        self.ensure_open()?;
        if name.trim().is_empty() {
            return Err(UsageError::EmptyExpression {
                field: "name".to_string(),
            });
        }
        self.insert(name, value.into())?;
        Ok(self)
    }

    /// Freezes the accumulated fields. A second call fails with
    /// [`UsageError::AlreadyBuilt`].
    pub fn build(&mut self) -> Result<DiagnosticFields, UsageError> {
        self.ensure_open()?;
        self.built = true;
        tracing::trace!(fields = self.entries.len(), "diagnostic fields built");
        Ok(DiagnosticFields::from_map(std::mem::take(&mut self.entries)))
    }

    fn pair(
        &mut self,
        value_field: &str,
        expression_field: &str,
        value: FieldValue,
        expression: Option<&str>,
    ) -> Result<&mut Self, UsageError> {
        self.ensure_open()?;
        let expression = require_text(value_field, expression)?;
        self.insert(value_field, value)?;
        self.insert(expression_field, expression.into())?;
        Ok(self)
    }

    fn insert(&mut self, name: &str, value: FieldValue) -> Result<(), UsageError> {
        if self.entries.contains_key(name) {
            return Err(UsageError::DuplicateField {
                name: name.to_string(),
            });
        }
        self.entries.insert(name.to_string(), value);
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), UsageError> {
        if self.built {
            return Err(UsageError::AlreadyBuilt);
        }
        Ok(())
    }
}

fn require_text<'e>(field: &str, text: Option<&'e str>) -> Result<&'e str, UsageError> {
    match text {
        None => Err(UsageError::MissingExpression {
            field: field.to_string(),
        }),
        Some(t) if t.trim().is_empty() => Err(UsageError::EmptyExpression {
            field: field.to_string(),
        }),
        Some(t) => Ok(t),
    }
}
