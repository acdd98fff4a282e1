//! Error types for the diagnostic engine.
//!
//! Two families, never mixed:
//! - [`UsageError`]: misuse of the engine's own API (missing template,
//!   builder reuse, empty expressions, malformed bounds). Programmer errors.
//! - [`ContractError`]: the designed product of a failed check. Carries the
//!   rendered message and the full, possibly masked, diagnostic field set.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::fields::DiagnosticFields;
use crate::value::FieldValue;

/// Faults raised when the engine itself is used incorrectly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// No message template was supplied.
    #[error("message template is missing")]
    MissingTemplate,

    /// The message template is empty or whitespace only.
    #[error("message template is empty or whitespace")]
    EmptyTemplate,

    /// No diagnostic field set was supplied.
    #[error("diagnostic fields are missing")]
    MissingFields,

    /// `build()` was already called on this builder.
    #[error("diagnostic fields have already been built")]
    AlreadyBuilt,

    /// A builder method was given no source expression.
    #[error("expression for field '{field}' is missing")]
    MissingExpression { field: String },

    /// A builder method was given an empty source expression.
    #[error("expression for field '{field}' is empty")]
    EmptyExpression { field: String },

    /// A field name was added twice to the same builder.
    #[error("duplicate diagnostic field: '{name}'")]
    DuplicateField { name: String },

    /// A requirement kind outside precondition/postcondition.
    #[error("undefined requirement kind: '{value}'")]
    UndefinedRequirementKind { value: String },

    /// A range guard was given a lower bound above its upper bound.
    #[error("malformed bounds: {message}")]
    MalformedBounds { message: String },
}

/// The kind of contract error produced by a factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A required value was absent.
    NullArgument,
    /// An argument failed a check.
    InvalidArgument,
    /// An argument fell outside an allowed range.
    OutOfRange,
    /// The operation is invalid for the current state.
    InvalidOperation,
    /// The operation is not supported.
    NotSupported,
    /// A value has the wrong format.
    BadFormat,
    /// A postcondition did not hold.
    PostconditionFailed,
}

impl ErrorKind {
    /// Argument-style errors name the offending parameter.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::NullArgument | ErrorKind::InvalidArgument | ErrorKind::OutOfRange
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NullArgument => "NullArgument",
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::OutOfRange => "OutOfRange",
            ErrorKind::InvalidOperation => "InvalidOperation",
            ErrorKind::NotSupported => "NotSupported",
            ErrorKind::BadFormat => "BadFormat",
            ErrorKind::PostconditionFailed => "PostconditionFailed",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed contract check.
///
/// Created once by an [`ErrorFactory`](crate::factory::ErrorFactory) and never
/// mutated afterwards. Every diagnostic field is retrievable by name through
/// [`ContractError::field`].
///
/// `Display` follows the argument-error convention: the rendered message,
/// then ` (Parameter 'name')` when a parameter identity is known, then the
/// actual value on its own line for out-of-range errors.
#[derive(Debug, Clone, Serialize, Error)]
#[error("{message}{}", display_suffix(.parameter_name.as_deref(), .actual_value.as_ref()))]
pub struct ContractError {
    kind: ErrorKind,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameter_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    actual_value: Option<FieldValue>,
    fields: DiagnosticFields,
}

impl ContractError {
    pub(crate) fn new(kind: ErrorKind, message: String, fields: DiagnosticFields) -> Self {
        ContractError {
            kind,
            message,
            parameter_name: None,
            actual_value: None,
            fields,
        }
    }

    pub(crate) fn set_parameter_name(&mut self, name: String) {
        self.parameter_name = Some(name);
    }

    pub(crate) fn set_actual_value(&mut self, value: FieldValue) {
        self.actual_value = Some(value);
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The rendered message, without parameter or actual-value suffixes.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The parameter identity, for argument-style errors.
    pub fn parameter_name(&self) -> Option<&str> {
        self.parameter_name.as_deref()
    }

    /// The (possibly masked) offending value, for out-of-range errors.
    pub fn actual_value(&self) -> Option<&FieldValue> {
        self.actual_value.as_ref()
    }

    /// Looks up a single diagnostic field by name.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &DiagnosticFields {
        &self.fields
    }

    /// Exports the error, including all fields in insertion order, as JSON.
    pub fn to_json(&self) -> serde_json::Value {
        // Every component serializes infallibly (string keys, plain scalars).
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// The argument-error tail of a [`ContractError`] display string.
fn display_suffix(parameter_name: Option<&str>, actual_value: Option<&FieldValue>) -> String {
    let mut suffix = String::new();
    if let Some(name) = parameter_name.filter(|n| !n.is_empty()) {
        suffix.push_str(&format!(" (Parameter '{name}')"));
    }
    if let Some(actual) = actual_value {
        suffix.push_str(&format!("\nActual value was {actual}."));
    }
    suffix
}
