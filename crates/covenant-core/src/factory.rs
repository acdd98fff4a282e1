//! The error factory family.
//!
//! Every factory runs the same pipeline and differs only in the
//! [`ErrorKind`] it stamps on the result:
//!
//! 1. reject a missing field set or a missing/blank template,
//! 2. apply the factory's [`TransformRegistry`] to get a masked copy,
//! 3. render the message from the masked copy,
//! 4. attach the masked fields to the error,
//! 5. for argument-style kinds, derive the parameter name from the original
//!    (unmasked) `ValueExpression`, and for out-of-range errors record the
//!    masked `Value` as the actual value.
//!
//! The process-wide default factories are plain `static` items with empty
//! registries. Factories with transforms are built once by the caller and
//! shared read-only.

use crate::error::{ContractError, ErrorKind, UsageError};
use crate::fields::{names, DiagnosticFields};
use crate::identity::extract_parameter_name;
use crate::masking::TransformRegistry;
use crate::template::render;

/// Builds a [`ContractError`] from a field set and a message template.
pub trait ErrorFactory: Send + Sync {
    /// The kind of error this factory produces.
    fn kind(&self) -> ErrorKind;

    fn create_error(
        &self,
        fields: Option<&DiagnosticFields>,
        template: Option<&str>,
    ) -> Result<ContractError, UsageError>;
}

/// The standard [`ErrorFactory`] implementation, one instance per kind.
#[derive(Debug, Clone)]
pub struct ContractErrorFactory {
    kind: ErrorKind,
    transforms: TransformRegistry,
}

pub static NULL_ARGUMENT: ContractErrorFactory = ContractErrorFactory::new(ErrorKind::NullArgument);
pub static INVALID_ARGUMENT: ContractErrorFactory =
    ContractErrorFactory::new(ErrorKind::InvalidArgument);
pub static OUT_OF_RANGE: ContractErrorFactory = ContractErrorFactory::new(ErrorKind::OutOfRange);
pub static INVALID_OPERATION: ContractErrorFactory =
    ContractErrorFactory::new(ErrorKind::InvalidOperation);
pub static NOT_SUPPORTED: ContractErrorFactory = ContractErrorFactory::new(ErrorKind::NotSupported);
pub static BAD_FORMAT: ContractErrorFactory = ContractErrorFactory::new(ErrorKind::BadFormat);
pub static POSTCONDITION_FAILED: ContractErrorFactory =
    ContractErrorFactory::new(ErrorKind::PostconditionFailed);

impl ContractErrorFactory {
    /// A factory for `kind` with no value transforms.
    pub const fn new(kind: ErrorKind) -> Self {
        ContractErrorFactory {
            kind,
            transforms: TransformRegistry::empty(),
        }
    }

    /// Replaces the factory's transform registry.
    pub fn with_transforms(mut self, transforms: TransformRegistry) -> Self {
        self.transforms = transforms;
        self
    }

    pub fn transforms(&self) -> &TransformRegistry {
        &self.transforms
    }

    /// The shared default factory for `kind`.
    pub fn standard(kind: ErrorKind) -> &'static ContractErrorFactory {
        match kind {
            ErrorKind::NullArgument => &NULL_ARGUMENT,
            ErrorKind::InvalidArgument => &INVALID_ARGUMENT,
            ErrorKind::OutOfRange => &OUT_OF_RANGE,
            ErrorKind::InvalidOperation => &INVALID_OPERATION,
            ErrorKind::NotSupported => &NOT_SUPPORTED,
            ErrorKind::BadFormat => &BAD_FORMAT,
            ErrorKind::PostconditionFailed => &POSTCONDITION_FAILED,
        }
    }
}

impl ErrorFactory for ContractErrorFactory {
    fn kind(&self) -> ErrorKind {
        self.kind
    }

    fn create_error(
        &self,
        fields: Option<&DiagnosticFields>,
        template: Option<&str>,
    ) -> Result<ContractError, UsageError> {
        let fields = fields.ok_or(UsageError::MissingFields)?;
        let template = template.ok_or(UsageError::MissingTemplate)?;
        if template.trim().is_empty() {
            return Err(UsageError::EmptyTemplate);
        }

        let transformed = self.transforms.apply(fields);
        let message = render(template, &transformed)?;
        let actual_value = transformed.get(names::VALUE).cloned();

        let mut error = ContractError::new(self.kind, message, transformed);
        if self.kind.is_argument_error() {
            error.set_parameter_name(extract_parameter_name(fields));
        }
        if self.kind == ErrorKind::OutOfRange {
            if let Some(actual) = actual_value {
                error.set_actual_value(actual);
            }
        }

        tracing::debug!(
            kind = %self.kind,
            parameter = error.parameter_name().unwrap_or(""),
            fields = error.fields().len(),
            "contract error created"
        );
        Ok(error)
    }
}
