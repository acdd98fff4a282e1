//! Design-by-contract guards with structured diagnostics.
//!
//! ```
//! use covenant::{requires, ErrorKind};
//!
//! let value = 42;
//! let err = requires!(value).between(0, 10).unwrap_err();
//! assert_eq!(err.kind(), Some(ErrorKind::OutOfRange));
//! assert!(err.to_string().contains("must be between 0 and 10"));
//! ```
//!
//! The diagnostic engine lives in [`covenant_core`] and the check-digit
//! algorithms in [`covenant_checkdigit`]; both are re-exported here.

pub mod error;
pub mod guards;
pub mod requirement;

pub use covenant_checkdigit;
pub use covenant_core;

pub use covenant_checkdigit::{CheckDigitAlgorithm, StandardCheckDigitAlgorithms};
pub use covenant_core::{
    names, templates, ContractError, ContractErrorFactory, DiagnosticFields, ErrorFactory,
    ErrorKind, FieldValue, RequirementKind, TransformRegistry, UsageError, ValueMasker,
};
pub use error::GuardError;
pub use guards::StringComparison;
pub use requirement::Requirement;

/// Starts a precondition check on an expression, recording its source text.
///
/// `requires!(expr, "template")` also overrides the message template.
#[macro_export]
macro_rules! requires {
    ($value:expr) => {
        $crate::Requirement::precondition($value, stringify!($value))
    };
    ($value:expr, $template:expr) => {
        $crate::Requirement::precondition($value, stringify!($value)).with_message($template)
    };
}

/// Starts a postcondition check on an expression, recording its source text.
#[macro_export]
macro_rules! ensures {
    ($value:expr) => {
        $crate::Requirement::postcondition($value, stringify!($value))
    };
    ($value:expr, $template:expr) => {
        $crate::Requirement::postcondition($value, stringify!($value)).with_message($template)
    };
}
