//! Guard error type.

use covenant_core::{ContractError, ErrorKind, UsageError};
use thiserror::Error;

/// Errors returned by guard functions.
///
/// A `Violation` is the normal outcome of a failed check. A `Usage` error
/// means the guard itself was called incorrectly (for example with
/// `lower > upper`) and is passed through untouched.
#[derive(Debug, Clone, Error)]
pub enum GuardError {
    #[error(transparent)]
    Violation(#[from] ContractError),

    #[error(transparent)]
    Usage(#[from] UsageError),
}

impl GuardError {
    /// The contract error, if this is a violation.
    pub fn violation(&self) -> Option<&ContractError> {
        match self {
            GuardError::Violation(err) => Some(err),
            GuardError::Usage(_) => None,
        }
    }

    /// The usage fault, if the guard was misused.
    pub fn usage(&self) -> Option<&UsageError> {
        match self {
            GuardError::Usage(err) => Some(err),
            GuardError::Violation(_) => None,
        }
    }

    /// The contract error kind, for violations.
    pub fn kind(&self) -> Option<ErrorKind> {
        self.violation().map(ContractError::kind)
    }
}
