//! Default error factory selection by requirement kind.
//!
//! | Kind          | Null                 | Invalid              | Range                |
//! |---------------|----------------------|----------------------|----------------------|
//! | Precondition  | null-argument        | invalid-argument     | out-of-range         |
//! | Postcondition | postcondition-failed | postcondition-failed | postcondition-failed |
//!
//! A factory supplied explicitly by the caller always wins.

use serde::{Deserialize, Serialize};

use crate::factory::{self, ContractErrorFactory, ErrorFactory};
use crate::kind::RequirementKind;

/// Which family of violation a guard detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationClass {
    /// A required value was absent.
    Null,
    /// A value failed a non-range check.
    Invalid,
    /// A value fell outside an ordering or length range.
    Range,
}

/// The default factory for a violation of `class` under `kind`.
pub fn resolve_factory(kind: RequirementKind, class: ViolationClass) -> &'static ContractErrorFactory {
    match (kind, class) {
        (RequirementKind::Precondition, ViolationClass::Null) => &factory::NULL_ARGUMENT,
        (RequirementKind::Precondition, ViolationClass::Invalid) => &factory::INVALID_ARGUMENT,
        (RequirementKind::Precondition, ViolationClass::Range) => &factory::OUT_OF_RANGE,
        (RequirementKind::Postcondition, _) => &factory::POSTCONDITION_FAILED,
    }
}

/// Returns `explicit` when given, otherwise the default from [`resolve_factory`].
pub fn select_factory<'a>(
    kind: RequirementKind,
    class: ViolationClass,
    explicit: Option<&'a dyn ErrorFactory>,
) -> &'a dyn ErrorFactory {
    match explicit {
        Some(factory) => factory,
        None => resolve_factory(kind, class),
    }
}
