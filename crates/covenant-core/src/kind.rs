//! Requirement kinds: precondition or postcondition.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UsageError;
use crate::value::FieldValue;

/// Whether a check guards a caller-supplied argument or a produced result.
///
/// Drives the default error factory (see [`crate::resolver`]) and is recorded
/// in every diagnostic field set under [`crate::names::REQUIREMENT_TYPE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequirementKind {
    Precondition,
    Postcondition,
}

impl RequirementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementKind::Precondition => "Precondition",
            RequirementKind::Postcondition => "Postcondition",
        }
    }
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RequirementKind> for FieldValue {
    fn from(kind: RequirementKind) -> Self {
        FieldValue::tag("RequirementKind", kind.as_str())
    }
}

/// Raw discriminants: `0` = precondition, `1` = postcondition.
impl TryFrom<i32> for RequirementKind {
    type Error = UsageError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RequirementKind::Precondition),
            1 => Ok(RequirementKind::Postcondition),
            other => Err(UsageError::UndefinedRequirementKind {
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for RequirementKind {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("precondition") {
            Ok(RequirementKind::Precondition)
        } else if s.eq_ignore_ascii_case("postcondition") {
            Ok(RequirementKind::Postcondition)
        } else {
            Err(UsageError::UndefinedRequirementKind {
                value: s.to_string(),
            })
        }
    }
}
