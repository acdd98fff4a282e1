use covenant_core::{templates, FieldValue, ViolationClass};

use crate::error::GuardError;
use crate::requirement::Requirement;

impl<'a, T> Requirement<'a, T>
where
    T: Clone + Into<FieldValue>,
{
    pub fn equal_to<U>(self, target: U) -> Result<Self, GuardError>
    where
        T: PartialEq<U>,
        U: Into<FieldValue>,
    {
        if self.value == target {
            return Ok(self);
        }
        Err(self.fail_against("EqualTo", ViolationClass::Invalid, templates::EQUAL_TO, target.into()))
    }

    pub fn not_equal_to<U>(self, target: U) -> Result<Self, GuardError>
    where
        T: PartialEq<U>,
        U: Into<FieldValue>,
    {
        if self.value != target {
            return Ok(self);
        }
        Err(self.fail_against(
            "NotEqualTo",
            ViolationClass::Invalid,
            templates::NOT_EQUAL_TO,
            target.into(),
        ))
    }
}
