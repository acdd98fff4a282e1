use covenant_checkdigit::CheckDigitAlgorithm;
use covenant_core::{names, templates, FieldValue, ViolationClass};

use crate::error::GuardError;
use crate::requirement::Requirement;

impl<'a, S> Requirement<'a, S>
where
    S: AsRef<str> + Clone + Into<FieldValue>,
{
    /// Requires the value to carry a valid check digit under `algorithm`.
    pub fn valid_check_digit(self, algorithm: &dyn CheckDigitAlgorithm) -> Result<Self, GuardError> {
        if algorithm.validate(self.value.as_ref()) {
            return Ok(self);
        }
        Err(self.context.fail(
            self.failure("ValidCheckDigit", ViolationClass::Invalid, templates::VALID_CHECK_DIGIT),
            |b| {
                b.with_item(names::CHECK_DIGIT_ALGORITHM, algorithm.name())?;
                Ok(())
            },
        ))
    }
}
