use covenant_core::{templates, ViolationClass};

use crate::error::GuardError;
use crate::requirement::{literal_expression, Requirement};

impl<'a> Requirement<'a, f64> {
    /// Requires `|value - target| <= epsilon`. A NaN anywhere fails.
    pub fn approximately_equal_to(self, target: f64, epsilon: f64) -> Result<Self, GuardError> {
        if (self.value - target).abs() <= epsilon {
            return Ok(self);
        }
        let target_expression = literal_expression(&target.into());
        let epsilon_expression = literal_expression(&epsilon.into());
        Err(self.context.fail(
            self.failure(
                "ApproximatelyEqualTo",
                ViolationClass::Invalid,
                templates::APPROXIMATELY_EQUAL_TO,
            ),
            |b| {
                b.with_target(target, target_expression.as_str())?
                    .with_epsilon(epsilon, epsilon_expression.as_str())?;
                Ok(())
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use covenant_core::{names, ErrorKind};

    use crate::requires;

    #[test]
    fn within_epsilon_passes() {
        let measured = 9.995;
        assert!(requires!(measured).approximately_equal_to(10.0, 0.01).is_ok());
    }

    #[test]
    fn outside_epsilon_records_target_and_epsilon() {
        let measured = 9.5;
        let err = requires!(measured).approximately_equal_to(10.0, 0.25).unwrap_err();
        let violation = err.violation().unwrap();
        assert_eq!(violation.kind(), ErrorKind::InvalidArgument);
        assert_eq!(*violation.field(names::TARGET).unwrap(), 10.0);
        assert_eq!(*violation.field(names::EPSILON).unwrap(), 0.25);
        assert_eq!(violation.field(names::EPSILON_EXPRESSION).unwrap(), "0.25");
    }

    #[test]
    fn nan_fails() {
        let measured = f64::NAN;
        assert!(requires!(measured).approximately_equal_to(0.0, 1.0).is_err());
    }
}
