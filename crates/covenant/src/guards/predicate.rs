use covenant_core::{templates, FieldValue, ViolationClass};

use crate::error::GuardError;
use crate::requirement::Requirement;

impl<'a, T> Requirement<'a, T>
where
    T: Clone + Into<FieldValue>,
{
    /// Requires `predicate` to hold. `name` becomes the requirement name in
    /// the diagnostics, so pick something a reader will recognize.
    pub fn satisfies<F>(self, name: &str, predicate: F) -> Result<Self, GuardError>
    where
        F: FnOnce(&T) -> bool,
    {
        if predicate(&self.value) {
            return Ok(self);
        }
        Err(self.context.fail(
            self.failure(name, ViolationClass::Invalid, templates::SATISFIES),
            |_| Ok(()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use covenant_core::{ErrorKind, UsageError};

    use crate::requires;

    #[test]
    fn predicate_result_decides() {
        let port = 8080;
        assert!(requires!(port).satisfies("IsEven", |p| p % 2 == 0).is_ok());

        let err = requires!(port).satisfies("IsPrivileged", |p| *p < 1024).unwrap_err();
        let violation = err.violation().unwrap();
        assert_eq!(violation.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            violation.message(),
            "Precondition IsPrivileged failed: port did not satisfy the requirement"
        );
    }

    #[test]
    fn blank_name_is_a_usage_fault() {
        let port = 1;
        let err = requires!(port).satisfies(" ", |_| false).unwrap_err();
        assert!(matches!(err.usage(), Some(UsageError::EmptyExpression { .. })));
    }
}
