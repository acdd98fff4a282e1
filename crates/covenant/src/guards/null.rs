use covenant_core::{templates, FieldValue, ViolationClass};

use crate::error::GuardError;
use crate::requirement::{Failure, Requirement};

impl<'a, T> Requirement<'a, Option<T>> {
    /// Requires `Some`, unwrapping the value for the rest of the chain.
    pub fn not_null(self) -> Result<Requirement<'a, T>, GuardError> {
        let Requirement { value, context } = self;
        match value {
            Some(value) => Ok(Requirement { value, context }),
            None => Err(context.fail(
                Failure {
                    name: "NotNull",
                    class: ViolationClass::Null,
                    template: templates::NOT_NULL,
                    value: FieldValue::Null,
                    type_name: std::any::type_name::<Option<T>>(),
                },
                |_| Ok(()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use covenant_core::{names, ErrorKind};

    use super::*;
    use crate::requires;

    #[test]
    fn some_is_unwrapped() {
        let name = Some("ada");
        assert_eq!(requires!(name).not_null().unwrap().into_inner(), "ada");
    }

    #[test]
    fn none_is_a_null_argument_error() {
        let name: Option<&str> = None;
        let err = requires!(name).not_null().unwrap_err();
        let violation = err.violation().unwrap();

        assert_eq!(violation.kind(), ErrorKind::NullArgument);
        assert_eq!(violation.message(), "Precondition NotNull failed: name must not be null");
        assert_eq!(violation.parameter_name(), Some("name"));
        assert_eq!(violation.field(names::VALUE), Some(&FieldValue::Null));
        let type_name = violation.field(names::VALUE_TYPE_NAME).and_then(FieldValue::as_str);
        assert!(type_name.unwrap().contains("Option"));
    }
}
