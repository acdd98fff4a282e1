//! Guard families. Each submodule adds methods to [`Requirement`](crate::Requirement).

mod approximate;
mod check_digit;
mod equality;
mod null;
mod ordering;
mod predicate;
mod strings;

pub use strings::StringComparison;

use covenant_core::{names, render, templates, DiagnosticFields, FieldValue, UsageError};

use crate::error::GuardError;

/// The usage fault raised when a range guard is given `lower > upper`.
pub(crate) fn malformed_bounds(
    name: &str,
    (lower, lower_expression): (FieldValue, &str),
    (upper, upper_expression): (FieldValue, &str),
) -> GuardError {
    let fields: DiagnosticFields = [
        (names::REQUIREMENT_NAME, FieldValue::from(name)),
        (names::LOWER_BOUND, lower),
        (names::LOWER_BOUND_EXPRESSION, FieldValue::from(lower_expression)),
        (names::UPPER_BOUND, upper),
        (names::UPPER_BOUND_EXPRESSION, FieldValue::from(upper_expression)),
    ]
    .into_iter()
    .collect();

    match render(templates::MALFORMED_BOUNDS, &fields) {
        Ok(message) => {
            tracing::warn!(requirement = name, %message, "range guard called with inverted bounds");
            GuardError::Usage(UsageError::MalformedBounds { message })
        }
        Err(err) => GuardError::Usage(err),
    }
}
