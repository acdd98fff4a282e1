//! Parameter identity extraction.
//!
//! The expression recorded for a checked value may be a whole fluent chain,
//! e.g. `value.RequiresNotNull().RequiresGreaterThanZero()` or, spread across
//! lines, `order\n    .quantity\n    .requires_positive()`. The parameter name
//! attached to an argument error is the text before the first
//! precondition/postcondition call in that chain.

use std::sync::LazyLock;

use regex::Regex;

use crate::fields::{names, DiagnosticFields};

/// A `.` (with any surrounding whitespace, newlines included) followed by a
/// precondition or postcondition call name.
static CHAIN_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\.\s*(?:Requires|Ensures|requires|ensures)").expect("invalid regex")
});

/// Reduces a chained-call expression to the identifier it starts from.
pub fn parameter_name_from_expression(expression: &str) -> &str {
    let head = match CHAIN_CALL.find(expression) {
        Some(m) => &expression[..m.start()],
        None => expression,
    };
    head.trim().trim_end_matches('.').trim_end()
}

/// Returns the parameter name for the `ValueExpression` field, or an empty
/// string when the field set has none.
pub fn extract_parameter_name(fields: &DiagnosticFields) -> String {
    match fields.get(names::VALUE_EXPRESSION) {
        Some(expression) => parameter_name_from_expression(&expression.to_string()).to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FieldValue;

    #[test]
    fn plain_identifier_is_unchanged() {
        assert_eq!(parameter_name_from_expression("value"), "value");
        assert_eq!(parameter_name_from_expression("  value  "), "value");
    }

    #[test]
    fn strips_single_chain_call() {
        assert_eq!(parameter_name_from_expression("value.RequiresNotNull()"), "value");
        assert_eq!(parameter_name_from_expression("result.EnsuresNotEmpty()"), "result");
        assert_eq!(parameter_name_from_expression("count.requires_positive()"), "count");
    }

    #[test]
    fn strips_at_first_of_many_calls() {
        assert_eq!(
            parameter_name_from_expression("value.RequiresNotNull().RequiresGreaterThanZero()"),
            "value"
        );
    }

    #[test]
    fn keeps_member_access_before_the_chain() {
        assert_eq!(
            parameter_name_from_expression("order.Quantity.RequiresGreaterThan(0)"),
            "order.Quantity"
        );
    }

    #[test]
    fn multi_line_chains_reduce_to_the_same_identifier() {
        let expr = "value\n        .RequiresNotNull()\n        .RequiresGreaterThanZero()";
        assert_eq!(parameter_name_from_expression(expr), "value");

        let expr = "value   \r\n\t.\n   RequiresNotNull()";
        assert_eq!(parameter_name_from_expression(expr), "value");
    }

    #[test]
    fn identifiers_containing_marker_words_are_not_cut() {
        assert_eq!(parameter_name_from_expression("requirements"), "requirements");
        assert_eq!(parameter_name_from_expression("ensuresCount"), "ensuresCount");
    }

    #[test]
    fn extracts_from_field_set() {
        let fields = DiagnosticFields::from_iter([(
            names::VALUE_EXPRESSION,
            FieldValue::from("amount.RequiresBetween(0, 10)"),
        )]);
        assert_eq!(extract_parameter_name(&fields), "amount");
        assert_eq!(extract_parameter_name(&DiagnosticFields::default()), "");
    }
}
