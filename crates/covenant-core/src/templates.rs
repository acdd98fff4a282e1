//! Default message templates, one per requirement.
//!
//! Callers may match on the rendered text, so changing any of these strings
//! is a breaking change.

pub const NOT_NULL: &str = "{RequirementType} {RequirementName} failed: {ValueExpression} must not be null";

pub const EQUAL_TO: &str =
    "{RequirementType} {RequirementName} failed: {ValueExpression} must be equal to {Target}";

pub const NOT_EQUAL_TO: &str =
    "{RequirementType} {RequirementName} failed: {ValueExpression} must not be equal to {Target}";

pub const GREATER_THAN: &str =
    "{RequirementType} {RequirementName} failed: {ValueExpression} must be greater than {Target}";

pub const GREATER_THAN_OR_EQUAL_TO: &str = "{RequirementType} {RequirementName} failed: {ValueExpression} must be greater than or equal to {Target}";

pub const LESS_THAN: &str =
    "{RequirementType} {RequirementName} failed: {ValueExpression} must be less than {Target}";

pub const LESS_THAN_OR_EQUAL_TO: &str = "{RequirementType} {RequirementName} failed: {ValueExpression} must be less than or equal to {Target}";

pub const BETWEEN: &str = "{RequirementType} {RequirementName} failed: {ValueExpression} must be between {LowerBound} and {UpperBound} (inclusive)";

pub const APPROXIMATELY_EQUAL_TO: &str = "{RequirementType} {RequirementName} failed: {ValueExpression} must be within {Epsilon} of {Target}";

pub const NOT_EMPTY: &str =
    "{RequirementType} {RequirementName} failed: {ValueExpression} must not be empty";

pub const STARTS_WITH: &str =
    "{RequirementType} {RequirementName} failed: {ValueExpression} must start with {Target}";

pub const ENDS_WITH: &str =
    "{RequirementType} {RequirementName} failed: {ValueExpression} must end with {Target}";

pub const CONTAINS: &str =
    "{RequirementType} {RequirementName} failed: {ValueExpression} must contain {Target}";

pub const MIN_LENGTH: &str = "{RequirementType} {RequirementName} failed: {ValueExpression} must have a length of at least {MinLength}";

pub const MAX_LENGTH: &str = "{RequirementType} {RequirementName} failed: {ValueExpression} must have a length of at most {MaxLength}";

pub const LENGTH_BETWEEN: &str = "{RequirementType} {RequirementName} failed: {ValueExpression} must have a length between {MinLength} and {MaxLength} (inclusive)";

pub const MATCHES: &str = "{RequirementType} {RequirementName} failed: {ValueExpression} must match the pattern {RegexPattern}";

pub const VALID_CHECK_DIGIT: &str = "{RequirementType} {RequirementName} failed: {ValueExpression} must have a valid {CheckDigitAlgorithm} check digit";

pub const SATISFIES: &str =
    "{RequirementType} {RequirementName} failed: {ValueExpression} did not satisfy the requirement";

/// Internal fault: a range guard was called with `lower > upper`.
pub const MALFORMED_BOUNDS: &str = "{RequirementName} called with lower bound {LowerBound} ({LowerBoundExpression}) greater than upper bound {UpperBound} ({UpperBoundExpression})";
