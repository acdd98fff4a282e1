//! String guards. Lengths are counted in `char`s, not bytes.

use std::borrow::Cow;

use covenant_core::{names, templates, FieldValue, ViolationClass};
use regex::Regex;

use super::malformed_bounds;
use crate::error::GuardError;
use crate::requirement::{literal_expression, Requirement};

/// How `starts_with`/`ends_with`/`contains` compare text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StringComparison {
    /// Exact code point comparison.
    #[default]
    Ordinal,
    /// Comparison after Unicode lowercasing of both sides.
    IgnoreCase,
}

impl StringComparison {
    pub fn as_str(&self) -> &'static str {
        match self {
            StringComparison::Ordinal => "Ordinal",
            StringComparison::IgnoreCase => "IgnoreCase",
        }
    }

    fn normalize<'s>(&self, text: &'s str) -> Cow<'s, str> {
        match self {
            StringComparison::Ordinal => Cow::Borrowed(text),
            StringComparison::IgnoreCase => Cow::Owned(text.to_lowercase()),
        }
    }
}

impl From<StringComparison> for FieldValue {
    fn from(comparison: StringComparison) -> Self {
        FieldValue::tag("StringComparison", comparison.as_str())
    }
}

impl<'a, S> Requirement<'a, S>
where
    S: AsRef<str> + Clone + Into<FieldValue>,
{
    pub fn not_empty(self) -> Result<Self, GuardError> {
        if !self.value.as_ref().is_empty() {
            return Ok(self);
        }
        Err(self.context.fail(
            self.failure("NotEmpty", ViolationClass::Invalid, templates::NOT_EMPTY),
            |_| Ok(()),
        ))
    }

    pub fn starts_with(self, prefix: &str) -> Result<Self, GuardError> {
        self.starts_with_using(prefix, StringComparison::Ordinal)
    }

    pub fn starts_with_using(
        self,
        prefix: &str,
        comparison: StringComparison,
    ) -> Result<Self, GuardError> {
        let passed = comparison
            .normalize(self.value.as_ref())
            .starts_with(comparison.normalize(prefix).as_ref());
        self.check_text("StartsWith", templates::STARTS_WITH, passed, prefix, comparison)
    }

    pub fn ends_with(self, suffix: &str) -> Result<Self, GuardError> {
        self.ends_with_using(suffix, StringComparison::Ordinal)
    }

    pub fn ends_with_using(
        self,
        suffix: &str,
        comparison: StringComparison,
    ) -> Result<Self, GuardError> {
        let passed = comparison
            .normalize(self.value.as_ref())
            .ends_with(comparison.normalize(suffix).as_ref());
        self.check_text("EndsWith", templates::ENDS_WITH, passed, suffix, comparison)
    }

    pub fn contains(self, needle: &str) -> Result<Self, GuardError> {
        self.contains_using(needle, StringComparison::Ordinal)
    }

    pub fn contains_using(
        self,
        needle: &str,
        comparison: StringComparison,
    ) -> Result<Self, GuardError> {
        let passed = comparison
            .normalize(self.value.as_ref())
            .contains(comparison.normalize(needle).as_ref());
        self.check_text("Contains", templates::CONTAINS, passed, needle, comparison)
    }

    pub fn min_length(self, min: usize) -> Result<Self, GuardError> {
        self.min_length_expr(min, &min.to_string())
    }

    /// [`min_length`](Self::min_length) recording `expression` as the
    /// source text of the limit.
    pub fn min_length_expr(self, min: usize, expression: &str) -> Result<Self, GuardError> {
        if self.char_len() >= min {
            return Ok(self);
        }
        Err(self.context.fail(
            self.failure("MinLength", ViolationClass::Range, templates::MIN_LENGTH),
            |b| {
                b.with_min_length(min, expression)?;
                Ok(())
            },
        ))
    }

    pub fn max_length(self, max: usize) -> Result<Self, GuardError> {
        self.max_length_expr(max, &max.to_string())
    }

    pub fn max_length_expr(self, max: usize, expression: &str) -> Result<Self, GuardError> {
        if self.char_len() <= max {
            return Ok(self);
        }
        Err(self.context.fail(
            self.failure("MaxLength", ViolationClass::Range, templates::MAX_LENGTH),
            |b| {
                b.with_max_length(max, expression)?;
                Ok(())
            },
        ))
    }

    /// Requires `min <= length <= max`; `min > max` is a usage fault.
    pub fn length_between(self, min: usize, max: usize) -> Result<Self, GuardError> {
        self.length_between_expr(min, &min.to_string(), max, &max.to_string())
    }

    pub fn length_between_expr(
        self,
        min: usize,
        min_expression: &str,
        max: usize,
        max_expression: &str,
    ) -> Result<Self, GuardError> {
        if min > max {
            return Err(malformed_bounds(
                "LengthBetween",
                (min.into(), min_expression),
                (max.into(), max_expression),
            ));
        }
        if (min..=max).contains(&self.char_len()) {
            return Ok(self);
        }
        Err(self.context.fail(
            self.failure("LengthBetween", ViolationClass::Range, templates::LENGTH_BETWEEN),
            |b| {
                b.with_min_length(min, min_expression)?
                    .with_max_length(max, max_expression)?;
                Ok(())
            },
        ))
    }

    /// Requires `pattern` to match somewhere in the value. Anchor the
    /// pattern (`^...$`) for a full match.
    pub fn matches(self, pattern: &Regex) -> Result<Self, GuardError> {
        if pattern.is_match(self.value.as_ref()) {
            return Ok(self);
        }
        Err(self.context.fail(
            self.failure("Matches", ViolationClass::Invalid, templates::MATCHES),
            |b| {
                b.with_item(names::REGEX_PATTERN, pattern.as_str())?;
                Ok(())
            },
        ))
    }

    fn char_len(&self) -> usize {
        self.value.as_ref().chars().count()
    }

    fn check_text(
        self,
        name: &str,
        template: &str,
        passed: bool,
        target: &str,
        comparison: StringComparison,
    ) -> Result<Self, GuardError> {
        if passed {
            return Ok(self);
        }
        let target = FieldValue::from(target);
        let expression = literal_expression(&target);
        Err(self.context.fail(self.failure(name, ViolationClass::Invalid, template), |b| {
            b.with_target(target, expression.as_str())?
                .with_item(names::STRING_COMPARISON, comparison)?;
            Ok(())
        }))
    }
}

#[cfg(test)]
mod tests {
    use covenant_core::ErrorKind;

    use super::*;
    use crate::requires;

    #[test]
    fn empty_text_fails_not_empty() {
        let title = "";
        let err = requires!(title).not_empty().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Precondition NotEmpty failed: title must not be empty (Parameter 'title')"
        );
        let title = String::from("x");
        assert!(requires!(title).not_empty().is_ok());
    }

    #[test]
    fn affixes_respect_comparison() {
        let url = "HTTPS://example.com";
        assert!(requires!(url).starts_with("https://").is_err());
        assert!(requires!(url)
            .starts_with_using("https://", StringComparison::IgnoreCase)
            .is_ok());
        assert!(requires!(url).ends_with(".com").is_ok());
        assert!(requires!(url).contains("EXAMPLE").is_err());
        assert!(requires!(url)
            .contains_using("EXAMPLE", StringComparison::IgnoreCase)
            .is_ok());
    }

    #[test]
    fn affix_failure_records_target_and_comparison() {
        let file = "report.txt";
        let err = requires!(file).ends_with(".csv").unwrap_err();
        let violation = err.violation().unwrap();
        assert_eq!(violation.kind(), ErrorKind::InvalidArgument);
        assert_eq!(violation.message(), "Precondition EndsWith failed: file must end with .csv");
        assert_eq!(violation.field(names::TARGET_EXPRESSION).unwrap(), "\".csv\"");
        assert_eq!(violation.field(names::STRING_COMPARISON).unwrap(), "Ordinal");
    }

    #[test]
    fn lengths_count_chars() {
        let word = "héllo";
        assert!(requires!(word).length_between(5, 5).is_ok());
        assert!(requires!(word).max_length(5).is_ok());
        assert!(requires!(word).min_length(6).is_err());
    }

    #[test]
    fn length_failures_are_out_of_range() {
        let code = "ab";
        let err = requires!(code).min_length(3).unwrap_err();
        let violation = err.violation().unwrap();
        assert_eq!(violation.kind(), ErrorKind::OutOfRange);
        assert_eq!(*violation.field(names::MIN_LENGTH).unwrap(), 3usize);
        assert_eq!(
            violation.message(),
            "Precondition MinLength failed: code must have a length of at least 3"
        );
    }

    #[test]
    fn inverted_length_bounds_are_a_usage_fault() {
        let code = "ab";
        let err = requires!(code).length_between(4, 2).unwrap_err();
        assert!(err.violation().is_none());
        assert!(err.to_string().contains("LengthBetween called with lower bound 4 (4)"));
    }

    #[test]
    fn matches_records_the_pattern() {
        let zip = "1234";
        let pattern = Regex::new(r"^\d{5}$").unwrap();
        let err = requires!(zip).matches(&pattern).unwrap_err();
        let violation = err.violation().unwrap();
        assert_eq!(violation.field(names::REGEX_PATTERN).unwrap(), r"^\d{5}$");
        assert!(requires!("90210").matches(&pattern).is_ok());
    }

    #[test]
    fn length_expr_variants_record_caller_text() {
        let (floor, ceiling) = (3, 8);
        let code = "ab";
        let err = requires!(code).min_length_expr(floor, "floor").unwrap_err();
        let violation = err.violation().unwrap();
        assert_eq!(violation.field(names::MIN_LENGTH_EXPRESSION).unwrap(), "floor");

        let code = "abcdefghij";
        let err = requires!(code).max_length_expr(ceiling, "ceiling").unwrap_err();
        assert_eq!(
            err.violation().unwrap().field(names::MAX_LENGTH_EXPRESSION).unwrap(),
            "ceiling"
        );

        let err = requires!(code)
            .length_between_expr(ceiling, "ceiling", floor, "floor")
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("LengthBetween called with lower bound 8 (ceiling) greater than upper bound 3 (floor)"));
    }
}
