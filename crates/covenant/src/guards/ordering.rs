use std::cmp::Ordering;

use covenant_core::{templates, FieldValue, ViolationClass};

use super::malformed_bounds;
use crate::error::GuardError;
use crate::requirement::{literal_expression, Requirement};

impl<'a, T> Requirement<'a, T>
where
    T: Clone + Into<FieldValue>,
{
    pub fn greater_than<U>(self, target: U) -> Result<Self, GuardError>
    where
        T: PartialOrd<U>,
        U: Into<FieldValue>,
    {
        if self.value > target {
            return Ok(self);
        }
        Err(self.fail_against(
            "GreaterThan",
            ViolationClass::Range,
            templates::GREATER_THAN,
            target.into(),
        ))
    }

    pub fn greater_than_or_equal_to<U>(self, target: U) -> Result<Self, GuardError>
    where
        T: PartialOrd<U>,
        U: Into<FieldValue>,
    {
        if self.value >= target {
            return Ok(self);
        }
        Err(self.fail_against(
            "GreaterThanOrEqualTo",
            ViolationClass::Range,
            templates::GREATER_THAN_OR_EQUAL_TO,
            target.into(),
        ))
    }

    pub fn less_than<U>(self, target: U) -> Result<Self, GuardError>
    where
        T: PartialOrd<U>,
        U: Into<FieldValue>,
    {
        if self.value < target {
            return Ok(self);
        }
        Err(self.fail_against("LessThan", ViolationClass::Range, templates::LESS_THAN, target.into()))
    }

    pub fn less_than_or_equal_to<U>(self, target: U) -> Result<Self, GuardError>
    where
        T: PartialOrd<U>,
        U: Into<FieldValue>,
    {
        if self.value <= target {
            return Ok(self);
        }
        Err(self.fail_against(
            "LessThanOrEqualTo",
            ViolationClass::Range,
            templates::LESS_THAN_OR_EQUAL_TO,
            target.into(),
        ))
    }

    /// Requires `lower <= value <= upper`.
    ///
    /// Inverted bounds are a usage fault reported before the value is looked
    /// at. Incomparable values (NaN) fail the check. The bounds are recorded
    /// with their literal text; use [`between_expr`](Self::between_expr) to
    /// record what the caller wrote instead.
    pub fn between(self, lower: T, upper: T) -> Result<Self, GuardError>
    where
        T: PartialOrd,
    {
        let lower_expression = literal_expression(&lower.clone().into());
        let upper_expression = literal_expression(&upper.clone().into());
        self.between_expr(lower, &lower_expression, upper, &upper_expression)
    }

    /// [`between`](Self::between) with explicit source text for each bound.
    pub fn between_expr(
        self,
        lower: T,
        lower_expression: &str,
        upper: T,
        upper_expression: &str,
    ) -> Result<Self, GuardError>
    where
        T: PartialOrd,
    {
        if lower > upper {
            return Err(malformed_bounds(
                "Between",
                (lower.into(), lower_expression),
                (upper.into(), upper_expression),
            ));
        }
        if self.value >= lower && self.value <= upper {
            return Ok(self);
        }
        Err(self.fail_between((lower.into(), lower_expression), (upper.into(), upper_expression)))
    }

    /// [`between`](Self::between) with a caller-supplied ordering.
    pub fn between_by<F>(self, lower: T, upper: T, compare: F) -> Result<Self, GuardError>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let lower_value: FieldValue = lower.clone().into();
        let upper_value: FieldValue = upper.clone().into();
        let lower_expression = literal_expression(&lower_value);
        let upper_expression = literal_expression(&upper_value);

        if compare(&lower, &upper) == Ordering::Greater {
            return Err(malformed_bounds(
                "Between",
                (lower_value, &lower_expression),
                (upper_value, &upper_expression),
            ));
        }
        if compare(&self.value, &lower) != Ordering::Less
            && compare(&self.value, &upper) != Ordering::Greater
        {
            return Ok(self);
        }
        Err(self.fail_between(
            (lower_value, &lower_expression),
            (upper_value, &upper_expression),
        ))
    }

    fn fail_between(
        &self,
        (lower, lower_expression): (FieldValue, &str),
        (upper, upper_expression): (FieldValue, &str),
    ) -> GuardError {
        self.context.fail(
            self.failure("Between", ViolationClass::Range, templates::BETWEEN),
            |b| {
                b.with_lower_bound(lower, lower_expression)?
                    .with_upper_bound(upper, upper_expression)?;
                Ok(())
            },
        )
    }
}
