//! The value-under-check wrapper shared by every guard.
//!
//! A [`Requirement`] pairs a value with the expression text it came from, the
//! requirement kind, and optional caller overrides for the message template
//! and the error factory. Guards consume the requirement and hand it back on
//! success, so checks chain with `?`:
//!
//! ```
//! use covenant::requires;
//!
//! fn set_volume(level: i32) -> Result<i32, covenant::GuardError> {
//!     let level = requires!(level).between(0, 11)?.not_equal_to(7)?.into_inner();
//!     Ok(level)
//! }
//!
//! assert_eq!(set_volume(5).unwrap(), 5);
//! assert!(set_volume(12).is_err());
//! ```
//!
//! Rust cannot capture the caller's source text implicitly; the
//! [`requires!`](crate::requires) and [`ensures!`](crate::ensures) macros
//! record it with `stringify!`, and [`Requirement::precondition`] takes it as
//! an explicit argument.

use covenant_core::{
    names, select_factory, DiagnosticFieldBuilder, ErrorFactory, FieldValue, RequirementKind,
    UsageError, ViolationClass,
};

use crate::error::GuardError;

/// A value being checked, with everything needed to report a violation.
pub struct Requirement<'a, T> {
    pub(crate) value: T,
    pub(crate) context: Context<'a>,
}

/// The non-value half of a [`Requirement`]; survives `not_null` unwrapping.
#[derive(Clone, Copy)]
pub(crate) struct Context<'a> {
    expression: &'a str,
    kind: RequirementKind,
    message: Option<&'a str>,
    factory: Option<&'a dyn ErrorFactory>,
}

impl<'a, T> Requirement<'a, T> {
    pub fn new(kind: RequirementKind, value: T, expression: &'a str) -> Self {
        Requirement {
            value,
            context: Context {
                expression,
                kind,
                message: None,
                factory: None,
            },
        }
    }

    /// Checks a caller-supplied argument.
    pub fn precondition(value: T, expression: &'a str) -> Self {
        Self::new(RequirementKind::Precondition, value, expression)
    }

    /// Checks a produced result.
    pub fn postcondition(value: T, expression: &'a str) -> Self {
        Self::new(RequirementKind::Postcondition, value, expression)
    }

    /// Overrides the default message template for every subsequent guard.
    pub fn with_message(mut self, template: &'a str) -> Self {
        self.context.message = Some(template);
        self
    }

    /// Overrides the default error factory for every subsequent guard.
    pub fn with_factory(mut self, factory: &'a dyn ErrorFactory) -> Self {
        self.context.factory = Some(factory);
        self
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn expression(&self) -> &'a str {
        self.context.expression
    }

    pub fn kind(&self) -> RequirementKind {
        self.context.kind
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<'a, T: Clone + Into<FieldValue>> Requirement<'a, T> {
    pub(crate) fn failure<'t>(
        &self,
        name: &'t str,
        class: ViolationClass,
        template: &'t str,
    ) -> Failure<'t> {
        Failure {
            name,
            class,
            template,
            value: self.value.clone().into(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Fails with a single comparison target recorded as `Target`.
    pub(crate) fn fail_against(
        &self,
        name: &str,
        class: ViolationClass,
        template: &str,
        target: FieldValue,
    ) -> GuardError {
        let expression = literal_expression(&target);
        self.context.fail(self.failure(name, class, template), |b| {
            b.with_target(target, expression.as_str())?;
            Ok(())
        })
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Requirement<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Requirement")
            .field("value", &self.value)
            .field("expression", &self.context.expression)
            .field("kind", &self.context.kind)
            .finish_non_exhaustive()
    }
}

/// What a guard knows about one failed check.
pub(crate) struct Failure<'t> {
    pub name: &'t str,
    pub class: ViolationClass,
    pub template: &'t str,
    pub value: FieldValue,
    pub type_name: &'t str,
}

impl<'a> Context<'a> {
    /// Builds the diagnostic fields for a failed check and turns them into
    /// the error the resolved (or caller-supplied) factory produces.
    pub(crate) fn fail(
        &self,
        failure: Failure<'_>,
        describe: impl FnOnce(&mut DiagnosticFieldBuilder) -> Result<(), UsageError>,
    ) -> GuardError {
        match self.try_fail(&failure, describe) {
            Ok(violation) => {
                tracing::debug!(
                    requirement = failure.name,
                    expression = self.expression,
                    kind = %violation.kind(),
                    "requirement failed"
                );
                GuardError::Violation(violation)
            }
            Err(usage) => GuardError::Usage(usage),
        }
    }

    fn try_fail(
        &self,
        failure: &Failure<'_>,
        describe: impl FnOnce(&mut DiagnosticFieldBuilder) -> Result<(), UsageError>,
    ) -> Result<covenant_core::ContractError, UsageError> {
        let mut builder = DiagnosticFieldBuilder::new();
        builder
            .with_requirement(self.kind, failure.name)?
            .with_value(failure.value.clone(), self.expression)?
            .with_item(names::VALUE_TYPE_NAME, failure.type_name)?;
        describe(&mut builder)?;
        let fields = builder.build()?;

        let template = self.message.unwrap_or(failure.template);
        let factory = select_factory(self.kind, failure.class, self.factory);
        factory.create_error(Some(&fields), Some(template))
    }
}

/// Source text for a literal operand (bounds, targets) the caller passed
/// by value: strings are quoted, `Null` reads as `None`. Never empty.
pub(crate) fn literal_expression(value: &FieldValue) -> String {
    match value {
        FieldValue::Null => "None".to_string(),
        FieldValue::Text(s) => format!("{s:?}"),
        FieldValue::Char(c) => format!("{c:?}"),
        other => {
            let text = other.to_string();
            if text.trim().is_empty() {
                format!("{text:?}")
            } else {
                text
            }
        }
    }
}
