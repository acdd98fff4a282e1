//! Message template rendering.
//!
//! Templates contain `{FieldName}` placeholders. Rendering replaces every
//! whole token whose name is a field in the set with that field's default
//! string form. Matching is by complete token: `{Value}` and
//! `{ValueExpression}` are unrelated names, and no substitution ever spans a
//! token boundary. Placeholders naming an absent field are left verbatim, and
//! substituted text is never re-scanned for further placeholders.

use crate::error::UsageError;
use crate::fields::DiagnosticFields;

/// Renders `template` against `fields`.
///
/// Fails with [`UsageError::MissingTemplate`] when no template is given,
/// [`UsageError::EmptyTemplate`] when it is empty or whitespace, and
/// [`UsageError::MissingFields`] when no field set is given.
pub fn render<'t, 'f>(
    template: impl Into<Option<&'t str>>,
    fields: impl Into<Option<&'f DiagnosticFields>>,
) -> Result<String, UsageError> {
    let template = template.into().ok_or(UsageError::MissingTemplate)?;
    if template.trim().is_empty() {
        return Err(UsageError::EmptyTemplate);
    }
    let fields = fields.into().ok_or(UsageError::MissingFields)?;

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        match after_open.find(|c: char| c == '{' || c == '}') {
            // `{Name}`: a complete token.
            Some(close) if after_open.as_bytes()[close] == b'}' => {
                let name = &after_open[..close];
                match fields.get(name) {
                    Some(value) => out.push_str(&value.to_string()),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after_open[close + 1..];
            }
            // Another `{` before any `}`: this brace is literal.
            Some(close) => {
                out.push('{');
                out.push_str(&after_open[..close]);
                rest = &after_open[close..];
            }
            None => {
                out.push('{');
                rest = after_open;
                break;
            }
        }
    }
    out.push_str(rest);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::names;
    use crate::value::FieldValue;
    use proptest::prelude::*;

    fn fields(entries: &[(&str, FieldValue)]) -> DiagnosticFields {
        entries.iter().cloned().collect()
    }

    #[test]
    fn substitutes_known_fields() {
        let f = fields(&[
            (names::VALUE_EXPRESSION, "age".into()),
            (names::LOWER_BOUND, 0.into()),
            (names::UPPER_BOUND, 10.into()),
        ]);
        let msg = render("{ValueExpression} must be between {LowerBound} and {UpperBound}", &f).unwrap();
        assert_eq!(msg, "age must be between 0 and 10");
    }

    #[test]
    fn shorter_name_does_not_match_inside_longer_token() {
        let f = fields(&[(names::VALUE, 42.into())]);
        let msg = render("{Value} from {ValueExpression}", &f).unwrap();
        assert_eq!(msg, "42 from {ValueExpression}");
    }

    #[test]
    fn longer_name_does_not_match_shorter_token() {
        let f = fields(&[(names::VALUE_EXPRESSION, "x".into())]);
        let msg = render("{Value} from {ValueExpression}", &f).unwrap();
        assert_eq!(msg, "{Value} from x");
    }

    #[test]
    fn repeated_placeholders_are_all_replaced() {
        let f = fields(&[(names::TARGET, "abc".into())]);
        let msg = render("{Target}/{Target}/{Target}", &f).unwrap();
        assert_eq!(msg, "abc/abc/abc");
    }

    #[test]
    fn null_renders_as_empty() {
        let f = fields(&[(names::VALUE, FieldValue::Null)]);
        assert_eq!(render("[{Value}]", &f).unwrap(), "[]");
    }

    #[test]
    fn stray_braces_are_literal() {
        let f = fields(&[(names::VALUE, 1.into())]);
        assert_eq!(render("{{Value}} {", &f).unwrap(), "{1} {");
        assert_eq!(render("} {Value", &f).unwrap(), "} {Value");
    }

    #[test]
    fn substituted_text_is_not_rescanned() {
        let f = fields(&[
            (names::VALUE, "{Target}".into()),
            (names::TARGET, "t".into()),
        ]);
        assert_eq!(render("{Value}", &f).unwrap(), "{Target}");
    }

    #[test]
    fn template_faults_are_distinct() {
        let f = DiagnosticFields::default();
        assert_eq!(render(None::<&str>, &f).unwrap_err(), UsageError::MissingTemplate);
        assert_eq!(render("", &f).unwrap_err(), UsageError::EmptyTemplate);
        assert_eq!(render("  \n\t", &f).unwrap_err(), UsageError::EmptyTemplate);
        assert_eq!(render("x", None::<&DiagnosticFields>).unwrap_err(), UsageError::MissingFields);
    }

    proptest! {
        #[test]
        fn unmatched_placeholders_pass_through(name in "[A-Z][a-zA-Z]{0,12}", text in "[a-z ]{0,20}") {
            let f = fields(&[("Unrelated_", 1.into())]);
            let template = format!("{text}{{{name}}}{text}");
            prop_assert_eq!(render(template.as_str(), &f).unwrap(), template);
        }

        #[test]
        fn prefix_names_never_cross_token_boundaries(base in "[A-Z][a-z]{1,8}", suffix in "[A-Z][a-z]{1,8}") {
            let long = format!("{base}{suffix}");
            let template = format!("{{{base}}}|{{{long}}}");

            let only_short = fields(&[(base.as_str(), "S".into())]);
            prop_assert_eq!(render(template.as_str(), &only_short).unwrap(), format!("S|{{{long}}}"));

            let only_long = fields(&[(long.as_str(), "L".into())]);
            prop_assert_eq!(render(template.as_str(), &only_long).unwrap(), format!("{{{base}}}|L"));
        }

        #[test]
        fn repeated_placeholder_gets_same_value(n in any::<i64>()) {
            let f = fields(&[(names::VALUE, n.into())]);
            prop_assert_eq!(render("{Value}-{Value}", &f).unwrap(), format!("{n}-{n}"));
        }
    }
}
