//! End-to-end guard behavior: macro capture -> fields -> resolved factory ->
//! rendered error.

use covenant::{
    ensures, names, requires, ContractErrorFactory, ErrorKind, FieldValue, GuardError,
    Requirement, StandardCheckDigitAlgorithms, TransformRegistry, UsageError, ValueMasker,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn between_precondition_reports_out_of_range() {
    init_tracing();
    let value = 42;
    let err = requires!(value).between(0, 10).unwrap_err();
    let violation = err.violation().unwrap();

    assert_eq!(violation.kind(), ErrorKind::OutOfRange);
    assert!(violation.message().contains("must be between 0 and 10"));
    assert!(err.to_string().contains("42"));
    assert_eq!(*violation.field(names::LOWER_BOUND).unwrap(), 0);
    assert_eq!(*violation.field(names::UPPER_BOUND).unwrap(), 10);
    assert_eq!(violation.parameter_name(), Some("value"));
    assert_eq!(violation.actual_value(), Some(&FieldValue::Int(42)));

    insta::assert_snapshot!(err.to_string(), @r"
    Precondition Between failed: value must be between 0 and 10 (inclusive) (Parameter 'value')
    Actual value was 42.
    ");
}

#[test]
fn postcondition_failures_resolve_to_postcondition_failed() {
    let result = -1;
    let checks: [fn(i32) -> Result<i32, GuardError>; 3] = [
        |result| ensures!(result).not_equal_to(-1).map(Requirement::into_inner),
        |result| ensures!(result).greater_than(0).map(Requirement::into_inner),
        |result| ensures!(result).satisfies("IsEven", |r| r % 2 == 0).map(Requirement::into_inner),
    ];
    for check in checks {
        let err = check(result).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::PostconditionFailed));
        assert_eq!(err.violation().unwrap().parameter_name(), None);
    }
}

#[test]
fn guards_chain_and_hand_back_the_value() {
    fn normalize_sku(sku: Option<&str>) -> Result<String, GuardError> {
        let sku = requires!(sku)
            .not_null()?
            .not_empty()?
            .length_between(4, 12)?
            .into_inner();
        Ok(sku.to_ascii_uppercase())
    }

    assert_eq!(normalize_sku(Some("ab-12")).unwrap(), "AB-12");
    assert_eq!(
        normalize_sku(None).unwrap_err().kind(),
        Some(ErrorKind::NullArgument)
    );
    assert_eq!(
        normalize_sku(Some("")).unwrap_err().kind(),
        Some(ErrorKind::InvalidArgument)
    );
    assert_eq!(
        normalize_sku(Some("abc")).unwrap_err().kind(),
        Some(ErrorKind::OutOfRange)
    );
}

#[test]
fn custom_template_and_factory_override_defaults() {
    let quantity = 0;
    let err = requires!(quantity, "{ValueExpression} was {Value}, wanted more than {Target}")
        .greater_than(0)
        .unwrap_err();
    assert_eq!(err.violation().unwrap().message(), "quantity was 0, wanted more than 0");

    let state = "closed";
    let factory = ContractErrorFactory::new(ErrorKind::InvalidOperation);
    let err = requires!(state)
        .with_factory(&factory)
        .equal_to("open")
        .unwrap_err();
    let violation = err.violation().unwrap();
    assert_eq!(violation.kind(), ErrorKind::InvalidOperation);
    assert_eq!(violation.parameter_name(), None);
    assert_eq!(err.to_string(), "Precondition EqualTo failed: state must be equal to open");
}

#[test]
fn masking_factory_hides_secret_values() {
    let factory = ContractErrorFactory::new(ErrorKind::InvalidArgument).with_transforms(
        TransformRegistry::for_fields([names::VALUE, names::TARGET], ValueMasker::default()),
    );

    let pin = "1234";
    let err = requires!(pin)
        .with_factory(&factory)
        .with_message("{ValueExpression} {Value} != {Target}")
        .equal_to("9876")
        .unwrap_err();
    let violation = err.violation().unwrap();

    assert_eq!(violation.message(), "pin **** != ****");
    assert_eq!(violation.field(names::VALUE).unwrap(), "****");
    assert_eq!(violation.parameter_name(), Some("pin"));
    assert!(!err.to_string().contains("1234"));
}

#[test]
fn malformed_bounds_are_usage_faults_not_violations() {
    let value = 5;
    let err = requires!(value).between(10, 1).unwrap_err();
    match err {
        GuardError::Usage(UsageError::MalformedBounds { message }) => assert_eq!(
            message,
            "Between called with lower bound 10 (10) greater than upper bound 1 (1)"
        ),
        other => panic!("expected malformed bounds, got {other:?}"),
    }
}

#[test]
fn check_digit_guard_uses_catalog_algorithms() {
    let npi = "1234567893";
    assert!(requires!(npi)
        .valid_check_digit(StandardCheckDigitAlgorithms::NPI)
        .is_ok());

    let upc = "036000291453";
    let err = requires!(upc)
        .valid_check_digit(StandardCheckDigitAlgorithms::MOD10_BARCODE)
        .unwrap_err();
    let violation = err.violation().unwrap();
    assert_eq!(
        violation.field(names::CHECK_DIGIT_ALGORITHM).unwrap(),
        "Mod10 Barcode"
    );
    assert_eq!(violation.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn method_call_expressions_yield_the_receiver_as_parameter() {
    let order = vec![1, 2, 3];
    let err = Requirement::precondition(order.len(), "order . Requires ( )")
        .greater_than(5usize)
        .unwrap_err();
    assert_eq!(err.violation().unwrap().parameter_name(), Some("order"));
}

#[test]
fn diagnostics_export_as_json() {
    let level = 12;
    let err = requires!(level).less_than_or_equal_to(11).unwrap_err();
    let json = err.violation().unwrap().to_json();

    assert_eq!(json["kind"], "OutOfRange");
    assert_eq!(json["parameter_name"], "level");
    assert_eq!(json["fields"]["Target"], 11);
    assert_eq!(json["fields"]["RequirementName"], "LessThanOrEqualTo");
    assert_eq!(json["actual_value"], serde_json::json!(12));
}
