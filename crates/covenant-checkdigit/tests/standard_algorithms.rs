//! Known-good and known-bad identifiers for every catalog entry.

use covenant_checkdigit::{CheckDigitAlgorithm, StandardCheckDigitAlgorithms as Std};

#[test]
fn reference_values() {
    let cases: [(&dyn CheckDigitAlgorithm, &str, &str); 7] = [
        (Std::LUHN, "4111111111111111", "4111111111111112"),
        (Std::ISBN10, "0714105449", "0714105448"),
        (Std::ABA_ROUTING_NUMBER, "111000025", "111000026"),
        (Std::MOD10_BARCODE, "036000291452", "036000291453"),
        (Std::NPI, "1234567893", "1234567894"),
        (Std::VIN, "1M8GDM9AXKP042788", "1M8GDM9A2KP042788"),
        (Std::VERHOEFF, "2363", "2364"),
    ];

    for (algorithm, valid, invalid) in cases {
        assert!(algorithm.validate(valid), "{} should accept {valid}", algorithm.name());
        assert!(!algorithm.validate(invalid), "{} should reject {invalid}", algorithm.name());
        assert!(algorithm.validate_opt(Some(valid)));
        assert!(!algorithm.validate_opt(None));
    }
}

#[test]
fn malformed_input_is_false_not_a_panic() {
    let long = format!("{}a", "9".repeat(199));
    let junk = ["", " ", "abc", "12 34", "\u{0661}\u{0662}\u{0663}", long.as_str()];
    for algorithm in Std::ALL {
        for input in junk {
            assert!(!algorithm.validate(input), "{} accepted {input:?}", algorithm.name());
        }
    }
}

#[test]
fn algorithms_are_shareable_across_threads() {
    let handles: Vec<_> = Std::ALL
        .into_iter()
        .map(|algorithm| std::thread::spawn(move || algorithm.validate("0")))
        .collect();
    for handle in handles {
        assert!(!handle.join().unwrap());
    }
}
