//! Luhn (mod 10) check digits, as used by payment card numbers.

use crate::{ascii_digits, CheckDigitAlgorithm};

/// Luhn mod-10 validation over a string of at least two digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Luhn;

/// Sum of `digits` under the Luhn rule: every second digit counting from
/// the rightmost (check) digit is doubled, with 9 subtracted above 9.
pub(crate) fn luhn_sum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum()
}

impl CheckDigitAlgorithm for Luhn {
    fn name(&self) -> &'static str {
        "Luhn"
    }

    fn validate(&self, text: &str) -> bool {
        match ascii_digits(text) {
            Some(digits) if digits.len() >= 2 => luhn_sum(&digits) % 10 == 0,
            _ => false,
        }
    }
}
