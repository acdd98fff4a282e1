//! Mod-10 barcode check digits (EAN-8, UPC-A, EAN-13, GTIN-14).

use crate::{ascii_digits, CheckDigitAlgorithm};

/// Weights 1 and 3 alternate starting from the rightmost (check) digit;
/// the weighted sum must be divisible by 10.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mod10Barcode;

impl CheckDigitAlgorithm for Mod10Barcode {
    fn name(&self) -> &'static str {
        "Mod10 Barcode"
    }

    fn validate(&self, text: &str) -> bool {
        let Some(digits) = ascii_digits(text) else {
            return false;
        };
        if digits.len() < 2 {
            return false;
        }
        let sum: u32 = digits
            .iter()
            .rev()
            .enumerate()
            .map(|(i, &d)| u32::from(d) * if i % 2 == 0 { 1 } else { 3 })
            .sum();
        sum % 10 == 0
    }
}
