//! US National Provider Identifiers.

use smallvec::SmallVec;

use super::luhn::luhn_sum;
use crate::{ascii_digits, CheckDigitAlgorithm};

/// Issuer prefix prepended before applying the Luhn rule.
const PREFIX: [u8; 5] = [8, 0, 8, 4, 0];

/// NPI: ten digits whose Luhn sum, with the `80840` prefix, is divisible by 10.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Npi;

impl CheckDigitAlgorithm for Npi {
    fn name(&self) -> &'static str {
        "NPI"
    }

    fn validate(&self, text: &str) -> bool {
        let Some(digits) = ascii_digits(text) else {
            return false;
        };
        if digits.len() != 10 {
            return false;
        }
        let mut prefixed: SmallVec<[u8; 16]> = SmallVec::from_slice(&PREFIX);
        prefixed.extend_from_slice(&digits);
        luhn_sum(&prefixed) % 10 == 0
    }
}
