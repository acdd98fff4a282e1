//! ABA routing transit numbers.

use crate::{ascii_digits, CheckDigitAlgorithm};

const WEIGHTS: [u32; 9] = [3, 7, 1, 3, 7, 1, 3, 7, 1];

/// ABA routing number: nine digits weighted 3-7-1, sum divisible by 10.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbaRoutingNumber;

impl CheckDigitAlgorithm for AbaRoutingNumber {
    fn name(&self) -> &'static str {
        "ABA Routing Number"
    }

    fn validate(&self, text: &str) -> bool {
        let Some(digits) = ascii_digits(text) else {
            return false;
        };
        if digits.len() != WEIGHTS.len() {
            return false;
        }
        let sum: u32 = digits
            .iter()
            .zip(WEIGHTS)
            .map(|(&d, w)| u32::from(d) * w)
            .sum();
        sum % 10 == 0
    }
}
