//! ISBN-10 check digits.

use crate::CheckDigitAlgorithm;

/// ISBN-10: ten characters, weights 10 down to 1, sum divisible by 11.
///
/// The first nine characters must be digits; the last may also be `X`
/// (or `x`), standing for 10. Hyphens and spaces are not accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Isbn10;

impl CheckDigitAlgorithm for Isbn10 {
    fn name(&self) -> &'static str {
        "ISBN-10"
    }

    fn validate(&self, text: &str) -> bool {
        let bytes = text.as_bytes();
        if bytes.len() != 10 {
            return false;
        }

        let mut sum = 0u32;
        for (i, &b) in bytes.iter().enumerate() {
            let weight = 10 - i as u32;
            let value = match b {
                b'0'..=b'9' => u32::from(b - b'0'),
                b'X' | b'x' if i == 9 => 10,
                _ => return false,
            };
            sum += weight * value;
        }
        sum % 11 == 0
    }
}
