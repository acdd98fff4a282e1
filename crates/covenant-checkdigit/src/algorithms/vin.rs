//! Vehicle Identification Numbers (North American check digit).

use crate::CheckDigitAlgorithm;

const WEIGHTS: [u32; 17] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// Zero-based index of the check digit.
const CHECK_POSITION: usize = 8;

/// VIN: 17 characters, letters transliterated to digits, weighted sum mod 11
/// equals the character at position 9 (`X` for 10).
///
/// Letters are accepted in either case. `I`, `O` and `Q` never occur in a VIN
/// and make it invalid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vin;

fn transliterate(c: u8) -> Option<u32> {
    let value = match c {
        b'0'..=b'9' => c - b'0',
        b'A' | b'J' => 1,
        b'B' | b'K' | b'S' => 2,
        b'C' | b'L' | b'T' => 3,
        b'D' | b'M' | b'U' => 4,
        b'E' | b'N' | b'V' => 5,
        b'F' | b'W' => 6,
        b'G' | b'P' | b'X' => 7,
        b'H' | b'Y' => 8,
        b'R' | b'Z' => 9,
        _ => return None,
    };
    Some(u32::from(value))
}

impl CheckDigitAlgorithm for Vin {
    fn name(&self) -> &'static str {
        "VIN"
    }

    fn validate(&self, text: &str) -> bool {
        let bytes = text.as_bytes();
        if bytes.len() != WEIGHTS.len() {
            return false;
        }

        let mut sum = 0u32;
        for (&b, weight) in bytes.iter().zip(WEIGHTS) {
            match transliterate(b.to_ascii_uppercase()) {
                Some(value) => sum += value * weight,
                None => return false,
            }
        }

        let expected = match sum % 11 {
            10 => b'X',
            r => b'0' + r as u8,
        };
        bytes[CHECK_POSITION].to_ascii_uppercase() == expected
    }
}
