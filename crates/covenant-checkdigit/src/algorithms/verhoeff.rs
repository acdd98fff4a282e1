//! Verhoeff check digits (dihedral group D5).

use crate::{ascii_digits, CheckDigitAlgorithm};

const MULTIPLICATION: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

const PERMUTATION: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Group inverses; only needed to generate check digits.
#[cfg(test)]
const INVERSE: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

/// Verhoeff validation over a string of at least two digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verhoeff;

fn checksum(digits: impl Iterator<Item = u8>) -> u8 {
    digits.enumerate().fold(0u8, |c, (i, d)| {
        MULTIPLICATION[c as usize][PERMUTATION[i % 8][d as usize] as usize]
    })
}

impl CheckDigitAlgorithm for Verhoeff {
    fn name(&self) -> &'static str {
        "Verhoeff"
    }

    fn validate(&self, text: &str) -> bool {
        match ascii_digits(text) {
            Some(digits) if digits.len() >= 2 => checksum(digits.iter().rev().copied()) == 0,
            _ => false,
        }
    }
}
