//! Check-digit validators for common numbering schemes.
//!
//! Each algorithm is a stateless unit struct implementing
//! [`CheckDigitAlgorithm`]. Validation never fails loudly: wrong length,
//! characters outside the scheme's alphabet, and a bad checksum all yield
//! `false`. Absent input (`None`) is also simply invalid.

pub mod algorithms;
pub mod catalog;

use smallvec::SmallVec;

pub use algorithms::{AbaRoutingNumber, Isbn10, Luhn, Mod10Barcode, Npi, Verhoeff, Vin};
pub use catalog::StandardCheckDigitAlgorithms;

/// A checksum validator for one numbering scheme.
pub trait CheckDigitAlgorithm: Send + Sync {
    /// Stable identity used in diagnostics.
    fn name(&self) -> &'static str;

    /// Returns `true` if `text` is well formed and its check digit matches.
    fn validate(&self, text: &str) -> bool;

    /// Like [`validate`](Self::validate), treating `None` as invalid.
    fn validate_opt(&self, text: Option<&str>) -> bool {
        text.is_some_and(|t| self.validate(t))
    }
}

impl std::fmt::Debug for dyn CheckDigitAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Digit values of an all-ASCII-digit string, or `None` if any other
/// character is present.
pub(crate) fn ascii_digits(text: &str) -> Option<SmallVec<[u8; 32]>> {
    text.bytes()
        .map(|b| b.is_ascii_digit().then(|| b - b'0'))
        .collect()
}
