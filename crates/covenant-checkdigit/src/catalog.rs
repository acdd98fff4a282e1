//! The standard algorithm catalog.

use crate::algorithms::{AbaRoutingNumber, Isbn10, Luhn, Mod10Barcode, Npi, Verhoeff, Vin};
use crate::CheckDigitAlgorithm;

/// Named entry points for the built-in algorithms.
///
/// ```
/// use covenant_checkdigit::{CheckDigitAlgorithm, StandardCheckDigitAlgorithms};
///
/// assert!(StandardCheckDigitAlgorithms::LUHN.validate("4111111111111111"));
/// let isbn = StandardCheckDigitAlgorithms::by_name("isbn-10").unwrap();
/// assert!(isbn.validate("0714105449"));
/// ```
pub struct StandardCheckDigitAlgorithms;

impl StandardCheckDigitAlgorithms {
    pub const LUHN: &'static dyn CheckDigitAlgorithm = &Luhn;
    pub const ISBN10: &'static dyn CheckDigitAlgorithm = &Isbn10;
    pub const ABA_ROUTING_NUMBER: &'static dyn CheckDigitAlgorithm = &AbaRoutingNumber;
    pub const MOD10_BARCODE: &'static dyn CheckDigitAlgorithm = &Mod10Barcode;
    pub const NPI: &'static dyn CheckDigitAlgorithm = &Npi;
    pub const VIN: &'static dyn CheckDigitAlgorithm = &Vin;
    pub const VERHOEFF: &'static dyn CheckDigitAlgorithm = &Verhoeff;

    pub const ALL: [&'static dyn CheckDigitAlgorithm; 7] = [
        Self::LUHN,
        Self::ISBN10,
        Self::ABA_ROUTING_NUMBER,
        Self::MOD10_BARCODE,
        Self::NPI,
        Self::VIN,
        Self::VERHOEFF,
    ];

    /// Looks up an algorithm by its [`name`](CheckDigitAlgorithm::name),
    /// ignoring ASCII case.
    pub fn by_name(name: &str) -> Option<&'static dyn CheckDigitAlgorithm> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = StandardCheckDigitAlgorithms::ALL
            .iter()
            .map(|a| a.name())
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), StandardCheckDigitAlgorithms::ALL.len());
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(StandardCheckDigitAlgorithms::by_name("VIN").unwrap().name(), "VIN");
        assert_eq!(StandardCheckDigitAlgorithms::by_name("verhoeff").unwrap().name(), "Verhoeff");
        assert!(StandardCheckDigitAlgorithms::by_name("Damm").is_none());
    }
}
