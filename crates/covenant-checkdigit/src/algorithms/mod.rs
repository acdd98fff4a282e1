//! The standard check-digit algorithms.

mod aba;
mod barcode;
mod isbn;
mod luhn;
mod npi;
mod verhoeff;
mod vin;

pub use aba::AbaRoutingNumber;
pub use barcode::Mod10Barcode;
pub use isbn::Isbn10;
pub use luhn::Luhn;
pub use npi::Npi;
pub use verhoeff::Verhoeff;
pub use vin::Vin;
