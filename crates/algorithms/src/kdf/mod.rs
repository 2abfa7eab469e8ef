//! Key derivation functions

pub mod hkdf;
pub mod pbkdf2;

pub use hkdf::Hkdf;
pub use pbkdf2::Pbkdf2;
