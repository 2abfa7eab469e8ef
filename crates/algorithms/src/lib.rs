//! Cryptographic primitives for the hearth commissioning core
//!
//! This crate provides the building blocks the PASE engine is assembled
//! from: a SHA-256 implementation behind the [`hash::HashFunction`] trait,
//! HMAC, PBKDF2 and HKDF, arbitrary-precision number theory, the NIST
//! P-256 curve and point engine, and the RFC 6979 deterministic nonce
//! generator.
//!
//! Everything here is computationally synchronous and allocation-light;
//! secret-bearing intermediates are zeroized on drop.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function implementations
pub mod hash;
pub use hash::{HashFunction, Sha256};

// MAC implementations
pub mod mac;
pub use mac::Hmac;

// KDF implementations
pub mod kdf;
pub use kdf::{Hkdf, Pbkdf2};

// Number-theory primitives
pub mod numbertheory;

// Elliptic curve engine
pub mod ec;
pub use ec::{Curve, Point, PointFormat};

// Deterministic nonce generation
pub mod rfc6979;
