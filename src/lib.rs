//! hearth: security core for smart-home commissioning
//!
//! This facade crate re-exports the workspace members:
//!
//! - [`params`]: compiled-in curve and protocol constants
//! - [`algorithms`]: hash/MAC/KDF primitives, number theory, the P-256
//!   curve engine and the RFC 6979 deterministic nonce generator
//! - [`pase`]: the SPAKE2+ passcode-authenticated session establishment
//!   engine and the session key schedule
//!
//! Typical entry points are [`pase::PakeVerifier::derive`] for device
//! provisioning, [`pase::Prover`] / [`pase::Responder`] for running an
//! exchange, and [`sign_deterministic`] for attestation signatures.

#![forbid(unsafe_code)]

pub use hearth_algorithms as algorithms;
pub use hearth_params as params;
pub use hearth_pase as pase;

// Re-exported for downstream trait bounds and secret hygiene
pub use rand;
pub use subtle;
pub use zeroize;

pub use hearth_algorithms::ec::{find_curve, nist_p256, Curve, Point, PointFormat};
pub use hearth_algorithms::rfc6979::generate_k as sign_deterministic;
pub use hearth_pase::{PakeVerifier, Prover, Responder, SessionKeySet};
