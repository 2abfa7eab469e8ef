//! SPAKE2+ PASE engine for the hearth commissioning core
//!
//! Turns a shared human-readable passcode into mutually confirmed session
//! keys with no pre-existing credentials: passcode-to-secret derivation,
//! the three-round exchange between a commissioner (`Prover`) and a device
//! (`Responder`), and the session key schedule. All group arithmetic comes
//! from `hearth-algorithms`; message framing and transport belong to the
//! surrounding session layer.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{Error, Result};

// Passcode derivation, verifier record, transcript, key schedule
pub mod spake2p;
pub use spake2p::{initiator_values, PakeVerifier};

// The exchange state machines and round messages
pub mod exchange;
pub use exchange::{Pake1, Pake2, Pake3, Prover, Responder};

// Session key expansion
pub mod session_keys;
pub use session_keys::SessionKeySet;
