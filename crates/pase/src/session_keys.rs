//! Session key schedule
//!
//! Expands the confirmed shared secret Ke into the directional encryption
//! keys and the attestation challenge. The AEAD contexts built from these
//! keys belong to the encrypted-session layer, not to this crate.

use hearth_algorithms::{Hkdf, Sha256};
use hearth_params::spake2p::SESSION_KEYS_INFO;
use hearth_params::SYMMETRIC_KEY_LENGTH_BYTES;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Result;

/// Directional session keys plus the attestation challenge, zeroized on
/// drop. No key material is shared between directions or across sessions.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SessionKeySet {
    i2r: [u8; SYMMETRIC_KEY_LENGTH_BYTES],
    r2i: [u8; SYMMETRIC_KEY_LENGTH_BYTES],
    attestation_challenge: [u8; SYMMETRIC_KEY_LENGTH_BYTES],
}

impl SessionKeySet {
    /// HKDF(Ke, ∅, "SessionKeys") → I2R key ‖ R2I key ‖ challenge
    pub(crate) fn derive(ke: &[u8]) -> Result<Self> {
        let okm = Hkdf::<Sha256>::derive(
            None,
            ke,
            Some(SESSION_KEYS_INFO),
            3 * SYMMETRIC_KEY_LENGTH_BYTES,
        )?;

        let mut keys = SessionKeySet {
            i2r: [0u8; SYMMETRIC_KEY_LENGTH_BYTES],
            r2i: [0u8; SYMMETRIC_KEY_LENGTH_BYTES],
            attestation_challenge: [0u8; SYMMETRIC_KEY_LENGTH_BYTES],
        };
        keys.i2r
            .copy_from_slice(&okm[..SYMMETRIC_KEY_LENGTH_BYTES]);
        keys.r2i
            .copy_from_slice(&okm[SYMMETRIC_KEY_LENGTH_BYTES..2 * SYMMETRIC_KEY_LENGTH_BYTES]);
        keys.attestation_challenge
            .copy_from_slice(&okm[2 * SYMMETRIC_KEY_LENGTH_BYTES..]);
        Ok(keys)
    }

    /// Initiator-to-responder encryption key
    pub fn i2r_key(&self) -> &[u8; SYMMETRIC_KEY_LENGTH_BYTES] {
        &self.i2r
    }

    /// Responder-to-initiator encryption key
    pub fn r2i_key(&self) -> &[u8; SYMMETRIC_KEY_LENGTH_BYTES] {
        &self.r2i
    }

    /// Challenge value consumed by device attestation
    pub fn attestation_challenge(&self) -> &[u8; SYMMETRIC_KEY_LENGTH_BYTES] {
        &self.attestation_challenge
    }
}
