//! Password-Based Key Derivation Function 2 (PBKDF2)
//!
//! RFC 8018 section 5.2, with HMAC over a configurable hash as the PRF.
//! The iteration count is operator-configurable at the protocol level; the
//! derivation is deterministic and synchronous, so callers budget it as a
//! bounded-but-possibly-slow call.

use crate::error::{validate, Result};
use crate::hash::HashFunction;
use crate::mac::hmac::Hmac;
use byteorder::{BigEndian, ByteOrder};
use std::marker::PhantomData;
use zeroize::{Zeroize, Zeroizing};

/// PBKDF2 keyed by a [`HashFunction`]
pub struct Pbkdf2<H: HashFunction> {
    _hash_type: PhantomData<H>,
}

impl<H: HashFunction> Pbkdf2<H> {
    /// Derive `length` bytes from `password` and `salt` over `iterations`
    /// rounds.
    pub fn derive(
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        length: usize,
    ) -> Result<Zeroizing<Vec<u8>>> {
        validate::parameter(iterations != 0, "iterations", "must be at least 1")?;
        let hash_len = H::OUTPUT_SIZE;
        // Output length cap from RFC 8018: (2^32 - 1) * hLen
        validate::max_length("PBKDF2 output", length, u32::MAX as usize * hash_len)?;

        let blocks = length.div_ceil(hash_len);
        let mut okm = Zeroizing::new(vec![0u8; blocks * hash_len]);

        for block_index in 1..=blocks as u32 {
            let mut counter = [0u8; 4];
            BigEndian::write_u32(&mut counter, block_index);

            // U_1 = PRF(password, salt || INT(i))
            let mut prf = Hmac::<H>::new(password)?;
            prf.update(salt)?;
            prf.update(&counter)?;
            let mut u = prf.finalize()?;

            let start = (block_index as usize - 1) * hash_len;
            let t = &mut okm[start..start + hash_len];
            t.copy_from_slice(&u);

            // U_j = PRF(password, U_{j-1}); T_i = U_1 ^ ... ^ U_c
            for _ in 1..iterations {
                let next = Hmac::<H>::mac(password, &u)?;
                u.zeroize();
                u = next;
                for (acc, byte) in t.iter_mut().zip(u.iter()) {
                    *acc ^= byte;
                }
            }
            u.zeroize();
        }

        okm.truncate(length);
        Ok(okm)
    }
}

#[cfg(test)]
mod tests;
