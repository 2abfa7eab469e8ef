//! HMAC-based Key Derivation Function (HKDF)
//!
//! RFC 5869 extract-then-expand. The PASE engine uses this for the
//! confirmation key split and the session key schedule, both with an
//! empty salt.

use crate::error::{validate, Result};
use crate::hash::HashFunction;
use crate::mac::hmac::Hmac;
use std::marker::PhantomData;
use zeroize::Zeroizing;

/// HKDF keyed by a [`HashFunction`]
pub struct Hkdf<H: HashFunction> {
    _hash_type: PhantomData<H>,
}

impl<H: HashFunction> Hkdf<H> {
    /// HKDF-Extract: PRK = HMAC(salt, IKM). An absent salt is a string of
    /// zeros of hash length per the RFC, which HMAC padding produces for
    /// free from the empty string.
    pub fn extract(salt: Option<&[u8]>, ikm: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        let prk = Hmac::<H>::mac(salt.unwrap_or(&[]), ikm)?;
        Ok(Zeroizing::new(prk))
    }

    /// HKDF-Expand: stretch `prk` to `length` bytes bound to `info`
    pub fn expand(prk: &[u8], info: Option<&[u8]>, length: usize) -> Result<Zeroizing<Vec<u8>>> {
        let hash_len = H::OUTPUT_SIZE;
        validate::max_length("HKDF-Expand output", length, 255 * hash_len)?;

        let n = length.div_ceil(hash_len);
        let mut okm = Zeroizing::new(Vec::with_capacity(n * hash_len));
        let mut t: Zeroizing<Vec<u8>> = Zeroizing::new(Vec::new());
        let info_bytes = info.unwrap_or(&[]);

        for i in 1..=n {
            let mut hmac = Hmac::<H>::new(prk)?;
            hmac.update(&t)?;
            hmac.update(info_bytes)?;
            hmac.update(&[i as u8])?;
            *t = hmac.finalize()?;
            okm.extend_from_slice(&t);
        }

        okm.truncate(length);
        Ok(okm)
    }

    /// Full HKDF (Extract + Expand)
    pub fn derive(
        salt: Option<&[u8]>,
        ikm: &[u8],
        info: Option<&[u8]>,
        length: usize,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let prk = Self::extract(salt, ikm)?;
        Self::expand(&prk, info, length)
    }
}

#[cfg(test)]
mod tests;
