//! HMAC (Hash-based Message Authentication Code)
//!
//! RFC 2104 / FIPS 198-1. The derived pads hold key material and are
//! zeroized on drop; tag verification is constant-time over the full
//! digest length.

use crate::error::{Error, Result};
use crate::hash::HashFunction;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

// SHA-256 block size; the largest block of any hash this crate carries.
const MAX_BLOCK: usize = 64;

/// Streaming HMAC over a [`HashFunction`]
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Hmac<H: HashFunction> {
    #[zeroize(skip)] // running hash state carries no raw key bytes
    inner: H,
    opad: [u8; MAX_BLOCK],
    is_finalized: bool,
}

impl<H: HashFunction> Hmac<H> {
    const IPAD_BYTE: u8 = 0x36;
    const OPAD_BYTE: u8 = 0x5c;

    /// Create a new HMAC instance from `key`
    pub fn new(key: &[u8]) -> Result<Self> {
        let bs = H::BLOCK_SIZE;
        debug_assert!(bs <= MAX_BLOCK);

        // K' = H(key) when the key exceeds a block, else the key itself,
        // zero-padded to the block size.
        let mut k_prime = [0u8; MAX_BLOCK];
        if key.len() > bs {
            let hashed = H::digest(key);
            k_prime[..hashed.len()].copy_from_slice(&hashed);
        } else {
            k_prime[..key.len()].copy_from_slice(key);
        }

        let mut ipad = [0u8; MAX_BLOCK];
        let mut opad = [0u8; MAX_BLOCK];
        for i in 0..bs {
            ipad[i] = k_prime[i] ^ Self::IPAD_BYTE;
            opad[i] = k_prime[i] ^ Self::OPAD_BYTE;
        }
        k_prime.zeroize();

        let mut inner = H::new();
        inner.update(&ipad[..bs]);
        ipad.zeroize();

        Ok(Self {
            inner,
            opad,
            is_finalized: false,
        })
    }

    /// Feed additional `data` into the MAC
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.is_finalized {
            return Err(Error::param("hmac_state", "cannot update after finalization"));
        }
        self.inner.update(data);
        Ok(())
    }

    /// Finalize and return the tag
    pub fn finalize(&mut self) -> Result<Vec<u8>> {
        if self.is_finalized {
            return Err(Error::param("hmac_state", "HMAC already finalized"));
        }
        self.is_finalized = true;

        let inner_hash = self.inner.clone().finalize();

        let mut outer = H::new();
        outer.update(&self.opad[..H::BLOCK_SIZE]);
        outer.update(&inner_hash);
        Ok(outer.finalize())
    }

    /// One-shot MAC helper
    pub fn mac(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        let mut h = Self::new(key)?;
        h.update(data)?;
        h.finalize()
    }

    /// Constant-time verification of `tag` against `key` / `data`.
    ///
    /// Always iterates over the fixed digest length and folds any length
    /// mismatch into the comparison, so a wrong-length tag costs the same
    /// as a wrong-valued one.
    pub fn verify(key: &[u8], data: &[u8], tag: &[u8]) -> Result<bool> {
        let expected = Self::mac(key, data)?;

        let mut diff = 0u8;
        for i in 0..H::OUTPUT_SIZE {
            let a = expected.get(i).copied().unwrap_or(0);
            let b = tag.get(i).copied().unwrap_or(0);
            diff |= a ^ b;
        }
        diff |= (tag.len() ^ H::OUTPUT_SIZE) as u8;

        Ok(diff.ct_eq(&0u8).unwrap_u8() == 1)
    }
}

#[cfg(test)]
mod tests;
