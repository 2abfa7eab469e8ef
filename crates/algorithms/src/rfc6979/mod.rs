//! Deterministic nonce generation per RFC 6979
//!
//! Derives the per-signature scalar k from the private key and message
//! digest with no randomness, so a device without a trustworthy entropy
//! source can still sign safely. Deterministic and total for any valid
//! order and key; the only failure mode is an out-of-range input.

use crate::error::{Error, Result};
use crate::hash::HashFunction;
use crate::mac::Hmac;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use zeroize::Zeroizing;

/// Leftmost-bits interpretation of an octet string as an integer
/// (RFC 6979 §2.3.2)
fn bits2int(data: &[u8], qlen: u64) -> BigUint {
    let mut x = BigUint::from_bytes_be(data);
    let length = data.len() as u64 * 8;
    if length > qlen {
        x >>= length - qlen;
    }
    x
}

/// Fixed-width big-endian encoding at the order's byte length
fn number_to_string(v: &BigUint, orderlen: usize) -> Vec<u8> {
    let raw = v.to_bytes_be();
    let mut out = vec![0u8; orderlen];
    out[orderlen - raw.len()..].copy_from_slice(&raw);
    out
}

/// Digest-to-octets conversion reduced against the order
/// (RFC 6979 §2.3.4)
fn bits2octets(data: &[u8], order: &BigUint, orderlen: usize) -> Vec<u8> {
    let z2 = bits2int(data, order.bits()) % order;
    number_to_string(&z2, orderlen)
}

/// Generate the deterministic nonce k in [1, order−1] for a private scalar
/// and message digest.
///
/// `extra_entropy` is mixed into the seeding step when non-empty
/// (RFC 6979 §3.6). `retry_gen` skips that many valid candidates before
/// returning, which exists solely to reproduce published test vectors.
pub fn generate_k<H: HashFunction>(
    order: &BigUint,
    secexp: &BigUint,
    digest: &[u8],
    extra_entropy: &[u8],
    retry_gen: usize,
) -> Result<BigUint> {
    if *order < BigUint::from(2u32) {
        return Err(Error::InvalidRange {
            context: "rfc6979 order",
        });
    }
    if secexp.is_zero() || secexp >= order {
        return Err(Error::InvalidRange {
            context: "rfc6979 private scalar",
        });
    }

    let qlen = order.bits();
    let holen = H::OUTPUT_SIZE;
    let rolen = qlen.div_ceil(8) as usize;

    let mut bx = Zeroizing::new(number_to_string(secexp, rolen));
    bx.extend_from_slice(&bits2octets(digest, order, rolen));
    bx.extend_from_slice(extra_entropy);

    // Step B/C
    let mut v = vec![0x01u8; holen];
    let mut k = Zeroizing::new(vec![0x00u8; holen]);

    // Step D
    let mut mac = Hmac::<H>::new(&k)?;
    mac.update(&v)?;
    mac.update(&[0x00])?;
    mac.update(&bx)?;
    *k = mac.finalize()?;

    // Step E
    v = Hmac::<H>::mac(&k, &v)?;

    // Step F
    let mut mac = Hmac::<H>::new(&k)?;
    mac.update(&v)?;
    mac.update(&[0x01])?;
    mac.update(&bx)?;
    *k = mac.finalize()?;

    // Step G
    v = Hmac::<H>::mac(&k, &v)?;

    // Step H
    let mut remaining_skips = retry_gen;
    loop {
        let mut t = Zeroizing::new(Vec::with_capacity(rolen + holen));
        while t.len() < rolen {
            v = Hmac::<H>::mac(&k, &v)?;
            t.extend_from_slice(&v);
        }

        let candidate = bits2int(&t, qlen);
        if candidate >= BigUint::one() && &candidate < order {
            if remaining_skips == 0 {
                return Ok(candidate);
            }
            remaining_skips -= 1;
        }

        let mut mac = Hmac::<H>::new(&k)?;
        mac.update(&v)?;
        mac.update(&[0x00])?;
        *k = mac.finalize()?;
        v = Hmac::<H>::mac(&k, &v)?;
    }
}
