//! SPAKE2+ building blocks: passcode derivation, the verifier record,
//! transcript assembly, and the confirmation key schedule
//!
//! The byte layouts here are wire-compatible with every conformant peer:
//! the transcript framing, the split points of the derived keys, and the
//! verifier record are all fixed by the commissioning protocol.

use byteorder::{ByteOrder, LittleEndian};
use hearth_algorithms::ec::{nist_p256, Point, PointFormat};
use hearth_algorithms::{validate, HashFunction, Hkdf, Hmac, Pbkdf2, Sha256};
use hearth_params::spake2p::{CONFIRMATION_KEYS_INFO, M_COMPRESSED, N_COMPRESSED};
use hearth_params::{
    GROUP_SIZE_BYTES, HASH_LEN_BYTES, PBKDF_SALT_MAX_BYTES, PBKDF_SALT_MIN_BYTES,
    VERIFIER_RECORD_SIZE_BYTES, W_SIZE_BYTES,
};
use num_bigint::BigUint;
use once_cell::sync::Lazy;
use zeroize::Zeroizing;

use crate::error::{Error, Result};

static M_POINT: Lazy<Point> = Lazy::new(|| {
    Point::from_bytes(nist_p256(), M_COMPRESSED).expect("compiled-in M point decodes")
});

static N_POINT: Lazy<Point> = Lazy::new(|| {
    Point::from_bytes(nist_p256(), N_COMPRESSED).expect("compiled-in N point decodes")
});

/// The standardized auxiliary point M
pub(crate) fn m_point() -> &'static Point {
    &M_POINT
}

/// The standardized auxiliary point N
pub(crate) fn n_point() -> &'static Point {
    &N_POINT
}

/// Fixed-width big-endian scalar encoding at the group size
pub(crate) fn scalar_bytes(n: &BigUint) -> [u8; GROUP_SIZE_BYTES] {
    let raw = n.to_bytes_be();
    let mut out = [0u8; GROUP_SIZE_BYTES];
    out[GROUP_SIZE_BYTES - raw.len()..].copy_from_slice(&raw);
    out
}

fn check_pbkdf_inputs(salt: &[u8], iterations: u32) -> Result<()> {
    if salt.len() < PBKDF_SALT_MIN_BYTES || salt.len() > PBKDF_SALT_MAX_BYTES {
        return Err(Error::Parameter {
            name: "salt",
            reason: "length outside the 16..=32 byte range",
        });
    }
    if iterations == 0 {
        return Err(Error::Parameter {
            name: "iterations",
            reason: "must be at least 1",
        });
    }
    Ok(())
}

/// Derive (w0, w1) from the passcode.
///
/// PBKDF2-HMAC-SHA256 over the little-endian passcode yields two
/// 40-byte halves, each reduced modulo the curve order. The 8 surplus
/// bytes per half make the reduction bias negligible.
pub(crate) fn derive_w0_w1(
    passcode: u32,
    salt: &[u8],
    iterations: u32,
) -> Result<(BigUint, BigUint)> {
    check_pbkdf_inputs(salt, iterations)?;
    let ws = Pbkdf2::<Sha256>::derive(
        &passcode.to_le_bytes(),
        salt,
        iterations,
        2 * W_SIZE_BYTES,
    )?;
    let order = &nist_p256().order;
    let w0 = BigUint::from_bytes_be(&ws[..W_SIZE_BYTES]) % order;
    let w1 = BigUint::from_bytes_be(&ws[W_SIZE_BYTES..]) % order;
    Ok((w0, w1))
}

/// Prover-side provisioning values: (w0, w1) as fixed-width big-endian
/// bytes.
pub fn initiator_values(
    passcode: u32,
    salt: &[u8],
    iterations: u32,
) -> Result<([u8; GROUP_SIZE_BYTES], [u8; GROUP_SIZE_BYTES])> {
    let (w0, w1) = derive_w0_w1(passcode, salt, iterations)?;
    Ok((scalar_bytes(&w0), scalar_bytes(&w1)))
}

/// The verifier record a device persists in place of the passcode:
/// w0 and L = w1·G. Created once at provisioning, read-only afterward.
#[derive(Clone)]
pub struct PakeVerifier {
    w0: BigUint,
    l: Point,
}

impl PakeVerifier {
    /// Derive the record from the passcode. w1 itself is discarded.
    pub fn derive(passcode: u32, salt: &[u8], iterations: u32) -> Result<Self> {
        let (w0, w1) = derive_w0_w1(passcode, salt, iterations)?;
        let l = nist_p256().generator().mul(&w1);
        Ok(PakeVerifier { w0, l })
    }

    /// Serialize as w0 ‖ uncompressed(L), 97 bytes
    pub fn to_bytes(&self) -> [u8; VERIFIER_RECORD_SIZE_BYTES] {
        let mut out = [0u8; VERIFIER_RECORD_SIZE_BYTES];
        out[..GROUP_SIZE_BYTES].copy_from_slice(&scalar_bytes(&self.w0));
        out[GROUP_SIZE_BYTES..].copy_from_slice(&self.l.to_bytes(PointFormat::Uncompressed));
        out
    }

    /// Deserialize a stored record, validating L against the curve
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        validate::length("verifier record", data.len(), VERIFIER_RECORD_SIZE_BYTES)?;
        let w0 = BigUint::from_bytes_be(&data[..GROUP_SIZE_BYTES]);
        if w0 >= nist_p256().order {
            return Err(Error::Parameter {
                name: "verifier_record",
                reason: "w0 not reduced modulo the group order",
            });
        }
        let l = Point::from_bytes(nist_p256(), &data[GROUP_SIZE_BYTES..])?;
        Ok(PakeVerifier { w0, l })
    }

    pub(crate) fn w0(&self) -> &BigUint {
        &self.w0
    }

    pub(crate) fn l(&self) -> &Point {
        &self.l
    }
}

/// Assemble the protocol transcript: every element prefixed by its own
/// 8-byte little-endian length, in fixed order. This exact layout is
/// load-bearing for interoperability.
pub(crate) fn transcript(
    context: &[u8],
    p_a: &[u8],
    p_b: &[u8],
    z: &[u8],
    v: &[u8],
    w0: &[u8; GROUP_SIZE_BYTES],
) -> Vec<u8> {
    let m = m_point().to_bytes(PointFormat::Uncompressed);
    let n = n_point().to_bytes(PointFormat::Uncompressed);
    let elements: [&[u8]; 10] = [context, b"", b"", &m, &n, p_a, p_b, z, v, w0];

    let total: usize = elements.iter().map(|e| e.len() + 8).sum();
    let mut tt = Vec::with_capacity(total);
    let mut prefix = [0u8; 8];
    for element in elements {
        LittleEndian::write_u64(&mut prefix, element.len() as u64);
        tt.extend_from_slice(&prefix);
        tt.extend_from_slice(element);
    }
    tt
}

/// Output of the transcript key schedule: both confirmation MACs and the
/// shared secret Ke.
pub(crate) struct TranscriptKeys {
    pub c_a: [u8; HASH_LEN_BYTES],
    pub c_b: [u8; HASH_LEN_BYTES],
    pub ke: Zeroizing<Vec<u8>>,
}

/// Ka‖Ke = Hash(TT); KcA‖KcB = HKDF(∅, Ka, "ConfirmationKeys");
/// cA = HMAC(KcA, pB); cB = HMAC(KcB, pA).
pub(crate) fn transcript_keys(tt: &[u8], p_a: &[u8], p_b: &[u8]) -> Result<TranscriptKeys> {
    let ka_ke = Zeroizing::new(Sha256::digest(tt));
    let (ka, ke) = ka_ke.split_at(HASH_LEN_BYTES / 2);

    let kc = Hkdf::<Sha256>::derive(None, ka, Some(CONFIRMATION_KEYS_INFO), HASH_LEN_BYTES)?;
    let (kc_a, kc_b) = kc.split_at(HASH_LEN_BYTES / 2);

    let c_a = Hmac::<Sha256>::mac(kc_a, p_b)?;
    let c_b = Hmac::<Sha256>::mac(kc_b, p_a)?;

    Ok(TranscriptKeys {
        c_a: c_a.try_into().expect("HMAC-SHA256 tag is 32 bytes"),
        c_b: c_b.try_into().expect("HMAC-SHA256 tag is 32 bytes"),
        ke: Zeroizing::new(ke.to_vec()),
    })
}
