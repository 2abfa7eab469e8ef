//! The SPAKE2+ exchange state machines
//!
//! One `Prover` (commissioner, holds the passcode) and one `Responder`
//! (device, holds only the verifier record) per session-establishment
//! attempt. Each state value is exclusively owned by the handler driving
//! that session; nothing here is shared across threads. Every failure is
//! terminal for the attempt, and a wrong passcode is indistinguishable
//! from a corrupted message.

use hearth_algorithms::ec::{nist_p256, Point, PointFormat};
use hearth_params::{HASH_LEN_BYTES, PUBLIC_KEY_SIZE_BYTES};
use num_bigint::{BigUint, RandBigInt};
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::session_keys::SessionKeySet;
use crate::spake2p::{
    derive_w0_w1, m_point, n_point, scalar_bytes, transcript, transcript_keys, PakeVerifier,
};

/// First round message: the prover's public share pA
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pake1 {
    /// X = x·G + w0·M, uncompressed
    pub p_a: [u8; PUBLIC_KEY_SIZE_BYTES],
}

/// Second round message: the responder's share pB and its confirmation MAC
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pake2 {
    /// Y = y·G + w0·N, uncompressed
    pub p_b: [u8; PUBLIC_KEY_SIZE_BYTES],
    /// cB = HMAC(KcB, pA)
    pub c_b: [u8; HASH_LEN_BYTES],
}

/// Third round message: the prover's confirmation MAC
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pake3 {
    /// cA = HMAC(KcA, pB)
    pub c_a: [u8; HASH_LEN_BYTES],
}

/// Form the masked public share scalar·G + w0·mask for a given ephemeral
/// scalar. `None` when the share is the identity, which has no fixed-width
/// encoding.
fn masked_share_for(
    scalar: &BigUint,
    w0: &BigUint,
    mask: &Point,
) -> Option<[u8; PUBLIC_KEY_SIZE_BYTES]> {
    let curve = nist_p256();
    let share = curve.generator().mul(scalar).add(&mask.mul(w0));
    if share.is_identity() {
        return None;
    }
    Some(
        share
            .to_bytes(PointFormat::Uncompressed)
            .try_into()
            .expect("non-identity point encodes to the fixed width"),
    )
}

/// Sample an ephemeral scalar and form its masked public share, resampling
/// in the (negligible) event the share is the identity.
fn masked_share<R: CryptoRng + RngCore>(
    rng: &mut R,
    w0: &BigUint,
    mask: &Point,
) -> (BigUint, [u8; PUBLIC_KEY_SIZE_BYTES]) {
    loop {
        let scalar = rng.gen_biguint_below(&nist_p256().order);
        if let Some(encoded) = masked_share_for(&scalar, w0, mask) {
            return (scalar, encoded);
        }
    }
}

/// Commissioner side: derives w0/w1 from the passcode live and proves
/// knowledge of it.
pub struct Prover {
    context: Vec<u8>,
    w0: BigUint,
    w1: BigUint,
    x: BigUint,
    p_a: [u8; PUBLIC_KEY_SIZE_BYTES],
    ke: Option<Zeroizing<Vec<u8>>>,
}

impl Prover {
    /// Derive the passcode secrets and the ephemeral share for one
    /// exchange attempt. `context` is the shared transcript context
    /// negotiated by the surrounding message layer.
    pub fn new<R: CryptoRng + RngCore>(
        passcode: u32,
        salt: &[u8],
        iterations: u32,
        context: &[u8],
        rng: &mut R,
    ) -> Result<Self> {
        let (w0, w1) = derive_w0_w1(passcode, salt, iterations)?;
        let (x, p_a) = masked_share(rng, &w0, m_point());
        Ok(Prover {
            context: context.to_vec(),
            w0,
            w1,
            x,
            p_a,
            ke: None,
        })
    }

    /// The opening message carrying pA
    pub fn start(&self) -> Pake1 {
        Pake1 { p_a: self.p_a }
    }

    /// Process the responder's share and confirmation.
    ///
    /// Computes Z = h·x·(Y − w0·N) and V = h·w1·(Y − w0·N), assembles the
    /// transcript, verifies cB, and answers with cA. A MAC mismatch aborts
    /// the exchange.
    pub fn consume_pake2(&mut self, pake2: &Pake2) -> Result<Pake3> {
        let curve = nist_p256();
        let y_point = Point::from_bytes(curve, &pake2.p_b)?;
        let base = y_point.sub(&n_point().mul(&self.w0));
        let h = BigUint::from(curve.cofactor);

        let z = base.mul(&(&h * &self.x));
        let v = base.mul(&(&h * &self.w1));

        let tt = transcript(
            &self.context,
            &self.p_a,
            &pake2.p_b,
            &z.to_bytes(PointFormat::Uncompressed),
            &v.to_bytes(PointFormat::Uncompressed),
            &scalar_bytes(&self.w0),
        );
        let keys = transcript_keys(&tt, &self.p_a, &pake2.p_b)?;

        if !bool::from(keys.c_b.ct_eq(&pake2.c_b)) {
            return Err(Error::ConfirmationMismatch);
        }
        self.ke = Some(keys.ke);
        Ok(Pake3 { c_a: keys.c_a })
    }

    /// Hand the confirmed shared secret to the session key schedule,
    /// consuming the exchange state.
    pub fn session_keys(self) -> Result<SessionKeySet> {
        let ke = self.ke.as_ref().ok_or(Error::State {
            expected: "a verified Pake2 before session keys",
        })?;
        SessionKeySet::derive(ke)
    }
}

/// Device side: holds only the verifier record, never the passcode
pub struct Responder {
    context: Vec<u8>,
    verifier: PakeVerifier,
    expected_c_a: Option<[u8; HASH_LEN_BYTES]>,
    ke: Option<Zeroizing<Vec<u8>>>,
    confirmed: bool,
}

impl Responder {
    /// Start an exchange attempt for a stored verifier record
    pub fn new(verifier: PakeVerifier, context: &[u8]) -> Self {
        Responder {
            context: context.to_vec(),
            verifier,
            expected_c_a: None,
            ke: None,
            confirmed: false,
        }
    }

    /// Process pA and answer with pB and cB.
    ///
    /// Computes Z = h·y·(X − w0·M) and V = h·y·L. The prover's share is
    /// validated against the curve equation before any group arithmetic.
    pub fn handle_pake1<R: CryptoRng + RngCore>(
        &mut self,
        pake1: &Pake1,
        rng: &mut R,
    ) -> Result<Pake2> {
        let (y, p_b) = masked_share(rng, self.verifier.w0(), n_point());
        self.respond(pake1, &y, p_b)
    }

    /// The deterministic remainder of the second round, given the
    /// ephemeral scalar and its encoded share
    fn respond(
        &mut self,
        pake1: &Pake1,
        y: &BigUint,
        p_b: [u8; PUBLIC_KEY_SIZE_BYTES],
    ) -> Result<Pake2> {
        let curve = nist_p256();
        let x_point = Point::from_bytes(curve, &pake1.p_a)?;
        let w0 = self.verifier.w0();
        let h = BigUint::from(curve.cofactor);
        let hy = &h * y;

        let z = x_point.sub(&m_point().mul(w0)).mul(&hy);
        let v = self.verifier.l().mul(&hy);

        let tt = transcript(
            &self.context,
            &pake1.p_a,
            &p_b,
            &z.to_bytes(PointFormat::Uncompressed),
            &v.to_bytes(PointFormat::Uncompressed),
            &scalar_bytes(w0),
        );
        let keys = transcript_keys(&tt, &pake1.p_a, &p_b)?;

        self.expected_c_a = Some(keys.c_a);
        self.ke = Some(keys.ke);
        Ok(Pake2 {
            p_b,
            c_b: keys.c_b,
        })
    }

    /// Verify the prover's confirmation MAC. A mismatch aborts the
    /// exchange and drops the derived secret.
    pub fn handle_pake3(&mut self, pake3: &Pake3) -> Result<()> {
        let expected = self.expected_c_a.take().ok_or(Error::State {
            expected: "Pake1 before Pake3",
        })?;
        if !bool::from(expected.ct_eq(&pake3.c_a)) {
            self.ke = None;
            return Err(Error::ConfirmationMismatch);
        }
        self.confirmed = true;
        Ok(())
    }

    /// Hand the confirmed shared secret to the session key schedule,
    /// consuming the exchange state.
    pub fn session_keys(self) -> Result<SessionKeySet> {
        if !self.confirmed {
            return Err(Error::State {
                expected: "a verified Pake3 before session keys",
            });
        }
        let ke = self.ke.as_ref().ok_or(Error::State {
            expected: "a verified Pake3 before session keys",
        })?;
        SessionKeySet::derive(ke)
    }
}
