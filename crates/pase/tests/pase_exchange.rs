//! Full prover/responder exchange runs

use hearth_pase::{Error, Pake3, PakeVerifier, Prover, Responder};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const PASSCODE: u32 = 20202021;
const SALT: &[u8] = b"SPAKE2P Key Salt";
const ITERATIONS: u32 = 1000;
const CONTEXT: &[u8] = b"hearth PASE context";

fn run_exchange(
    prover_passcode: u32,
    prover_seed: u64,
    responder_seed: u64,
) -> Result<([u8; 16], [u8; 16], [u8; 16]), Error> {
    let mut prover_rng = ChaCha20Rng::seed_from_u64(prover_seed);
    let mut responder_rng = ChaCha20Rng::seed_from_u64(responder_seed);

    let verifier = PakeVerifier::derive(PASSCODE, SALT, ITERATIONS)?;
    let mut prover = Prover::new(prover_passcode, SALT, ITERATIONS, CONTEXT, &mut prover_rng)?;
    let mut responder = Responder::new(verifier, CONTEXT);

    let pake1 = prover.start();
    let pake2 = responder.handle_pake1(&pake1, &mut responder_rng)?;
    let pake3 = prover.consume_pake2(&pake2)?;
    responder.handle_pake3(&pake3)?;

    let prover_keys = prover.session_keys()?;
    let responder_keys = responder.session_keys()?;

    assert_eq!(prover_keys.i2r_key(), responder_keys.i2r_key());
    assert_eq!(prover_keys.r2i_key(), responder_keys.r2i_key());
    assert_eq!(
        prover_keys.attestation_challenge(),
        responder_keys.attestation_challenge()
    );
    Ok((
        *prover_keys.i2r_key(),
        *prover_keys.r2i_key(),
        *prover_keys.attestation_challenge(),
    ))
}

#[test]
fn test_matching_passcode_yields_identical_keys() {
    let (i2r, r2i, challenge) = run_exchange(PASSCODE, 1, 2).unwrap();
    assert_ne!(i2r, r2i);
    assert_ne!(i2r, challenge);
    assert_ne!(r2i, challenge);
}

#[test]
fn test_fixed_seeds_reproduce_the_run() {
    let first = run_exchange(PASSCODE, 7, 8).unwrap();
    let second = run_exchange(PASSCODE, 7, 8).unwrap();
    assert_eq!(first, second);
    // Different ephemerals give different sessions
    let third = run_exchange(PASSCODE, 9, 10).unwrap();
    assert_ne!(first, third);
}

#[test]
fn test_wrong_passcode_is_a_confirmation_mismatch() {
    assert_eq!(
        run_exchange(PASSCODE + 1, 3, 4).unwrap_err(),
        Error::ConfirmationMismatch
    );
}

#[test]
fn test_responder_rejects_bad_confirmation() {
    let mut prover_rng = ChaCha20Rng::seed_from_u64(5);
    let mut responder_rng = ChaCha20Rng::seed_from_u64(6);

    let verifier = PakeVerifier::derive(PASSCODE, SALT, ITERATIONS).unwrap();
    let prover = Prover::new(PASSCODE, SALT, ITERATIONS, CONTEXT, &mut prover_rng).unwrap();
    let mut responder = Responder::new(verifier, CONTEXT);

    let pake2 = responder
        .handle_pake1(&prover.start(), &mut responder_rng)
        .unwrap();
    drop(pake2);

    let forged = Pake3 { c_a: [0u8; 32] };
    assert_eq!(
        responder.handle_pake3(&forged).unwrap_err(),
        Error::ConfirmationMismatch
    );
    // The derived secret is gone with the failed confirmation
    assert!(matches!(
        responder.session_keys(),
        Err(Error::State { .. })
    ));
}

#[test]
fn test_context_mismatch_fails_like_a_wrong_passcode() {
    let mut prover_rng = ChaCha20Rng::seed_from_u64(11);
    let mut responder_rng = ChaCha20Rng::seed_from_u64(12);

    let verifier = PakeVerifier::derive(PASSCODE, SALT, ITERATIONS).unwrap();
    let mut prover =
        Prover::new(PASSCODE, SALT, ITERATIONS, b"context A", &mut prover_rng).unwrap();
    let mut responder = Responder::new(verifier, b"context B");

    let pake2 = responder
        .handle_pake1(&prover.start(), &mut responder_rng)
        .unwrap();
    assert_eq!(
        prover.consume_pake2(&pake2).unwrap_err(),
        Error::ConfirmationMismatch
    );
}

#[test]
fn test_out_of_order_steps_are_rejected() {
    let mut rng = ChaCha20Rng::seed_from_u64(13);
    let verifier = PakeVerifier::derive(PASSCODE, SALT, ITERATIONS).unwrap();

    let mut responder = Responder::new(verifier.clone(), CONTEXT);
    assert!(matches!(
        responder.handle_pake3(&Pake3 { c_a: [0u8; 32] }),
        Err(Error::State { .. })
    ));

    let prover = Prover::new(PASSCODE, SALT, ITERATIONS, CONTEXT, &mut rng).unwrap();
    assert!(matches!(prover.session_keys(), Err(Error::State { .. })));

    let responder = Responder::new(verifier, CONTEXT);
    assert!(matches!(
        responder.session_keys(),
        Err(Error::State { .. })
    ));
}

#[test]
fn test_responder_rejects_malformed_share() {
    let mut prover_rng = ChaCha20Rng::seed_from_u64(14);
    let mut responder_rng = ChaCha20Rng::seed_from_u64(15);

    let verifier = PakeVerifier::derive(PASSCODE, SALT, ITERATIONS).unwrap();
    let prover = Prover::new(PASSCODE, SALT, ITERATIONS, CONTEXT, &mut prover_rng).unwrap();
    let mut responder = Responder::new(verifier, CONTEXT);

    let mut pake1 = prover.start();
    pake1.p_a[64] ^= 0x01; // off the curve
    assert!(matches!(
        responder.handle_pake1(&pake1, &mut responder_rng),
        Err(Error::Crypto(_))
    ));
}

#[test]
fn test_exchange_works_from_a_persisted_verifier_record() {
    let mut prover_rng = ChaCha20Rng::seed_from_u64(16);
    let mut responder_rng = ChaCha20Rng::seed_from_u64(17);

    let record = PakeVerifier::derive(PASSCODE, SALT, ITERATIONS)
        .unwrap()
        .to_bytes();
    let verifier = PakeVerifier::from_bytes(&record).unwrap();

    let mut prover = Prover::new(PASSCODE, SALT, ITERATIONS, CONTEXT, &mut prover_rng).unwrap();
    let mut responder = Responder::new(verifier, CONTEXT);

    let pake2 = responder
        .handle_pake1(&prover.start(), &mut responder_rng)
        .unwrap();
    let pake3 = prover.consume_pake2(&pake2).unwrap();
    responder.handle_pake3(&pake3).unwrap();

    let prover_keys = prover.session_keys().unwrap();
    let responder_keys = responder.session_keys().unwrap();
    assert_eq!(prover_keys.i2r_key(), responder_keys.i2r_key());
}
