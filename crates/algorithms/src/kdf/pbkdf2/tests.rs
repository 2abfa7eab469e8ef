use super::*;
use crate::hash::Sha256;

/// PBKDF2-HMAC-SHA256, single iteration (Josefsson test vector set)
#[test]
fn test_pbkdf2_sha256_one_iteration() {
    let expected =
        hex::decode("120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b").unwrap();
    let derived = Pbkdf2::<Sha256>::derive(b"password", b"salt", 1, 32).unwrap();
    assert_eq!(derived.as_slice(), expected.as_slice());
}

/// PBKDF2-HMAC-SHA256 vectors from RFC 7914 section 11
#[test]
fn test_pbkdf2_sha256_rfc7914_full() {
    let expected = hex::decode(
        "55ac046e56e3089fec1691c22544b605f94185216dde0465e68b9d57c20dacbc\
         49ca9cccf179b645991664b39d77ef317c71b845b1e30bd509112041d3a19783",
    )
    .unwrap();
    let derived = Pbkdf2::<Sha256>::derive(b"passwd", b"salt", 1, 64).unwrap();
    assert_eq!(derived.as_slice(), expected.as_slice());
}

#[test]
fn test_pbkdf2_sha256_high_iterations() {
    let expected = hex::decode(
        "4ddcd8f60b98be21830cee5ef22701f9641a4418d04c0414aeff08876b34ab56\
         a1d425a1225833549adb841b51c9b3176a272bdebba1d078478f62b397f33c8d",
    )
    .unwrap();
    let derived = Pbkdf2::<Sha256>::derive(b"Password", b"NaCl", 80000, 64).unwrap();
    assert_eq!(derived.as_slice(), expected.as_slice());
}

#[test]
fn test_pbkdf2_zero_iterations_rejected() {
    assert!(Pbkdf2::<Sha256>::derive(b"p", b"s", 0, 32).is_err());
}

#[test]
fn test_pbkdf2_partial_block_output() {
    // Output that is not a multiple of the hash size truncates the last block
    let long = Pbkdf2::<Sha256>::derive(b"p", b"s", 10, 64).unwrap();
    let short = Pbkdf2::<Sha256>::derive(b"p", b"s", 10, 40).unwrap();
    assert_eq!(&long[..40], short.as_slice());
}
