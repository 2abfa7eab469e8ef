use super::*;
use crate::hash::Sha256;

/// RFC 5869 test case 1
#[test]
fn test_hkdf_sha256_rfc5869_1() {
    let ikm = [0x0b; 22];
    let salt = hex::decode("000102030405060708090a0b0c").unwrap();
    let info = hex::decode("f0f1f2f3f4f5f6f7f8f9").unwrap();

    let prk = Hkdf::<Sha256>::extract(Some(&salt), &ikm).unwrap();
    assert_eq!(
        prk.as_slice(),
        hex::decode("077709362c2e32df0ddc3f0dc47bba6390b6c73bb50f9c3122ec844ad7c2b3e5")
            .unwrap()
            .as_slice()
    );

    let okm = Hkdf::<Sha256>::expand(&prk, Some(&info), 42).unwrap();
    assert_eq!(
        okm.as_slice(),
        hex::decode(
            "3cb25f25faacd57a90434f64d0362f2a2d2d0a90cf1a5a4c5db02d56ecc4c5bf\
             34007208d5b887185865"
        )
        .unwrap()
        .as_slice()
    );
}

/// RFC 5869 test case 3: zero-length salt and info
#[test]
fn test_hkdf_sha256_rfc5869_3() {
    let ikm = [0x0b; 22];

    let okm = Hkdf::<Sha256>::derive(None, &ikm, None, 42).unwrap();
    assert_eq!(
        okm.as_slice(),
        hex::decode(
            "8da4e775a563c18f715f802a063c5a31b8a11f5c5ee1879ec3454e5f3c738d2d\
             9d201395faa4b61a96c8"
        )
        .unwrap()
        .as_slice()
    );
}

/// Empty salt and absent salt must agree (RFC 5869 section 2.2)
#[test]
fn test_hkdf_empty_salt_equals_none() {
    let a = Hkdf::<Sha256>::derive(None, b"ikm", Some(b"info"), 32).unwrap();
    let b = Hkdf::<Sha256>::derive(Some(b""), b"ikm", Some(b"info"), 32).unwrap();
    assert_eq!(a.as_slice(), b.as_slice());
}

#[test]
fn test_hkdf_expand_length_cap() {
    let prk = Hkdf::<Sha256>::extract(None, b"ikm").unwrap();
    assert!(Hkdf::<Sha256>::expand(&prk, None, 255 * 32).is_ok());
    assert!(Hkdf::<Sha256>::expand(&prk, None, 255 * 32 + 1).is_err());
}
