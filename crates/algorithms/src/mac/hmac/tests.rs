use super::*;
use crate::hash::Sha256;

/// RFC 4231 test case 1
#[test]
fn test_hmac_sha256_rfc4231_1() {
    let key = [0x0b; 20];
    let data = b"Hi There";
    let expected =
        hex::decode("b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7").unwrap();

    assert_eq!(Hmac::<Sha256>::mac(&key, data).unwrap(), expected);
}

/// RFC 4231 test case 2 (short key)
#[test]
fn test_hmac_sha256_rfc4231_2() {
    let expected =
        hex::decode("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843").unwrap();

    assert_eq!(
        Hmac::<Sha256>::mac(b"Jefe", b"what do ya want for nothing?").unwrap(),
        expected
    );
}

/// RFC 4231 test case 6 (key longer than the hash block, hashed first)
#[test]
fn test_hmac_sha256_rfc4231_6() {
    let key = [0xaa; 131];
    let data = b"Test Using Larger Than Block-Size Key - Hash Key First";
    let expected =
        hex::decode("60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54").unwrap();

    assert_eq!(Hmac::<Sha256>::mac(&key, data).unwrap(), expected);
}

#[test]
fn test_hmac_streaming_matches_oneshot() {
    let key = b"streaming key";
    let oneshot = Hmac::<Sha256>::mac(key, b"hello world").unwrap();

    let mut mac = Hmac::<Sha256>::new(key).unwrap();
    mac.update(b"hello").unwrap();
    mac.update(b" ").unwrap();
    mac.update(b"world").unwrap();
    assert_eq!(mac.finalize().unwrap(), oneshot);
}

#[test]
fn test_hmac_verify() {
    let key = b"key";
    let tag = Hmac::<Sha256>::mac(key, b"message").unwrap();

    assert!(Hmac::<Sha256>::verify(key, b"message", &tag).unwrap());
    assert!(!Hmac::<Sha256>::verify(key, b"massage", &tag).unwrap());
    // Truncated tag must fail, not panic
    assert!(!Hmac::<Sha256>::verify(key, b"message", &tag[..16]).unwrap());
}

#[test]
fn test_hmac_update_after_finalize_fails() {
    let mut mac = Hmac::<Sha256>::new(b"key").unwrap();
    mac.update(b"data").unwrap();
    mac.finalize().unwrap();
    assert!(mac.update(b"more").is_err());
    assert!(mac.finalize().is_err());
}
