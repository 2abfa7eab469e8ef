use super::*;
use num_bigint::BigUint;
use num_traits::Num;
use proptest::prelude::*;

fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

fn p256_prime() -> BigUint {
    BigUint::from_str_radix(
        "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff",
        16,
    )
    .unwrap()
}

#[test]
fn test_inverse_mod_small() {
    assert_eq!(inverse_mod(&big(3), &big(7)), big(5));
    assert_eq!(inverse_mod(&big(1), &big(97)), big(1));
    assert_eq!(inverse_mod(&big(96), &big(97)), big(96));
}

#[test]
fn test_inverse_mod_zero_convention() {
    assert_eq!(inverse_mod(&big(0), &big(97)), big(0));
    assert_eq!(inverse_mod(&big(97), &big(97)), big(0));
}

#[test]
fn test_inverse_mod_p256() {
    let p = p256_prime();
    let a = big(0xdeadbeef);
    let inv = inverse_mod(&a, &p);
    assert_eq!((a * inv) % &p, big(1));
}

#[test]
fn test_jacobi_domain_errors() {
    assert!(jacobi(&5.into(), &big(4)).is_err());
    assert!(jacobi(&5.into(), &big(2)).is_err());
    assert!(jacobi(&5.into(), &big(1)).is_err());
}

#[test]
fn test_jacobi_matches_euler_criterion() {
    // For odd primes the Jacobi symbol is the Legendre symbol, which
    // Euler's criterion computes directly.
    for &p in SMALL_PRIMES.iter().skip(1).take(30) {
        let p_big = big(p as u64);
        let exp = (&p_big - 1u32) >> 1;
        for a in 0..p as u64 {
            let euler = big(a).modpow(&exp, &p_big);
            let expected = if a == 0 {
                0
            } else if euler == big(1) {
                1
            } else {
                -1
            };
            assert_eq!(
                jacobi(&a.into(), &p_big).unwrap(),
                expected,
                "jacobi({}, {})",
                a,
                p
            );
        }
    }
}

#[test]
fn test_is_prime_small_values() {
    assert!(is_prime(&big(2)));
    assert!(is_prime(&big(3)));
    assert!(is_prime(&big(1229)));
    assert!(!is_prime(&big(0)));
    assert!(!is_prime(&big(1)));
    assert!(!is_prime(&big(1227)));
}

#[test]
fn test_is_prime_rejects_carmichael_numbers() {
    for c in [561u64, 1105, 1729, 2465, 2821, 6601] {
        assert!(!is_prime(&big(c)), "{} is composite", c);
    }
}

#[test]
fn test_is_prime_medium_values() {
    assert!(is_prime(&big(104_729))); // the 10000th prime
    assert!(!is_prime(&(big(104_729) * big(104_729))));
}

#[test]
fn test_is_prime_p256_parameters() {
    let p = p256_prime();
    assert!(is_prime(&p));
    assert!(!is_prime(&(&p - 1u32)));

    let n = BigUint::from_str_radix(
        "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551",
        16,
    )
    .unwrap();
    assert!(is_prime(&n));
}

#[test]
fn test_square_root_exhaustive_small_primes() {
    // Covers all three branches: p % 4 == 3, p % 8 == 5, and the general
    // quadratic-extension case (p % 8 == 1: 17, 41, 73, 89, 97).
    for &p in SMALL_PRIMES.iter().take(26).skip(1) {
        let p_big = big(p as u64);
        for a in 0..p as u64 {
            let a_big = big(a);
            match square_root_mod_prime(&a_big, &p_big) {
                Ok(r) => {
                    assert_eq!((&r * &r) % &p_big, a_big, "sqrt({}) mod {}", a, p);
                }
                Err(Error::NoSquareRoot) => {
                    assert_eq!(jacobi(&a.into(), &p_big).unwrap(), -1);
                }
                Err(e) => panic!("unexpected error for sqrt({}) mod {}: {}", a, p, e),
            }
        }
    }
}

#[test]
fn test_square_root_p256() {
    let p = p256_prime();
    // 2 is a quadratic residue mod the P-256 prime (p ≡ ±1 mod 8)
    let r = square_root_mod_prime(&big(2), &p).unwrap();
    assert_eq!((&r * &r) % &p, big(2));
}

#[test]
fn test_square_root_rejects_out_of_range() {
    let p = big(19);
    assert!(matches!(
        square_root_mod_prime(&big(19), &p),
        Err(Error::InvalidRange { .. })
    ));
}

proptest! {
    #[test]
    fn prop_inverse_mod_roundtrip(a in 1u64..10_000, m in 3u64..10_000) {
        let a_big = big(a);
        let m_big = big(m);
        prop_assume!(a_big.gcd(&m_big) == big(1));
        let inv = inverse_mod(&a_big, &m_big);
        prop_assert_eq!((a_big * inv) % m_big, big(1));
    }

    #[test]
    fn prop_jacobi_multiplicative(a in 0u64..500, b in 0u64..500, n_idx in 1usize..40) {
        let n = big(SMALL_PRIMES[n_idx] as u64);
        let ja = jacobi(&a.into(), &n).unwrap();
        let jb = jacobi(&b.into(), &n).unwrap();
        let jab = jacobi(&BigInt::from(a * b), &n).unwrap();
        prop_assert_eq!(jab, ja * jb);
    }
}
