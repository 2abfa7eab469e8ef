//! Affine points and the group operations on them

use crate::error::{Error, Result};
use crate::numbertheory::square_root_mod_prime;
use num_bigint::BigUint;
use num_traits::Zero;

use super::curve::Curve;

/// Wire encodings a point can be written in.
///
/// Uncompressed is the canonical form for the key-exchange transcript;
/// compressed and hybrid exist for interoperability with stored curve
/// constants and external certificates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    /// 0x04 ‖ x ‖ y
    Uncompressed,
    /// (0x02 | y-parity) ‖ x
    Compressed,
    /// (0x06 | y-parity) ‖ x ‖ y
    Hybrid,
}

/// A group element: the identity or an affine coordinate pair.
///
/// Points are immutable; every operation returns a new value. Any
/// non-identity `Point` that exists satisfies the curve equation, because
/// both construction paths validate it.
#[derive(Debug, Clone)]
pub struct Point {
    curve: &'static Curve,
    coords: Option<(BigUint, BigUint)>,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.curve, other.curve) && self.coords == other.coords
    }
}

impl Eq for Point {}

/// (a - b) mod p for already-reduced operands
fn sub_mod(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    ((a + p) - b) % p
}

/// Fixed-width big-endian encoding, left-padded with zeros
fn to_fixed_be(n: &BigUint, width: usize) -> Vec<u8> {
    let raw = n.to_bytes_be();
    let mut out = vec![0u8; width];
    out[width - raw.len()..].copy_from_slice(&raw);
    out
}

impl Point {
    /// Build a point from affine coordinates, validating the curve equation
    pub fn new(curve: &'static Curve, x: BigUint, y: BigUint) -> Result<Self> {
        if !curve.contains(&x, &y) {
            return Err(Error::MalformedPoint {
                details: "coordinates do not satisfy the curve equation",
            });
        }
        Ok(Point {
            curve,
            coords: Some((x, y)),
        })
    }

    /// The identity element (point at infinity)
    pub fn identity(curve: &'static Curve) -> Self {
        Point {
            curve,
            coords: None,
        }
    }

    /// True for the identity element
    pub fn is_identity(&self) -> bool {
        self.coords.is_none()
    }

    /// The curve this point lives on
    pub fn curve(&self) -> &'static Curve {
        self.curve
    }

    /// The affine x-coordinate, absent for the identity
    pub fn x(&self) -> Option<&BigUint> {
        self.coords.as_ref().map(|(x, _)| x)
    }

    /// The affine y-coordinate, absent for the identity
    pub fn y(&self) -> Option<&BigUint> {
        self.coords.as_ref().map(|(_, y)| y)
    }

    /// Additive inverse: the y-coordinate flipped modulo the field prime
    pub fn negate(&self) -> Point {
        match &self.coords {
            None => self.clone(),
            Some((x, y)) => {
                let neg_y = if y.is_zero() {
                    BigUint::zero()
                } else {
                    &self.curve.p - y
                };
                Point {
                    curve: self.curve,
                    coords: Some((x.clone(), neg_y)),
                }
            }
        }
    }

    /// Point addition. The identity acts as an additive zero and
    /// P + (−P) yields the identity.
    pub fn add(&self, other: &Point) -> Point {
        debug_assert!(std::ptr::eq(self.curve, other.curve));
        let (x1, y1) = match &self.coords {
            None => return other.clone(),
            Some(c) => c,
        };
        let (x2, y2) = match &other.coords {
            None => return self.clone(),
            Some(c) => c,
        };

        let p = &self.curve.p;
        if x1 == x2 {
            if (y1 + y2) % p == BigUint::zero() {
                return Point::identity(self.curve);
            }
            return self.double();
        }

        let lambda =
            (sub_mod(y2, y1, p) * self.curve.field_inverse(&sub_mod(x2, x1, p))) % p;
        let x3 = sub_mod(&sub_mod(&((&lambda * &lambda) % p), x1, p), x2, p);
        let y3 = sub_mod(&((&lambda * sub_mod(x1, &x3, p)) % p), y1, p);
        Point {
            curve: self.curve,
            coords: Some((x3, y3)),
        }
    }

    /// Point doubling via the tangent-line formula
    pub fn double(&self) -> Point {
        let (x, y) = match &self.coords {
            None => return self.clone(),
            Some(c) => c,
        };
        if y.is_zero() {
            return Point::identity(self.curve);
        }

        let p = &self.curve.p;
        let three = BigUint::from(3u32);
        let two = BigUint::from(2u32);
        let numerator = (&three * x * x + &self.curve.a) % p;
        let lambda = (numerator * self.curve.field_inverse(&((&two * y) % p))) % p;
        let x3 = sub_mod(
            &((&lambda * &lambda) % p),
            &((&two * x) % p),
            p,
        );
        let y3 = sub_mod(&((&lambda * sub_mod(x, &x3, p)) % p), y, p);
        Point {
            curve: self.curve,
            coords: Some((x3, y3)),
        }
    }

    /// Point subtraction, expressed as addition of the negation
    pub fn sub(&self, other: &Point) -> Point {
        self.add(&other.negate())
    }

    /// Scalar multiplication by a Montgomery ladder.
    ///
    /// The scalar is reduced modulo the group order first, then the ladder
    /// walks a fixed number of bits with one add and one double per bit
    /// regardless of the bit value.
    pub fn mul(&self, scalar: &BigUint) -> Point {
        let k = scalar % &self.curve.order;
        let mut r0 = Point::identity(self.curve);
        let mut r1 = self.clone();
        for i in (0..self.curve.order.bits()).rev() {
            if k.bit(i) {
                r0 = r0.add(&r1);
                r1 = r1.double();
            } else {
                r1 = r0.add(&r1);
                r0 = r0.double();
            }
        }
        r0
    }

    /// Encode to the requested wire format. The identity encodes as a
    /// single zero byte in every format.
    pub fn to_bytes(&self, format: PointFormat) -> Vec<u8> {
        let (x, y) = match &self.coords {
            None => return vec![0u8],
            Some(c) => c,
        };
        let baselen = self.curve.baselen;
        let parity = u8::from(y.bit(0));
        let mut out;
        match format {
            PointFormat::Uncompressed => {
                out = Vec::with_capacity(1 + 2 * baselen);
                out.push(0x04);
                out.extend_from_slice(&to_fixed_be(x, baselen));
                out.extend_from_slice(&to_fixed_be(y, baselen));
            }
            PointFormat::Compressed => {
                out = Vec::with_capacity(1 + baselen);
                out.push(0x02 | parity);
                out.extend_from_slice(&to_fixed_be(x, baselen));
            }
            PointFormat::Hybrid => {
                out = Vec::with_capacity(1 + 2 * baselen);
                out.push(0x06 | parity);
                out.extend_from_slice(&to_fixed_be(x, baselen));
                out.extend_from_slice(&to_fixed_be(y, baselen));
            }
        }
        out
    }

    /// Decode a point from any of the supported wire formats, validating
    /// the result against the curve equation.
    pub fn from_bytes(curve: &'static Curve, data: &[u8]) -> Result<Point> {
        if data == [0x00] {
            return Ok(Point::identity(curve));
        }
        let baselen = curve.baselen;
        match data.first() {
            Some(0x04) | Some(0x06) | Some(0x07) => {
                if data.len() != 1 + 2 * baselen {
                    return Err(Error::MalformedPoint {
                        details: "wrong length for an x-y encoding",
                    });
                }
                let x = BigUint::from_bytes_be(&data[1..1 + baselen]);
                let y = BigUint::from_bytes_be(&data[1 + baselen..]);
                if data[0] != 0x04 && y.bit(0) != (data[0] == 0x07) {
                    return Err(Error::MalformedPoint {
                        details: "hybrid prefix disagrees with y parity",
                    });
                }
                Point::new(curve, x, y)
            }
            Some(prefix @ (0x02 | 0x03)) => {
                if data.len() != 1 + baselen {
                    return Err(Error::MalformedPoint {
                        details: "wrong length for a compressed encoding",
                    });
                }
                let x = BigUint::from_bytes_be(&data[1..]);
                if x >= curve.p {
                    return Err(Error::MalformedPoint {
                        details: "x-coordinate out of field range",
                    });
                }
                let beta = match square_root_mod_prime(&curve.equation_rhs(&x), &curve.p) {
                    Ok(beta) => beta,
                    Err(Error::NoSquareRoot) => {
                        return Err(Error::MalformedPoint {
                            details: "compressed x-coordinate is not on the curve",
                        })
                    }
                    Err(e) => return Err(e),
                };
                let y = if beta.bit(0) == (*prefix == 0x03) {
                    beta
                } else {
                    &curve.p - beta
                };
                Point::new(curve, x, y)
            }
            Some(_) => Err(Error::MalformedPoint {
                details: "unrecognized encoding prefix",
            }),
            None => Err(Error::MalformedPoint {
                details: "empty encoding",
            }),
        }
    }
}
