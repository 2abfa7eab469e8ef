//! Curve descriptors and the curve registry

use crate::error::{Error, Result};
use crate::numbertheory::inverse_mod;
use hearth_params::nist::{CurveParams, NIST_P256 as NIST_P256_PARAMS};
use num_bigint::BigUint;
use once_cell::sync::Lazy;

use super::point::Point;

/// An immutable short-Weierstrass curve descriptor y² = x³ + ax + b over
/// GF(p).
///
/// Exactly one instance per supported curve lives in the registry; all
/// points borrow their descriptor from there, so two points on the same
/// curve always share one `&'static Curve`.
#[derive(Debug)]
pub struct Curve {
    /// Canonical curve name
    pub name: &'static str,
    /// Field prime
    pub p: BigUint,
    /// Coefficient a
    pub a: BigUint,
    /// Coefficient b
    pub b: BigUint,
    /// Generator x-coordinate
    pub gx: BigUint,
    /// Generator y-coordinate
    pub gy: BigUint,
    /// Order of the generator
    pub order: BigUint,
    /// Cofactor of the curve group
    pub cofactor: u32,
    /// Encoded length of one field element in bytes
    pub baselen: usize,
    /// ASN.1 object identifier arcs, when one is assigned
    pub oid: Option<&'static [u32]>,
}

impl Curve {
    fn from_params(params: &'static CurveParams) -> Self {
        Curve {
            name: params.name,
            p: BigUint::from_bytes_be(params.p),
            a: BigUint::from_bytes_be(params.a),
            b: BigUint::from_bytes_be(params.b),
            gx: BigUint::from_bytes_be(params.g_x),
            gy: BigUint::from_bytes_be(params.g_y),
            order: BigUint::from_bytes_be(params.n),
            cofactor: params.h,
            baselen: params.p.len(),
            oid: params.oid,
        }
    }

    /// The generator point G
    pub fn generator(&'static self) -> Point {
        Point::new(self, self.gx.clone(), self.gy.clone())
            .expect("generator satisfies the curve equation")
    }

    /// Right-hand side of the curve equation, (x³ + ax + b) mod p
    pub(super) fn equation_rhs(&self, x: &BigUint) -> BigUint {
        (x * x * x + &self.a * x + &self.b) % &self.p
    }

    /// True when (x, y) satisfies the curve equation
    pub(super) fn contains(&self, x: &BigUint, y: &BigUint) -> bool {
        x < &self.p && y < &self.p && (y * y) % &self.p == self.equation_rhs(x)
    }

    /// Modular inverse in the curve's field
    pub(super) fn field_inverse(&self, a: &BigUint) -> BigUint {
        inverse_mod(a, &self.p)
    }
}

static NIST_P256_CURVE: Lazy<Curve> = Lazy::new(|| Curve::from_params(&NIST_P256_PARAMS));

/// The NIST P-256 curve descriptor
pub fn nist_p256() -> &'static Curve {
    &NIST_P256_CURVE
}

fn registry() -> [&'static Curve; 1] {
    [nist_p256()]
}

/// Look up a curve by its ASN.1 object identifier arcs
pub fn find_curve(oid: &[u32]) -> Result<&'static Curve> {
    registry()
        .into_iter()
        .find(|curve| curve.oid == Some(oid))
        .ok_or(Error::UnknownCurve {
            identifier: "object identifier",
        })
}

/// Look up a curve by its canonical name
pub fn curve_by_name(name: &str) -> Result<&'static Curve> {
    registry()
        .into_iter()
        .find(|curve| curve.name == name)
        .ok_or(Error::UnknownCurve { identifier: "name" })
}
