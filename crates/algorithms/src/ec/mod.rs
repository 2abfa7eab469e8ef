//! Elliptic curve engine
//!
//! A named-curve registry (currently NIST P-256 only) and an affine point
//! type with the group operations the key exchange needs. Scalar
//! multiplication reduces its operand modulo the group order and runs a
//! fixed-shape Montgomery ladder; decoded points are always validated
//! against the curve equation.

mod curve;
mod point;

pub use curve::{curve_by_name, find_curve, nist_p256, Curve};
pub use point::{Point, PointFormat};
