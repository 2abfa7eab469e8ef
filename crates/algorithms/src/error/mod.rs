//! Error handling for cryptographic primitives

use std::fmt;

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// A point failed to decode or does not satisfy the curve equation
    MalformedPoint {
        /// Additional details about the decode failure
        details: &'static str,
    },

    /// Lookup of a curve by OID or name found nothing
    UnknownCurve {
        /// Which kind of identifier missed ("name" or "object identifier")
        identifier: &'static str,
    },

    /// The operand has no square root modulo the given prime.
    /// Always a fatal decode condition, never retried.
    NoSquareRoot,

    /// An internal consistency check showed the claimed prime modulus is
    /// composite. Configuration error, fatal.
    NotPrime,

    /// A scalar fell outside the required range [0, order)
    InvalidRange {
        /// Context where the range violation occurred
        context: &'static str,
    },

    /// Jacobi symbol evaluated with an even or too-small modulus
    JacobiDomain,

    /// Processing error during a cryptographic operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::MalformedPoint { details } => write!(f, "Malformed point: {}", details),
            Error::UnknownCurve { identifier } => {
                write!(f, "Curve lookup by {} found no match", identifier)
            }
            Error::NoSquareRoot => write!(f, "Operand is a non-residue: no square root"),
            Error::NotPrime => write!(f, "Modulus is not prime"),
            Error::InvalidRange { context } => {
                write!(f, "Scalar out of range in {}", context)
            }
            Error::JacobiDomain => write!(f, "Jacobi symbol requires an odd modulus >= 3"),
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
        }
    }
}

impl std::error::Error for Error {}

// Include the validation submodule
pub mod validate;
