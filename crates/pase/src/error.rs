//! Error handling for the PASE engine

use std::fmt;

/// The error type for the PASE exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A confirmation MAC did not verify. Wrong passcode and tampered
    /// message are deliberately indistinguishable, and the message never
    /// says which side's MAC failed.
    ConfirmationMismatch,

    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// An exchange step was driven out of order
    State {
        /// What the exchange was waiting for
        expected: &'static str,
    },

    /// A failure inside the primitive layer
    Crypto(hearth_algorithms::Error),
}

/// Result type for PASE operations
pub type Result<T> = core::result::Result<T, Error>;

impl From<hearth_algorithms::Error> for Error {
    fn from(err: hearth_algorithms::Error) -> Self {
        Error::Crypto(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfirmationMismatch => write!(f, "Session establishment failed"),
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::State { expected } => {
                write!(f, "Exchange out of order: expected {}", expected)
            }
            Error::Crypto(err) => write!(f, "Crypto failure: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Crypto(err) => Some(err),
            _ => None,
        }
    }
}
