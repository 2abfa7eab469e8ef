//! Constants for the hearth commissioning security core
//!
//! This crate carries only compiled-in data: curve parameters, the SPAKE2+
//! auxiliary points, and the protocol's fixed sizes. No logic lives here.

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod nist;
pub mod spake2p;

/// Output size of the protocol hash (SHA-256) in bytes
pub const HASH_LEN_BYTES: usize = 32;

/// Output size of the protocol hash in bits
pub const HASH_LEN_BITS: usize = HASH_LEN_BYTES * 8;

/// Encoded size of a group scalar / field element in bytes
pub const GROUP_SIZE_BYTES: usize = 32;

/// Encoded size of an uncompressed group element: 0x04 || x || y
pub const PUBLIC_KEY_SIZE_BYTES: usize = 1 + 2 * GROUP_SIZE_BYTES;

/// Encoded size of a compressed group element: 0x02/0x03 || x
pub const COMPRESSED_KEY_SIZE_BYTES: usize = 1 + GROUP_SIZE_BYTES;

/// Symmetric session key size in bytes (AEAD with a 128-bit tag)
pub const SYMMETRIC_KEY_LENGTH_BYTES: usize = 16;

/// Symmetric session key size in bits
pub const SYMMETRIC_KEY_LENGTH_BITS: usize = SYMMETRIC_KEY_LENGTH_BYTES * 8;

/// Width of each PBKDF2 output half before reduction modulo the curve
/// order. The 8 extra bytes beyond the group size make the reduction bias
/// negligible (standard wide-reduction technique).
pub const W_SIZE_BYTES: usize = GROUP_SIZE_BYTES + 8;

/// Serialized verifier record size: w0 || uncompressed(L)
pub const VERIFIER_RECORD_SIZE_BYTES: usize = GROUP_SIZE_BYTES + PUBLIC_KEY_SIZE_BYTES;

/// Allowed PBKDF2 salt length range, inclusive
pub const PBKDF_SALT_MIN_BYTES: usize = 16;
/// Upper bound of the PBKDF2 salt length range, inclusive
pub const PBKDF_SALT_MAX_BYTES: usize = 32;
