//! Hash function implementations
//!
//! The protocol suite is pinned to SHA-256, but HMAC, the KDFs and the
//! RFC 6979 generator are written against the [`HashFunction`] trait so the
//! hash is a type parameter rather than a hard-wired call.

pub mod sha2;
pub use sha2::Sha256;

/// A streaming cryptographic hash function
pub trait HashFunction: Clone {
    /// Internal block size in bytes
    const BLOCK_SIZE: usize;
    /// Digest output size in bytes
    const OUTPUT_SIZE: usize;

    /// Create a fresh hash state
    fn new() -> Self;

    /// Feed data into the hash state
    fn update(&mut self, data: &[u8]);

    /// Consume the state and return the digest
    fn finalize(self) -> Vec<u8>;

    /// Algorithm name, for error contexts
    fn name() -> &'static str;

    /// One-shot digest helper
    fn digest(data: &[u8]) -> Vec<u8> {
        let mut h = Self::new();
        h.update(data);
        h.finalize()
    }
}
