//! NIST P-256 (secp256r1 / prime256v1) domain parameters
//!
//! Values from FIPS 186-4, D.1.2.3, as big-endian byte strings. The curve
//! engine turns these into big integers at registry construction time.

/// Domain parameters for a short-Weierstrass prime curve y² = x³ + ax + b
pub struct CurveParams {
    /// Canonical curve name
    pub name: &'static str,
    /// ASN.1 object identifier arcs, when one is assigned
    pub oid: Option<&'static [u32]>,
    /// Field prime p, big-endian
    pub p: &'static [u8],
    /// Coefficient a, big-endian
    pub a: &'static [u8],
    /// Coefficient b, big-endian
    pub b: &'static [u8],
    /// Generator x-coordinate, big-endian
    pub g_x: &'static [u8],
    /// Generator y-coordinate, big-endian
    pub g_y: &'static [u8],
    /// Order n of the generator, big-endian
    pub n: &'static [u8],
    /// Cofactor h of the curve group
    pub h: u32,
}

/// NIST P-256: p = 2^256 - 2^224 + 2^192 + 2^96 - 1, a = -3
pub const NIST_P256: CurveParams = CurveParams {
    name: "NIST256p",
    oid: Some(&[1, 2, 840, 10045, 3, 1, 7]),
    p: &[
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF,
    ],
    a: &[
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFC,
    ],
    b: &[
        0x5A, 0xC6, 0x35, 0xD8, 0xAA, 0x3A, 0x93, 0xE7, 0xB3, 0xEB, 0xBD, 0x55, 0x76, 0x98, 0x86,
        0xBC, 0x65, 0x1D, 0x06, 0xB0, 0xCC, 0x53, 0xB0, 0xF6, 0x3B, 0xCE, 0x3C, 0x3E, 0x27, 0xD2,
        0x60, 0x4B,
    ],
    g_x: &[
        0x6B, 0x17, 0xD1, 0xF2, 0xE1, 0x2C, 0x42, 0x47, 0xF8, 0xBC, 0xE6, 0xE5, 0x63, 0xA4, 0x40,
        0xF2, 0x77, 0x03, 0x7D, 0x81, 0x2D, 0xEB, 0x33, 0xA0, 0xF4, 0xA1, 0x39, 0x45, 0xD8, 0x98,
        0xC2, 0x96,
    ],
    g_y: &[
        0x4F, 0xE3, 0x42, 0xE2, 0xFE, 0x1A, 0x7F, 0x9B, 0x8E, 0xE7, 0xEB, 0x4A, 0x7C, 0x0F, 0x9E,
        0x16, 0x2B, 0xCE, 0x33, 0x57, 0x6B, 0x31, 0x5E, 0xCE, 0xCB, 0xB6, 0x40, 0x68, 0x37, 0xBF,
        0x51, 0xF5,
    ],
    n: &[
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xBC, 0xE6, 0xFA, 0xAD, 0xA7, 0x17, 0x9E, 0x84, 0xF3, 0xB9, 0xCA, 0xC2, 0xFC, 0x63,
        0x25, 0x51,
    ],
    h: 1,
};
