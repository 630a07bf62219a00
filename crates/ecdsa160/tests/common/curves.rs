//! Curves and keys shared by the unit tests, the integration tests and the
//! benches. Only the public API is used, through the including module.
#![allow(dead_code)]

use super::{CurveParams, PublicKey};

/// Decodes hex and left-pads it to `N` bytes.
pub(crate) fn hex_bytes<const N: usize>(hex: &str) -> [u8; N] {
    let decoded = hex::decode(hex).unwrap();
    let mut out = [0; N];
    out[N - decoded.len()..].copy_from_slice(&decoded);
    out
}

/// SEC 2 secp160r1. Its order is 161 bits wide.
pub(crate) fn secp160r1() -> CurveParams {
    CurveParams {
        p: hex_bytes("ffffffffffffffffffffffffffffffff7fffffff"),
        a: hex_bytes("ffffffffffffffffffffffffffffffff7ffffffc"),
        b: hex_bytes("1c97befc54bd7a8b65acf89f81d4d4adc565fa45"),
        n: hex_bytes("0100000000000000000001f4c8f927aed3ca752257"),
        gx: hex_bytes("4a96b5688ef573284664698968c38bb913cbfc82"),
        gy: hex_bytes("23a628553168947d59dcc912042351377ac5fb32"),
    }
}

/// Public key for the private key `sha1("package signing key") mod n` on secp160r1.
pub(crate) fn secp160r1_key() -> PublicKey {
    PublicKey {
        x: hex_bytes("5cbe5a90e31ac14ff5c95ef3c7caa257bf5abe2c"),
        y: hex_bytes("d21bd7de772612a319c3f047e0d57db7ca51adc6"),
    }
}

/// `y^2 = x^3 + 13x + 5` over `F_65521`, prime order 65437, generator `(1, 15061)`.
pub(crate) fn toy() -> CurveParams {
    CurveParams {
        p: hex_bytes("fff1"),
        a: hex_bytes("0d"),
        b: hex_bytes("05"),
        n: hex_bytes("ff9d"),
        gx: hex_bytes("01"),
        gy: hex_bytes("3ad5"),
    }
}

/// Public key `12345 * G` on the toy curve.
pub(crate) fn toy_key() -> PublicKey {
    PublicKey {
        x: hex_bytes("2958"),
        y: hex_bytes("5190"),
    }
}
