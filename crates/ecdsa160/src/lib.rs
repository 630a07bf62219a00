//! # ecdsa160
//!
//! ECDSA signature verification over short Weierstrass curves with a 160-bit
//! prime field, as used to sign package headers and their digests.
//!
//! The crate is a pure function of its inputs: a [`Curve`] is built once from
//! canonical parameters and then shared read-only, and [`Curve::verify`] answers
//! with a single boolean. All arithmetic runs on fixed-width stack buffers from
//! [`bignum`]; nothing allocates and nothing runs in constant time.
//!
//! Two widths are fixed:
//! * [`FIELD_BYTES`] (20) for field elements and point coordinates.
//! * [`SCALAR_BYTES`] (21) for scalars. The extra byte holds group orders that
//!   are one bit wider than the field, as the SEC 160-bit curves have.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod curve;
pub mod error;
pub mod packed;
pub mod point;
pub mod utilities;
pub mod verify;

#[cfg(test)]
#[path = "../tests/common/curves.rs"]
pub(crate) mod test_curves;

pub use bignum;
pub use curve::{BaseField, Curve, CurveParams, FieldElement, GroupOrder, Scalar};
pub use error::Error;
pub use packed::{verify_impl, verify_packed, PACKED_INPUT_LEN};
pub use point::AffinePoint;
pub use verify::{PublicKey, Signature};

/// Width in bytes of a field element.
pub const FIELD_BYTES: usize = 20;

/// Width in bytes of a scalar.
pub const SCALAR_BYTES: usize = FIELD_BYTES + 1;
