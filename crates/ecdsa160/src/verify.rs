//! ECDSA verification.
//!
//! Two Montgomery domains meet here. Point coordinates are Montgomery values
//! over the field prime, kept that way from [`Curve::new`] onwards. Scalars are
//! taken into Montgomery form over the group order for the inversion and the two
//! products, then brought back to canonical digits before they drive a scalar
//! multiplication.
use crate::{utilities::left_pad, Curve, Error, Scalar, FIELD_BYTES, SCALAR_BYTES};
use bignum::Uint;

/// Canonical public key coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicKey {
    /// `x` coordinate, big-endian.
    pub x: [u8; FIELD_BYTES],
    /// `y` coordinate, big-endian.
    pub y: [u8; FIELD_BYTES],
}

impl PublicKey {
    /// Reads `x || y`, each [`FIELD_BYTES`] wide.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != 2 * FIELD_BYTES {
            return Err(Error::InvalidLength {
                expected: 2 * FIELD_BYTES,
                actual: bytes.len(),
            });
        }
        let (x, y) = bytes.split_at(FIELD_BYTES);
        Self::from_coordinates(x, y)
    }

    /// Reads the coordinates from big-endian slices of any width.
    pub fn from_coordinates(x: &[u8], y: &[u8]) -> Result<Self, Error> {
        Ok(Self {
            x: left_pad(x)?,
            y: left_pad(y)?,
        })
    }
}

/// Canonical signature components, widened to scalar width.
///
/// Nothing here checks that `r` and `s` lie in `[1, n - 1]`; see
/// [`Curve::signature_in_range`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature {
    /// `r`, big-endian.
    pub r: [u8; SCALAR_BYTES],
    /// `s`, big-endian.
    pub s: [u8; SCALAR_BYTES],
}

impl Signature {
    /// Reads `r` and `s` from big-endian slices of any width.
    ///
    /// Signatures are commonly stored at field width; they are left-padded to
    /// [`SCALAR_BYTES`]. Leading zeroes beyond that are ignored.
    pub fn from_slices(r: &[u8], s: &[u8]) -> Result<Self, Error> {
        Ok(Self {
            r: left_pad(r)?,
            s: left_pad(s)?,
        })
    }

    /// Splits `r || s`, each [`SCALAR_BYTES`] wide.
    pub fn from_bytes(bytes: &[u8; 2 * SCALAR_BYTES]) -> Self {
        let mut r = [0; SCALAR_BYTES];
        let mut s = [0; SCALAR_BYTES];
        r.copy_from_slice(&bytes[..SCALAR_BYTES]);
        s.copy_from_slice(&bytes[SCALAR_BYTES..]);
        Self { r, s }
    }
}

impl Curve {
    /// Verifies `signature` over `digest` against `key`.
    ///
    /// The digest is read as a big-endian integer of any width and reduced by a
    /// single subtraction of the group order. Any 20-byte digest qualifies on
    /// curves whose order exceeds `2^159`.
    ///
    /// # Panics
    ///
    /// Panics if the digest has more than [`SCALAR_BYTES`] significant bytes or
    /// is not below twice the group order.
    ///
    /// The inputs are not validated: `r` and `s` are not range-checked and the
    /// key is not checked to be on the curve. In particular `r = s = 0` is
    /// accepted for every key and digest. Callers that need to reject such
    /// input do so beforehand with [`Curve::signature_in_range`] and
    /// [`Curve::is_key_on_curve`].
    pub fn verify(&self, key: &PublicKey, signature: &Signature, digest: &[u8]) -> bool {
        let order = self.order();
        let n = order.value();

        let q = self.point_to_montgomery(&key.x, &key.y);

        let e = Scalar::from_be_slice(digest)
            .unwrap_or_else(|| panic!("digest has more than {SCALAR_BYTES} significant bytes"))
            .reduce(n);
        assert!(e < *n, "digest is not below twice the group order");
        let r = order.to_montgomery(&Uint::from_be_bytes(signature.r));
        let s = order.to_montgomery(&Uint::from_be_bytes(signature.s));
        let e = order.to_montgomery(&e);

        let s_inv = order.invert(&s);
        let u1 = order.from_montgomery(&order.mul(&e, &s_inv));
        let u2 = order.from_montgomery(&order.mul(&r, &s_inv));

        let point = self.point_add(
            &self.point_mul(&u1, self.generator()),
            &self.point_mul(&u2, &q),
        );
        let (x, _) = self.point_from_montgomery(&point);

        let x: Scalar = Uint::from_be_bytes(x).widen::<SCALAR_BYTES>().reduce(n);
        let valid = x == order.from_montgomery(&r);
        log::trace!(target: "ecdsa160", "signature verification: valid={valid}");
        valid
    }

    /// Returns `true` if both `r` and `s` lie in `[1, n - 1]`.
    ///
    /// [`Curve::verify`] does not perform this check itself.
    pub fn signature_in_range(&self, signature: &Signature) -> bool {
        let n = self.order().value();
        [signature.r, signature.s].iter().all(|component| {
            let value = Scalar::from_be_bytes(*component);
            !value.is_zero() && value < *n
        })
    }

    /// Returns `true` if `key` is a point on the curve.
    ///
    /// [`Curve::verify`] does not perform this check itself.
    pub fn is_key_on_curve(&self, key: &PublicKey) -> bool {
        let p = self.field().value();
        let x = Uint::from_be_bytes(key.x);
        let y = Uint::from_be_bytes(key.y);
        if x >= *p || y >= *p {
            return false;
        }
        let point = self.point_to_montgomery(&key.x, &key.y);
        !point.is_identity() && self.is_on_curve(&point)
    }
}
