//! Verification from a single packed buffer.
//!
//! The input is encoded as follows:
//!
//! | digest |  r  |  s  | public key x | public key y |
//! | :----: | :-: | :-: | :----------: | :----------: |
//! |   20   | 21  | 21  |      20      |      20      |
use crate::{Curve, Error, PublicKey, Signature, FIELD_BYTES, SCALAR_BYTES};

/// Length of a packed verification input.
pub const PACKED_INPUT_LEN: usize = FIELD_BYTES + 2 * SCALAR_BYTES + 2 * FIELD_BYTES;

/// Verifies a packed input on `curve`.
///
/// Returns [`Error::InvalidLength`] if `input` is not exactly
/// [`PACKED_INPUT_LEN`] bytes; otherwise the verdict of [`Curve::verify`].
pub fn verify_packed(curve: &Curve, input: &[u8]) -> Result<bool, Error> {
    if input.len() != PACKED_INPUT_LEN {
        return Err(Error::InvalidLength {
            expected: PACKED_INPUT_LEN,
            actual: input.len(),
        });
    }

    // digest, already hashed by the caller
    let (digest, rest) = input.split_at(FIELD_BYTES);
    // r, s: signature
    let (r, rest) = rest.split_at(SCALAR_BYTES);
    let (s, key) = rest.split_at(SCALAR_BYTES);
    // x, y: public key
    let key = PublicKey::from_slice(key)?;
    let signature = Signature::from_slices(r, s)?;

    Ok(curve.verify(&key, &signature, digest))
}

/// Returns `Some(())` if the signature in the packed input is valid, `None`
/// otherwise. Malformed input counts as invalid.
pub fn verify_impl(curve: &Curve, input: &[u8]) -> Option<()> {
    verify_packed(curve, input).ok()?.then_some(())
}
