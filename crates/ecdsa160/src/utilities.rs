//! Padding helpers for caller-supplied big-endian buffers.
use crate::Error;
use bignum::Uint;

/// Left-pads the given slice with zeroes until `LEN`.
///
/// Leading zero bytes beyond `LEN` are dropped. Returns [`Error::ValueTooWide`]
/// if more than `LEN` bytes are significant.
#[inline]
pub fn left_pad<const LEN: usize>(data: &[u8]) -> Result<[u8; LEN], Error> {
    Uint::<LEN>::from_be_slice(data)
        .map(Uint::into_bytes)
        .ok_or(Error::ValueTooWide { width: LEN })
}
