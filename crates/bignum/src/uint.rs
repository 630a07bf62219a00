//! Fixed-width big-endian unsigned integers.
//!
//! Index `0` holds the most significant byte and index `W - 1` the least
//! significant one. Every routine here walks the bytes from the least
//! significant end and carries one byte at a time.
use core::{cmp::Ordering, fmt};

/// Unsigned integer of exactly `W` bytes, stored big-endian.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uint<const W: usize>(pub(crate) [u8; W]);

impl<const W: usize> Uint<W> {
    /// The all-zero value.
    pub const ZERO: Self = Self([0; W]);

    /// Width of the value in bytes.
    pub const BYTES: usize = W;

    /// Width of the value in bits.
    pub const BITS: usize = W * 8;

    /// Wraps big-endian bytes.
    #[inline]
    pub const fn from_be_bytes(bytes: [u8; W]) -> Self {
        Self(bytes)
    }

    /// Returns `value` as a `W`-byte integer.
    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        let mut bytes = [0; W];
        bytes[W - 1] = value;
        Self(bytes)
    }

    /// Returns the value `1`.
    #[inline]
    pub const fn one() -> Self {
        Self::from_u8(1)
    }

    /// Reads a big-endian slice of any length.
    ///
    /// Shorter slices are left-padded with zeroes. Leading zero bytes beyond `W`
    /// are dropped; returns `None` if more than `W` bytes are significant.
    pub fn from_be_slice(bytes: &[u8]) -> Option<Self> {
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        let significant = &bytes[start..];
        if significant.len() > W {
            return None;
        }
        let mut out = [0; W];
        out[W - significant.len()..].copy_from_slice(significant);
        Some(Self(out))
    }

    /// Returns the big-endian bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; W] {
        &self.0
    }

    /// Consumes the value and returns its big-endian bytes.
    #[inline]
    pub const fn into_bytes(self) -> [u8; W] {
        self.0
    }

    /// Left-pads the value into a wider integer.
    ///
    /// # Panics
    ///
    /// Panics if `V < W`.
    pub fn widen<const V: usize>(&self) -> Uint<V> {
        assert!(V >= W, "cannot widen a {W}-byte integer into {V} bytes");
        let mut out = [0; V];
        out[V - W..].copy_from_slice(&self.0);
        Uint(out)
    }

    /// Returns `true` if every byte is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    /// Returns `true` if the least significant bit is set.
    #[inline]
    pub const fn is_odd(&self) -> bool {
        self.0[W - 1] & 1 == 1
    }

    /// Iterates over all `W * 8` bits, most significant first.
    ///
    /// Leading zero bits are included.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0
            .iter()
            .flat_map(|&byte| (0..8).rev().map(move |shift| (byte >> shift) & 1 == 1))
    }

    /// Big-endian unsigned comparison.
    pub fn compare(&self, rhs: &Self) -> Ordering {
        for (a, b) in self.0.iter().zip(rhs.0.iter()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    /// Schoolbook addition. Returns the sum modulo `256^W` and whether the true
    /// sum needed a `W + 1`-th byte.
    pub fn add_raw(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0; W];
        let mut carry = 0u16;
        for i in (0..W).rev() {
            let digit = self.0[i] as u16 + rhs.0[i] as u16 + carry;
            out[i] = digit as u8;
            carry = digit >> 8;
        }
        (Self(out), carry != 0)
    }

    /// Schoolbook subtraction through complement plus one. Returns the
    /// difference modulo `256^W` and whether `self < rhs`.
    pub fn sub_raw(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0; W];
        let mut carry = 1u16;
        for i in (0..W).rev() {
            let digit = self.0[i] as u16 + 0xff - rhs.0[i] as u16 + carry;
            out[i] = digit as u8;
            carry = digit >> 8;
        }
        (Self(out), carry == 0)
    }

    /// Subtracts `modulus` once if `self >= modulus`.
    ///
    /// Only a full reduction when `self < 2 * modulus`; it never loops.
    #[inline]
    pub fn reduce(&self, modulus: &Self) -> Self {
        if self.compare(modulus) == Ordering::Less {
            *self
        } else {
            self.sub_raw(modulus).0
        }
    }

    /// `(self + rhs) mod modulus` for operands already below `modulus`.
    pub fn mod_add(&self, rhs: &Self, modulus: &Self) -> Self {
        let (mut sum, carry) = self.add_raw(rhs);
        if carry {
            sum = sum.sub_raw(modulus).0;
        }
        sum.reduce(modulus)
    }

    /// `(self - rhs) mod modulus` for operands already below `modulus`.
    pub fn mod_sub(&self, rhs: &Self, modulus: &Self) -> Self {
        let (diff, borrowed) = self.sub_raw(rhs);
        if borrowed {
            diff.add_raw(modulus).0
        } else {
            diff
        }
    }
}

impl<const W: usize> Default for Uint<W> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const W: usize> PartialOrd for Uint<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const W: usize> Ord for Uint<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<const W: usize> From<[u8; W]> for Uint<W> {
    fn from(bytes: [u8; W]) -> Self {
        Self(bytes)
    }
}

impl<const W: usize> AsRef<[u8]> for Uint<W> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const W: usize> fmt::LowerHex for Uint<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl<const W: usize> fmt::Debug for Uint<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint({self:#x})")
    }
}
