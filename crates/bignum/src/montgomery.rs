//! Radix-256 Montgomery arithmetic on [`Uint`].
//!
//! A value `v` is in Montgomery form for modulus `N` when it is stored as
//! `v * R mod N` with `R = 256^W`. Multiplication folds in one byte of the right
//! operand per step and cancels the low byte of the accumulator with a multiple
//! of `N`, so no division is ever needed. The cancelling multiple comes from
//! [`INVERSE_MOD_256`], which requires `N` to be odd.
//!
//! All routines expect operands already reduced below the modulus and return
//! values below the modulus.
use crate::Uint;

/// Multiplicative inverses modulo 256 of every odd byte.
///
/// `INVERSE_MOD_256[k] * (2k + 1) == 1 (mod 256)`.
pub const INVERSE_MOD_256: [u8; 128] = inverse_table();

const fn inverse_table() -> [u8; 128] {
    let mut table = [0u8; 128];
    let mut k = 0;
    while k < 128 {
        let odd = (2 * k + 1) as u8;
        // Every odd byte is its own inverse modulo 8. Each Newton step doubles
        // the number of correct low bits: 3 -> 6 -> 12.
        let mut inverse = odd;
        inverse = inverse.wrapping_mul(2u8.wrapping_sub(odd.wrapping_mul(inverse)));
        inverse = inverse.wrapping_mul(2u8.wrapping_sub(odd.wrapping_mul(inverse)));
        table[k] = inverse;
        k += 1;
    }
    table
}

impl<const W: usize> Uint<W> {
    /// Converts a canonical value below `modulus` into Montgomery form by
    /// doubling it modulo `modulus` exactly `8 * W` times.
    pub fn to_montgomery(&self, modulus: &Self) -> Self {
        let mut value = *self;
        for _ in 0..Self::BITS {
            value = value.mod_add(&value, modulus);
        }
        value
    }

    /// Converts a Montgomery-form value back to its canonical value.
    #[inline]
    pub fn from_montgomery(&self, modulus: &Self) -> Self {
        self.mon_mul(&Self::one(), modulus)
    }

    /// Montgomery product `self * rhs * R^-1 mod modulus`.
    ///
    /// Digits of `rhs` are folded in from the least significant byte.
    pub fn mon_mul(&self, rhs: &Self, modulus: &Self) -> Self {
        debug_assert!(modulus.is_odd(), "Montgomery modulus must be odd");
        let mut acc = Self::ZERO;
        for &digit in rhs.0.iter().rev() {
            acc = acc.mon_mul_add_digit(self, digit, modulus);
        }
        acc
    }

    /// One step of [`Self::mon_mul`]: `(self + a * digit + modulus * z) / 256`,
    /// where `z` is chosen so that the division is exact.
    ///
    /// `self` is the running accumulator and must be below `modulus`; so is the
    /// result.
    pub fn mon_mul_add_digit(&self, a: &Self, digit: u8, modulus: &Self) -> Self {
        let digit = digit as u32;
        let low = self.0[W - 1] as u32 + a.0[W - 1] as u32 * digit;
        let z = (low as u8)
            .wrapping_neg()
            .wrapping_mul(INVERSE_MOD_256[(modulus.0[W - 1] >> 1) as usize]) as u32;

        // The low byte is zero by construction of `z` and is shifted out.
        let mut carry = (low + modulus.0[W - 1] as u32 * z) >> 8;
        let mut out = [0u8; W];
        for i in (0..W - 1).rev() {
            carry += self.0[i] as u32 + a.0[i] as u32 * digit + modulus.0[i] as u32 * z;
            out[i + 1] = carry as u8;
            carry >>= 8;
        }
        out[0] = carry as u8;
        carry >>= 8;

        let mut out = Self(out);
        if carry != 0 {
            out = out.sub_raw(modulus).0;
        }
        out.reduce(modulus)
    }

    /// Left-to-right square-and-multiply. `self` is a Montgomery-form base, the
    /// exponent is canonical and read over its full fixed width.
    pub fn mon_exp<const E: usize>(&self, exponent: &Uint<E>, modulus: &Self) -> Self {
        let mut acc = Self::one().to_montgomery(modulus);
        for bit in exponent.bits() {
            let squared = acc.mon_mul(&acc, modulus);
            acc = if bit {
                squared.mon_mul(self, modulus)
            } else {
                squared
            };
        }
        acc
    }

    /// Inverse of a Montgomery-form value through Fermat's little theorem,
    /// `self^(modulus - 2)`. The modulus must be prime. Zero maps to zero.
    pub fn mon_inverse(&self, modulus: &Self) -> Self {
        let exponent = modulus.sub_raw(&Self::from_u8(2)).0;
        self.mon_exp(&exponent, modulus)
    }
}
