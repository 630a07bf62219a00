//! Montgomery values tagged with the modulus they belong to.
//!
//! A signature check works modulo two different primes at once: curve
//! coordinates live modulo the field prime and scalars modulo the group order.
//! Both are stored as plain byte arrays, so nothing in [`Uint`] stops a value in
//! Montgomery form for one prime from being multiplied modulo the other. The
//! types here close that gap: a [`Montgomery`] value carries a zero-sized
//! [`Domain`] marker, and only the [`Modulus`] of that same domain accepts it.
//!
//! ```compile_fail
//! use ecdsa160_bignum::{Domain, Modulus, Uint};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! struct Field;
//! impl Domain for Field { const NAME: &'static str = "Field"; }
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! struct Order;
//! impl Domain for Order { const NAME: &'static str = "Order"; }
//!
//! let field = Modulus::<2, Field>::new(Uint::from_be_bytes([0xff, 0xf1]));
//! let order = Modulus::<2, Order>::new(Uint::from_be_bytes([0xff, 0x9d]));
//! let x = field.to_montgomery(&Uint::from_u8(7));
//! // A field element is not a scalar.
//! let _ = order.mul(&x, &x);
//! ```
use crate::Uint;
use core::{fmt, marker::PhantomData};

/// Marker for the modulus a [`Montgomery`] value was produced under.
pub trait Domain: Copy + Eq + fmt::Debug + 'static {
    /// Short name used in debug output.
    const NAME: &'static str;
}

/// A value in Montgomery form for the modulus of domain `D`.
///
/// Obtained from [`Modulus::to_montgomery`] or from arithmetic on other values
/// of the same domain. The only way back to a canonical integer is
/// [`Modulus::from_montgomery`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Montgomery<const W: usize, D> {
    value: Uint<W>,
    _domain: PhantomData<D>,
}

impl<const W: usize, D> Montgomery<W, D> {
    /// Zero, which is the same in canonical and Montgomery form.
    pub const ZERO: Self = Self::from_raw(Uint::ZERO);

    #[inline]
    const fn from_raw(value: Uint<W>) -> Self {
        Self {
            value,
            _domain: PhantomData,
        }
    }

    /// Returns `true` if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// The Montgomery-form digits, `v * R mod m`.
    #[inline]
    pub const fn as_raw(&self) -> &Uint<W> {
        &self.value
    }
}

impl<const W: usize, D: Domain> fmt::Debug for Montgomery<W, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Montgomery<{}>({:#x})", D::NAME, self.value)
    }
}

/// An odd modulus, tagged with the domain it defines.
///
/// The modulus itself is kept canonical. Every operation expects operands below
/// the modulus and returns values below it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modulus<const W: usize, D> {
    value: Uint<W>,
    _domain: PhantomData<D>,
}

impl<const W: usize, D: Domain> Modulus<W, D> {
    /// Wraps a canonical modulus.
    ///
    /// # Panics
    ///
    /// Panics if `value` is even or smaller than `3`: the Montgomery reduction
    /// needs an odd modulus and inversion needs `value - 2` to be positive.
    pub fn new(value: Uint<W>) -> Self {
        assert!(value.is_odd(), "{} modulus must be odd", D::NAME);
        assert!(
            value > Uint::from_u8(2),
            "{} modulus must be at least 3",
            D::NAME
        );
        Self {
            value,
            _domain: PhantomData,
        }
    }

    /// The canonical modulus.
    #[inline]
    pub const fn value(&self) -> &Uint<W> {
        &self.value
    }

    /// Converts a canonical value below the modulus into Montgomery form.
    #[inline]
    pub fn to_montgomery(&self, x: &Uint<W>) -> Montgomery<W, D> {
        Montgomery::from_raw(x.to_montgomery(&self.value))
    }

    /// Converts a Montgomery value back to its canonical value.
    #[inline]
    pub fn from_montgomery(&self, x: &Montgomery<W, D>) -> Uint<W> {
        x.value.from_montgomery(&self.value)
    }

    /// Montgomery form of `1`.
    #[inline]
    pub fn one(&self) -> Montgomery<W, D> {
        self.to_montgomery(&Uint::one())
    }

    /// `a + b`.
    #[inline]
    pub fn add(&self, a: &Montgomery<W, D>, b: &Montgomery<W, D>) -> Montgomery<W, D> {
        Montgomery::from_raw(a.value.mod_add(&b.value, &self.value))
    }

    /// `a - b`.
    #[inline]
    pub fn sub(&self, a: &Montgomery<W, D>, b: &Montgomery<W, D>) -> Montgomery<W, D> {
        Montgomery::from_raw(a.value.mod_sub(&b.value, &self.value))
    }

    /// `-a`.
    #[inline]
    pub fn neg(&self, a: &Montgomery<W, D>) -> Montgomery<W, D> {
        self.sub(&Montgomery::ZERO, a)
    }

    /// `2 * a`.
    #[inline]
    pub fn double(&self, a: &Montgomery<W, D>) -> Montgomery<W, D> {
        self.add(a, a)
    }

    /// `a * b`.
    #[inline]
    pub fn mul(&self, a: &Montgomery<W, D>, b: &Montgomery<W, D>) -> Montgomery<W, D> {
        Montgomery::from_raw(a.value.mon_mul(&b.value, &self.value))
    }

    /// `a * a`.
    #[inline]
    pub fn square(&self, a: &Montgomery<W, D>) -> Montgomery<W, D> {
        self.mul(a, a)
    }

    /// `base ^ exponent`, for a canonical exponent of any width.
    #[inline]
    pub fn pow<const E: usize>(
        &self,
        base: &Montgomery<W, D>,
        exponent: &Uint<E>,
    ) -> Montgomery<W, D> {
        Montgomery::from_raw(base.value.mon_exp(exponent, &self.value))
    }

    /// `a ^ -1`, assuming the modulus is prime. Zero maps to zero.
    #[inline]
    pub fn invert(&self, a: &Montgomery<W, D>) -> Montgomery<W, D> {
        Montgomery::from_raw(a.value.mon_inverse(&self.value))
    }
}

impl<const W: usize, D: Domain> fmt::Debug for Modulus<W, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Modulus<{}>({:#x})", D::NAME, self.value)
    }
}
