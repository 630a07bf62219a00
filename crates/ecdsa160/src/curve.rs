//! Curve parameters and the long-lived curve context.
//!
//! [`Curve::new`] converts the coefficients and the base point into Montgomery
//! form over the field prime once; every later operation reads them as-is. The
//! group order stays canonical and is only turned into a Montgomery domain for
//! the duration of a verification.
use crate::{point::AffinePoint, utilities::left_pad, Error, FIELD_BYTES, SCALAR_BYTES};
use bignum::{Domain, Modulus, Montgomery, Uint};

/// Domain of point coordinates: integers modulo the field prime `p`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BaseField;

impl Domain for BaseField {
    const NAME: &'static str = "BaseField";
}

/// Domain of scalars: integers modulo the group order `n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GroupOrder;

impl Domain for GroupOrder {
    const NAME: &'static str = "GroupOrder";
}

/// A coordinate in Montgomery form over the field prime.
pub type FieldElement = Montgomery<FIELD_BYTES, BaseField>;

/// A canonical scalar.
pub type Scalar = Uint<SCALAR_BYTES>;

/// Canonical big-endian curve parameters, as supplied by the caller.
///
/// `p` and `n` must be prime; `a`, `b` and the generator coordinates must be
/// below `p`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveParams {
    /// Field prime.
    pub p: [u8; FIELD_BYTES],
    /// Coefficient `a` of `y^2 = x^3 + a*x + b`.
    pub a: [u8; FIELD_BYTES],
    /// Coefficient `b` of `y^2 = x^3 + a*x + b`.
    pub b: [u8; FIELD_BYTES],
    /// Order of the generator, widened to scalar width.
    pub n: [u8; SCALAR_BYTES],
    /// Generator `x` coordinate.
    pub gx: [u8; FIELD_BYTES],
    /// Generator `y` coordinate.
    pub gy: [u8; FIELD_BYTES],
}

impl CurveParams {
    /// Builds parameters from big-endian slices of any width.
    ///
    /// Every value is left-padded to its slot, so a group order may be given
    /// either at field width or at scalar width.
    pub fn from_slices(
        p: &[u8],
        a: &[u8],
        b: &[u8],
        n: &[u8],
        gx: &[u8],
        gy: &[u8],
    ) -> Result<Self, Error> {
        Ok(Self {
            p: left_pad(p)?,
            a: left_pad(a)?,
            b: left_pad(b)?,
            n: left_pad(n)?,
            gx: left_pad(gx)?,
            gy: left_pad(gy)?,
        })
    }
}

/// Immutable curve context.
///
/// Built once with [`Curve::new`] and then shared by reference; it holds no
/// interior mutability, so concurrent verifications need no locking.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Curve {
    field: Modulus<FIELD_BYTES, BaseField>,
    order: Modulus<SCALAR_BYTES, GroupOrder>,
    a: FieldElement,
    b: FieldElement,
    generator: AffinePoint,
}

impl Curve {
    /// Runs curve setup.
    ///
    /// # Panics
    ///
    /// Panics if `p` or `n` is even, or if a coefficient or generator coordinate
    /// is not below `p`. Primality of `p` and `n` is assumed, not checked.
    pub fn new(params: &CurveParams) -> Self {
        let p = Uint::from_be_bytes(params.p);
        let field = Modulus::new(p);
        let order = Modulus::new(Uint::from_be_bytes(params.n));

        for (name, value) in [
            ("coefficient a", &params.a),
            ("coefficient b", &params.b),
            ("generator x", &params.gx),
            ("generator y", &params.gy),
        ] {
            assert!(
                Uint::from_be_bytes(*value) < p,
                "curve {name} is not reduced modulo p"
            );
        }

        let curve = Self {
            field,
            order,
            a: field.to_montgomery(&Uint::from_be_bytes(params.a)),
            b: field.to_montgomery(&Uint::from_be_bytes(params.b)),
            generator: to_montgomery_point(&field, &params.gx, &params.gy),
        };
        log::debug!(
            target: "ecdsa160",
            "curve ready: p={:#x} n={:#x}",
            p,
            curve.order.value()
        );
        curve
    }

    /// The field prime and its Montgomery operations.
    #[inline]
    pub fn field(&self) -> &Modulus<FIELD_BYTES, BaseField> {
        &self.field
    }

    /// The group order. Canonical; its Montgomery domain is entered per call.
    #[inline]
    pub fn order(&self) -> &Modulus<SCALAR_BYTES, GroupOrder> {
        &self.order
    }

    /// Coefficient `a` in Montgomery form.
    #[inline]
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// Coefficient `b` in Montgomery form.
    #[inline]
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// The generator in Montgomery form.
    #[inline]
    pub fn generator(&self) -> &AffinePoint {
        &self.generator
    }

    /// Converts canonical coordinates into a Montgomery-form point.
    ///
    /// `(0, 0)` maps to the identity.
    pub fn point_to_montgomery(
        &self,
        x: &[u8; FIELD_BYTES],
        y: &[u8; FIELD_BYTES],
    ) -> AffinePoint {
        to_montgomery_point(&self.field, x, y)
    }

    /// Converts a Montgomery-form point back to canonical coordinates.
    pub fn point_from_montgomery(
        &self,
        point: &AffinePoint,
    ) -> ([u8; FIELD_BYTES], [u8; FIELD_BYTES]) {
        (
            self.field.from_montgomery(&point.x).into_bytes(),
            self.field.from_montgomery(&point.y).into_bytes(),
        )
    }
}

fn to_montgomery_point(
    field: &Modulus<FIELD_BYTES, BaseField>,
    x: &[u8; FIELD_BYTES],
    y: &[u8; FIELD_BYTES],
) -> AffinePoint {
    AffinePoint {
        x: field.to_montgomery(&Uint::from_be_bytes(*x)),
        y: field.to_montgomery(&Uint::from_be_bytes(*y)),
    }
}
