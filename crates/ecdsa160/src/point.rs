//! Affine point arithmetic on `y^2 = x^3 + a*x + b`.
//!
//! Coordinates are Montgomery-form elements over the field prime for the whole
//! computation; converting in and out is left to the caller. Every slope costs
//! one field inversion, which is why nothing here is fast.
use crate::{Curve, FieldElement, Scalar};

/// A curve point with Montgomery-form coordinates.
///
/// The identity is encoded as `(0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AffinePoint {
    /// `x` coordinate.
    pub x: FieldElement,
    /// `y` coordinate.
    pub y: FieldElement,
}

impl AffinePoint {
    /// The identity, `(0, 0)`.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ZERO,
    };

    /// Returns `true` if both coordinates are zero.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Curve {
    /// `2 * p`.
    ///
    /// A point with `y = 0` (the identity, or a point of order two) doubles to
    /// the identity.
    pub fn point_double(&self, p: &AffinePoint) -> AffinePoint {
        if p.y.is_zero() {
            return AffinePoint::IDENTITY;
        }
        let f = self.field();

        // s = (3 * x^2 + a) / (2 * y)
        let xx = f.square(&p.x);
        let numerator = f.add(&f.add(&f.double(&xx), &xx), self.a());
        let slope = f.mul(&numerator, &f.invert(&f.double(&p.y)));

        let x = f.sub(&f.square(&slope), &f.double(&p.x));
        let y = f.sub(&f.mul(&slope, &f.sub(&p.x, &x)), &p.y);
        AffinePoint { x, y }
    }

    /// `p + q`.
    pub fn point_add(&self, p: &AffinePoint, q: &AffinePoint) -> AffinePoint {
        if p.is_identity() {
            return *q;
        }
        if q.is_identity() {
            return *p;
        }
        let f = self.field();

        let dx = f.sub(&q.x, &p.x);
        let dy = f.sub(&q.y, &p.y);
        if dx.is_zero() {
            // Same x: either the same point or its negation.
            return if dy.is_zero() {
                self.point_double(p)
            } else {
                AffinePoint::IDENTITY
            };
        }

        let slope = f.mul(&dy, &f.invert(&dx));
        let x = f.sub(&f.square(&slope), &f.add(&p.x, &q.x));
        let y = f.sub(&f.mul(&slope, &f.sub(&p.x, &x)), &p.y);
        AffinePoint { x, y }
    }

    /// `-p`. The identity is its own negation.
    pub fn point_negate(&self, p: &AffinePoint) -> AffinePoint {
        AffinePoint {
            x: p.x,
            y: self.field().neg(&p.y),
        }
    }

    /// `k * p` by double-and-add over every bit of `k`, leading zeros included.
    pub fn point_mul(&self, k: &Scalar, p: &AffinePoint) -> AffinePoint {
        let mut acc = AffinePoint::IDENTITY;
        for bit in k.bits() {
            acc = self.point_double(&acc);
            if bit {
                acc = self.point_add(&acc, p);
            }
        }
        acc
    }

    /// Returns `true` if `p` satisfies the curve equation or is the identity.
    ///
    /// Verification never calls this; it is here for callers that want to
    /// reject public keys up front.
    pub fn is_on_curve(&self, p: &AffinePoint) -> bool {
        if p.is_identity() {
            return true;
        }
        let f = self.field();
        let lhs = f.square(&p.y);
        let x3 = f.mul(&f.square(&p.x), &p.x);
        let rhs = f.add(&f.add(&x3, &f.mul(self.a(), &p.x)), self.b());
        lhs == rhs
    }
}
