#![allow(dead_code)]

mod curves;

pub(crate) use curves::{hex_bytes, secp160r1, secp160r1_key, toy, toy_key};
use ecdsa160::{CurveParams, PublicKey, Signature, FIELD_BYTES, SCALAR_BYTES};
use rand::{rngs::StdRng, RngCore};
use ruint::aliases::U256;

/// Affine point for the reference implementation. `None` is the identity.
pub(crate) type RefPoint = Option<(U256, U256)>;

/// Textbook ECDSA over a short Weierstrass curve, written against `ruint` so it
/// shares no arithmetic with the crate under test.
#[derive(Clone, Debug)]
pub(crate) struct ReferenceCurve {
    pub(crate) p: U256,
    pub(crate) a: U256,
    pub(crate) b: U256,
    pub(crate) n: U256,
    pub(crate) g: (U256, U256),
}

impl ReferenceCurve {
    pub(crate) fn from_params(params: &CurveParams) -> Self {
        Self {
            p: U256::from_be_slice(&params.p),
            a: U256::from_be_slice(&params.a),
            b: U256::from_be_slice(&params.b),
            n: U256::from_be_slice(&params.n),
            g: (
                U256::from_be_slice(&params.gx),
                U256::from_be_slice(&params.gy),
            ),
        }
    }

    fn sub(&self, x: U256, y: U256) -> U256 {
        x.add_mod(self.p - y, self.p)
    }

    pub(crate) fn add(&self, lhs: RefPoint, rhs: RefPoint) -> RefPoint {
        let (Some((x1, y1)), Some((x2, y2))) = (lhs, rhs) else {
            return lhs.or(rhs);
        };
        let p = self.p;
        let slope = if x1 == x2 {
            if y1.add_mod(y2, p).is_zero() {
                return None;
            }
            let three_xx = U256::from(3u8).mul_mod(x1.mul_mod(x1, p), p);
            let numerator = three_xx.add_mod(self.a, p);
            numerator.mul_mod(y1.add_mod(y1, p).inv_mod(p)?, p)
        } else {
            self.sub(y2, y1).mul_mod(self.sub(x2, x1).inv_mod(p)?, p)
        };
        let x3 = self.sub(self.sub(slope.mul_mod(slope, p), x1), x2);
        let y3 = self.sub(slope.mul_mod(self.sub(x1, x3), p), y1);
        Some((x3, y3))
    }

    pub(crate) fn mul(&self, k: U256, point: RefPoint) -> RefPoint {
        let mut acc = None;
        for i in (0..k.bit_len()).rev() {
            acc = self.add(acc, acc);
            if k.bit(i) {
                acc = self.add(acc, point);
            }
        }
        acc
    }

    /// A uniformly drawn scalar in `[1, n - 1]`.
    pub(crate) fn random_scalar(&self, rng: &mut StdRng) -> U256 {
        loop {
            let mut buf = [0u8; 32];
            rng.fill_bytes(&mut buf);
            let k = U256::from_be_bytes(buf).reduce_mod(self.n);
            if !k.is_zero() {
                return k;
            }
        }
    }

    pub(crate) fn keypair(&self, rng: &mut StdRng) -> (U256, PublicKey) {
        let d = self.random_scalar(rng);
        (d, self.public_key(d))
    }

    pub(crate) fn public_key(&self, d: U256) -> PublicKey {
        let (x, y) = self.mul(d, Some(self.g)).expect("d is below the order");
        PublicKey {
            x: be::<FIELD_BYTES>(x),
            y: be::<FIELD_BYTES>(y),
        }
    }

    /// Signs the integer `e` with nonce `k`. Returns `None` when `r` or `s`
    /// comes out zero.
    pub(crate) fn sign_with_nonce(&self, d: U256, e: U256, k: U256) -> Option<Signature> {
        let n = self.n;
        let (x, _) = self.mul(k, Some(self.g))?;
        let r = x.reduce_mod(n);
        if r.is_zero() {
            return None;
        }
        let e = e.reduce_mod(n);
        let s = k.inv_mod(n)?.mul_mod(e.add_mod(r.mul_mod(d, n), n), n);
        if s.is_zero() {
            return None;
        }
        Some(Signature {
            r: be::<SCALAR_BYTES>(r),
            s: be::<SCALAR_BYTES>(s),
        })
    }

    pub(crate) fn sign(&self, d: U256, e: U256, rng: &mut StdRng) -> Signature {
        loop {
            let k = self.random_scalar(rng);
            if let Some(signature) = self.sign_with_nonce(d, e, k) {
                return signature;
            }
        }
    }
}

/// The low `N` bytes of `value`, big-endian.
pub(crate) fn be<const N: usize>(value: U256) -> [u8; N] {
    let bytes = value.to_be_bytes::<32>();
    let mut out = [0; N];
    out.copy_from_slice(&bytes[32 - N..]);
    out
}
