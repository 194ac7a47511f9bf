//! Group operations on short Weierstrass curves over prime fields.
//!
//! The arithmetic follows GB/T 32918.1 (SM2 part 1): section 3.2.3.1 for affine
//! addition, annex A.1.2.3.2 for Jacobian coordinates and annex A.3 for scalar
//! multiplication.

mod affine;
pub(crate) mod field;
mod jacobian;
pub(crate) mod mul;

use self::{field::Fp, mul::MulAlgorithm};
use crate::{CurveParams, Error, Point, Result};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

/// Elliptic curve arithmetic engine for the curve `y² = x³ + ax + b (mod p)`.
///
/// Holds the immutable domain parameters together with the constants the
/// Jacobian formulas reuse (`a + 3` and `2⁻¹ mod p`). All operations are
/// pure: they take points by reference and return new points.
#[derive(Clone, Debug)]
pub struct Ecc {
    pub(crate) params: CurveParams,
    pub(crate) field: Fp,

    /// `a + 3 mod p`
    a_plus_3: BigUint,

    /// `2⁻¹ mod p`
    inv_two: BigUint,

    pub(crate) algorithm: MulAlgorithm,
}

impl Ecc {
    /// Create an engine for the given domain parameters.
    ///
    /// Performs the structural checks which do not require primality
    /// testing: `p` odd and greater than 3, `a` and `b` reduced, a
    /// non-singular curve, `n ≥ 3` and a generator on the curve. Use
    /// [`CurveParams::validate`] to vet untrusted parameters fully.
    pub fn new(params: CurveParams) -> Result<Self> {
        if params.p <= BigUint::from(3u32) || params.p.is_even() {
            return Err(Error::InvalidParams("modulus p must be an odd prime above 3"));
        }

        let ecc = Self::from_params(params);
        let params = &ecc.params;

        if !ecc.on_field(&[&params.a, &params.b]) {
            return Err(Error::InvalidParams("coefficients a and b must be reduced modulo p"));
        }

        if ecc.discriminant().is_zero() {
            return Err(Error::InvalidParams("curve is singular: 4a³ + 27b² = 0"));
        }

        if params.n < BigUint::from(3u32) {
            return Err(Error::InvalidParams("order n must be at least 3"));
        }

        let generator = ecc.generator();
        if !ecc.on_field(&[params.g.x(), params.g.y()]) || !ecc.on_curve(&generator) {
            return Err(Error::InvalidParams("generator is not on the curve"));
        }

        Ok(ecc)
    }

    /// Engine for the SM2 recommended curve `sm2p256v1`.
    pub fn sm2p256v1() -> Self {
        Self::from_params(CurveParams::sm2p256v1())
    }

    /// Use the given algorithm for [`Ecc::jacobian_multiply`].
    pub fn with_algorithm(mut self, algorithm: MulAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Scalar multiplication algorithm used by [`Ecc::jacobian_multiply`].
    pub fn algorithm(&self) -> MulAlgorithm {
        self.algorithm
    }

    /// Domain parameters.
    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// Base point `G`.
    pub fn generator(&self) -> Point {
        Point::Affine(self.params.g.clone())
    }

    /// Order `n` of the base point.
    pub fn order(&self) -> &BigUint {
        &self.params.n
    }

    /// Derive the engine constants without checking the parameters.
    fn from_params(params: CurveParams) -> Self {
        let field = Fp::new(params.p.clone());
        let a_plus_3 = field.add(&params.a, &BigUint::from(3u32));
        let inv_two = field.invert(&BigUint::from(2u32));

        Self {
            params,
            field,
            a_plus_3,
            inv_two,
            algorithm: MulAlgorithm::default(),
        }
    }

    /// `4a³ + 27b² mod p`
    fn discriminant(&self) -> BigUint {
        let f = &self.field;
        let a = &self.params.a;
        let b = &self.params.b;
        let a3 = f.mul(&f.square(a), a);
        let b2 = f.square(b);
        f.add(&(a3 * 4u32), &(b2 * 27u32))
    }

    /// `x³ + ax + b mod p`
    pub(crate) fn curve_rhs(&self, x: &BigUint) -> BigUint {
        let f = &self.field;
        let x3 = f.mul(&f.square(x), x);
        f.add(&f.add(&x3, &f.mul(&self.params.a, x)), &self.params.b)
    }
}
