//! Elliptic curve domain parameters.

use crate::{AffinePoint, Ecc, Error, Result, primality::is_probable_prime};
use hex_literal::hex;
use num_bigint::BigUint;
use rand_core::CryptoRngCore;

/// Domain parameters `(p, a, b, n, G, h)` of the curve
/// `y² = x³ + ax + b (mod p)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveParams {
    /// Prime modulus of the base field.
    pub(crate) p: BigUint,

    /// Coefficient `a` in the curve equation.
    pub(crate) a: BigUint,

    /// Coefficient `b` in the curve equation.
    pub(crate) b: BigUint,

    /// Order of the base point.
    pub(crate) n: BigUint,

    /// Base point.
    pub(crate) g: AffinePoint,

    /// Cofactor `#E(Fp) / n`, if known.
    pub(crate) h: Option<BigUint>,
}

impl CurveParams {
    /// Collect domain parameters.
    ///
    /// Nothing is checked here: [`Ecc::new`] performs the structural checks
    /// and [`CurveParams::validate`] additionally tests `p` and `n` for
    /// primality.
    pub fn new(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        n: BigUint,
        g: AffinePoint,
        h: Option<BigUint>,
    ) -> Self {
        Self { p, a, b, n, g, h }
    }

    /// Recommended 256-bit curve of GB/T 32918.5.
    ///
    /// ```text
    /// p  = FFFFFFFE FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF 00000000 FFFFFFFF FFFFFFFF
    /// a  = FFFFFFFE FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF 00000000 FFFFFFFF FFFFFFFC
    /// b  = 28E9FA9E 9D9F5E34 4D5A9E4B CF6509A7 F39789F5 15AB8F92 DDBCBD41 4D940E93
    /// n  = FFFFFFFE FFFFFFFF FFFFFFFF FFFFFFFF 7203DF6B 21C6052B 53BBF409 39D54123
    /// Gₓ = 32C4AE2C 1F198119 5F990446 6A39C994 8FE30BBF F2660BE1 715A4589 334C74C7
    /// Gᵧ = BC3736A2 F4F6779C 59BDCEE3 6B692153 D0A9877C C62A4740 02DF32E5 2139F0A0
    /// ```
    pub fn sm2p256v1() -> Self {
        Self {
            p: BigUint::from_bytes_be(&hex!(
                "FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00000000FFFFFFFFFFFFFFFF"
            )),
            a: BigUint::from_bytes_be(&hex!(
                "FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00000000FFFFFFFFFFFFFFFC"
            )),
            b: BigUint::from_bytes_be(&hex!(
                "28E9FA9E9D9F5E344D5A9E4BCF6509A7F39789F515AB8F92DDBCBD414D940E93"
            )),
            n: BigUint::from_bytes_be(&hex!(
                "FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFF7203DF6B21C6052B53BBF40939D54123"
            )),
            g: AffinePoint::new(
                BigUint::from_bytes_be(&hex!(
                    "32C4AE2C1F1981195F9904466A39C9948FE30BBFF2660BE1715A4589334C74C7"
                )),
                BigUint::from_bytes_be(&hex!(
                    "BC3736A2F4F6779C59BDCEE36B692153D0A9877CC62A474002DF32E52139F0A0"
                )),
            ),
            h: Some(BigUint::from(1u32)),
        }
    }

    /// Prime modulus `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Coefficient `a`.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b`.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Order `n` of the base point.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Base point `G`.
    pub fn generator(&self) -> &AffinePoint {
        &self.g
    }

    /// Cofactor `h`, if known.
    pub fn cofactor(&self) -> Option<&BigUint> {
        self.h.as_ref()
    }

    /// Fully vet the parameters before use.
    ///
    /// In addition to the checks of [`Ecc::new`], requires `p` and `n` to be
    /// probable primes and `[n]G` to be the point at infinity.
    pub fn validate(&self, rng: &mut impl CryptoRngCore) -> Result<()> {
        if !is_probable_prime(&self.p, rng) {
            return Err(Error::InvalidParams("modulus p is not prime"));
        }

        if !is_probable_prime(&self.n, rng) {
            return Err(Error::InvalidParams("order n is not prime"));
        }

        let ecc = Ecc::new(self.clone())?;
        if !ecc
            .jacobian_multiply_with(&self.n, &ecc.generator(), ecc.algorithm(), false)
            .is_identity()
        {
            return Err(Error::InvalidParams("generator does not have order n"));
        }

        Ok(())
    }

    /// `y² = x³ + x + 1` over `F₂₃` with `G = (3, 10)` of order 28.
    #[cfg(test)]
    pub(crate) fn toy() -> Self {
        Self::new(
            23u32.into(),
            1u32.into(),
            1u32.into(),
            28u32.into(),
            AffinePoint::new(3u32.into(), 10u32.into()),
            None,
        )
    }
}
