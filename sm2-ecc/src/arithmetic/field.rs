//! Arithmetic modulo the curve's prime `p`.

use alloc::vec;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;

/// Greatest common divisor of `a` and `b`.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

/// Multiplicative inverse of `a` modulo `p`, computed with the extended
/// Euclidean algorithm.
///
/// Requires `gcd(a, p) = 1`. When `a` is not invertible (e.g. `a ≡ 0`) this
/// returns `1` instead of failing; callers must only invert non-zero elements
/// of a prime field.
pub fn mod_inverse(a: &BigUint, p: &BigUint) -> BigUint {
    let a = BigInt::from(a.clone());
    let p = BigInt::from(p.clone());
    let egcd = a.extended_gcd(&p);

    if !egcd.gcd.is_one() {
        return BigUint::one();
    }

    egcd.x.mod_floor(&p).into_parts().1
}

/// Uniformly random integer in `[0, bound)` by rejection sampling.
///
/// `bound` must be non-zero.
pub(crate) fn random_below(rng: &mut impl CryptoRngCore, bound: &BigUint) -> BigUint {
    debug_assert!(!bound.is_zero());

    let bits = bound.bits();
    let len = usize::try_from(bits.div_ceil(8)).unwrap_or(usize::MAX);
    let excess = (bits.div_ceil(8) * 8) - bits;
    let mut bytes = vec![0u8; len];

    loop {
        rng.fill_bytes(&mut bytes);
        if let Some(top) = bytes.first_mut() {
            *top &= u8::MAX >> excess;
        }

        let candidate = BigUint::from_bytes_be(&bytes);
        if &candidate < bound {
            return candidate;
        }
    }
}

/// Prime field `Fp` with all results reduced into `[0, p)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Fp {
    p: BigUint,
}

impl Fp {
    pub(crate) fn new(p: BigUint) -> Self {
        Self { p }
    }

    pub(crate) fn contains(&self, a: &BigUint) -> bool {
        a < &self.p
    }

    pub(crate) fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.p
    }

    pub(crate) fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.p
    }

    pub(crate) fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = a % &self.p;
        let b = b % &self.p;
        if a >= b {
            a - b
        } else {
            &self.p - b + a
        }
    }

    pub(crate) fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.p
    }

    pub(crate) fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    pub(crate) fn double(&self, a: &BigUint) -> BigUint {
        (a << 1u32) % &self.p
    }

    pub(crate) fn neg(&self, a: &BigUint) -> BigUint {
        self.sub(&BigUint::zero(), a)
    }

    /// `a / 2` for reduced `a`: odd values are made even by adding `p`.
    pub(crate) fn half(&self, a: &BigUint) -> BigUint {
        if a.is_odd() {
            (a + &self.p) >> 1u32
        } else {
            a >> 1u32
        }
    }

    pub(crate) fn invert(&self, a: &BigUint) -> BigUint {
        mod_inverse(a, &self.p)
    }
}

#[cfg(test)]
mod tests {
    use super::{Fp, gcd, mod_inverse, random_below};
    use num_bigint::BigUint;
    use num_traits::{One, Zero};
    use rand_core::OsRng;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn gcd_small() {
        assert_eq!(gcd(&big(12), &big(18)), big(6));
        assert_eq!(gcd(&big(17), &big(5)), big(1));
        assert_eq!(gcd(&big(0), &big(7)), big(7));
    }

    #[test]
    fn inverse_mod_23() {
        for a in 1..23u64 {
            let inv = mod_inverse(&big(a), &big(23));
            assert!(inv < big(23));
            assert_eq!((big(a) * inv) % big(23), BigUint::one());
        }
        assert_eq!(mod_inverse(&big(20), &big(23)), big(15));
    }

    #[test]
    fn inverse_fallback_when_not_coprime() {
        assert_eq!(mod_inverse(&big(0), &big(23)), BigUint::one());
        assert_eq!(mod_inverse(&big(6), &big(9)), BigUint::one());
    }

    #[test]
    fn field_ops_stay_reduced() {
        let fp = Fp::new(big(23));
        assert_eq!(fp.sub(&big(3), &big(7)), big(19));
        assert_eq!(fp.neg(&big(0)), big(0));
        assert_eq!(fp.neg(&big(10)), big(13));
        assert_eq!(fp.add(&big(20), &big(5)), big(2));
        assert_eq!(fp.double(&big(12)), big(1));
        assert_eq!(fp.mul(&big(5), &fp.invert(&big(20))), big(6));
    }

    #[test]
    fn half_inverts_double() {
        let fp = Fp::new(big(23));
        for a in 0..23u64 {
            assert_eq!(fp.double(&fp.half(&big(a))), big(a));
        }
    }

    #[test]
    fn random_below_bounds() {
        let bound = big(1000);
        for _ in 0..256 {
            assert!(random_below(&mut OsRng, &bound) < bound);
        }
        assert!(random_below(&mut OsRng, &BigUint::one()).is_zero());
    }
}
