//! Scalar multiplication in Jacobian coordinates (GB/T 32918.1 annex A.3).

use super::Ecc;
use crate::{Error, Point, Result};
use alloc::vec::Vec;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Scalar multiplication strategy.
///
/// All strategies compute the same point; they differ only in the number of
/// point additions performed.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum MulAlgorithm {
    /// Left-to-right binary expansion: one doubling per bit and one addition
    /// per set bit.
    Binary,

    /// Signed-digit method comparing the bits of `3k` and `k`, trading some
    /// additions for subtractions.
    #[default]
    AddSubtract,

    /// Sliding window over precomputed odd multiples `P, 3P, …, (2ʳ - 1)P`.
    SlidingWindow(WindowWidth),
}

/// Width `r` of the sliding window, in bits.
///
/// The precomputation table holds `2ʳ⁻¹` points. The default of 5 was measured
/// to perform best for 255–256 bit scalars; curves of a different size may
/// prefer another width.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct WindowWidth(u8);

impl WindowWidth {
    /// Default window width.
    pub const DEFAULT: Self = Self(5);

    /// Largest supported window width.
    pub const MAX: u8 = 16;

    /// Create a window width in `1..=16`.
    pub fn new(width: u8) -> Result<Self> {
        if (1..=Self::MAX).contains(&width) {
            Ok(Self(width))
        } else {
            Err(Error::WindowWidth(width))
        }
    }

    /// Width in bits.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for WindowWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for WindowWidth {
    type Error = Error;

    fn try_from(width: u8) -> Result<Self> {
        Self::new(width)
    }
}

impl Ecc {
    /// Returns `[k] point` in affine coordinates, computed in Jacobian
    /// coordinates with the engine's configured [`MulAlgorithm`].
    pub fn jacobian_multiply(&self, k: &BigUint, point: &Point) -> Point {
        self.jacobian_multiply_with(k, point, self.algorithm, true)
    }

    /// Returns `[k] point` using the given algorithm.
    ///
    /// When `to_affine` is `false` the result is left in Jacobian coordinates,
    /// saving the final inversion.
    pub fn jacobian_multiply_with(
        &self,
        k: &BigUint,
        point: &Point,
        algorithm: MulAlgorithm,
        to_affine: bool,
    ) -> Point {
        if k.is_zero() || self.is_infinity(point) {
            return Point::Infinity;
        }

        let q = match algorithm {
            MulAlgorithm::Binary => self.mul_binary(k, point),
            MulAlgorithm::AddSubtract => self.mul_add_subtract(k, point),
            MulAlgorithm::SlidingWindow(width) => self.mul_sliding_window(k, point, width),
        };

        if to_affine { self.to_affine(&q) } else { q }
    }

    fn mul_binary(&self, k: &BigUint, point: &Point) -> Point {
        let mut q = point.clone();

        for i in (0..k.bits() - 1).rev() {
            q = self.jacobian_double(&q);
            if k.bit(i) {
                q = self.jacobian_add(&q, point);
            }
        }

        q
    }

    fn mul_add_subtract(&self, k: &BigUint, point: &Point) -> Point {
        let h = k * 3u32;
        let neg = self.minus(point);
        let mut q = point.clone();

        // `k` is implicitly zero-padded to the bit length of `h`; the top bit
        // of `h` is consumed by initializing `q` and bit 0 never differs.
        for i in (1..h.bits() - 1).rev() {
            q = self.jacobian_double(&q);
            match (h.bit(i), k.bit(i)) {
                (true, false) => q = self.jacobian_add(&q, point),
                (false, true) => q = self.jacobian_add(&q, &neg),
                _ => (),
            }
        }

        q
    }

    fn mul_sliding_window(&self, k: &BigUint, point: &Point, width: WindowWidth) -> Point {
        let r = usize::from(width.get());
        let bits = msb_first_bits(k);
        let l = bits.len();

        if r >= l {
            return self.mul_add_subtract(k, point);
        }

        // table[i] = (2i + 1)·P
        let doubled = self.jacobian_double(point);
        let mut table: Vec<Point> = Vec::with_capacity(1 << (r - 1));
        table.push(point.clone());
        for i in 1..(1 << (r - 1)) {
            let next = self.jacobian_add(&table[i - 1], &doubled);
            table.push(next);
        }

        // bits[0] is set, so the leading window always ends on a one.
        let mut t = r;
        while !bits[t - 1] {
            t -= 1;
        }

        let mut q = table[window_value(&bits[..t]) >> 1].clone();
        let mut j = t;

        while j < l {
            if !bits[j] {
                q = self.jacobian_double(&q);
                j += 1;
                continue;
            }

            let mut t = r.min(l - j);
            while !bits[j + t - 1] {
                t -= 1;
            }

            let shifted = self.jacobian_multiply_with(
                &(BigUint::one() << t),
                &q,
                MulAlgorithm::AddSubtract,
                false,
            );
            q = self.jacobian_add(&shifted, &table[window_value(&bits[j..j + t]) >> 1]);
            j += t;
        }

        q
    }
}

/// Bits of `k`, most significant (always set) first.
fn msb_first_bits(k: &BigUint) -> Vec<bool> {
    (0..k.bits()).rev().map(|i| k.bit(i)).collect()
}

/// Big-endian bit slice of at most [`WindowWidth::MAX`] bits as an integer.
fn window_value(bits: &[bool]) -> usize {
    bits.iter().fold(0, |acc, &bit| (acc << 1) | usize::from(bit))
}

#[cfg(test)]
mod tests {
    use super::{MulAlgorithm, WindowWidth, msb_first_bits, window_value};
    use crate::{CurveParams, Ecc, Error, Point};
    use num_bigint::BigUint;

    fn algorithms() -> impl Iterator<Item = MulAlgorithm> {
        [MulAlgorithm::Binary, MulAlgorithm::AddSubtract]
            .into_iter()
            .chain((1..=8).map(|r| MulAlgorithm::SlidingWindow(WindowWidth::new(r).unwrap())))
    }

    #[test]
    fn window_width_bounds() {
        assert_eq!(WindowWidth::default().get(), 5);
        assert_eq!(WindowWidth::new(0), Err(Error::WindowWidth(0)));
        assert_eq!(WindowWidth::try_from(17), Err(Error::WindowWidth(17)));
        assert!(WindowWidth::new(16).is_ok());
    }

    #[test]
    fn bit_helpers() {
        let bits = msb_first_bits(&BigUint::from(0b10110u32));
        assert_eq!(bits, [true, false, true, true, false]);
        assert_eq!(window_value(&bits[..4]), 0b1011);
    }

    #[test]
    fn all_algorithms_agree_with_affine_path() {
        let ecc = Ecc::new(CurveParams::toy()).unwrap();
        let g = ecc.generator();

        for k in 0..300u32 {
            let k = BigUint::from(k);
            let expected = ecc.multiply(&k, &g);
            for algorithm in algorithms() {
                let actual = ecc.jacobian_multiply_with(&k, &g, algorithm, true);
                assert_eq!(actual, expected, "k = {k}, {algorithm:?}");
            }
        }
    }

    #[test]
    fn jacobian_input_and_output() {
        let ecc = Ecc::new(CurveParams::toy()).unwrap();
        let g2 = ecc.jacobian_double(&ecc.generator());
        assert!(matches!(g2, Point::Jacobian(_)));

        for algorithm in algorithms() {
            let raw = ecc.jacobian_multiply_with(&BigUint::from(3u32), &g2, algorithm, false);
            assert_eq!(ecc.to_affine(&raw), Point::affine(12u32.into(), 4u32.into()));
        }
    }

    #[test]
    fn zero_scalar_and_identity() {
        let ecc = Ecc::new(CurveParams::toy()).unwrap();
        for algorithm in algorithms() {
            let zero = BigUint::from(0u32);
            let one = BigUint::from(1u32);
            assert_eq!(
                ecc.jacobian_multiply_with(&zero, &ecc.generator(), algorithm, true),
                Point::Infinity
            );
            assert_eq!(
                ecc.jacobian_multiply_with(&one, &Point::Infinity, algorithm, true),
                Point::Infinity
            );
            assert_eq!(
                ecc.jacobian_multiply_with(&one, &ecc.generator(), algorithm, true),
                ecc.generator()
            );
        }
    }
}
