//! Affine point arithmetic (GB/T 32918.1 § 3.2.3.1).
//!
//! Every addition or doubling performs one modular inversion. This is the
//! simple reference path; [`Ecc::jacobian_add`] and friends avoid the
//! per-step inversion.

use super::Ecc;
use crate::{AffinePoint, Point};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

impl Ecc {
    /// Returns `p1 + p2` in affine coordinates.
    ///
    /// Equal inputs are doubled; `p1 = -p2` yields the point at infinity.
    pub fn add(&self, p1: &Point, p2: &Point) -> Point {
        let (lhs, rhs) = match (self.affine_of(p1), self.affine_of(p2)) {
            (None, _) => return self.to_affine(p2),
            (Some(lhs), None) => return Point::Affine(lhs),
            (Some(lhs), Some(rhs)) => (lhs, rhs),
        };

        if lhs == rhs {
            return self.double_affine(&lhs);
        }

        if lhs.x == rhs.x {
            return Point::Infinity;
        }

        let f = &self.field;
        let slope = f.mul(&f.sub(&rhs.y, &lhs.y), &f.invert(&f.sub(&rhs.x, &lhs.x)));
        self.affine_from_slope(&slope, &lhs, &rhs.x)
    }

    /// Returns `point + point` in affine coordinates.
    pub fn double(&self, point: &Point) -> Point {
        match self.affine_of(point) {
            Some(point) => self.double_affine(&point),
            None => Point::Infinity,
        }
    }

    /// Returns `[k] point` using recursive double-and-add in affine
    /// coordinates.
    ///
    /// Scalars are unsigned, so negative multipliers are unrepresentable;
    /// negate the point with [`Ecc::minus`] instead.
    pub fn multiply(&self, k: &BigUint, point: &Point) -> Point {
        match self.affine_of(point) {
            Some(point) if !k.is_zero() => self.multiply_affine(k, &point),
            _ => Point::Infinity,
        }
    }

    /// Returns `-point`, i.e. `(x, p - y)`.
    ///
    /// The representation of the input is preserved.
    pub fn minus(&self, point: &Point) -> Point {
        let f = &self.field;
        match point {
            Point::Infinity => Point::Infinity,
            Point::Affine(point) => Point::affine(point.x.clone(), f.neg(&point.y)),
            Point::Jacobian(point) => {
                Point::jacobian(point.x.clone(), f.neg(&point.y), point.z.clone())
            }
        }
    }

    fn multiply_affine(&self, k: &BigUint, point: &AffinePoint) -> Point {
        if k.is_one() {
            return Point::Affine(point.clone());
        }

        let half = self.multiply_affine(&(k >> 1u32), point);
        let doubled = self.double(&half);

        if k.is_odd() {
            self.add(&Point::Affine(point.clone()), &doubled)
        } else {
            doubled
        }
    }

    fn double_affine(&self, point: &AffinePoint) -> Point {
        // Tangent is vertical: the point has order two.
        if point.y.is_zero() {
            return Point::Infinity;
        }

        let f = &self.field;
        let numerator = f.add(&(f.square(&point.x) * 3u32), &self.params.a);
        let slope = f.mul(&numerator, &f.invert(&f.double(&point.y)));
        self.affine_from_slope(&slope, point, &point.x)
    }

    /// Third intersection of the line with the given slope through `p1`,
    /// reflected: `x3 = λ² - x1 - x2`, `y3 = λ(x1 - x3) - y1`.
    fn affine_from_slope(&self, slope: &BigUint, p1: &AffinePoint, x2: &BigUint) -> Point {
        let f = &self.field;
        let x3 = f.sub(&f.sub(&f.square(slope), &p1.x), x2);
        let y3 = f.sub(&f.mul(slope, &f.sub(&p1.x, &x3)), &p1.y);
        Point::affine(x3, y3)
    }

    /// Affine coordinates of `point`, or `None` for the point at infinity.
    pub(crate) fn affine_of(&self, point: &Point) -> Option<AffinePoint> {
        match self.to_affine(point) {
            Point::Affine(point) => Some(point),
            _ => None,
        }
    }
}
