//! Jacobian projective point arithmetic (GB/T 32918.1 annex A.1.2.3.2).
//!
//! A Jacobian point `(X, Y, Z)` represents the affine point `(X/Z², Y/Z³)`,
//! which lets addition and doubling proceed without any modular inversion.
//! Inversion happens once, in [`Ecc::to_affine`].

use super::Ecc;
use crate::{JacobianPoint, Point};
use num_traits::Zero;

impl Ecc {
    /// Returns `p1 + p2` in Jacobian coordinates.
    ///
    /// Inputs may be in either representation. Equal inputs are doubled, and
    /// the mixed formula is used when either input has `Z = 1`.
    pub fn jacobian_add(&self, p1: &Point, p2: &Point) -> Point {
        match (self.jacobian_of(p1), self.jacobian_of(p2)) {
            (None, None) => Point::Infinity,
            (None, Some(_)) => p2.clone(),
            (Some(_), None) => p1.clone(),
            (Some(lhs), Some(rhs)) if lhs == rhs => self.double_jacobian(&lhs).into(),
            (Some(lhs), Some(rhs)) if rhs.is_normalized() => self.add_mixed(&lhs, &rhs).into(),
            (Some(lhs), Some(rhs)) if lhs.is_normalized() => self.add_mixed(&rhs, &lhs).into(),
            (Some(lhs), Some(rhs)) => self.add_projective(&lhs, &rhs).into(),
        }
    }

    /// Returns `point + point` in Jacobian coordinates.
    pub fn jacobian_double(&self, point: &Point) -> Point {
        self.jacobian_of(point)
            .and_then(|point| self.double_jacobian(&point))
            .into()
    }

    /// Convert to affine coordinates with a single field inversion.
    ///
    /// Affine inputs are returned unchanged and `Z ≡ 0 (mod p)` maps to
    /// [`Point::Infinity`].
    pub fn to_affine(&self, point: &Point) -> Point {
        if !matches!(point, Point::Jacobian(_)) {
            return point.clone();
        }

        let Some(point) = self.jacobian_of(point) else {
            return Point::Infinity;
        };

        let f = &self.field;
        let z_inv = f.invert(&point.z);
        let z_inv2 = f.square(&z_inv);
        let z_inv3 = f.mul(&z_inv2, &z_inv);
        Point::affine(f.mul(&point.x, &z_inv2), f.mul(&point.y, &z_inv3))
    }

    /// Jacobian form of `point` with coordinates reduced modulo `p`, or
    /// `None` for the point at infinity (`Z ≡ 0`).
    pub(crate) fn jacobian_of(&self, point: &Point) -> Option<JacobianPoint> {
        let f = &self.field;
        point
            .to_jacobian()
            .map(|point| {
                JacobianPoint::new(f.reduce(&point.x), f.reduce(&point.y), f.reduce(&point.z))
            })
            .filter(|point| !point.is_identity())
    }

    /// Doubling with `λ₁ = 3x² + az⁴` computed as `3(x + z²)(x - z²) + (a + 3)z⁴`.
    pub(super) fn double_jacobian(&self, point: &JacobianPoint) -> Option<JacobianPoint> {
        let f = &self.field;
        let (x, y, z) = (&point.x, &point.y, &point.z);

        let z3 = f.mul(&f.double(y), z);
        if z3.is_zero() {
            return None;
        }

        let yy = f.square(y);
        let yy8 = f.reduce(&(&yy << 3u32));
        let xyy8 = f.mul(x, &yy8); // 8xy²
        let zz = f.square(z);

        let lambda1 = f.reduce(&(f.mul(&f.add(x, &zz), &f.sub(x, &zz)) * 3u32));
        let lambda1 = f.add(&lambda1, &f.mul(&self.a_plus_3, &f.square(&zz)));
        let lambda1_sq = f.square(&lambda1);
        let y4_8 = f.mul(&yy, &yy8); // 8y⁴

        let x3 = f.sub(&lambda1_sq, &xyy8);
        // 12xy² - λ₁² = λ₂ - x₃ with λ₂ = 4xy²
        let t = f.sub(&f.add(&xyy8, &f.half(&xyy8)), &lambda1_sq);
        let y3 = f.sub(&f.mul(&lambda1, &t), &y4_8);

        Some(JacobianPoint::new(x3, y3, z3))
    }

    /// General addition of two points with `Z ≠ 1`.
    fn add_projective(&self, lhs: &JacobianPoint, rhs: &JacobianPoint) -> Option<JacobianPoint> {
        let f = &self.field;

        let z1z1 = f.square(&lhs.z);
        let z2z2 = f.square(&rhs.z);
        let u1 = f.mul(&lhs.x, &z2z2);
        let u2 = f.mul(&rhs.x, &z1z1);
        let s1 = f.mul(&f.mul(&lhs.y, &rhs.z), &z2z2);
        let s2 = f.mul(&f.mul(&rhs.y, &lhs.z), &z1z1);
        let h = f.sub(&u1, &u2);
        let r = f.sub(&s1, &s2);

        // Z₃ = Z₁Z₂H vanishes exactly when H does.
        if h.is_zero() {
            return if r.is_zero() {
                self.double_jacobian(lhs)
            } else {
                None
            };
        }

        let z3 = f.mul(&f.mul(&lhs.z, &rhs.z), &h);
        let u_sum = f.add(&u1, &u2);
        let s_sum = f.add(&s1, &s2);
        let hh = f.square(&h);
        let u_sum_hh = f.mul(&u_sum, &hh);

        let x3 = f.sub(&f.square(&r), &u_sum_hh);
        let t = f.sub(&u_sum_hh, &f.double(&x3));
        let y3 = f.sub(&f.mul(&t, &r), &f.mul(&f.mul(&s_sum, &h), &hh));
        let y3 = f.mul(&y3, &self.inv_two);

        Some(JacobianPoint::new(x3, y3, z3))
    }

    /// Mixed addition where `rhs` has `Z = 1`.
    fn add_mixed(&self, lhs: &JacobianPoint, rhs: &JacobianPoint) -> Option<JacobianPoint> {
        debug_assert!(rhs.is_normalized());
        let f = &self.field;

        let z1z1 = f.square(&lhs.z);
        let u2 = f.mul(&rhs.x, &z1z1);
        let s2 = f.mul(&f.mul(&rhs.y, &lhs.z), &z1z1);
        let h = f.sub(&u2, &lhs.x);
        let r = f.sub(&s2, &lhs.y);

        if h.is_zero() {
            return if r.is_zero() {
                self.double_jacobian(lhs)
            } else {
                None
            };
        }

        let z3 = f.mul(&lhs.z, &h);
        let hh = f.square(&h);
        let hhh = f.mul(&h, &hh);

        let x3 = f.sub(&f.square(&r), &f.mul(&f.add(&u2, &lhs.x), &hh));
        let y3 = f.sub(
            &f.mul(&r, &f.sub(&f.mul(&lhs.x, &hh), &x3)),
            &f.mul(&lhs.y, &hhh),
        );

        Some(JacobianPoint::new(x3, y3, z3))
    }
}
