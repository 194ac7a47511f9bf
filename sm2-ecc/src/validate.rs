//! Curve membership tests and public key validation (GB/T 32918.1 § 6.2.1).

use crate::{Ecc, Point, ValidationError};
use num_bigint::BigUint;
use tracing::trace;

impl Ecc {
    /// Is `point` the point at infinity?
    ///
    /// A Jacobian point is at infinity when `Z ≡ 0 (mod p)`.
    pub fn is_infinity(&self, point: &Point) -> bool {
        self.jacobian_of(point).is_none()
    }

    /// Are all of the given integers elements of `Fp`, i.e. in `[0, p)`?
    pub fn on_field(&self, values: &[&BigUint]) -> bool {
        values.iter().all(|value| self.field.contains(value))
    }

    /// Does `point` satisfy the curve equation?
    ///
    /// Affine points are checked against `y² = x³ + ax + b`, Jacobian points
    /// against `Y² = X³ + aXZ⁴ + bZ⁶`. The point at infinity is a group
    /// element but has no coordinates, so it is reported as *not* on the curve.
    pub fn on_curve(&self, point: &Point) -> bool {
        let f = &self.field;
        match point {
            Point::Infinity => false,
            Point::Affine(point) => f.square(&point.y) == self.curve_rhs(&point.x),
            Point::Jacobian(_) => {
                let Some(point) = self.jacobian_of(point) else {
                    return false;
                };
                let (x, y, z) = (&point.x, &point.y, &point.z);
                let z2 = f.square(z);
                let z4 = f.square(&z2);
                let z6 = f.mul(&z4, &z2);
                let rhs = f.add(
                    &f.add(&f.mul(&f.square(x), x), &f.mul(&f.mul(&self.params.a, x), &z4)),
                    &f.mul(&self.params.b, &z6),
                );
                f.square(y) == rhs
            }
        }
    }

    /// Validate a public key.
    ///
    /// Runs the following checks in order and reports the first failure:
    ///
    /// 1. the key is an affine coordinate pair ([`ValidationError::Malformed`]),
    /// 2. it is not the point at infinity ([`ValidationError::Infinity`]),
    /// 3. both coordinates are in `Fp` ([`ValidationError::NotInField`]),
    /// 4. it satisfies the curve equation ([`ValidationError::NotOnCurve`]),
    /// 5. `[n]P` is the point at infinity ([`ValidationError::WrongOrder`]).
    pub fn validate_public_key(&self, point: &Point) -> Result<(), ValidationError> {
        let result = self.check_public_key(point);
        if let Err(reason) = result {
            trace!(%reason, "public key rejected");
        }
        result
    }

    /// Decode a SEC1 uncompressed public key and validate it.
    ///
    /// Undecodable input is reported as [`ValidationError::Malformed`].
    pub fn validate_public_key_bytes(&self, bytes: &[u8]) -> Result<Point, ValidationError> {
        let point = self.decode_point(bytes).map_err(|_| {
            trace!(len = bytes.len(), "public key encoding rejected");
            ValidationError::Malformed
        })?;
        self.validate_public_key(&point)?;
        Ok(point)
    }

    fn check_public_key(&self, point: &Point) -> Result<(), ValidationError> {
        let affine = match point {
            Point::Infinity => return Err(ValidationError::Infinity),
            Point::Affine(affine) => affine,
            Point::Jacobian(_) => return Err(ValidationError::Malformed),
        };

        if !self.on_field(&[&affine.x, &affine.y]) {
            return Err(ValidationError::NotInField);
        }

        if !self.on_curve(point) {
            return Err(ValidationError::NotOnCurve);
        }

        let n = &self.params.n;
        if !self
            .jacobian_multiply_with(n, point, self.algorithm, false)
            .is_identity()
        {
            return Err(ValidationError::WrongOrder);
        }

        Ok(())
    }
}
