//! Curve point representations.
//!
//! Points are plain values: they carry no reference to the curve they live on,
//! and every [`Ecc`](crate::Ecc) operation accepts any [`Point`] variant,
//! converting to the representation it needs on entry.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Point on a short Weierstrass curve in affine coordinates `(x, y)`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct AffinePoint {
    pub(crate) x: BigUint,
    pub(crate) y: BigUint,
}

impl AffinePoint {
    /// Create a point from its coordinates.
    ///
    /// No curve membership check is performed: use
    /// [`Ecc::validate_public_key`](crate::Ecc::validate_public_key) for
    /// untrusted input.
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    /// x-coordinate.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// y-coordinate.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Lift into Jacobian coordinates with `Z = 1`.
    pub fn to_jacobian(&self) -> JacobianPoint {
        JacobianPoint {
            x: self.x.clone(),
            y: self.y.clone(),
            z: BigUint::one(),
        }
    }
}

/// Point in Jacobian projective coordinates `(X, Y, Z)`.
///
/// Represents the affine point `(X/Z², Y/Z³)`. `Z = 0` is the point at
/// infinity.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct JacobianPoint {
    pub(crate) x: BigUint,
    pub(crate) y: BigUint,
    pub(crate) z: BigUint,
}

impl JacobianPoint {
    /// Create a point from its projective coordinates.
    pub fn new(x: BigUint, y: BigUint, z: BigUint) -> Self {
        Self { x, y, z }
    }

    /// X-coordinate.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Z-coordinate.
    pub fn z(&self) -> &BigUint {
        &self.z
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Is `Z = 1`, i.e. are `X` and `Y` already the affine coordinates?
    pub(crate) fn is_normalized(&self) -> bool {
        self.z.is_one()
    }
}

/// Elliptic curve point in any supported representation.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Point {
    /// Additive identity of the group a.k.a. the point at infinity.
    #[default]
    Infinity,

    /// Affine coordinates.
    Affine(AffinePoint),

    /// Jacobian projective coordinates.
    Jacobian(JacobianPoint),
}

impl Point {
    /// Create an affine point from its coordinates.
    pub fn affine(x: BigUint, y: BigUint) -> Self {
        Point::Affine(AffinePoint::new(x, y))
    }

    /// Create a Jacobian point from its projective coordinates.
    pub fn jacobian(x: BigUint, y: BigUint, z: BigUint) -> Self {
        Point::Jacobian(JacobianPoint::new(x, y, z))
    }

    /// Is this the point at infinity (in either representation)?
    pub fn is_identity(&self) -> bool {
        match self {
            Point::Infinity => true,
            Point::Affine(_) => false,
            Point::Jacobian(point) => point.is_identity(),
        }
    }

    /// Borrow the affine coordinates, if this point is stored in affine form.
    pub fn as_affine(&self) -> Option<&AffinePoint> {
        match self {
            Point::Affine(point) => Some(point),
            _ => None,
        }
    }

    /// Jacobian form of this point, or `None` for the point at infinity.
    pub(crate) fn to_jacobian(&self) -> Option<JacobianPoint> {
        match self {
            Point::Infinity => None,
            Point::Affine(point) => Some(point.to_jacobian()),
            Point::Jacobian(point) if point.is_identity() => None,
            Point::Jacobian(point) => Some(point.clone()),
        }
    }
}

impl From<AffinePoint> for Point {
    fn from(point: AffinePoint) -> Point {
        Point::Affine(point)
    }
}

impl From<JacobianPoint> for Point {
    fn from(point: JacobianPoint) -> Point {
        Point::Jacobian(point)
    }
}

impl From<Option<JacobianPoint>> for Point {
    fn from(point: Option<JacobianPoint>) -> Point {
        point.map_or(Point::Infinity, Point::Jacobian)
    }
}
