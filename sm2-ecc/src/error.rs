//! Error types.

use core::fmt::{self, Display};

/// Result type with the `sm2-ecc` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by curve construction, encoding and configuration.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Curve domain parameters were rejected; the message names the check.
    InvalidParams(&'static str),

    /// Sliding window width outside of the supported range.
    WindowWidth(u8),

    /// Malformed byte encoding of a point or integer.
    Encoding,

    /// Public key failed validation.
    PublicKey(ValidationError),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParams(reason) => write!(f, "invalid curve parameters: {reason}"),
            Error::WindowWidth(width) => write!(f, "unsupported sliding window width: {width}"),
            Error::Encoding => f.write_str("malformed point encoding"),
            Error::PublicKey(err) => write!(f, "invalid public key: {err}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::PublicKey(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Error {
        Error::PublicKey(err)
    }
}

/// Reason a public key was rejected.
///
/// Variants are listed in the order the checks run: validation stops at the
/// first failing check and reports it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValidationError {
    /// Not an affine coordinate pair (or an undecodable byte string).
    Malformed,

    /// The point at infinity.
    Infinity,

    /// A coordinate is not an element of `Fp`.
    NotInField,

    /// The coordinates do not satisfy `y² = x³ + ax + b (mod p)`.
    NotOnCurve,

    /// `[n]P` is not the point at infinity.
    WrongOrder,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValidationError::Malformed => "malformed point",
            ValidationError::Infinity => "point at infinity",
            ValidationError::NotInField => "coordinate outside of the base field",
            ValidationError::NotOnCurve => "point is not on the curve",
            ValidationError::WrongOrder => "[n]P is not the point at infinity",
        })
    }
}

impl core::error::Error for ValidationError {}
