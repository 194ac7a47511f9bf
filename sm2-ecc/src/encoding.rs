//! Big-endian integer and point encodings.
//!
//! Points use the SEC1 uncompressed form `04 || x || y` with fixed-width
//! coordinates; the point at infinity is the single byte `00`.

use crate::{Ecc, Error, Point, Result};
use alloc::{vec, vec::Vec};
use num_bigint::BigUint;
use num_traits::Zero;

/// SEC1 tag of the identity point.
const TAG_IDENTITY: u8 = 0x00;

/// SEC1 tag of an uncompressed point.
const TAG_UNCOMPRESSED: u8 = 0x04;

/// Decode a big-endian byte string into an integer.
pub fn int_from_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Encode an integer as a big-endian byte string.
///
/// Without a `size` the shortest encoding is returned, which is empty for
/// zero. With a `size` the output is left-padded with zeros, or keeps only the
/// `size` least significant bytes if the value does not fit.
pub fn int_to_bytes(x: &BigUint, size: Option<usize>) -> Vec<u8> {
    let bytes = if x.is_zero() {
        Vec::new()
    } else {
        x.to_bytes_be()
    };

    match size {
        None => bytes,
        Some(size) if bytes.len() >= size => bytes[bytes.len() - size..].to_vec(),
        Some(size) => {
            let mut out = vec![0u8; size - bytes.len()];
            out.extend_from_slice(&bytes);
            out
        }
    }
}

impl Ecc {
    /// Length in bytes of a serialized field element.
    pub fn field_size(&self) -> usize {
        usize::try_from(self.params.p.bits().div_ceil(8)).unwrap_or(usize::MAX)
    }

    /// Serialize `point` as a SEC1 uncompressed point.
    pub fn encode_point(&self, point: &Point) -> Vec<u8> {
        let Some(affine) = self.affine_of(point) else {
            return vec![TAG_IDENTITY];
        };

        let size = self.field_size();
        let mut out = Vec::with_capacity(1 + 2 * size);
        out.push(TAG_UNCOMPRESSED);
        out.extend_from_slice(&int_to_bytes(&affine.x, Some(size)));
        out.extend_from_slice(&int_to_bytes(&affine.y, Some(size)));
        out
    }

    /// Parse a SEC1 uncompressed point.
    ///
    /// Only the framing is checked: the decoded point may lie off the curve.
    /// Use [`Ecc::validate_public_key_bytes`] for untrusted input.
    pub fn decode_point(&self, bytes: &[u8]) -> Result<Point> {
        let size = self.field_size();

        match bytes.split_first() {
            Some((&TAG_IDENTITY, [])) => Ok(Point::Infinity),
            Some((&TAG_UNCOMPRESSED, coordinates)) if coordinates.len() == 2 * size => {
                let (x, y) = coordinates.split_at(size);
                Ok(Point::affine(int_from_bytes(x), int_from_bytes(y)))
            }
            _ => Err(Error::Encoding),
        }
    }
}
