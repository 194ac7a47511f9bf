//! SM3 based key derivation function (GB/T 32918.3 § 5.4.3).
//!
//! Schemes built on top of the curve arithmetic (encryption, key exchange)
//! stretch a shared secret, typically `x₂ || y₂` of a computed point, into
//! keying material of arbitrary length:
//!
//! ```text
//! K = SM3(Z || 00000001) || SM3(Z || 00000002) || …
//! ```
//!
//! truncated to the requested length.

use alloc::vec::Vec;
use sm3::{Digest, Sm3};

/// Derive `len` bytes of keying material from the shared secret `z`.
///
/// `len` counts bytes, not bits: the `klen` of GB/T 32918.3 corresponds to
/// `klen / 8` here.
pub fn kdf(z: &[u8], len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    let mut hasher = Sm3::new();
    let mut ct: u32 = 1;

    while out.len() < len {
        hasher.update(z);
        hasher.update(ct.to_be_bytes());
        let block = hasher.finalize_reset();

        let take = block.len().min(len - out.len());
        out.extend_from_slice(&block[..take]);
        ct = ct.wrapping_add(1);
    }

    out
}
