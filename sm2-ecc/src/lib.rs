#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::checked_conversions,
    clippy::implicit_saturating_sub,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "kdf")]
pub mod kdf;
pub mod primality;

mod arithmetic;
mod encoding;
mod error;
mod keypair;
mod params;
mod point;
mod validate;

pub use crate::{
    arithmetic::{
        Ecc,
        field::{gcd, mod_inverse},
        mul::{MulAlgorithm, WindowWidth},
    },
    encoding::{int_from_bytes, int_to_bytes},
    error::{Error, Result, ValidationError},
    keypair::Keypair,
    params::CurveParams,
    point::{AffinePoint, JacobianPoint, Point},
};
pub use num_bigint::{self, BigUint};
pub use rand_core;

#[cfg(feature = "getrandom")]
pub use rand_core::OsRng;
