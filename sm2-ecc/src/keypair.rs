//! Keypair generation and confirmation (GB/T 32918.1 § 6.1).

use crate::{Ecc, Point, arithmetic::field::random_below};
use core::fmt;
use num_bigint::BigUint;
use rand_core::CryptoRngCore;
use tracing::{debug, warn};

/// Private scalar `d ∈ [1, n - 2]` together with its public point `P = [d]G`.
///
/// A keypair is a plain value held by the caller. Use
/// [`Ecc::confirm_keypair`] to make sure it is usable before relying on it.
#[derive(Clone, Eq, PartialEq)]
pub struct Keypair {
    secret: BigUint,
    public: Point,
}

impl Keypair {
    /// Assemble a keypair from its parts without checking it.
    pub fn from_parts(secret: BigUint, public: Point) -> Self {
        Self { secret, public }
    }

    /// Expose the private scalar `d`.
    pub fn secret_scalar(&self) -> &BigUint {
        &self.secret
    }

    /// Public point `P`.
    pub fn public_key(&self) -> &Point {
        &self.public
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

impl Ecc {
    /// Draw `d` uniformly from `[1, n - 2]` and compute `P = [d]G`.
    ///
    /// The result is not validated; see [`Ecc::confirm_keypair`].
    pub fn generate_keypair(&self, rng: &mut impl CryptoRngCore) -> Keypair {
        // n ≥ 3 is checked by `Ecc::new`
        let secret = random_below(rng, &(&self.params.n - 2u32)) + 1u32;
        let public = self.jacobian_multiply(&secret, &self.generator());
        Keypair { secret, public }
    }

    /// Does the public key validate and equal `[d]G`?
    pub fn is_keypair_valid(&self, keypair: &Keypair) -> bool {
        self.validate_public_key(&keypair.public).is_ok()
            && keypair.public == self.jacobian_multiply(&keypair.secret, &self.generator())
    }

    /// Return a keypair that is known to be usable.
    ///
    /// `current` is returned as is when it passes [`Ecc::is_keypair_valid`].
    /// Otherwise fresh keypairs are generated until one does.
    pub fn confirm_keypair(
        &self,
        current: Option<Keypair>,
        rng: &mut impl CryptoRngCore,
    ) -> Keypair {
        self.confirm_keypair_counted(current, rng).0
    }

    /// [`Ecc::confirm_keypair`], also reporting the number of keypairs
    /// generated.
    pub(crate) fn confirm_keypair_counted(
        &self,
        current: Option<Keypair>,
        rng: &mut impl CryptoRngCore,
    ) -> (Keypair, usize) {
        match current {
            Some(keypair) if self.is_keypair_valid(&keypair) => return (keypair, 0),
            Some(_) => debug!("stored keypair is invalid, regenerating"),
            None => debug!("no keypair present, generating"),
        }

        let mut attempts = 0;
        loop {
            attempts += 1;
            let keypair = self.generate_keypair(rng);
            if self.is_keypair_valid(&keypair) {
                debug!(attempts, "keypair confirmed");
                return (keypair, attempts);
            }
            warn!(attempts, "generated keypair failed validation");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Keypair;
    use crate::{AffinePoint, CurveParams, Ecc, Point};
    use alloc::format;
    use num_bigint::BigUint;
    use rand_core::OsRng;

    fn toy_subgroup() -> Ecc {
        Ecc::new(CurveParams::new(
            23u32.into(),
            1u32.into(),
            1u32.into(),
            7u32.into(),
            AffinePoint::new(17u32.into(), 3u32.into()),
            Some(4u32.into()),
        ))
        .unwrap()
    }

    #[test]
    fn generated_secret_in_range() {
        let ecc = toy_subgroup();
        for _ in 0..200 {
            let keypair = ecc.generate_keypair(&mut OsRng);
            let d = keypair.secret_scalar();
            assert!(*d >= BigUint::from(1u32) && *d <= BigUint::from(5u32));
            assert!(ecc.is_keypair_valid(&keypair));
        }
    }

    #[test]
    fn confirm_generates_when_absent() {
        let ecc = Ecc::sm2p256v1();
        let (keypair, attempts) = ecc.confirm_keypair_counted(None, &mut OsRng);
        assert!((1..10).contains(&attempts));
        assert_eq!(ecc.validate_public_key(keypair.public_key()), Ok(()));
        assert_eq!(
            *keypair.public_key(),
            ecc.multiply(keypair.secret_scalar(), &ecc.generator())
        );
    }

    #[test]
    fn confirm_keeps_valid_keypair() {
        let ecc = toy_subgroup();
        let keypair = ecc.generate_keypair(&mut OsRng);
        let (confirmed, attempts) = ecc.confirm_keypair_counted(Some(keypair.clone()), &mut OsRng);
        assert_eq!(attempts, 0);
        assert_eq!(confirmed, keypair);
    }

    #[test]
    fn confirm_replaces_mismatched_keypair() {
        let ecc = toy_subgroup();
        // [2]G = (13, 16) paired with d = 3
        let forged = Keypair::from_parts(3u32.into(), Point::affine(13u32.into(), 16u32.into()));
        assert!(ecc.validate_public_key(forged.public_key()).is_ok());
        assert!(!ecc.is_keypair_valid(&forged));

        let (keypair, attempts) = ecc.confirm_keypair_counted(Some(forged), &mut OsRng);
        assert!((1..10).contains(&attempts));
        assert!(ecc.is_keypair_valid(&keypair));
    }

    #[test]
    fn confirm_replaces_off_curve_keypair() {
        let ecc = toy_subgroup();
        let bogus = Keypair::from_parts(1u32.into(), Point::affine(17u32.into(), 4u32.into()));
        let keypair = ecc.confirm_keypair(Some(bogus), &mut OsRng);
        assert!(ecc.is_keypair_valid(&keypair));
    }

    #[test]
    fn debug_redacts_secret() {
        let keypair = Keypair::from_parts(12345u32.into(), Point::Infinity);
        let debug = format!("{keypair:?}");
        assert!(!debug.contains("12345"));
        assert!(debug.contains("Infinity"));
    }
}
