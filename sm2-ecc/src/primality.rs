//! Probabilistic primality testing for domain parameter validation.

use crate::arithmetic::field::random_below;
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use rand_core::CryptoRngCore;

/// Number of Miller-Rabin rounds used by [`is_probable_prime`].
pub const DEFAULT_ROUNDS: usize = 5;

/// Primes below 1000, used for trial division.
#[rustfmt::skip]
const SMALL_PRIMES: [u32; 168] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37,
    41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151,
    157, 163, 167, 173, 179, 181, 191, 193, 197, 199, 211, 223,
    227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281,
    283, 293, 307, 311, 313, 317, 331, 337, 347, 349, 353, 359,
    367, 373, 379, 383, 389, 397, 401, 409, 419, 421, 431, 433,
    439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503,
    509, 521, 523, 541, 547, 557, 563, 569, 571, 577, 587, 593,
    599, 601, 607, 613, 617, 619, 631, 641, 643, 647, 653, 659,
    661, 673, 677, 683, 691, 701, 709, 719, 727, 733, 739, 743,
    751, 757, 761, 769, 773, 787, 797, 809, 811, 821, 823, 827,
    829, 839, 853, 857, 859, 863, 877, 881, 883, 887, 907, 911,
    919, 929, 937, 941, 947, 953, 967, 971, 977, 983, 991, 997,
];

/// Is `n` probably prime?
///
/// Trial division by the primes below 1000 followed by
/// [`DEFAULT_ROUNDS`] rounds of Miller-Rabin with random witnesses. A
/// composite passes with probability at most `4⁻ᴿ`.
pub fn is_probable_prime(n: &BigUint, rng: &mut impl CryptoRngCore) -> bool {
    is_probable_prime_with_rounds(n, DEFAULT_ROUNDS, rng)
}

/// [`is_probable_prime`] with an explicit number of Miller-Rabin rounds.
pub fn is_probable_prime_with_rounds(
    n: &BigUint,
    rounds: usize,
    rng: &mut impl CryptoRngCore,
) -> bool {
    if let Some(small) = n.to_u32().filter(|&small| small < 1000) {
        return SMALL_PRIMES.binary_search(&small).is_ok();
    }

    if SMALL_PRIMES.iter().any(|&prime| (n % prime).to_u32() == Some(0)) {
        return false;
    }

    let one = BigUint::one();
    let n_minus_one = n - &one;

    // n - 1 = d·2ˢ with d odd
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    // witnesses are drawn from [2, n - 2]
    let span = n - 3u32;

    'witness: for _ in 0..rounds {
        let a = random_below(rng, &span) + 2u32;
        let mut x = a.modpow(&d, n);

        if x == one || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_one {
                continue 'witness;
            }
            if x == one {
                return false;
            }
        }

        return false;
    }

    true
}
