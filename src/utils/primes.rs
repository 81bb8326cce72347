//! Probable-prime search: random odd candidates run through cheap
//! divisibility filters, then Fermat witness rounds.

use crate::bignum::{mod_exp, Bignum};
use crate::utils::rng;
use log::trace;
use rand::RngCore;

/// Number of random Fermat witnesses a candidate must satisfy. Carmichael
/// numbers can fool every round, which is an accepted limitation of the
/// toy; a production search would run Miller-Rabin instead.
const FERMAT_ROUNDS: usize = 10;

/*-------- PUBLIC FUNCTIONS --------*/

/// Finds a random probable prime of `bits` bits (or less).
///
/// ### Arguments
///
/// * `bits` - Bit length of the candidate, at least one byte worth
/// * `rng` - Entropy source
pub fn find_prime<R: RngCore>(bits: usize, rng: &mut R) -> Bignum {
    if bits < 8 {
        panic!("Prime bit length {} is too small", bits);
    }

    let mut prime = Bignum::with_bits(bits);

    loop {
        rng::fill_bignum(&mut prime, bits / 8, rng);
        prime.extend(bits);

        // Don't waste Fermat runs on even numbers.
        prime.limbs_mut()[0] |= 1;

        // Divisibility by three is cheap to check, skip those numbers too;
        // 1 slips through both filters and is not prime.
        if prime.is_one() || prime.divisible_by_three() {
            continue;
        }

        if fermat_probable_prime(&prime, rng) {
            return prime;
        }

        trace!("rejected composite candidate");
    }
}

/*-------- PRIVATE FUNCTIONS --------*/

/// Whether `n` is probably prime: every random witness w must satisfy
/// w^(n-1) = 1 mod n. One failure proves compositeness; FERMAT_ROUNDS
/// successes make primality overwhelmingly likely.
///
/// Witnesses are drawn at the candidate's full active width, so a draw
/// can land on a multiple of n; that only wastes the candidate.
fn fermat_probable_prime<R: RngCore>(n: &Bignum, rng: &mut R) -> bool {
    let mut witness = Bignum::with_bits(n.bit_len());
    witness.extend(n.bit_len());

    let mut exp = n.clone();
    exp.dec();

    for round in 0..FERMAT_ROUNDS {
        rng::fill_bignum(&mut witness, n.bit_len() / 8, rng);

        let res = mod_exp(&witness, &exp, n);
        if !res.is_one() {
            return false;
        }

        trace!("witness round {} held", round);
    }

    true
}

/*----- TESTS -----*/
