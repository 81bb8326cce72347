use log::{debug, info};
use rand::RngCore;
use std::cmp::Ordering;

use crate::bignum::{gcd, mod_exp, mod_inv, Bignum};
use crate::utils::primes;

/*---- STRUCTS ----*/

/// One half of an RSA keypair: an exponent and the shared modulus. A
/// public key holds (e, n), a private key holds (d, n); each owns its own
/// copy of the modulus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKey {
    pub exp: Bignum,
    pub modulus: Bignum,
}

/*---- CONSTANTS ----*/

const PUBLIC_EXPONENT: u64 = 65537;
const MIN_KEY_BITS: usize = 256;

/*---- IMPLEMENTATIONS ----*/

impl RsaKey {

    /// The textbook RSA operation: raises the input to this key's exponent
    /// mod this key's modulus. Encryption and decryption are the same
    /// computation under different keys.
    pub fn apply(&self, input: &Bignum) -> Bignum {
        mod_exp(input, &self.exp, &self.modulus)
    }
}

/// Generates an RSA keypair, public key first.
///
/// Each prime is searched at half the requested width. A pair is rejected
/// and redrawn when the primes collide or when the totient shares a factor
/// with the fixed public exponent, so the private exponent always exists.
///
/// ### Arguments
///
/// * `bits` - Total key size in bits
/// * `rng` - Entropy source
pub fn generate_keypair<R: RngCore>(bits: usize, rng: &mut R) -> (RsaKey, RsaKey) {
    if bits < MIN_KEY_BITS || bits % 16 != 0 {
        panic!(
            "RSA key size must be a multiple of 16 and at least {} bits",
            MIN_KEY_BITS
        );
    }

    info!("generating {} bit RSA key", bits);

    let e = Bignum::from_words(&[PUBLIC_EXPONENT]);

    loop {
        let mut p = primes::find_prime(bits >> 1, rng);
        let mut q = primes::find_prime(bits >> 1, rng);

        if p.cmp_mag(&q) == Ordering::Equal {
            continue;
        }

        debug!("p: {}", p);
        debug!("q: {}", q);

        let modulus = p.mul(&q);
        debug!("m: {}", modulus);

        p.dec();
        q.dec();
        let tot = p.mul(&q);
        debug!("t: {}", tot);

        if !gcd(&e, &tot).is_one() {
            debug!("totient shares a factor with e, retrying");
            continue;
        }

        let d = mod_inv(&e, &tot);
        debug!("e: {}", e);
        debug!("d: {}", d);

        let public = RsaKey {
            exp: e,
            modulus: modulus.clone(),
        };
        let private = RsaKey {
            exp: d,
            modulus,
        };

        return (public, private);
    }
}

/// Generates a keypair, encrypts a fixed 128-bit plaintext with the public
/// key, decrypts with the private key, and reports whether the round trip
/// reproduced the plaintext.
pub fn cipher_test<R: RngCore>(bits: usize, rng: &mut R) -> bool {
    let (public, private) = generate_keypair(bits, rng);

    let mut secret = Bignum::with_bits(128);
    secret.extend(128);
    secret.limbs_mut()[0] = 0xbeef_beef_beef_beef;
    secret.limbs_mut()[1] = 0xbeef_beef_beef_beef;

    debug!("S: {}", secret);

    let ciphertext = public.apply(&secret);
    debug!("C: {}", ciphertext);

    let decrypted = private.apply(&ciphertext);
    debug!("D: {}", decrypted);

    decrypted.cmp_mag(&secret) == Ordering::Equal
}

/*----- TESTS -----*/
