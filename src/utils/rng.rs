//! Byte-fill adapter between the entropy source and the bignum limb
//! buffer. The only contract the arithmetic relies on is "fill N bytes
//! with uniformly random data"; whether that is the OS CSPRNG or a seeded
//! generator in tests is the caller's business.

use crate::bignum::{Bignum, LIMB_BYTES};
use rand::RngCore;

/// Fills the low `nbytes` bytes of the bignum's limb buffer with random
/// data, least significant limb first. The caller is expected to `extend`
/// the active length over the filled region afterwards.
///
/// ### Arguments
///
/// * `b` - Bignum whose buffer gets filled
/// * `nbytes` - Number of random bytes to write
/// * `rng` - Entropy source
pub fn fill_bignum<R: RngCore>(b: &mut Bignum, nbytes: usize, rng: &mut R) {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);

    let limbs = b.limbs_mut();
    for (i, chunk) in buf.chunks(LIMB_BYTES).enumerate() {
        let mut raw = [0u8; LIMB_BYTES];
        raw[..chunk.len()].copy_from_slice(chunk);
        limbs[i] = u64::from_le_bytes(raw);
    }
}

/*----- TESTS -----*/
