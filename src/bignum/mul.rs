//! Schoolbook multiplication.

use super::add::chained_add;
use super::word::wide_mul;
use super::{Bignum, LIMB_BITS};

impl Bignum {

    /// Multiplies two bignums into a freshly allocated result.
    ///
    /// This is exactly the method learned in school, except that every
    /// partial product is accumulated straight into one result array
    /// instead of being summed up at the end. O(a.len * b.len) limb
    /// multiplies, fine for the few-thousand-bit range this library
    /// targets.
    pub fn mul(&self, other: &Bignum) -> Bignum {
        let alen = self.shrunk_len();
        let blen = other.shrunk_len();

        let mut res = Bignum::with_bits((alen + blen) * LIMB_BITS);
        res.extend_limbs(alen + blen);

        for i in 0..alen {
            for j in 0..blen {
                let (hi, lo) = wide_mul(self.limbs[i], other.limbs[j]);
                chained_add(&mut res.limbs[i + j + 1..], hi);
                chained_add(&mut res.limbs[i + j..], lo);
            }
        }

        res.sign = self.sign != other.sign && !res.is_zero();
        res.shrink();
        res
    }
}

/*----- TESTS -----*/
