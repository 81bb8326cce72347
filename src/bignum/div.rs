//! Shift-and-subtract long division, the in-place remainder form the RSA
//! layer leans on, and the Euclidean GCD built on top of it.

use super::shift::{cmp_shl, sub_shl};
use super::{Bignum, LIMB_BITS};
use std::cmp::Ordering;
use std::mem;

impl Bignum {

    /// In-place remainder, `a <- a mod divisor` on the magnitudes, leaving
    /// the dividend untouched when its magnitude is already below the
    /// divisor's width. The final sign is the XOR of the operand signs.
    ///
    /// The divisor is walked down from the widest alignment: at each shift
    /// the divisor still fits under the remainder, subtract and retry the
    /// same shift (one subtraction can leave the remainder still above the
    /// shifted divisor); only when the compare fails move down one bit.
    pub fn modulo(&mut self, divisor: &Bignum) {
        if self.is_zero() {
            return;
        }

        let Some(mut shift) = self.most_sig_bit().checked_sub(divisor.most_sig_bit()) else {
            return;
        };

        loop {
            if cmp_shl(self, divisor, shift) != Ordering::Less {
                sub_shl(self, divisor, shift);
                continue;
            }

            if shift == 0 {
                break;
            }

            shift -= 1;
        }

        self.sign = self.sign != divisor.sign && !self.is_zero();
        self.shrink();
    }

    /// Long division returning (quotient, remainder). Fatal when the
    /// divisor's magnitude exceeds the dividend's; callers uphold the
    /// ordering. The divisor must be non-zero.
    pub fn div_rem(&self, divisor: &Bignum) -> (Bignum, Bignum) {
        if self.is_zero() || self.most_sig_bit() < divisor.most_sig_bit() {
            panic!("Divisor cannot be larger than dividend");
        }

        let mut shift = self.most_sig_bit() - divisor.most_sig_bit();

        let mut quotient = Bignum::with_bits(self.shrunk_len() * LIMB_BITS);
        quotient.extend_limbs(self.shrunk_len());

        let mut rem = self.clone();

        loop {
            if cmp_shl(&rem, divisor, shift) != Ordering::Less {
                sub_shl(&mut rem, divisor, shift);
                quotient.add_pow2(shift);
                continue;
            }

            if shift == 0 {
                break;
            }

            shift -= 1;
        }

        quotient.sign = self.sign != divisor.sign && !quotient.is_zero();
        quotient.shrink();
        rem.shrink();

        (quotient, rem)
    }
}

/// Greatest common divisor by repeated in-place reduction, rotating the
/// working values through a scratch handle instead of reallocating.
pub fn gcd(a: &Bignum, b: &Bignum) -> Bignum {
    let mut ra = a.clone();
    let mut rb = b.clone();
    let mut tmp = Bignum::with_bits(a.bit_len());

    while !rb.is_zero() {
        mem::swap(&mut tmp, &mut rb);
        ra.modulo(&tmp);
        mem::swap(&mut ra, &mut rb);
        mem::swap(&mut ra, &mut tmp);
    }

    ra
}

/*----- TESTS -----*/

#[cfg(test)]
mod div_test {

    use super::super::{gcd, Bignum};
    use num_bigint::BigUint;
    use num_integer::Integer;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    fn to_biguint(b: &Bignum) -> BigUint {
        let digits: Vec<u32> = b
            .limbs()
            .iter()
            .flat_map(|&w| [w as u32, (w >> 32) as u32])
            .collect();
        BigUint::new(digits)
    }

    #[test]
    fn hundred_over_seven() {
        let a = Bignum::from_words(&[100]);
        let b = Bignum::from_words(&[7]);

        let (q, r) = a.div_rem(&b);
        assert_eq!(q.limbs(), &[14]);
        assert_eq!(r.limbs(), &[2]);
    }

    #[test]
    fn small_divisions_are_exhaustively_correct() {
        for a in 1u64..200 {
            for b in 1u64..20 {
                if a < b {
                    continue;
                }

                let (q, r) = Bignum::from_words(&[a]).div_rem(&Bignum::from_words(&[b]));
                assert_eq!(q.limbs()[0], a / b, "{} / {}", a, b);
                assert_eq!(r.limbs()[0], a % b, "{} % {}", a, b);
            }
        }
    }

    #[test]
    fn random_divisions_match_reference() {
        let mut rng = StdRng::seed_from_u64(0x6469_7669);

        for _ in 0..50 {
            let alen = 2 + (rng.next_u32() % 4) as usize;
            let blen = 1 + (rng.next_u32() % alen.min(3) as u32) as usize;

            let aw: Vec<u64> = (0..alen).map(|_| rng.next_u64() | 1).collect();
            let bw: Vec<u64> = (0..blen).map(|_| rng.next_u64() | 1).collect();

            let a = Bignum::from_words(&aw);
            let b = Bignum::from_words(&bw);
            if a.cmp_mag(&b) == std::cmp::Ordering::Less {
                continue;
            }

            let (q, r) = a.div_rem(&b);
            let (rq, rr) = to_biguint(&a).div_rem(&to_biguint(&b));

            assert_eq!(to_biguint(&q), rq);
            assert_eq!(to_biguint(&r), rr);

            // q * b + r == a, 0 <= r < b
            assert!(to_biguint(&r) < to_biguint(&b));
            assert_eq!(to_biguint(&q) * to_biguint(&b) + to_biguint(&r), to_biguint(&a));

            // and the remainder-only form agrees
            let mut m = a.clone();
            m.modulo(&b);
            assert_eq!(to_biguint(&m), rr);
        }
    }

    #[test]
    fn modulo_with_smaller_dividend_is_untouched() {
        let mut a = Bignum::from_words(&[41]);
        a.modulo(&Bignum::from_words(&[0, 1]));

        assert_eq!(a.limbs(), &[41]);
        assert!(!a.is_negative());
    }

    #[test]
    fn modulo_of_zero_is_untouched() {
        let mut a = Bignum::with_bits(128);
        a.modulo(&Bignum::from_words(&[17]));

        assert!(a.is_zero());
        assert!(!a.is_negative());
    }

    #[test]
    fn modulo_to_zero_clears_sign() {
        let mut a = Bignum::from_words(&[21]);
        a.modulo(&Bignum::from_words(&[7]));

        assert!(a.is_zero());
        assert!(!a.is_negative());
    }

    #[test]
    fn modulo_sign_is_the_operand_xor() {
        let mut a = Bignum::from_words(&[0]);
        a.sub(&Bignum::from_words(&[7])); // -7

        a.modulo(&Bignum::from_words(&[3]));
        assert_eq!(a.limbs(), &[1]);
        assert!(a.is_negative());
    }

    #[test]
    #[should_panic(expected = "Divisor cannot be larger")]
    fn dividing_by_a_wider_divisor_is_fatal() {
        let a = Bignum::from_words(&[5]);
        let b = Bignum::from_words(&[0, 1]);
        a.div_rem(&b);
    }

    #[test]
    fn gcd_of_small_values() {
        let g = gcd(&Bignum::from_words(&[12]), &Bignum::from_words(&[18]));
        assert_eq!(g.limbs(), &[6]);

        let g = gcd(&Bignum::from_words(&[65537]), &Bignum::from_words(&[1038360]));
        assert!(g.is_one());
    }

    #[test]
    fn gcd_with_zero_is_the_other_operand() {
        let g = gcd(&Bignum::from_words(&[42]), &Bignum::with_bits(64));
        assert_eq!(g.limbs(), &[42]);
    }

    #[test]
    fn random_gcds_match_reference() {
        let mut rng = StdRng::seed_from_u64(0x6763_6421);

        for _ in 0..25 {
            let aw: Vec<u64> = (0..3).map(|_| rng.next_u64()).collect();
            let bw: Vec<u64> = (0..2).map(|_| rng.next_u64() | 1).collect();

            let a = Bignum::from_words(&aw);
            let b = Bignum::from_words(&bw);

            assert_eq!(to_biguint(&gcd(&a, &b)), to_biguint(&a).gcd(&to_biguint(&b)));
        }
    }
}
