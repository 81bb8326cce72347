//! Additive core: chained carry/borrow propagation over the limb array,
//! magnitude add/subtract, and the signed dispatch on top of them.
//!
//! Addition and subtraction work in place, so any carry generated can
//! itself generate another carry in the next limb; the chained helpers
//! walk the propagation until it dies out. Running a carry off the end of
//! the allocated buffer is a sizing bug in the caller and aborts.

use super::{Bignum, LIMB_BITS};
use std::cmp::Ordering;

/// Adds `v` into the first limb of the slice and chases the carry upward.
pub(crate) fn chained_add(limbs: &mut [u64], v: u64) {
    if v == 0 {
        return;
    }

    let (sum, mut carry) = limbs[0].overflowing_add(v);
    limbs[0] = sum;

    let mut i = 1;
    while carry {
        let (sum, wrapped) = limbs[i].overflowing_add(1);
        limbs[i] = sum;
        carry = wrapped;
        i += 1;
    }
}

/// Subtracts `v` from the first limb of the slice and chases the borrow
/// upward.
pub(crate) fn chained_sub(limbs: &mut [u64], v: u64) {
    if v == 0 {
        return;
    }

    let (diff, mut borrow) = limbs[0].overflowing_sub(v);
    limbs[0] = diff;

    let mut i = 1;
    while borrow {
        let (diff, wrapped) = limbs[i].overflowing_sub(1);
        limbs[i] = diff;
        borrow = wrapped;
        i += 1;
    }
}

/// Magnitude addition, `|a| += |b|`. Extends `a` by one limb of carry room.
fn mag_add(a: &mut Bignum, b: &Bignum) {
    a.extend_limbs(a.len.max(b.len) + 1);

    for i in 0..b.len {
        chained_add(&mut a.limbs[i..], b.limbs[i]);
    }
}

/// Magnitude subtraction, `|a| -= |b|`. Requires `|a| >= |b|`.
fn mag_sub(a: &mut Bignum, b: &Bignum) {
    let blen = b.shrunk_len();
    if blen > a.len {
        panic!("Bad subtraction: {} limbs from {}", blen, a.len);
    }

    for i in 0..blen {
        chained_sub(&mut a.limbs[i..], b.limbs[i]);
    }

    if a.is_zero() {
        a.sign = false;
    }
}

/// The `|a| < |b|` fallback for the mixed branch: computes `|b| - |a|` in a
/// temporary, moves it into `a`, and flips `a`'s original sign.
fn inv_sub(a: &mut Bignum, b: &Bignum) {
    let mut tmp = b.clone();
    mag_sub(&mut tmp, a);

    let sign = !a.sign;
    a.assign_from(&tmp);
    a.sign = sign;
}

impl Bignum {

    /// Signed in-place addition, `a += b`.
    pub fn add(&mut self, other: &Bignum) {
        if self.sign != other.sign {
            if self.cmp_mag(other) == Ordering::Less {
                inv_sub(self, other);
                return;
            }

            mag_sub(self, other);
            return;
        }

        mag_add(self, other);
    }

    /// Signed in-place subtraction, `a -= b`.
    pub fn sub(&mut self, other: &Bignum) {
        if self.sign != other.sign {
            mag_add(self, other);
            return;
        }

        if self.cmp_mag(other) == Ordering::Less {
            inv_sub(self, other);
            return;
        }

        mag_sub(self, other);
    }

    /// Adds `2^pow2` into the magnitude. Used by the divide loop to set
    /// quotient bits without building a one-bit bignum.
    pub(crate) fn add_pow2(&mut self, pow2: usize) {
        chained_add(
            &mut self.limbs[pow2 / LIMB_BITS..],
            1u64 << (pow2 % LIMB_BITS),
        );
    }
}

/*----- TESTS -----*/
