//! Modular exponentiation and the extended-Euclidean modular inverse, the
//! two operations the RSA layer is a thin composition over.

use super::{Bignum, LIMB_BITS};
use std::mem;

/// Computes `base ^ exp mod modulus` by left-to-right square-and-multiply.
///
/// Every step allocates the product and drops the superseded value; this
/// walks the exponent from its most significant bit down and reduces after
/// each multiply, so intermediates never exceed twice the modulus width.
/// Makes no attempt at constant-time execution.
pub fn mod_exp(base: &Bignum, exp: &Bignum, modulus: &Bignum) -> Bignum {
    let mut res = Bignum::with_bits(modulus.bit_len());
    res.limbs_mut()[0] = 1;

    if exp.is_zero() {
        return res;
    }

    for bit in (0..=exp.most_sig_bit()).rev() {
        res = res.mul(&res);
        res.modulo(modulus);

        if exp.bit(bit) {
            res = res.mul(base);
            res.modulo(modulus);
        }
    }

    res
}

/// Computes the modular multiplicative inverse of `e` mod `tot` by the
/// extended Euclidean algorithm. Requires `gcd(e, tot) == 1`.
///
/// Only the Bezout coefficient of `e` is tracked. The coefficients go
/// negative along the way, which the sign-magnitude representation
/// absorbs; the scratch values are sized one limb over the modulus width
/// because the mixed-sign subtraction extends its destination by one.
pub fn mod_inv(e: &Bignum, tot: &Bignum) -> Bignum {
    let scratch_bits = tot.bit_len() + LIMB_BITS;

    let mut a = e.clone();
    let mut b = tot.clone();
    let mut m = Bignum::with_bits(scratch_bits);
    let mut x_last = Bignum::with_bits(scratch_bits);
    let mut x = Bignum::with_bits(scratch_bits);

    m.extend(tot.bit_len());
    x_last.extend(tot.bit_len());
    x.extend(tot.bit_len());
    x.limbs_mut()[0] = 1;

    while !a.is_zero() {
        let (q, mut r) = b.div_rem(&a);

        // m <- x_last - q * x, rotating the coefficient pair
        mem::swap(&mut m, &mut x_last);
        let t = q.mul(&x);
        m.sub(&t);

        mem::swap(&mut x_last, &mut x);
        mem::swap(&mut x, &mut m);
        mem::swap(&mut b, &mut a);
        mem::swap(&mut a, &mut r);
    }

    if x_last.is_negative() {
        x_last.add(tot);
    }
    x_last.modulo(tot);

    x_last
}

/*----- TESTS -----*/
