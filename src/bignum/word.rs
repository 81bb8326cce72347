//! Machine-word primitive for the multiply kernel.

/// Exact double-width product of two limbs, split into (high, low) halves.
/// The native 128-bit multiply compiles down to the single widening
/// instruction on 64-bit targets.
pub(crate) fn wide_mul(a: u64, b: u64) -> (u64, u64) {
    let product = u128::from(a) * u128::from(b);

    ((product >> 64) as u64, product as u64)
}

/*----- TESTS -----*/

#[cfg(test)]
mod word_test {

    use super::wide_mul;

    #[test]
    fn wide_mul_covers_the_full_product_range() {
        assert_eq!(wide_mul(0, u64::MAX), (0, 0));
        assert_eq!(wide_mul(1, u64::MAX), (0, u64::MAX));
        assert_eq!(wide_mul(u64::MAX, u64::MAX), (0xffff_ffff_ffff_fffe, 1));
        assert_eq!(wide_mul(1 << 32, 1 << 32), (1, 0));
    }
}
