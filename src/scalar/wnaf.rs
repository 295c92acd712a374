//! Width-w non-adjacent form recoding.
//!
//! A scalar is rewritten as a sequence of signed odd digits, one per bit
//! position, such that at most one digit in any `width` consecutive
//! positions is non-zero. Multiplication then needs only the odd multiples
//! `1, 3, ..., 2^(width - 1) - 1` of the point.

use crate::arithmetic::uint::Uint;

/// Recodes `scalar` into width-`width` NAF digits.
///
/// `digits` must hold one entry per bit of the scalar plus one for the
/// final carry. Unused high positions are set to zero. Digits are odd and
/// bounded by `2^(width - 1)` in absolute value, so `width` must be at
/// most 7 for the digits to fit an `i8`.
///
/// The scalar must leave its topmost bit clear so the intermediate
/// additions cannot wrap.
///
/// Runs in time variable in the scalar, which must be public data.
pub(crate) fn recode_wnaf<const N: usize>(
    scalar: &Uint<N>,
    width: u32,
    digits: &mut [i8],
) {
    debug_assert!((2..=7).contains(&width));
    debug_assert!(digits.len() > scalar.ct_num_bits());
    debug_assert!(scalar.ct_num_bits() < N * 64);

    let window = 1u64 << width;
    let half = window >> 1;
    let mask = window - 1;

    let mut x = *scalar;
    let mut i = 0;
    while !x.ct_is_zero() {
        if x.ct_is_odd() {
            let d = x.limbs[0] & mask;
            if d >= half {
                // Negative digit; add the complement back to the scalar.
                digits[i] = (d as i8).wrapping_sub(window as i8);
                x = x.ct_wrapping_add(&Uint::from_u64(window - d));
            } else {
                digits[i] = d as i8;
                x = x.ct_wrapping_sub(&Uint::from_u64(d));
            }
        } else {
            digits[i] = 0;
        }
        x.div2_assign();
        i += 1;
    }
    for digit in &mut digits[i..] {
        *digit = 0;
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use proptest::prelude::*;

    use super::*;
    use crate::arithmetic::uint::U256;

    proptest! {
        #[test]
        fn digits_recombine_to_scalar(
            bytes: [u8; 32],
            width in 2u32..=7,
        ) {
            let mut bytes = bytes;
            bytes[31] &= 0x7f;
            let scalar = U256::ct_from_le_slice(&bytes);
            let mut digits = [0i8; 256];
            recode_wnaf(&scalar, width, &mut digits);

            let mut acc = BigInt::from(0u8);
            for &d in digits.iter().rev() {
                acc *= 2;
                acc += d;
            }
            prop_assert_eq!(acc, BigInt::from_bytes_le(num_bigint::Sign::Plus, &bytes));
        }

        #[test]
        fn digits_are_odd_and_sparse(
            bytes: [u8; 32],
            width in 2u32..=7,
        ) {
            let mut bytes = bytes;
            bytes[31] &= 0x7f;
            let scalar = U256::ct_from_le_slice(&bytes);
            let mut digits = [0i8; 256];
            recode_wnaf(&scalar, width, &mut digits);

            let bound = 1i8 << (width - 1);
            for (i, &d) in digits.iter().enumerate() {
                if d == 0 {
                    continue;
                }
                prop_assert_eq!(d.rem_euclid(2), 1);
                prop_assert!(d > -bound && d < bound);
                // Non-adjacency within the window.
                for &next in digits.iter().skip(i + 1).take(width as usize - 1) {
                    prop_assert_eq!(next, 0);
                }
            }
        }
    }
}
