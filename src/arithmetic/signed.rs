//! Signed two's-complement helpers over fixed-size limb arrays.
//!
//! The lattice basis reduction used by signature verification works on
//! signed multi-precision integers that shrink as the reduction progresses.
//! All operations here wrap at `N * 64` bits, which is exact as long as the
//! true values fit, and the callers guarantee they do.

use crate::arithmetic::{
    limb::{adc_assign, sbb_assign},
    Uint,
};

/// Returns `true` if the sign bit of `x` is set.
#[inline]
pub(crate) fn is_negative<const N: usize>(x: &[u64; N]) -> bool {
    x[N - 1] >> 63 == 1
}

/// Bit length of a signed value.
///
/// For negative values this is the bit length of the ones' complement, which
/// is within one bit of the magnitude's length and cheap to compute.
pub(crate) fn bit_length<const N: usize>(x: &[u64; N]) -> u32 {
    let sign = if is_negative(x) { u64::MAX } else { 0 };
    for i in (0..N).rev() {
        let w = x[i] ^ sign;
        if w != 0 {
            return (i as u32) * 64 + (64 - w.leading_zeros());
        }
    }
    0
}

/// Limb `i` of `y << s`, where `s = limb_shift * 64 + bit_shift`.
#[inline]
fn shifted_limb<const N: usize>(
    y: &[u64; N],
    i: usize,
    limb_shift: usize,
    bit_shift: u32,
) -> u64 {
    if i < limb_shift {
        return 0;
    }
    let lo = y[i - limb_shift] << bit_shift;
    let hi = if bit_shift > 0 && i - limb_shift > 0 {
        y[i - limb_shift - 1] >> (64 - bit_shift)
    } else {
        0
    };
    lo | hi
}

/// Computes `x += y << s`, wrapping at `N * 64` bits.
pub(crate) fn add_shifted<const N: usize>(
    x: &mut [u64; N],
    y: &[u64; N],
    s: u32,
) {
    let limb_shift = (s / 64) as usize;
    let bit_shift = s % 64;
    let mut carry = false;
    for i in 0..N {
        let add = shifted_limb(y, i, limb_shift, bit_shift);
        carry = adc_assign(&mut x[i], add, carry);
    }
}

/// Computes `x -= y << s`, wrapping at `N * 64` bits.
pub(crate) fn sub_shifted<const N: usize>(
    x: &mut [u64; N],
    y: &[u64; N],
    s: u32,
) {
    let limb_shift = (s / 64) as usize;
    let bit_shift = s % 64;
    let mut borrow = false;
    for i in 0..N {
        let sub = shifted_limb(y, i, limb_shift, bit_shift);
        borrow = sbb_assign(&mut x[i], sub, borrow);
    }
}

/// Negates `x` in place, wrapping at `N * 64` bits.
pub(crate) fn negate<const N: usize>(x: &mut [u64; N]) {
    let mut carry = true;
    for limb in x.iter_mut() {
        *limb = !*limb;
        if carry {
            let (sum, c) = limb.overflowing_add(1);
            *limb = sum;
            carry = c;
        }
    }
}

/// Splits a signed value into its magnitude and sign.
pub(crate) fn abs<const N: usize>(x: &[u64; N]) -> (Uint<N>, bool) {
    let negative = is_negative(x);
    let mut magnitude = *x;
    if negative {
        negate(&mut magnitude);
    }
    (Uint::new(magnitude), negative)
}
