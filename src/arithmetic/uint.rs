//! This module contains a fixed-size big unsigned integer type, and the
//! constant-time operations on it used by the field and scalar layers.
//!
//! Operations prefixed with `ct_` execute a data-independent sequence of
//! instructions and are safe to use on secret values.

use core::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    ops::{Shl, ShlAssign, Shr, ShrAssign},
};

use zeroize::Zeroize;

use crate::{
    arithmetic::{
        limb,
        limb::{Limb, Limbs},
        BigInteger,
    },
    bits::BitIteratorBE,
    const_for, const_modulo,
};

/// Stack-allocated big unsigned integer, represented by `N` little-endian
/// limbs.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Zeroize)]
pub struct Uint<const N: usize> {
    /// Little-endian limbs of the integer.
    pub limbs: Limbs<N>,
}

impl<const N: usize> Default for Uint<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Declares a fixed-size unsigned integer alias.
macro_rules! declare_num {
    ($num:ident, $bits:expr) => {
        #[doc = concat!("Unsigned integer with `", stringify!($bits), "` bit size.")]
        pub type $num = Uint<{ $bits / 64 }>;
    };
}

declare_num!(U64, 64);
declare_num!(U128, 128);
declare_num!(U256, 256);
declare_num!(U448, 448);
declare_num!(U512, 512);
declare_num!(U896, 896);
declare_num!(U960, 960);

impl<const N: usize> Uint<N> {
    /// Number of bits this integer can hold.
    pub const BITS: usize = N * 64;
    /// Number of bytes in the little-endian encoding of this integer.
    pub const BYTES: usize = N * 8;
    /// The maximum value of this integer.
    pub const MAX: Self = Self::new([Limb::MAX; N]);
    /// The multiplicative identity.
    pub const ONE: Self = {
        let mut one = Self::ZERO;
        one.limbs[0] = 1;
        one
    };
    /// The additive identity.
    pub const ZERO: Self = Self::new([0; N]);

    /// Constructs an integer from its little-endian limbs.
    #[must_use]
    pub const fn new(limbs: [Limb; N]) -> Self {
        Self { limbs }
    }

    /// Returns a reference to the little-endian limbs.
    #[must_use]
    pub const fn as_limbs(&self) -> &Limbs<N> {
        &self.limbs
    }

    /// Returns `true` if the least significant bit is set.
    #[must_use]
    pub const fn ct_is_odd(&self) -> bool {
        self.limbs[0] & 1 == 1
    }

    /// Returns `true` if the least significant bit is clear.
    #[must_use]
    pub const fn ct_is_even(&self) -> bool {
        !self.ct_is_odd()
    }

    /// Returns `true` if `self >= rhs`.
    #[must_use]
    pub const fn ct_ge(&self, rhs: &Self) -> bool {
        let (_, borrow) = self.ct_checked_sub(rhs);
        !borrow
    }

    /// Returns `true` if `self < rhs`.
    #[must_use]
    pub const fn ct_lt(&self, rhs: &Self) -> bool {
        !self.ct_ge(rhs)
    }

    /// Returns `true` if `self == 0`.
    #[must_use]
    pub const fn ct_is_zero(&self) -> bool {
        let mut acc = 0;
        const_for!((i in 0..N) {
            acc |= self.limbs[i];
        });
        acc == 0
    }

    /// Returns `true` if `self == rhs`.
    #[must_use]
    pub const fn ct_eq(&self, rhs: &Self) -> bool {
        let mut acc = 0;
        const_for!((i in 0..N) {
            acc |= self.limbs[i] ^ rhs.limbs[i];
        });
        acc == 0
    }

    /// Number of bits in the binary decomposition of `self`.
    ///
    /// Scans every limb, so the timing depends on `N` and not on the value.
    #[must_use]
    pub const fn ct_num_bits(&self) -> usize {
        let mut bits = 0;
        let mut found = false;
        let mut i = N;
        while i > 0 {
            i -= 1;
            if !found && self.limbs[i] != 0 {
                found = true;
                bits = i * 64 + (64 - self.limbs[i].leading_zeros() as usize);
            }
        }
        bits
    }

    /// Returns the `i`-th bit, where bit 0 is the least significant one.
    #[must_use]
    pub const fn ct_get_bit(&self, i: usize) -> bool {
        if i >= N * 64 {
            false
        } else {
            (self.limbs[i / 64] >> (i % 64)) & 1 == 1
        }
    }

    /// Returns `self` with the `i`-th bit set.
    #[must_use]
    pub const fn ct_set_bit(mut self, i: usize) -> Self {
        assert!(i < N * 64, "bit index out of range");
        self.limbs[i / 64] |= 1 << (i % 64);
        self
    }

    /// Doubles `self`, returning the result and the carried-out bit.
    #[must_use]
    pub const fn ct_mul2_with_carry(mut self) -> (Self, bool) {
        let mut last = 0;
        const_for!((i in 0..N) {
            let tmp = self.limbs[i] >> 63;
            self.limbs[i] <<= 1;
            self.limbs[i] |= last;
            last = tmp;
        });
        (self, last != 0)
    }

    /// Halves `self` in place, dropping the lowest bit.
    pub fn div2_assign(&mut self) {
        let mut t = 0;
        for a in self.limbs.iter_mut().rev() {
            let t2 = *a << 63;
            *a >>= 1;
            *a |= t;
            t = t2;
        }
    }

    /// Computes `self - rhs`, returning the result and whether a borrow
    /// occurred.
    #[must_use]
    pub const fn ct_checked_sub(mut self, rhs: &Self) -> (Self, bool) {
        let mut borrow = 0;
        const_for!((i in 0..N) {
            (self.limbs[i], borrow) = limb::sbb(self.limbs[i], rhs.limbs[i], borrow);
        });
        (self, borrow != 0)
    }

    /// Computes `self - rhs`, wrapping on underflow.
    #[must_use]
    pub const fn ct_wrapping_sub(&self, rhs: &Self) -> Self {
        self.ct_checked_sub(rhs).0
    }

    /// Computes `self + rhs`, returning the result and whether a carry
    /// occurred.
    #[must_use]
    pub const fn ct_checked_add(mut self, rhs: &Self) -> (Self, bool) {
        let mut carry = 0;
        const_for!((i in 0..N) {
            (self.limbs[i], carry) = limb::adc(self.limbs[i], rhs.limbs[i], carry);
        });
        (self, carry != 0)
    }

    /// Computes `self + rhs`, wrapping on overflow.
    #[must_use]
    pub const fn ct_wrapping_add(&self, rhs: &Self) -> Self {
        self.ct_checked_add(rhs).0
    }

    /// Computes the full `2N`-limb product, returned as `(low, high)`.
    #[must_use]
    pub const fn ct_widening_mul(&self, rhs: &Self) -> (Self, Self) {
        let mut low = Self::ZERO;
        let mut high = Self::ZERO;
        const_for!((i in 0..N) {
            let mut carry = 0;
            const_for!((j in 0..N) {
                let k = i + j;
                if k >= N {
                    (high.limbs[k - N], carry) = limb::carrying_mac(
                        high.limbs[k - N], self.limbs[i], rhs.limbs[j], carry);
                } else {
                    (low.limbs[k], carry) = limb::carrying_mac(
                        low.limbs[k], self.limbs[i], rhs.limbs[j], carry);
                }
            });
            high.limbs[i] = carry;
        });
        (low, high)
    }

    /// Computes `self * rhs`, dropping the high half of the product.
    #[must_use]
    pub const fn ct_mul(&self, rhs: &Self) -> Self {
        self.ct_widening_mul(rhs).0
    }

    /// Selects `b` when the mask is all ones and `a` when it is zero.
    ///
    /// `mask` must be either `0` or `u64::MAX`.
    #[must_use]
    pub const fn ct_select(a: &Self, b: &Self, mask: u64) -> Self {
        let mut r = Self::ZERO;
        const_for!((i in 0..N) {
            r.limbs[i] = (a.limbs[i] & !mask) | (b.limbs[i] & mask);
        });
        r
    }

    /// Parses an integer from little-endian bytes.
    ///
    /// Shorter slices are zero-extended.
    ///
    /// # Panics
    ///
    /// Panics if the slice does not fit in `N` limbs.
    #[must_use]
    pub const fn ct_from_le_slice(bytes: &[u8]) -> Self {
        assert!(bytes.len() <= N * 8, "too many bytes for this integer size");
        let mut res = Self::ZERO;
        const_for!((i in 0..{ bytes.len() }) {
            res.limbs[i / 8] |= (bytes[i] as u64) << ((i % 8) * 8);
        });
        res
    }

    /// Writes the little-endian encoding of `self` into `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is shorter than [`Self::BYTES`].
    pub fn write_bytes_le(&self, bytes: &mut [u8]) {
        for (chunk, limb) in bytes.chunks_exact_mut(8).zip(self.limbs.iter()) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
    }

    /// Copies `self` into a wider integer.
    ///
    /// # Panics
    ///
    /// Panics if `M < N`.
    #[must_use]
    pub const fn widen<const M: usize>(&self) -> Uint<M> {
        assert!(M >= N, "cannot widen into fewer limbs");
        let mut res = Uint::<M>::ZERO;
        const_for!((i in 0..N) {
            res.limbs[i] = self.limbs[i];
        });
        res
    }

    /// Copies `self` into a narrower integer, dropping the high limbs.
    ///
    /// In debug builds, asserts that the dropped limbs are zero.
    #[must_use]
    pub fn truncate<const M: usize>(&self) -> Uint<M> {
        assert!(M <= N, "cannot truncate into more limbs");
        debug_assert!(
            self.limbs[M..].iter().all(|&l| l == 0),
            "truncation drops set limbs"
        );
        let mut res = Uint::<M>::ZERO;
        res.limbs.copy_from_slice(&self.limbs[..M]);
        res
    }

    /// Computes the Montgomery `R` constant, `2^(N*64) mod self`.
    #[must_use]
    pub const fn montgomery_r(&self) -> Self {
        let two_pow_n_times_64 = crate::const_helpers::RBuffer([0u64; N], 1);
        const_modulo!(two_pow_n_times_64, self)
    }

    /// Computes the Montgomery `R2` constant, `2^(N*128) mod self`.
    #[must_use]
    pub const fn montgomery_r2(&self) -> Self {
        let two_pow_n_times_128 =
            crate::const_helpers::R2Buffer([0u64; N], [0u64; N], 1);
        const_modulo!(two_pow_n_times_128, self)
    }

    /// Divides by a single limb, returning the quotient and remainder.
    fn divmod_limb(&self, divisor: Limb) -> (Self, Limb) {
        let mut quotient = Self::ZERO;
        let mut rem: u128 = 0;
        for i in (0..N).rev() {
            let acc = (rem << 64) | u128::from(self.limbs[i]);
            quotient.limbs[i] = (acc / u128::from(divisor)) as u64;
            rem = acc % u128::from(divisor);
        }
        (quotient, rem as u64)
    }
}

/// Constant construction from primitives.
macro_rules! impl_ct_from_primitive {
    ($int:ty, $func_name:ident) => {
        impl<const N: usize> Uint<N> {
            #[doc = concat!("Constructs an integer from a `", stringify!($int), "`.")]
            #[must_use]
            pub const fn $func_name(val: $int) -> Self {
                assert!(N >= 1, "integer has no limbs");
                let mut res = Self::ZERO;
                res.limbs[0] = val as u64;
                res
            }
        }
    };
}

impl_ct_from_primitive!(u8, from_u8);
impl_ct_from_primitive!(u16, from_u16);
impl_ct_from_primitive!(u32, from_u32);
impl_ct_from_primitive!(u64, from_u64);
impl_ct_from_primitive!(usize, from_usize);

impl<const N: usize> Uint<N> {
    /// Constructs an integer from a `u128`.
    #[must_use]
    pub const fn from_u128(val: u128) -> Self {
        assert!(N >= 2, "u128 does not fit in a single limb");
        let mut res = Self::ZERO;
        res.limbs[0] = val as u64;
        res.limbs[1] = (val >> 64) as u64;
        res
    }
}

/// `From` implementations for primitives.
macro_rules! impl_from_primitive {
    ($int:ty, $func_name:ident) => {
        impl<const N: usize> From<$int> for Uint<N> {
            fn from(value: $int) -> Self {
                Uint::$func_name(value)
            }
        }
    };
}

impl_from_primitive!(u8, from_u8);
impl_from_primitive!(u16, from_u16);
impl_from_primitive!(u32, from_u32);
impl_from_primitive!(u64, from_u64);
impl_from_primitive!(usize, from_usize);
impl_from_primitive!(u128, from_u128);

impl<const N: usize> Display for Uint<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let mut digits = Vec::new();
        let mut value = *self;
        loop {
            let (q, r) = value.divmod_limb(10);
            digits.push(char::from(b'0' + r as u8));
            value = q;
            if value.ct_is_zero() {
                break;
            }
        }
        let s: String = digits.iter().rev().collect();
        write!(f, "{s}")
    }
}

impl<const N: usize> Debug for Uint<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "0x")?;
        for limb in self.limbs.iter().rev() {
            write!(f, "{limb:016x}")?;
        }
        Ok(())
    }
}

impl<const N: usize> Ord for Uint<N> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
            if let order @ (Ordering::Less | Ordering::Greater) = a.cmp(b) {
                return order;
            }
        }
        Ordering::Equal
    }
}

impl<const N: usize> PartialOrd for Uint<N> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> AsRef<[u64]> for Uint<N> {
    #[inline]
    fn as_ref(&self) -> &[u64] {
        &self.limbs
    }
}

impl<const N: usize> ShrAssign<u32> for Uint<N> {
    /// Computes the bitwise shift right operation in place.
    ///
    /// Shifts past the bit width saturate to zero instead of failing.
    fn shr_assign(&mut self, mut rhs: u32) {
        if rhs >= (64 * N) as u32 {
            *self = Self::ZERO;
            return;
        }

        while rhs >= 64 {
            let mut t = 0;
            for limb in self.limbs.iter_mut().rev() {
                core::mem::swap(&mut t, limb);
            }
            rhs -= 64;
        }

        if rhs > 0 {
            let mut t = 0;
            for a in self.limbs.iter_mut().rev() {
                let t2 = *a << (64 - rhs);
                *a >>= rhs;
                *a |= t;
                t = t2;
            }
        }
    }
}

impl<const N: usize> Shr<u32> for Uint<N> {
    type Output = Self;

    /// Computes the bitwise shift right operation.
    ///
    /// Shifts past the bit width saturate to zero instead of failing.
    fn shr(mut self, rhs: u32) -> Self::Output {
        self >>= rhs;
        self
    }
}

impl<const N: usize> ShlAssign<u32> for Uint<N> {
    /// Computes the bitwise shift left operation in place.
    ///
    /// Bits shifted past the bit width are chopped off.
    fn shl_assign(&mut self, mut rhs: u32) {
        if rhs >= (64 * N) as u32 {
            *self = Self::ZERO;
            return;
        }

        while rhs >= 64 {
            let mut t = 0;
            for i in 0..N {
                core::mem::swap(&mut t, &mut self.limbs[i]);
            }
            rhs -= 64;
        }

        if rhs > 0 {
            let mut t = 0;
            for i in 0..N {
                let a = &mut self.limbs[i];
                let t2 = *a >> (64 - rhs);
                *a <<= rhs;
                *a |= t;
                t = t2;
            }
        }
    }
}

impl<const N: usize> Shl<u32> for Uint<N> {
    type Output = Self;

    /// Computes the bitwise shift left operation.
    ///
    /// Bits shifted past the bit width are chopped off.
    fn shl(mut self, rhs: u32) -> Self::Output {
        self <<= rhs;
        self
    }
}

impl<const N: usize> BigInteger for Uint<N> {
    const NUM_LIMBS: usize = N;

    fn is_odd(&self) -> bool {
        self.ct_is_odd()
    }

    fn is_even(&self) -> bool {
        self.ct_is_even()
    }

    fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&l| l == 0)
    }

    fn num_bits(&self) -> usize {
        let mut ret = N * 64;
        for limb in self.limbs.iter().rev() {
            let leading = limb.leading_zeros() as usize;
            ret -= leading;
            if leading != 64 {
                break;
            }
        }
        ret
    }

    fn get_bit(&self, i: usize) -> bool {
        self.ct_get_bit(i)
    }

    fn from_bytes_le(bytes: &[u8]) -> Self {
        assert_eq!(bytes.len(), Self::BYTES, "unexpected number of bytes");
        Self::ct_from_le_slice(bytes)
    }

    fn into_bytes_le(self) -> Vec<u8> {
        self.limbs.iter().flat_map(|&limb| limb.to_le_bytes()).collect()
    }
}

impl<const N: usize> BitIteratorBE for Uint<N> {
    fn bit_be_iter(&self) -> impl Iterator<Item = bool> {
        self.as_limbs().iter().rev().flat_map(Limb::bit_be_iter)
    }
}

/// Parses a number from a string in a given radix.
///
/// This implementation can be slow on big numbers, and is intended for
/// compile-time constant construction.
#[must_use]
pub const fn from_str_radix<const LIMBS: usize>(
    s: &str,
    radix: u32,
) -> Uint<LIMBS> {
    let bytes = s.as_bytes();
    assert!(!bytes.is_empty(), "empty string");

    // The lowest order digit is at the end of the string.
    // Begin parsing from the last index of the string.
    let mut index = bytes.len() - 1;

    let mut uint = Uint::from_u32(0);
    let mut order = Uint::from_u32(1);
    let uint_radix = Uint::from_u32(radix);

    loop {
        let digit = Uint::from_u32(parse_digit(bytes[index], radix));

        // Add a digit multiplied by order.
        uint = checked_add(&uint, &checked_mul(&digit, &order));

        // If we reached the beginning of the string, return the number.
        if index == 0 {
            return uint;
        }

        // Increase the order of magnitude.
        order = checked_mul(&uint_radix, &order);

        // Move to the next digit.
        index -= 1;
    }
}

/// Parses a number from a hex string.
///
/// This implementation performs faster than [`from_str_radix`], since it
/// assumes the radix is already `16`.
///
/// If the string number is shorter than [`Uint`] can store, the number gets
/// leading zeroes.
#[must_use]
pub const fn from_str_hex<const LIMBS: usize>(s: &str) -> Uint<LIMBS> {
    let bytes = s.as_bytes();
    assert!(!bytes.is_empty(), "empty string");

    // The lowest order digit is at the end of the string.
    // Begin parsing from the last index of the string.
    let mut index = bytes.len() - 1;

    // The lowest order limb is at the beginning of the `num` array.
    let mut num = [0u64; LIMBS];
    let mut num_index = 0;

    let digit_radix = 16;
    let digit_size = 4; // Size of a hex digit in bits (2^4 = 16).
    let digits_in_limb = 64 / digit_size;

    loop {
        let digit = parse_digit(bytes[index], digit_radix) as Limb;

        // Since a base-16 digit can be represented with the same bits, we can
        // copy these bits.
        let digit_mask = digit << ((num_index % digits_in_limb) * digit_size);
        num[num_index / digits_in_limb] |= digit_mask;

        // If we reached the beginning of the string, return the number.
        if index == 0 {
            return Uint::new(num);
        }

        // Move to the next digit.
        index -= 1;
        num_index += 1;
    }
}

/// Multiplies two numbers, panicking on overflow.
#[must_use]
const fn checked_mul<const LIMBS: usize>(
    a: &Uint<LIMBS>,
    b: &Uint<LIMBS>,
) -> Uint<LIMBS> {
    let (low, high) = a.ct_widening_mul(b);
    assert!(high.ct_is_zero(), "overflow on multiplication");
    low
}

/// Adds two numbers, panicking on overflow.
#[must_use]
const fn checked_add<const LIMBS: usize>(
    a: &Uint<LIMBS>,
    b: &Uint<LIMBS>,
) -> Uint<LIMBS> {
    let (low, carry) = a.ct_checked_add(b);
    assert!(!carry, "overflow on addition");
    low
}

// Try to parse a digit from a utf-8 byte.
const fn parse_digit(utf8_digit: u8, digit_radix: u32) -> u32 {
    let ch = parse_utf8_byte(utf8_digit);
    match ch.to_digit(digit_radix) {
        None => {
            panic!("invalid digit");
        }
        Some(digit) => digit,
    }
}

/// Parses a single UTF-8 byte.
const fn parse_utf8_byte(byte: u8) -> char {
    match byte {
        0x00..=0x7F => byte as char,
        _ => panic!("non-ASCII character found"),
    }
}

/// This macro converts a string base-10 number to a big integer.
#[macro_export]
macro_rules! from_num {
    ($num:literal) => {
        $crate::arithmetic::uint::from_str_radix($num, 10)
    };
}

/// This macro converts a string hex number to a big integer.
#[macro_export]
macro_rules! from_hex {
    ($num:literal) => {
        $crate::arithmetic::uint::from_str_hex($num)
    };
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use proptest::prelude::*;

    use super::*;

    fn to_biguint<const N: usize>(value: &Uint<N>) -> BigUint {
        BigUint::from_bytes_le(&value.into_bytes_le())
    }

    #[test]
    fn convert_from_str_radix() {
        let uint_from_base10: Uint<4> = from_str_radix(
            "28948022309329048855892746252171976963363056481941647379679742748393362948097",
            10,
        );
        #[allow(clippy::unreadable_literal)]
        let expected = Uint::<4>::new([
            10108024940646105089u64,
            2469829653919213789u64,
            0u64,
            4611686018427387904u64,
        ]);
        assert_eq!(uint_from_base10, expected);
    }

    #[test]
    fn convert_from_str_hex() {
        // Test different implementations of hex parsing on random hex inputs.
        proptest!(|(s in "[0-9a-fA-F]{1,64}")| {
            let uint_from_hex: Uint<4> = from_str_hex(&s);
            let expected: Uint<4> = from_str_radix(&s, 16);
            prop_assert_eq!(uint_from_hex, expected);
        });
    }

    #[test]
    fn add_sub_round_trip() {
        proptest!(|(a: [u64; 4], b: [u64; 4])| {
            let a = Uint::new(a);
            let b = Uint::new(b);
            let (sum, carry) = a.ct_checked_add(&b);
            let (diff, borrow) = sum.ct_checked_sub(&b);
            prop_assert_eq!(diff, a);
            prop_assert_eq!(borrow, carry);
        });
    }

    #[test]
    fn widening_mul_matches_num_bigint() {
        proptest!(|(a: [u64; 4], b: [u64; 4])| {
            let a = Uint::new(a);
            let b = Uint::new(b);
            let (low, high) = a.ct_widening_mul(&b);
            let mut expected = to_biguint(&a) * to_biguint(&b);
            let modulus = BigUint::from(1u8) << 256;
            prop_assert_eq!(to_biguint(&low), &expected % &modulus);
            expected >>= 256;
            prop_assert_eq!(to_biguint(&high), expected);
        });
    }

    #[test]
    fn bytes_round_trip() {
        proptest!(|(bytes: [u8; 32])| {
            let uint = Uint::<4>::ct_from_le_slice(&bytes);
            prop_assert_eq!(uint.into_bytes_le(), bytes.to_vec());
        });
    }

    #[test]
    fn partial_byte_slices_are_zero_extended() {
        let uint = Uint::<8>::ct_from_le_slice(&[0xff; 57]);
        assert_eq!(uint.num_bits(), 57 * 8);
    }

    #[test]
    fn num_bits_and_shifts() {
        let one = Uint::<4>::ONE;
        assert_eq!(one.num_bits(), 1);
        assert_eq!((one << 200).num_bits(), 201);
        assert_eq!((one << 200) >> 200, one);
        assert_eq!(Uint::<4>::ZERO.num_bits(), 0);

        proptest!(|(a: [u64; 4], s in 0u32..256)| {
            let a = Uint::new(a);
            let expected = (to_biguint(&a) >> s) << s;
            prop_assert_eq!(to_biguint(&((a >> s) << s)), expected % (BigUint::from(1u8) << 256));
        });
    }

    #[test]
    fn montgomery_constants_match_num_bigint() {
        let modulus: Uint<4> = from_str_radix(
            "7237005577332262213973186563042994240857116359379907606001950938285454250989",
            10,
        );
        let m = to_biguint(&modulus);
        let r = (BigUint::from(1u8) << 256) % &m;
        let r2 = (&r * &r) % &m;
        assert_eq!(to_biguint(&modulus.montgomery_r()), r);
        assert_eq!(to_biguint(&modulus.montgomery_r2()), r2);
    }

    #[test]
    fn decimal_display() {
        let uint: Uint<4> = from_num!("123456789012345678901234567890");
        assert_eq!(uint.to_string(), "123456789012345678901234567890");
        assert_eq!(Uint::<4>::ZERO.to_string(), "0");
    }
}
