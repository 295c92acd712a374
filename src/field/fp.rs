//! This module contains the [`Fp`] prime field backed by a fixed-size
//! big integer in Montgomery form, along with [`FpParams`], the trait
//! describing a concrete field (modulus and derived constants).
//!
//! Arithmetic is implemented with constant functions so that field
//! elements can be built at compile time with [`fp_from_num!`] and
//! [`fp_from_hex!`].

use core::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    hash::Hash,
    iter::{Product, Sum},
    marker::PhantomData,
    ops::{
        Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
    },
};

use educe::Educe;
use num_traits::{One, Zero};
use zeroize::Zeroize;

use crate::{
    arithmetic::{limb, uint::Uint},
    field::{AdditiveGroup, Field, PrimeField},
};

/// Number of limbs in a 64-bit integer.
pub const LIMBS_64: usize = 1;
/// Number of limbs in a 128-bit integer.
pub const LIMBS_128: usize = 2;
/// Number of limbs in a 256-bit integer.
pub const LIMBS_256: usize = 4;
/// Number of limbs in a 448-bit integer.
pub const LIMBS_448: usize = 7;
/// Number of limbs in a 512-bit integer.
pub const LIMBS_512: usize = 8;
/// Number of limbs in an 896-bit integer.
pub const LIMBS_896: usize = 14;
/// Number of limbs in a 960-bit integer.
pub const LIMBS_960: usize = 15;

/// A prime field with at most 64 bits.
pub type Fp64<P> = Fp<P, LIMBS_64>;
/// A prime field with at most 128 bits.
pub type Fp128<P> = Fp<P, LIMBS_128>;
/// A prime field with at most 256 bits.
pub type Fp256<P> = Fp<P, LIMBS_256>;
/// A prime field with at most 448 bits.
pub type Fp448<P> = Fp<P, LIMBS_448>;
/// A prime field with at most 512 bits.
pub type Fp512<P> = Fp<P, LIMBS_512>;
/// A prime field with at most 896 bits.
pub type Fp896<P> = Fp<P, LIMBS_896>;
/// A prime field with at most 960 bits.
pub type Fp960<P> = Fp<P, LIMBS_960>;

/// A trait that specifies the configuration of a prime field.
/// Also specifies how to perform arithmetic on field elements.
pub trait FpParams<const N: usize>: Send + Sync + 'static + Sized {
    /// The modulus of the field.
    const MODULUS: Uint<N>;

    /// `R = M % MODULUS` where `M` is the power of `2^64` nearest to
    /// `Uint::MAX + 1`. It is the Montgomery representation of one.
    const R: Uint<N> = Self::MODULUS.montgomery_r();

    /// `R2 = R^2 % MODULUS`.
    const R2: Uint<N> = Self::MODULUS.montgomery_r2();

    /// `INV = -MODULUS^{-1} mod 2^64`.
    const INV: u64 = inv::<Self, N>();

    /// Sets `a += b`.
    fn add_assign(a: &mut Fp<Self, N>, b: &Fp<Self, N>) {
        a.residue = ct_add_mod(&a.residue, &b.residue, &Self::MODULUS);
    }

    /// Sets `a -= b`.
    fn sub_assign(a: &mut Fp<Self, N>, b: &Fp<Self, N>) {
        a.residue = ct_sub_mod(&a.residue, &b.residue, &Self::MODULUS);
    }

    /// Sets `a = a + a`.
    fn double_in_place(a: &mut Fp<Self, N>) {
        let b = *a;
        Self::add_assign(a, &b);
    }

    /// Sets `a = -a`.
    fn neg_in_place(a: &mut Fp<Self, N>) {
        a.residue = ct_neg_mod(&a.residue, &Self::MODULUS);
    }

    /// Sets `a *= b`.
    fn mul_assign(a: &mut Fp<Self, N>, b: &Fp<Self, N>) {
        a.residue =
            ct_mont_mul(&a.residue, &b.residue, &Self::MODULUS, Self::INV);
    }

    /// Sets `a = a * a`.
    fn square_in_place(a: &mut Fp<Self, N>) {
        let b = *a;
        Self::mul_assign(a, &b);
    }

    /// Computes the multiplicative inverse of `a` if `a` is not zero.
    ///
    /// Uses Fermat's little theorem, `a^(p - 2) = a^-1 (mod p)` for prime
    /// `p`. Runs in time constant in the value of `a`.
    #[must_use]
    fn inverse(a: &Fp<Self, N>) -> Option<Fp<Self, N>> {
        if a.is_zero() {
            return None;
        }

        let exp = Self::MODULUS.ct_wrapping_sub(&Uint::from_u32(2));
        Some(a.pow(exp))
    }

    /// Constructs a field element from an integer.
    ///
    /// Returns `None` if the integer is outside the canonical range
    /// `[0, MODULUS)`.
    #[must_use]
    fn from_bigint(repr: Uint<N>) -> Option<Fp<Self, N>> {
        if repr.ct_ge(&Self::MODULUS) {
            None
        } else {
            Some(Fp::new(repr))
        }
    }

    /// Converts a field element to an integer less than [`Self::MODULUS`].
    #[must_use]
    fn into_bigint(a: Fp<Self, N>) -> Uint<N> {
        // Multiplying by one removes the Montgomery factor.
        ct_mont_mul(&a.residue, &Uint::ONE, &Self::MODULUS, Self::INV)
    }
}

/// Computes `-MODULUS^{-1} mod 2^64`.
pub const fn inv<T: FpParams<N>, const N: usize>() -> u64 {
    // We compute this as follows.
    // First, MODULUS mod 2^64 is just the lower 64 bits of MODULUS.
    // Hence MODULUS mod 2^64 = MODULUS.limbs[0] mod 2^64.
    //
    // Next, computing the inverse mod 2^64 involves exponentiating by
    // the multiplicative group order, which is euler_totient(2^64) - 1.
    // Now, euler_totient(2^64) = 1 << 63, and so
    // euler_totient(2^64) - 1 = (1 << 63) - 1 = 1111111... (63 digits).
    // We compute this powering via standard square and multiply.
    let mut inv = 1u64;
    crate::const_for!((_i in 0..63) {
        // Square.
        inv = inv.wrapping_mul(inv);
        // Multiply.
        inv = inv.wrapping_mul(T::MODULUS.limbs[0]);
    });
    inv.wrapping_neg()
}

/// Computes `a + b mod m`, assuming `a` and `b` are reduced.
const fn ct_add_mod<const N: usize>(
    a: &Uint<N>,
    b: &Uint<N>,
    m: &Uint<N>,
) -> Uint<N> {
    let (sum, carry) = a.ct_checked_add(b);
    let (diff, borrow) = sum.ct_checked_sub(m);
    // Keep the subtracted value when the sum overflowed the limbs or
    // reached the modulus.
    let mask = ((carry | !borrow) as u64).wrapping_neg();
    Uint::ct_select(&sum, &diff, mask)
}

/// Computes `a - b mod m`, assuming `a` and `b` are reduced.
const fn ct_sub_mod<const N: usize>(
    a: &Uint<N>,
    b: &Uint<N>,
    m: &Uint<N>,
) -> Uint<N> {
    let (diff, borrow) = a.ct_checked_sub(b);
    let (adjusted, _) = diff.ct_checked_add(m);
    let mask = (borrow as u64).wrapping_neg();
    Uint::ct_select(&diff, &adjusted, mask)
}

/// Computes `-a mod m`, assuming `a` is reduced.
const fn ct_neg_mod<const N: usize>(a: &Uint<N>, m: &Uint<N>) -> Uint<N> {
    let diff = m.ct_wrapping_sub(a);
    let mask = (a.ct_is_zero() as u64).wrapping_neg();
    Uint::ct_select(&diff, &Uint::ZERO, mask)
}

/// Montgomery multiplication `a * b * 2^{-64 N} mod m`.
///
/// Uses the CIOS method with two spill limbs, which stays correct for
/// moduli that occupy every bit of their limbs, e.g. `2^448 - 2^224 - 1`.
pub const fn ct_mont_mul<const N: usize>(
    a: &Uint<N>,
    b: &Uint<N>,
    m: &Uint<N>,
    inv: u64,
) -> Uint<N> {
    let mut t = [0u64; N];
    // Limbs N and N + 1 of the running accumulator. The topmost holds at
    // most one bit.
    let mut t_hi = 0u64;
    let mut t_top = 0u64;

    crate::const_for!((i in 0..N) {
        let mut carry = 0;
        crate::const_for!((j in 0..N) {
            (t[j], carry) =
                limb::carrying_mac(t[j], a.limbs[j], b.limbs[i], carry);
        });
        let (hi, c) = limb::adc(t_hi, carry, 0);
        t_hi = hi;
        t_top = c;

        // Zero the lowest limb and shift the accumulator down by one limb.
        let q = t[0].wrapping_mul(inv);
        let (_, mut carry) = limb::mac(t[0], q, m.limbs[0]);
        crate::const_for!((j in 1..N) {
            (t[j - 1], carry) =
                limb::carrying_mac(t[j], q, m.limbs[j], carry);
        });
        let (lo, c) = limb::adc(t_hi, carry, 0);
        t[N - 1] = lo;
        t_hi = t_top + c;
    });

    // The accumulator is below 2 * m, so one conditional subtraction
    // finishes the reduction. When the spill limb is set, the wrapping
    // subtraction below absorbs it.
    let r = Uint::new(t);
    let (diff, borrow) = r.ct_checked_sub(m);
    let mask = ((t_hi != 0 || !borrow) as u64).wrapping_neg();
    Uint::ct_select(&r, &diff, mask)
}

/// Represents an element of the prime field `F_p`, where `p == P::MODULUS`.
///
/// This type can represent elements in any field of size at most `N * 64`
/// bits for 64-bit systems.
///
/// Note that the implementation represents values in Montgomery form.
#[derive(Educe)]
#[educe(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fp<P: FpParams<N>, const N: usize> {
    /// Contains the element in Montgomery form for efficient
    /// multiplication. To convert an element to a [`Uint`], use
    /// [`Fp::into_bigint`] or `into`.
    residue: Uint<N>,
    #[doc(hidden)]
    phantom: PhantomData<P>,
}

impl<P: FpParams<N>, const N: usize> Fp<P, N> {
    /// The zero element of the field.
    pub const ZERO: Self = Self::new_unchecked(Uint::ZERO);
    /// The multiplicative identity of the field.
    pub const ONE: Self = Self::new_unchecked(P::R);

    /// Constructs a new field element from [`Uint`], converting it to
    /// Montgomery form.
    ///
    /// The argument does not have to be reduced; any integer that fits in
    /// the limbs yields the element congruent to it.
    #[must_use]
    pub const fn new(element: Uint<N>) -> Self {
        // Multiplication by R^2 both reduces and converts.
        let residue = ct_mont_mul(&element, &P::R2, &P::MODULUS, P::INV);
        Self::new_unchecked(residue)
    }

    /// Constructs a new field element from its underlying
    /// [`struct@Uint`] data type, assuming it is already in Montgomery
    /// form.
    #[must_use]
    pub const fn new_unchecked(residue: Uint<N>) -> Self {
        Self { residue, phantom: PhantomData }
    }

    /// The Montgomery representation of this element.
    #[must_use]
    pub const fn residue(&self) -> Uint<N> {
        self.residue
    }

    /// Returns `-self`, usable in constant context.
    #[must_use]
    pub const fn ct_neg(self) -> Self {
        Self::new_unchecked(ct_neg_mod(&self.residue, &P::MODULUS))
    }

}

impl<P: FpParams<N>, const N: usize> Zeroize for Fp<P, N> {
    fn zeroize(&mut self) {
        self.residue.zeroize();
    }
}

impl<P: FpParams<N>, const N: usize> Zero for Fp<P, N> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl<P: FpParams<N>, const N: usize> One for Fp<P, N> {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}

impl<P: FpParams<N>, const N: usize> AdditiveGroup for Fp<P, N> {
    type Scalar = Self;

    const ZERO: Self = Self::ZERO;

    fn double_in_place(&mut self) -> &mut Self {
        P::double_in_place(self);
        self
    }
}

impl<P: FpParams<N>, const N: usize> Field for Fp<P, N> {
    const ONE: Self = Self::ONE;

    fn square_in_place(&mut self) -> &mut Self {
        P::square_in_place(self);
        self
    }

    fn inverse(&self) -> Option<Self> {
        P::inverse(self)
    }

    fn cmov_assign(&mut self, other: &Self, mask: u64) {
        self.residue = Uint::ct_select(&self.residue, &other.residue, mask);
    }

    fn cneg_assign(&mut self, mask: u64) {
        let neg = self.ct_neg();
        self.cmov_assign(&neg, mask);
    }
}

impl<P: FpParams<N>, const N: usize> PrimeField for Fp<P, N> {
    type BigInt = Uint<N>;

    const MODULUS: Self::BigInt = P::MODULUS;
    const MODULUS_BIT_SIZE: usize = P::MODULUS.ct_num_bits();

    fn from_bigint(repr: Self::BigInt) -> Option<Self> {
        P::from_bigint(repr)
    }

    fn into_bigint(self) -> Self::BigInt {
        P::into_bigint(self)
    }
}

impl<P: FpParams<N>, const N: usize> From<Uint<N>> for Fp<P, N> {
    /// Converts `Uint<N>` into `Fp<P, N>`, reducing it if necessary.
    fn from(repr: Uint<N>) -> Self {
        Fp::new(repr)
    }
}

impl<P: FpParams<N>, const N: usize> From<Fp<P, N>> for Uint<N> {
    fn from(fp: Fp<P, N>) -> Self {
        fp.into_bigint()
    }
}

macro_rules! impl_fp_from_primitive {
    ($int:ty) => {
        impl<P: FpParams<N>, const N: usize> From<$int> for Fp<P, N> {
            fn from(value: $int) -> Self {
                Fp::new(Uint::from(value))
            }
        }
    };
}

impl_fp_from_primitive!(u8);
impl_fp_from_primitive!(u16);
impl_fp_from_primitive!(u32);
impl_fp_from_primitive!(u64);
impl_fp_from_primitive!(u128);

impl<P: FpParams<N>, const N: usize> From<bool> for Fp<P, N> {
    fn from(value: bool) -> Self {
        if value {
            Self::ONE
        } else {
            Self::ZERO
        }
    }
}

impl<P: FpParams<N>, const N: usize> Neg for Fp<P, N> {
    type Output = Self;

    fn neg(mut self) -> Self {
        P::neg_in_place(&mut self);
        self
    }
}

impl<P: FpParams<N>, const N: usize> AddAssign<&Fp<P, N>> for Fp<P, N> {
    fn add_assign(&mut self, other: &Self) {
        P::add_assign(self, other);
    }
}

impl<P: FpParams<N>, const N: usize> SubAssign<&Fp<P, N>> for Fp<P, N> {
    fn sub_assign(&mut self, other: &Self) {
        P::sub_assign(self, other);
    }
}

impl<P: FpParams<N>, const N: usize> MulAssign<&Fp<P, N>> for Fp<P, N> {
    fn mul_assign(&mut self, other: &Self) {
        P::mul_assign(self, other);
    }
}

impl<P: FpParams<N>, const N: usize> DivAssign<&Fp<P, N>> for Fp<P, N> {
    /// Computes `self *= other.inverse()`.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    fn div_assign(&mut self, other: &Self) {
        let inverse = other.inverse().expect("should not divide by zero");
        P::mul_assign(self, &inverse);
    }
}

impl<P: FpParams<N>, const N: usize> AddAssign<Fp<P, N>> for Fp<P, N> {
    fn add_assign(&mut self, other: Self) {
        *self += &other;
    }
}

impl<P: FpParams<N>, const N: usize> SubAssign<Fp<P, N>> for Fp<P, N> {
    fn sub_assign(&mut self, other: Self) {
        *self -= &other;
    }
}

impl<P: FpParams<N>, const N: usize> MulAssign<Fp<P, N>> for Fp<P, N> {
    fn mul_assign(&mut self, other: Self) {
        *self *= &other;
    }
}

impl<P: FpParams<N>, const N: usize> DivAssign<Fp<P, N>> for Fp<P, N> {
    fn div_assign(&mut self, other: Self) {
        *self /= &other;
    }
}

impl<P: FpParams<N>, const N: usize> Add<&Fp<P, N>> for Fp<P, N> {
    type Output = Self;

    fn add(mut self, other: &Self) -> Self {
        self += other;
        self
    }
}

impl<P: FpParams<N>, const N: usize> Sub<&Fp<P, N>> for Fp<P, N> {
    type Output = Self;

    fn sub(mut self, other: &Self) -> Self {
        self -= other;
        self
    }
}

impl<P: FpParams<N>, const N: usize> Mul<&Fp<P, N>> for Fp<P, N> {
    type Output = Self;

    fn mul(mut self, other: &Self) -> Self {
        self *= other;
        self
    }
}

impl<P: FpParams<N>, const N: usize> Div<&Fp<P, N>> for Fp<P, N> {
    type Output = Self;

    fn div(mut self, other: &Self) -> Self {
        self /= other;
        self
    }
}

impl<P: FpParams<N>, const N: usize> Add<Fp<P, N>> for Fp<P, N> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self + &other
    }
}

impl<P: FpParams<N>, const N: usize> Sub<Fp<P, N>> for Fp<P, N> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self - &other
    }
}

impl<P: FpParams<N>, const N: usize> Mul<Fp<P, N>> for Fp<P, N> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self * &other
    }
}

impl<P: FpParams<N>, const N: usize> Div<Fp<P, N>> for Fp<P, N> {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        self / &other
    }
}

impl<P: FpParams<N>, const N: usize> Sum<Fp<P, N>> for Fp<P, N> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a, P: FpParams<N>, const N: usize> Sum<&'a Fp<P, N>> for Fp<P, N> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<P: FpParams<N>, const N: usize> Product<Fp<P, N>> for Fp<P, N> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Mul::mul)
    }
}

impl<'a, P: FpParams<N>, const N: usize> Product<&'a Fp<P, N>> for Fp<P, N> {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl<P: FpParams<N>, const N: usize> Ord for Fp<P, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.into_bigint().cmp(&other.into_bigint())
    }
}

impl<P: FpParams<N>, const N: usize> PartialOrd for Fp<P, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: FpParams<N>, const N: usize> Display for Fp<P, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.into_bigint())
    }
}

impl<P: FpParams<N>, const N: usize> Debug for Fp<P, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self.into_bigint())
    }
}

/// This macro converts a string base-10 number to a field element.
#[macro_export]
macro_rules! fp_from_num {
    ($num:literal) => {
        $crate::field::fp::Fp::new($crate::arithmetic::uint::from_str_radix(
            $num, 10,
        ))
    };
}

/// This macro converts a string hex number to a field element.
#[macro_export]
macro_rules! fp_from_hex {
    ($num:literal) => {
        $crate::field::fp::Fp::new($crate::arithmetic::uint::from_str_hex(
            $num,
        ))
    };
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use proptest::prelude::*;

    use super::*;
    use crate::{
        arithmetic::{uint::U256, BigInteger},
        from_num,
    };

    type Field64 = Fp64<Fp64Param>;

    struct Fp64Param;
    impl FpParams<LIMBS_64> for Fp64Param {
        const MODULUS: Uint<LIMBS_64> = from_num!("1000003");
    }

    const MODULUS: i128 = 1000003;

    fn field_element(num: i128) -> Field64 {
        Fp64::new(Uint::from_u64(num.rem_euclid(MODULUS) as u64))
    }

    #[test]
    fn add() {
        let a = field_element(10);
        let b = field_element(MODULUS - 1);
        assert_eq!(field_element(9), a + b);
        assert_eq!(field_element(20), a.double());
    }

    #[test]
    fn sub_and_neg() {
        let a = field_element(10);
        let b = field_element(25);
        assert_eq!(field_element(MODULUS - 15), a - b);
        assert_eq!(field_element(-10), -a);
        assert_eq!(Field64::ZERO, a - a);
    }

    #[test]
    fn mul_and_square() {
        let a = field_element(1 << 21);
        let b = field_element(1 << 22);
        assert_eq!(field_element((1 << 43) % MODULUS), a * b);
        assert_eq!(field_element((1 << 42) % MODULUS), a.square());
    }

    #[test]
    fn inverse_round_trips() {
        assert_eq!(None, Field64::ZERO.inverse());
        for num in [1, 2, 12345, MODULUS - 1] {
            let a = field_element(num);
            let inv = a.inverse().unwrap();
            assert_eq!(Field64::ONE, a * inv);
        }
    }

    #[test]
    fn pow_matches_repeated_mul() {
        let a = field_element(7);
        let mut expected = Field64::ONE;
        for exp in 0u32..20 {
            assert_eq!(expected, a.pow(exp));
            expected *= a;
        }
    }

    #[test]
    fn new_reduces_unreduced_input() {
        let a = Fp64::<Fp64Param>::new(Uint::from_u64(u64::MAX));
        let expected = field_element((u64::MAX % (MODULUS as u64)) as i128);
        assert_eq!(expected, a);
    }

    #[test]
    fn bigint_round_trip() {
        let a = field_element(987654);
        let repr = a.into_bigint();
        assert_eq!(Uint::from_u64(987654), repr);
        assert_eq!(Some(a), Field64::from_bigint(repr));
        assert_eq!(None, Field64::from_bigint(Fp64Param::MODULUS));
    }

    #[test]
    fn conditional_ops() {
        let mut a = field_element(3);
        let b = field_element(5);
        a.cmov_assign(&b, 0);
        assert_eq!(field_element(3), a);
        a.cmov_assign(&b, u64::MAX);
        assert_eq!(field_element(5), a);
        a.cneg_assign(u64::MAX);
        assert_eq!(field_element(-5), a);
        a.cneg_assign(0);
        assert_eq!(field_element(-5), a);
    }

    // The base field of curve25519, which fills 255 bits of its four
    // limbs.
    type Field25519 = Fp256<Fq25519Param>;

    struct Fq25519Param;
    impl FpParams<LIMBS_256> for Fq25519Param {
        const MODULUS: Uint<LIMBS_256> = from_num!("57896044618658097711785492504343953926634992332820282019728792003956564819949");
    }

    fn modulus_big() -> BigUint {
        BigUint::from_bytes_le(&Fq25519Param::MODULUS.into_bytes_le())
    }

    fn to_big(a: Field25519) -> BigUint {
        BigUint::from_bytes_le(&a.into_bigint().into_bytes_le())
    }

    prop_compose! {
        fn arb_element()(bytes: [u8; 32]) -> (Field25519, BigUint) {
            let raw = U256::ct_from_le_slice(&bytes);
            let elem = Field25519::new(raw);
            let big = BigUint::from_bytes_le(&bytes) % modulus_big();
            (elem, big)
        }
    }

    proptest! {
        #[test]
        fn mul_matches_bigint((a, a_big) in arb_element(), (b, b_big) in arb_element()) {
            prop_assert_eq!(to_big(a * b), a_big * b_big % modulus_big());
        }

        #[test]
        fn add_sub_matches_bigint((a, a_big) in arb_element(), (b, b_big) in arb_element()) {
            let p = modulus_big();
            prop_assert_eq!(to_big(a + b), (&a_big + &b_big) % &p);
            prop_assert_eq!(to_big(a - b), (&p + &a_big - &b_big) % &p);
        }

        #[test]
        fn inverse_matches_bigint((a, a_big) in arb_element()) {
            prop_assume!(!a.is_zero());
            let inv = a.inverse().unwrap();
            prop_assert_eq!((to_big(inv) * a_big) % modulus_big(), BigUint::from(1u8));
        }

        #[test]
        fn lenient_new_reduces((_, a_big) in arb_element(), high: u8) {
            // Force the top bit so the raw value exceeds the modulus.
            let mut bytes = a_big.to_bytes_le();
            bytes.resize(32, 0);
            bytes[31] |= 0x80 | high;
            let elem = Field25519::new(U256::ct_from_le_slice(&bytes));
            let expected = BigUint::from_bytes_le(&bytes) % modulus_big();
            prop_assert_eq!(to_big(elem), expected);
        }
    }
}
