//! Operations on scalars modulo the prime subgroup order.
//!
//! Besides plain field arithmetic, which [`crate::field::fp::Fp`] already
//! provides, signatures need a few special scalar routines: reduction of
//! oversized hash outputs, recoding into signed digits for the fixed-base
//! comb, and lattice basis reduction for fast verification.

pub mod basis;
pub mod wnaf;

use educe::Educe;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    arithmetic::uint::Uint,
    field::{
        fp::{Fp, FpParams},
        PrimeField,
    },
};

/// A scalar derived from secret key material.
///
/// Secret scalars only ever feed the constant-time comb, which is the
/// single multiplication entry point accepting this type; the
/// variable-time routines take plain field elements and integers, so a
/// secret cannot reach them by accident. The wrapped value is zeroized
/// on drop.
#[derive(Educe)]
#[educe(Clone, PartialEq)]
pub struct SecretScalar<P: FpParams<N>, const N: usize>(Fp<P, N>);

impl<P: FpParams<N>, const N: usize> SecretScalar<P, N> {
    /// Wraps a freshly derived secret scalar.
    #[must_use]
    pub const fn new(scalar: Fp<P, N>) -> Self {
        Self(scalar)
    }

    /// Computes `self * factor + addend`.
    ///
    /// This is the response half of a signature, which is published, so
    /// the result is returned as a plain field element.
    #[must_use]
    pub fn mul_add(&self, factor: &Fp<P, N>, addend: &Self) -> Fp<P, N> {
        self.0 * *factor + addend.0
    }
}

impl<P: FpParams<N>, const N: usize> Zeroize for SecretScalar<P, N> {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl<P: FpParams<N>, const N: usize> Drop for SecretScalar<P, N> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<P: FpParams<N>, const N: usize> ZeroizeOnDrop for SecretScalar<P, N> {}

/// Reduces a little-endian byte string of up to `M * 8` bytes modulo the
/// order described by `P`.
///
/// `W` must describe the same modulus as `P`, widened to `M` limbs. The
/// input is loaded verbatim and reduced with one Montgomery round trip in
/// the wide field, which accepts any residue that fits its limbs.
pub fn reduce_wide<W, P, const M: usize, const N: usize>(
    bytes: &[u8],
) -> Fp<P, N>
where
    W: FpParams<M>,
    P: FpParams<N>,
{
    debug_assert_eq!(W::MODULUS, P::MODULUS.widen::<M>());

    let wide = Uint::<M>::ct_from_le_slice(bytes);
    let reduced = Fp::<W, M>::new(wide).into_bigint().truncate::<N>();
    Fp::new(reduced)
}

/// Recodes a secret scalar for the signed-digit comb.
///
/// Returns `z` such that the scalar is congruent to
/// `sum_{i < bits} (2 * z_i - 1) * 2^i` modulo the order, where `z_i` is
/// bit `i` of `z` for `i < bits - 1` and the topmost digit is an implicit
/// one (it may not fit the limbs of `z`, so the comb supplies it). The
/// congruence holds because an even scalar is first replaced by
/// `scalar + order`, which is odd, and every odd `m < 2^bits` equals the
/// signed-digit sum for `z = (m >> 1) + 2^(bits - 1)`.
///
/// Runs in time constant in the scalar value.
pub fn to_signed_digits<P, const N: usize>(
    scalar: &SecretScalar<P, N>,
    bits: usize,
) -> Uint<N>
where
    P: FpParams<N>,
{
    debug_assert!(P::MODULUS.ct_num_bits() < bits);

    let s = scalar.0.into_bigint();
    let shifted = s.ct_wrapping_add(&P::MODULUS);
    let odd_mask = (s.limbs[0] & 1).wrapping_neg();
    let mut z = Uint::ct_select(&shifted, &s, odd_mask);
    z.div2_assign();
    z
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use proptest::prelude::*;

    use super::*;
    use crate::{
        arithmetic::{
            uint::{U256, U512},
            BigInteger,
        },
        field::{
            fp::{Fp256, Fp512, LIMBS_256, LIMBS_512},
            PrimeField,
        },
        from_num,
    };

    type Fr = Fp256<FrParam>;

    struct FrParam;
    impl FpParams<LIMBS_256> for FrParam {
        const MODULUS: U256 = from_num!("7237005577332262213973186563042994240857116359379907606001950938285454250989");
    }

    struct FrWideParam;
    impl FpParams<LIMBS_512> for FrWideParam {
        const MODULUS: U512 = FrParam::MODULUS.widen();
    }

    fn order_big() -> BigUint {
        BigUint::from_bytes_le(&FrParam::MODULUS.into_bytes_le())
    }

    proptest! {
        #[test]
        fn reduce_wide_matches_bigint(bytes in prop::collection::vec(any::<u8>(), 0..=64)) {
            let reduced: Fr =
                reduce_wide::<FrWideParam, FrParam, LIMBS_512, LIMBS_256>(
                    &bytes,
                );
            let expected = BigUint::from_bytes_le(&bytes) % order_big();
            let actual =
                BigUint::from_bytes_le(&reduced.into_bigint().into_bytes_le());
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn signed_digits_recombine(bytes: [u8; 32]) {
            let scalar = Fr::new(U256::ct_from_le_slice(&bytes));
            let z = to_signed_digits(&SecretScalar::new(scalar), 256);

            // sum of (2 * z_i - 1) * 2^i must equal the scalar mod the
            // order.
            let l = order_big();
            let mut acc = BigUint::from(0u8);
            for i in (0..256).rev() {
                acc = (acc * 2u8) % &l;
                // Digit 255 is the implicit one the comb supplies.
                if z.get_bit(i) || i == 255 {
                    acc = (acc + 2u8) % &l;
                }
                // the -1 part of every digit
                acc = (acc + &l - 1u8) % &l;
            }
            let expected = BigUint::from_bytes_le(
                &scalar.into_bigint().into_bytes_le(),
            );
            prop_assert_eq!(acc, expected);
        }
    }
}
