//! This module provides common operations to work with elliptic curves.

use std::vec::Vec;

use crate::field::{prime::PrimeField, Field};

pub mod te;

/// [`CurveConfig`] bundles together the types that are common to every
/// model of the given curve, namely the [`Self::BaseField`] over which the
/// curve is defined, and the [`Self::ScalarField`] defined by the
/// prime-order subgroup of the curve.
pub trait CurveConfig: Send + Sync + Sized + 'static {
    /// Base field that the curve is defined over.
    type BaseField: Field;
    /// Finite prime field corresponding to the prime-order subgroup of the
    /// curve group.
    type ScalarField: PrimeField;

    /// The cofactor of this curve.
    const COFACTOR: u64;

    /// Base-2 logarithm of [`Self::COFACTOR`]. The number of doublings
    /// that clear the cofactor.
    const COFACTOR_LOG2: u32;
}

/// Efficiently computes inverses of non-zero elements in the slice.
///
/// Uses Montgomery's trick to compute multiple inverses with fewer field
/// operations. Zero elements remain unchanged.
///
/// # Arguments
///
/// * `v` - Mutable slice of field elements for in-place inversion.
pub fn batch_inversion<F: Field>(v: &mut [F]) {
    // Montgomery's Trick and Fast Implementation of Masked AES
    // Genelle, Prouff and Quisquater
    // Section 3.2

    // First pass: compute [a, ab, abc, ...]
    let mut tmp = F::one();
    let prod: Vec<_> = v
        .iter()
        .filter(|f| !f.is_zero())
        .map(|f| {
            tmp *= f;
            tmp
        })
        .collect();

    // Invert `tmp`.
    let Some(inv) = tmp.inverse() else {
        // Every element is zero.
        return;
    };
    tmp = inv;

    // Second pass: iterate backwards to compute inverses
    for (f, s) in v
        .iter_mut()
        // Backwards
        .rev()
        // Ignore normalized elements
        .filter(|f| !f.is_zero())
        // Backwards, skip last element, fill in one for last term.
        .zip(prod.into_iter().rev().skip(1).chain(Some(F::one())))
    {
        // tmp := tmp * f; f := tmp * s = 1/f
        let new_tmp = tmp * *f;
        *f = tmp * s;
        tmp = new_tmp;
    }
}

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use super::*;
    use crate::{
        arithmetic::uint::U256,
        field::fp::{Fp256, FpParams, LIMBS_256},
        from_num,
    };

    type F = Fp256<FrParam>;

    struct FrParam;
    impl FpParams<LIMBS_256> for FrParam {
        const MODULUS: U256 = from_num!("7237005577332262213973186563042994240857116359379907606001950938285454250989");
    }

    proptest! {
        #[test]
        fn batch_inversion_matches_single(seeds in prop::collection::vec(any::<u64>(), 1..20)) {
            let mut v: Vec<F> =
                seeds.iter().map(|&s| F::from(s)).collect();
            let expected: Vec<F> = v
                .iter()
                .map(|f| {
                    if f.is_zero() {
                        *f
                    } else {
                        f.inverse().unwrap()
                    }
                })
                .collect();
            batch_inversion(&mut v);
            prop_assert_eq!(v, expected);
        }
    }
}
