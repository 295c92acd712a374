//! Variable-time multi-scalar multiplication for verification.
//!
//! Everything here operates on public data only: signature points, public
//! keys, and scalars recovered from them. That admits wNAF recodings and
//! data-dependent branches that the signing path must avoid.

use crate::{
    arithmetic::{
        signed::{abs, is_negative},
        uint::Uint,
    },
    curve::te::{Extended, Precomp, TECurveConfig},
    field::{
        fp::{Fp, FpParams},
        Field, PrimeField,
    },
    scalar::{basis::reduce_basis_vartime, wnaf::recode_wnaf},
    scalar_mul::tables::{odd_multiples, PrecomputedTables},
};

/// Per-call wNAF window width for points not covered by the static
/// tables.
const WNAF_WIDTH_POINT: u32 = 5;

/// Computes `n * point` through a wNAF recoding of `n`.
///
/// Runs in time variable in both inputs.
pub fn mul_vartime<P, S, const N: usize>(
    point: &Extended<P>,
    n: &Uint<N>,
) -> Extended<P>
where
    P: TECurveConfig<ScalarField = Fp<S, N>>,
    S: FpParams<N>,
{
    let mut digits = vec![0i8; N * 64];
    recode_wnaf(n, WNAF_WIDTH_POINT, &mut digits);
    let window = odd_multiples(point, 1 << (WNAF_WIDTH_POINT - 2));

    let mut acc = Extended::zero();
    for &digit in digits.iter().rev() {
        acc.double_in_place();
        if digit > 0 {
            acc += &window[(digit >> 1) as usize];
        } else if digit < 0 {
            acc -= &window[(-digit >> 1) as usize];
        }
    }
    acc
}

/// Decides whether `[s]B - R - [k]A` vanishes after clearing the
/// cofactor, which is the verification equation for a signature with
/// nonce point `R`, response `s` and challenge `k` against the public key
/// point `A`.
///
/// Instead of evaluating the equation directly, `k` is split into lattice
/// halves `c0 = k * c1 (mod L)` and the combination
/// `[s * c1]B - [c1]R - [c0]A` is evaluated with four half-length wNAF
/// streams, two of them against the precomputed generator tables.
///
/// Runs in time variable in every input.
pub fn verify_combination_vartime<P, S, const N: usize, const W: usize>(
    tables: &PrecomputedTables<P>,
    public: &Extended<P>,
    nonce: &Extended<P>,
    s: &Fp<S, N>,
    k: &Fp<S, N>,
) -> bool
where
    P: TECurveConfig<ScalarField = Fp<S, N>>,
    S: FpParams<N>,
{
    // A shortest lattice vector has squared norm around 2L, so one bit
    // above the order's size is always reachable and keeps both halves
    // within half-width.
    let max_norm_bits = S::MODULUS.ct_num_bits() as u32 + 1;
    let (c0, c1) = reduce_basis_vartime::<N, W>(
        &k.into_bigint(),
        &S::MODULUS,
        max_norm_bits,
    );

    // Fold the signs of c0 and c1 into the points and the response so
    // that all four scalar streams are non-negative.
    let (c0_abs, c0_negative) = abs(&c0);
    let p0 = if c0_negative { *public } else { -*public };

    let (c1_abs, _) = abs(&c1);
    let (p1, s_eff) =
        if is_negative(&c1) { (*nonce, -*s) } else { (-*nonce, *s) };

    // s' = s_eff * |c1| mod L, split to match the shifted table.
    let s_prime = (s_eff * Fp::<S, N>::new(c1_abs)).into_bigint();
    let s_hi = s_prime >> P::SPLIT_SHIFT as u32;
    let s_lo = s_prime
        .ct_wrapping_sub(&(s_hi << P::SPLIT_SHIFT as u32));

    let len = N * 64;
    let mut digits_lo = vec![0i8; len];
    let mut digits_hi = vec![0i8; len];
    let mut digits_c0 = vec![0i8; len];
    let mut digits_c1 = vec![0i8; len];
    let width_base = P::WNAF_WIDTH_BASE as u32;
    recode_wnaf(&s_lo, width_base, &mut digits_lo);
    recode_wnaf(&s_hi, width_base, &mut digits_hi);
    recode_wnaf(&c0_abs, WNAF_WIDTH_POINT, &mut digits_c0);
    recode_wnaf(&c1_abs, WNAF_WIDTH_POINT, &mut digits_c1);

    let window_p0 = odd_multiples(&p0, 1 << (WNAF_WIDTH_POINT - 2));
    let window_p1 = odd_multiples(&p1, 1 << (WNAF_WIDTH_POINT - 2));

    // Shared doublings across the four streams, skipping the all-zero
    // head.
    let top = (0..len)
        .rfind(|&i| {
            digits_lo[i] != 0
                || digits_hi[i] != 0
                || digits_c0[i] != 0
                || digits_c1[i] != 0
        });
    let Some(top) = top else {
        // All scalars are zero; only the identity combination remains.
        return true;
    };

    let mut acc = Extended::zero();
    for i in (0..=top).rev() {
        acc.double_in_place();
        apply_digit_mixed(&mut acc, digits_lo[i], tables.wnaf_base());
        apply_digit_mixed(&mut acc, digits_hi[i], tables.wnaf_shifted());
        apply_digit(&mut acc, digits_c0[i], &window_p0);
        apply_digit(&mut acc, digits_c1[i], &window_p1);
    }

    // Clearing the cofactor ignores any small-order component.
    for _ in 0..P::COFACTOR_LOG2 {
        acc.double_in_place();
    }
    acc.is_zero()
}

fn apply_digit_mixed<P: TECurveConfig>(
    acc: &mut Extended<P>,
    digit: i8,
    table: &[Precomp<P>],
) {
    if digit > 0 {
        acc.add_mixed_in_place(&table[(digit >> 1) as usize]);
    } else if digit < 0 {
        *acc = acc.sub_mixed(&table[(-digit >> 1) as usize]);
    }
}

fn apply_digit<P: TECurveConfig>(
    acc: &mut Extended<P>,
    digit: i8,
    window: &[Extended<P>],
) {
    if digit > 0 {
        *acc += &window[(digit >> 1) as usize];
    } else if digit < 0 {
        *acc -= &window[(-digit >> 1) as usize];
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{
        arithmetic::uint::U256,
        curve::te::instance::ed25519::Ed25519Config,
        field::fp::LIMBS_256,
        scalar::SecretScalar,
        scalar_mul::comb::mul_base,
    };

    type Fr = <Ed25519Config as crate::curve::CurveConfig>::ScalarField;

    #[test]
    fn mul_vartime_small_multiples() {
        let base = Extended::from(Ed25519Config::GENERATOR);
        for n in 0u64..50 {
            let expected = base.mul_bigint(n);
            let actual =
                mul_vartime::<Ed25519Config, _, LIMBS_256>(
                    &base,
                    &U256::from_u64(n),
                );
            assert_eq!(expected, actual);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn accepts_valid_combination(sk: [u8; 32], nk: [u8; 32], kk: [u8; 32]) {
            let tables = PrecomputedTables::<Ed25519Config>::build();
            let secret = Fr::new(U256::ct_from_le_slice(&sk));
            let nonce_scalar = Fr::new(U256::ct_from_le_slice(&nk));
            let k = Fr::new(U256::ct_from_le_slice(&kk));

            // Construct a valid equation: A = [secret]B,
            // R = [nonce_scalar]B, s = nonce_scalar + k * secret.
            let a = mul_base(&tables, &SecretScalar::new(secret));
            let r = mul_base(&tables, &SecretScalar::new(nonce_scalar));
            let s = nonce_scalar + k * secret;

            prop_assert!(verify_combination_vartime::<_, _, 4, 8>(
                &tables, &a, &r, &s, &k,
            ));

            // Any perturbation of s must fail.
            let bad = s + Fr::ONE;
            prop_assert!(!verify_combination_vartime::<_, _, 4, 8>(
                &tables, &a, &r, &bad, &k,
            ));
        }
    }
}
