//! Constant-time fixed-base multiplication with a signed comb.
//!
//! The scalar is recoded into signed bits, every group of `COMB_TEETH`
//! bits selects one precomputed entry per block, and `COMB_SPACING`
//! doublings stitch the rows together. Every lookup scans its whole table
//! and every row does the same work, so the sequence of operations does
//! not depend on the scalar.

use crate::{
    curve::te::{Extended, TECurveConfig},
    field::fp::{Fp, FpParams},
    scalar::{to_signed_digits, SecretScalar},
    scalar_mul::tables::PrecomputedTables,
};

/// Computes `scalar * B` for the curve generator `B`, in time constant in
/// the scalar value.
pub fn mul_base<P, S, const N: usize>(
    tables: &PrecomputedTables<P>,
    scalar: &SecretScalar<S, N>,
) -> Extended<P>
where
    P: TECurveConfig<ScalarField = Fp<S, N>>,
    S: FpParams<N>,
{
    let bits = P::COMB_BLOCKS * P::COMB_TEETH * P::COMB_SPACING;
    let z = to_signed_digits(scalar, bits);

    let teeth_mask = (1u64 << (P::COMB_TEETH - 1)) - 1;
    let mut acc = Extended::zero();
    for row in (0..P::COMB_SPACING).rev() {
        acc.double_in_place();
        for block in 0..P::COMB_BLOCKS {
            let mut word = 0u64;
            for tooth in 0..P::COMB_TEETH {
                let pos = row
                    + P::COMB_SPACING * (tooth + P::COMB_TEETH * block);
                // Position `bits - 1` holds the implicit top digit of the
                // recoding; it can sit past the limbs of `z`.
                let bit = z.ct_get_bit(pos) || pos == bits - 1;
                word |= (bit as u64) << tooth;
            }

            // The topmost tooth picks the sign: the table stores entries
            // with that tooth positive, the complement index gives the
            // negated entry.
            let positive = (word >> (P::COMB_TEETH - 1)) & 1;
            let positive_mask = positive.wrapping_neg();
            let index = (word ^ !positive_mask) & teeth_mask;

            let mut entry = tables.comb_lookup(block, index);
            entry.cneg_assign(!positive_mask);
            acc.add_mixed_in_place(&entry);
        }
    }

    assert!(acc.is_on_curve());
    acc
}
