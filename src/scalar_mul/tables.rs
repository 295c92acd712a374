//! Precomputed generator tables.
//!
//! Building the tables costs a few thousand curve operations, so they are
//! computed once per process and shared behind a [`std::sync::OnceLock`]
//! by the signature engines.

use crate::{
    curve::te::{Extended, Precomp, TECurveConfig},
    scalar_mul::ct_eq_mask,
};

/// Tables of generator multiples shared by signing and verification.
pub struct PrecomputedTables<P: TECurveConfig> {
    /// Signed-comb entries, `COMB_BLOCKS` runs of `2^(COMB_TEETH - 1)`
    /// points each.
    comb: Vec<Precomp<P>>,
    /// Odd multiples `1, 3, ...` of the generator `B`.
    wnaf_base: Vec<Precomp<P>>,
    /// Odd multiples of `2^SPLIT_SHIFT * B`.
    wnaf_shifted: Vec<Precomp<P>>,
}

impl<P: TECurveConfig> PrecomputedTables<P> {
    /// Number of entries of one comb block.
    const COMB_STRIDE: usize = 1 << (P::COMB_TEETH - 1);

    /// Builds the tables by repeated doubling from the generator.
    #[must_use]
    pub fn build() -> Self {
        let blocks = P::COMB_BLOCKS;
        let teeth = P::COMB_TEETH;

        // One point per comb tooth: tooth g holds 2^(g * COMB_SPACING) B.
        let mut tooth_points = Vec::with_capacity(blocks * teeth);
        let mut cursor = Extended::from(P::GENERATOR);
        for _ in 0..blocks * teeth {
            tooth_points.push(cursor);
            for _ in 0..P::COMB_SPACING {
                cursor.double_in_place();
            }
        }

        // Entry `idx` of block `b` adds the block's teeth with the signs
        // given by the bits of `idx`; the topmost tooth is always
        // positive, its sign is applied at lookup time.
        let mut comb = Vec::with_capacity(blocks * Self::COMB_STRIDE);
        for b in 0..blocks {
            let block = &tooth_points[b * teeth..(b + 1) * teeth];
            for idx in 0..Self::COMB_STRIDE {
                let mut entry = block[teeth - 1];
                for (tooth, point) in block[..teeth - 1].iter().enumerate() {
                    if (idx >> tooth) & 1 == 1 {
                        entry += point;
                    } else {
                        entry -= point;
                    }
                }
                comb.push(entry);
            }
        }

        let window = 1 << (P::WNAF_WIDTH_BASE - 2);
        let wnaf_base = odd_multiples(&Extended::from(P::GENERATOR), window);

        let mut shifted = Extended::from(P::GENERATOR);
        for _ in 0..P::SPLIT_SHIFT {
            shifted.double_in_place();
        }
        let wnaf_shifted = odd_multiples(&shifted, window);

        // One shared inversion normalizes every table entry.
        let mut all = comb;
        all.extend_from_slice(&wnaf_base);
        all.extend_from_slice(&wnaf_shifted);
        let affine = Extended::batch_normalize(&all);

        let mut entries = affine.into_iter().map(Precomp::from);
        let comb = entries.by_ref().take(blocks * Self::COMB_STRIDE).collect();
        let wnaf_base = entries.by_ref().take(window).collect();
        let wnaf_shifted = entries.collect();

        Self { comb, wnaf_base, wnaf_shifted }
    }

    /// Looks up entry `index` of comb block `block` by scanning the whole
    /// block, in time independent of `index`.
    pub(crate) fn comb_lookup(&self, block: usize, index: u64) -> Precomp<P> {
        let start = block * Self::COMB_STRIDE;
        let mut out = Precomp::zero();
        for (j, entry) in
            self.comb[start..start + Self::COMB_STRIDE].iter().enumerate()
        {
            out.cmov_assign(entry, ct_eq_mask(j as u64, index));
        }
        out
    }

    /// Odd multiples of the generator for the verification wNAF.
    pub(crate) fn wnaf_base(&self) -> &[Precomp<P>] {
        &self.wnaf_base
    }

    /// Odd multiples of the shifted generator for the verification wNAF.
    pub(crate) fn wnaf_shifted(&self) -> &[Precomp<P>] {
        &self.wnaf_shifted
    }
}

/// Returns `[p, 3p, 5p, ...]` with `count` entries.
pub(crate) fn odd_multiples<P: TECurveConfig>(
    point: &Extended<P>,
    count: usize,
) -> Vec<Extended<P>> {
    let twice = point.double();
    let mut out = Vec::with_capacity(count);
    let mut cursor = *point;
    for _ in 0..count {
        out.push(cursor);
        cursor += &twice;
    }
    out
}
