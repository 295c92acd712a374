//! This module contains definitions for the [Twisted Edwards model] of the
//! curve.
//!
//! [Twisted Edwards model]: https://www.hyperelliptic.org/EFD/g1p/auto-twisted.html

mod affine;
pub use affine::*;

mod extended;
pub use extended::*;

mod precomp;
pub use precomp::*;

pub mod instance;

/// Constants and convenience functions
/// that define the [Twisted Edwards model] of the curve.
///
/// In this model, the curve equation is `a * x² + y² = 1 + d * x² * y²`, for
/// constants `a` and `d`.
///
/// [Twisted Edwards model]: https://www.hyperelliptic.org/EFD/g1p/auto-twisted.html
pub trait TECurveConfig: super::CurveConfig {
    /// Coefficient `a` of the curve equation.
    const COEFF_A: Self::BaseField;
    /// Coefficient `d` of the curve equation.
    const COEFF_D: Self::BaseField;
    /// Generator of the prime-order subgroup.
    const GENERATOR: Affine<Self>;

    /// Number of blocks in the signed-comb recoding used for fixed-base
    /// multiplication.
    const COMB_BLOCKS: usize;
    /// Number of teeth per comb block.
    const COMB_TEETH: usize;
    /// Distance in bits between consecutive teeth of a block.
    const COMB_SPACING: usize;

    /// Window width of the precomputed generator tables used during
    /// verification.
    const WNAF_WIDTH_BASE: usize;
    /// Bit position at which verification splits the response scalar into
    /// two halves, matching the shifted generator table.
    const SPLIT_SHIFT: usize;

    /// Helper method for computing `elem * Self::COEFF_A`.
    ///
    /// The default implementation should be overridden only if
    /// the product can be computed faster than standard field multiplication
    /// (eg: via negation if `COEFF_A == -1`, or a no-op if `COEFF_A == 1`).
    #[inline(always)]
    fn mul_by_a(elem: Self::BaseField) -> Self::BaseField {
        elem * Self::COEFF_A
    }

    /// Computes a square root of `elem` in the base field, if one exists.
    ///
    /// Which of the two roots is returned is not specified; callers select
    /// the one they need by sign.
    fn sqrt(elem: &Self::BaseField) -> Option<Self::BaseField>;
}
