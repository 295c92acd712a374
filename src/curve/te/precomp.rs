use core::ops::Neg;

use educe::Educe;

use super::{Affine, TECurveConfig};
use crate::field::{group::AdditiveGroup, Field};

/// A normalized point prepared for mixed addition, caching the product
/// `d * x * y` used by the HWCD mixed formulas.
#[derive(Educe)]
#[educe(Copy, Clone, PartialEq, Eq)]
#[must_use]
pub struct Precomp<P: TECurveConfig> {
    /// `x` coordinate of the point.
    pub x: P::BaseField,
    /// `y` coordinate of the point.
    pub y: P::BaseField,
    /// Cached `d * x * y` product.
    pub xyd: P::BaseField,
}

impl<P: TECurveConfig> Precomp<P> {
    /// The precomputed form of the identity.
    pub const fn zero() -> Self {
        Self {
            x: P::BaseField::ZERO,
            y: P::BaseField::ONE,
            xyd: P::BaseField::ZERO,
        }
    }

    /// Replaces `self` with `other` when `mask` is all ones and keeps
    /// `self` when `mask` is zero.
    pub fn cmov_assign(&mut self, other: &Self, mask: u64) {
        self.x.cmov_assign(&other.x, mask);
        self.y.cmov_assign(&other.y, mask);
        self.xyd.cmov_assign(&other.xyd, mask);
    }

    /// Negates `self` when `mask` is all ones and keeps it when `mask` is
    /// zero.
    pub fn cneg_assign(&mut self, mask: u64) {
        self.x.cneg_assign(mask);
        self.xyd.cneg_assign(mask);
    }
}

impl<P: TECurveConfig> From<Affine<P>> for Precomp<P> {
    fn from(p: Affine<P>) -> Self {
        Self { x: p.x, y: p.y, xyd: P::COEFF_D * p.x * p.y }
    }
}

impl<P: TECurveConfig> Neg for Precomp<P> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.x = -self.x;
        self.xyd = -self.xyd;
        self
    }
}
