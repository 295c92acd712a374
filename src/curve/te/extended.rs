use core::{
    fmt::{Debug, Display, Formatter},
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use educe::Educe;
use num_traits::Zero;
use zeroize::Zeroize;

use super::{Affine, Precomp, TECurveConfig};
use crate::{
    bits::BitIteratorBE,
    curve::batch_inversion,
    field::{group::AdditiveGroup, Field},
};

/// A point on a twisted Edwards curve in extended homogeneous coordinates
/// `(X : Y : T : Z)`, where `x = X/Z`, `y = Y/Z` and `T = XY/Z`.
///
/// The formulas below are the HWCD ones, which are complete when `a` is a
/// square and `d` is a non-square in the base field. Both supported curves
/// satisfy this, so additions have no exceptional cases.
#[derive(Educe)]
#[educe(Copy, Clone)]
#[must_use]
pub struct Extended<P: TECurveConfig> {
    /// `X` coordinate of the point.
    pub x: P::BaseField,
    /// `Y` coordinate of the point.
    pub y: P::BaseField,
    /// `T = XY/Z` coordinate of the point.
    pub t: P::BaseField,
    /// `Z` coordinate of the point.
    pub z: P::BaseField,
}

impl<P: TECurveConfig> Display for Extended<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.normalize())
    }
}

impl<P: TECurveConfig> Debug for Extended<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self.normalize())
    }
}

impl<P: TECurveConfig> PartialEq for Extended<P> {
    fn eq(&self, other: &Self) -> bool {
        // x1/z1 == x2/z2 <=> x1 * z2 == x2 * z1
        self.x * other.z == other.x * self.z
            && self.y * other.z == other.y * self.z
    }
}

impl<P: TECurveConfig> Eq for Extended<P> {}

impl<P: TECurveConfig> Extended<P> {
    /// Constructs a new point without checking the coordinates.
    ///
    /// The caller must guarantee that the point is on the curve and that
    /// `t == x * y / z`.
    pub const fn new_unchecked(
        x: P::BaseField,
        y: P::BaseField,
        t: P::BaseField,
        z: P::BaseField,
    ) -> Self {
        Self { x, y, t, z }
    }

    /// The identity of the group.
    pub const fn zero() -> Self {
        Self::new_unchecked(
            P::BaseField::ZERO,
            P::BaseField::ONE,
            P::BaseField::ZERO,
            P::BaseField::ONE,
        )
    }

    /// Is this point the identity?
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y == self.z
    }

    /// Checks the projective curve equation
    /// `(a * X^2 + Y^2) = Z^2 + d * T^2` together with the coordinate
    /// consistency `X * Y = T * Z`.
    pub fn is_on_curve(&self) -> bool {
        let lhs = P::mul_by_a(self.x.square()) + self.y.square();
        let rhs = self.z.square() + P::COEFF_D * self.t.square();
        lhs == rhs && self.x * self.y == self.t * self.z
    }

    /// Doubles `self` in place.
    pub fn double_in_place(&mut self) -> &mut Self {
        // dbl-2008-hwcd
        let a = self.x.square();
        let b = self.y.square();
        let c = self.z.square().double();
        let d = P::mul_by_a(a);
        let e = (self.x + self.y).square() - a - b;
        let g = d + b;
        let f = g - c;
        let h = d - b;

        self.x = e * f;
        self.y = g * h;
        self.t = e * h;
        self.z = f * g;
        self
    }

    /// Returns the double of `self`.
    pub fn double(&self) -> Self {
        let mut copy = *self;
        copy.double_in_place();
        copy
    }

    /// Adds a point in precomputed affine form to `self` in place.
    pub fn add_mixed_in_place(&mut self, other: &Precomp<P>) {
        // madd-2008-hwcd with z2 = 1 and the d * x2 * y2 product cached
        let a = self.x * other.x;
        let b = self.y * other.y;
        let c = self.t * other.xyd;
        let d = self.z;
        let e = (self.x + self.y) * (other.x + other.y) - a - b;
        let f = d - c;
        let g = d + c;
        let h = b - P::mul_by_a(a);

        self.x = e * f;
        self.y = g * h;
        self.t = e * h;
        self.z = f * g;
    }

    /// Returns `self + other` for a precomputed point.
    pub fn add_mixed(&self, other: &Precomp<P>) -> Self {
        let mut copy = *self;
        copy.add_mixed_in_place(other);
        copy
    }

    /// Returns `self - other` for a precomputed point.
    pub fn sub_mixed(&self, other: &Precomp<P>) -> Self {
        self.add_mixed(&-*other)
    }

    /// Computes `scalar * self` with a double-and-add ladder.
    ///
    /// Runs in time variable in `scalar`, so it must only be used with
    /// public values.
    pub fn mul_bigint(&self, scalar: impl BitIteratorBE) -> Self {
        let mut res = Self::zero();
        for bit in scalar.bit_be_trimmed_iter() {
            res.double_in_place();
            if bit {
                res += self;
            }
        }
        res
    }

    /// Converts the point to affine coordinates with a single field
    /// inversion.
    pub fn normalize(&self) -> Affine<P> {
        match self.z.inverse() {
            // A zero denominator cannot arise from curve points.
            None => Affine::zero(),
            Some(z_inv) => Affine::new_unchecked(
                self.x * z_inv,
                self.y * z_inv,
            ),
        }
    }

    /// Converts a batch of points to affine coordinates, sharing one field
    /// inversion between all of them.
    pub fn batch_normalize(points: &[Self]) -> Vec<Affine<P>> {
        let mut zs: Vec<P::BaseField> =
            points.iter().map(|p| p.z).collect();
        batch_inversion(&mut zs);
        points
            .iter()
            .zip(&zs)
            .map(|(p, z_inv)| {
                Affine::new_unchecked(p.x * z_inv, p.y * z_inv)
            })
            .collect()
    }
}

impl<P: TECurveConfig> From<Affine<P>> for Extended<P> {
    fn from(p: Affine<P>) -> Self {
        Self::new_unchecked(p.x, p.y, p.x * p.y, P::BaseField::ONE)
    }
}

impl<P: TECurveConfig> Default for Extended<P> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: TECurveConfig> Zero for Extended<P> {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        self.is_zero()
    }
}

impl<P: TECurveConfig> Zeroize for Extended<P> {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
        self.t.zeroize();
        self.z.zeroize();
    }
}

impl<P: TECurveConfig> Neg for Extended<P> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.x = -self.x;
        self.t = -self.t;
        self
    }
}

impl<P: TECurveConfig> AddAssign<&Extended<P>> for Extended<P> {
    fn add_assign(&mut self, other: &Self) {
        // add-2008-hwcd
        let a = self.x * other.x;
        let b = self.y * other.y;
        let c = P::COEFF_D * self.t * other.t;
        let d = self.z * other.z;
        let e = (self.x + self.y) * (other.x + other.y) - a - b;
        let f = d - c;
        let g = d + c;
        let h = b - P::mul_by_a(a);

        self.x = e * f;
        self.y = g * h;
        self.t = e * h;
        self.z = f * g;
    }
}

impl<P: TECurveConfig> AddAssign<Extended<P>> for Extended<P> {
    fn add_assign(&mut self, other: Self) {
        *self += &other;
    }
}

impl<P: TECurveConfig> Add<&Extended<P>> for Extended<P> {
    type Output = Self;

    fn add(mut self, other: &Self) -> Self {
        self += other;
        self
    }
}

impl<P: TECurveConfig> Add<Extended<P>> for Extended<P> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self + &other
    }
}

impl<P: TECurveConfig> SubAssign<&Extended<P>> for Extended<P> {
    fn sub_assign(&mut self, other: &Self) {
        *self += &(-*other);
    }
}

impl<P: TECurveConfig> SubAssign<Extended<P>> for Extended<P> {
    fn sub_assign(&mut self, other: Self) {
        *self -= &other;
    }
}

impl<P: TECurveConfig> Sub<&Extended<P>> for Extended<P> {
    type Output = Self;

    fn sub(mut self, other: &Self) -> Self {
        self -= other;
        self
    }
}

impl<P: TECurveConfig> Sub<Extended<P>> for Extended<P> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self - &other
    }
}
