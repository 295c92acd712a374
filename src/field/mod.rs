//! This module provides a generic interface and constant-function
//! implementations for finite fields.

use core::{
    fmt::{Debug, Display},
    hash::Hash,
    iter::Product,
    ops::{Div, DivAssign, Neg},
};

use num_traits::{One, Zero};
use zeroize::Zeroize;

use crate::bits::BitIteratorBE;

#[macro_use]
pub mod fp;
pub mod group;
pub mod prime;

pub use group::AdditiveGroup;
pub use prime::PrimeField;

/// Defines an abstract field.
/// Types implementing [`Field`] support common field operations such as
/// addition, subtraction, multiplication, and inverses.
pub trait Field:
    'static
    + Copy
    + Clone
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + Eq
    + Zero
    + One
    + Ord
    + Neg<Output = Self>
    + Zeroize
    + Sized
    + Hash
    + AdditiveGroup<Scalar = Self>
    + Div<Self, Output = Self>
    + DivAssign<Self>
    + for<'a> Div<&'a Self, Output = Self>
    + for<'a> DivAssign<&'a Self>
    + Product<Self>
    + for<'a> Product<&'a Self>
    + From<u128>
    + From<u64>
    + From<u32>
    + From<u16>
    + From<u8>
    + From<bool>
{
    /// The multiplicative identity of the field.
    const ONE: Self;

    /// Returns `self * self`.
    #[must_use]
    fn square(&self) -> Self {
        let mut result = *self;
        result.square_in_place();
        result
    }

    /// Squares `self` in place.
    fn square_in_place(&mut self) -> &mut Self;

    /// Computes the multiplicative inverse of `self` if `self` is nonzero.
    #[must_use]
    fn inverse(&self) -> Option<Self>;

    /// Replaces `self` with `other` when `mask` is all ones and keeps
    /// `self` when `mask` is zero.
    ///
    /// `mask` must be either `0` or `u64::MAX`.
    fn cmov_assign(&mut self, other: &Self, mask: u64);

    /// Negates `self` when `mask` is all ones and keeps it when `mask` is
    /// zero.
    ///
    /// `mask` must be either `0` or `u64::MAX`.
    fn cneg_assign(&mut self, mask: u64);

    /// Sets `self` to `self`'s inverse if it exists. Otherwise it is a no-op.
    fn inverse_in_place(&mut self) -> Option<&mut Self> {
        if let Some(inverse) = self.inverse() {
            *self = inverse;
            Some(self)
        } else {
            None
        }
    }

    /// Returns `self^exp`, where `exp` is an integer.
    ///
    /// NOTE: Consumers should pass `exp`'s type with smaller bit size
    /// possible. E.g., for `pow(12)` u8 type is small enough to represent
    /// `12`.
    #[must_use]
    fn pow(&self, exp: impl BitIteratorBE) -> Self {
        let mut res = Self::one();

        for has_bit in exp.bit_be_trimmed_iter() {
            res.square_in_place();

            if has_bit {
                res *= self;
            }
        }

        res
    }
}
