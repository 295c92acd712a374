//! Fixed-size big-integer types and the primitive limb arithmetic they are
//! built from.

use core::fmt::Debug;

use zeroize::Zeroize;

pub mod limb;
pub mod signed;
#[macro_use]
pub mod uint;

pub use limb::{Limb, Limbs, WideLimb};
pub use uint::{
    from_str_hex, from_str_radix, Uint, U128, U256, U448, U512, U64, U896,
    U960,
};

/// Defines a fixed-width little-endian big integer.
pub trait BigInteger:
    'static
    + Copy
    + Clone
    + Debug
    + Default
    + Eq
    + Ord
    + Send
    + Sized
    + Sync
    + Zeroize
{
    /// Number of `u64` limbs representing `Self`.
    const NUM_LIMBS: usize;

    /// Number of bytes in the integer.
    const BYTES: usize = Self::NUM_LIMBS * 8;

    /// Returns true if this number is odd.
    fn is_odd(&self) -> bool;

    /// Returns true if this number is even.
    fn is_even(&self) -> bool;

    /// Returns true if this number is zero.
    fn is_zero(&self) -> bool;

    /// Computes the minimum number of bits needed to encode this number.
    fn num_bits(&self) -> usize;

    /// Computes the `i`-th bit of `self`.
    fn get_bit(&self, i: usize) -> bool;

    /// Creates a big integer from little-endian bytes.
    ///
    /// # Panics
    ///
    /// Panics if the number of bytes is not equal to `Self::BYTES`.
    fn from_bytes_le(bytes: &[u8]) -> Self;

    /// Converts the big integer to little-endian bytes.
    fn into_bytes_le(self) -> Vec<u8>;
}
