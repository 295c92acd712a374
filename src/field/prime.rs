//! Prime field trait.

use crate::{arithmetic::BigInteger, field::Field};

/// Defines an abstract prime field.
/// I.e., the field of integers of prime modulus `Fp = {0, 1, ..., p - 1}`.
pub trait PrimeField: Field + From<Self::BigInt> + Into<Self::BigInt> {
    /// A `BigInteger` type that can represent elements of this field.
    type BigInt: BigInteger;

    /// The modulus `p`.
    const MODULUS: Self::BigInt;

    /// The size of the modulus in bits.
    const MODULUS_BIT_SIZE: usize;

    /// Construct a prime field element from a big integer smaller than the
    /// modulus. Returns `None` if the integer is equal to, or larger than,
    /// the modulus.
    fn from_bigint(repr: Self::BigInt) -> Option<Self>;

    /// Converts an element of the prime field into an integer less than
    /// the modulus.
    fn into_bigint(self) -> Self::BigInt;
}
