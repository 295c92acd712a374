//! Edwards-curve digital signatures ([EdDSA]) over edwards25519 and
//! edwards448, as specified by [RFC 8032].
//!
//! Each curve gets its own engine module with key derivation, signing and
//! verification in the pure, contextual and prehashed flavors. Signing is
//! constant time in the secret material; verification is cofactored and
//! variable time.
//!
//! [EdDSA]: https://en.wikipedia.org/wiki/EdDSA
//! [RFC 8032]: https://www.rfc-editor.org/rfc/rfc8032

use core::fmt::{Display, Formatter};

use num_traits::{One, Zero};

use crate::{
    arithmetic::BigInteger,
    curve::te::{Affine, Extended, TECurveConfig},
    field::{Field, PrimeField},
};

pub mod ed25519;
pub mod ed448;

/// Ways in which signature operations can fail.
///
/// Verification itself reports failure through its boolean result;
/// these errors cover malformed inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The domain separation context exceeds 255 bytes.
    ContextTooLong,
    /// A prehashed message digest has the wrong length.
    InvalidPrehashLength,
    /// Public key bytes do not decode to a valid curve point.
    InvalidPublicKey,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::ContextTooLong => {
                write!(f, "context must be at most 255 bytes")
            }
            Error::InvalidPrehashLength => {
                write!(f, "prehashed message has the wrong digest length")
            }
            Error::InvalidPublicKey => {
                write!(f, "public key bytes do not encode a curve point")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Recovers the point `(x, y)` from its `y` coordinate and the sign of
/// `x`, rejecting encodings the curve cannot produce.
///
/// Solves `x^2 = (1 - y^2) / (a - d * y^2)`; the denominator cannot be
/// zero because `d / a` is a non-square for the supported curves.
pub(crate) fn recover_x<P: TECurveConfig>(
    y: P::BaseField,
    x_is_odd: bool,
) -> Option<Affine<P>>
where
    P::BaseField: PrimeField,
{
    let y2 = y.square();
    let denom = P::COEFF_A - P::COEFF_D * y2;
    let x2 = (P::BaseField::one() - y2) * denom.inverse()?;

    let mut x = P::sqrt(&x2)?;
    if x.is_zero() {
        // The encoding of x = 0 with the sign bit set is not canonical.
        if x_is_odd {
            return None;
        }
    } else if x.into_bigint().is_odd() != x_is_odd {
        x = -x;
    }

    Some(Affine::new_unchecked(x, y))
}

/// Whether the point lies in the small torsion subgroup, i.e. whether the
/// cofactor multiple of it is the identity.
pub(crate) fn has_small_order<P: TECurveConfig>(point: &Extended<P>) -> bool {
    let mut p = *point;
    for _ in 0..P::COFACTOR_LOG2 {
        p.double_in_place();
    }
    p.is_zero()
}
