//! Scalar multiplication strategies.
//!
//! Signing multiplies the fixed generator by a secret scalar, which
//! demands constant-time table lookups ([`comb`]). Verification combines
//! public scalars and points, where variable-time algorithms with
//! precomputed generator tables are much faster ([`vartime`]). Both share
//! the tables built once per curve in [`tables`].

pub mod comb;
pub mod tables;
pub mod vartime;

/// Returns `u64::MAX` when `a == b` and `0` otherwise, without branching.
pub(crate) const fn ct_eq_mask(a: u64, b: u64) -> u64 {
    let x = a ^ b;
    // The top bit of x | -x is set exactly when x != 0.
    ((x | x.wrapping_neg()) >> 63).wrapping_sub(1)
}
