//! Macros and buffer types for compile-time big-integer arithmetic.

#[macro_export]
macro_rules! const_for {
    (($i:ident in $start:tt..$end:tt)  $code:expr ) => {{
        let mut $i = $start;
        while $i < $end {
            $code
            $i += 1;
        }
    }};
}

#[macro_export]
macro_rules! const_modulo {
    ($a:expr, $divisor:expr) => {{
        // Base-2 long division, bit by bit from the top. Slow, but only
        // ever evaluated at compile time.
        assert!(!$divisor.ct_is_zero());
        let mut remainder = Self::ZERO;
        let mut i = ($a.num_bits() - 1) as isize;
        let mut carry;
        while i >= 0 {
            (remainder, carry) = remainder.ct_mul2_with_carry();
            remainder.limbs[0] |= $a.get_bit(i as usize) as u64;
            if remainder.ct_ge($divisor) || carry {
                let (r, borrow) = remainder.ct_checked_sub($divisor);
                remainder = r;
                assert!(borrow == carry);
            }
            i -= 1;
        }
        remainder
    }};
}

/// `2^(N*64)` as an `N + 1` limb integer, for computing the Montgomery `R`
/// constant by long division.
pub(crate) struct RBuffer<const N: usize>(pub [u64; N], pub u64);

impl<const N: usize> RBuffer<N> {
    /// Find the number of bits in the binary decomposition of `self`.
    pub(crate) const fn num_bits(&self) -> u32 {
        (N * 64) as u32 + (64 - self.1.leading_zeros())
    }

    /// Returns the `i`-th bit where bit 0 is the least significant one.
    pub(crate) const fn get_bit(&self, i: usize) -> bool {
        let d = i / 64;
        let b = i % 64;
        if d == N {
            (self.1 >> b) & 1 == 1
        } else {
            (self.0[d] >> b) & 1 == 1
        }
    }
}

/// `2^(N*128)` as a `2N + 1` limb integer, for computing the Montgomery `R2`
/// constant by long division.
pub(crate) struct R2Buffer<const N: usize>(pub [u64; N], pub [u64; N], pub u64);

impl<const N: usize> R2Buffer<N> {
    /// Find the number of bits in the binary decomposition of `self`.
    pub(crate) const fn num_bits(&self) -> u32 {
        ((2 * N) * 64) as u32 + (64 - self.2.leading_zeros())
    }

    /// Returns the `i`-th bit where bit 0 is the least significant one.
    pub(crate) const fn get_bit(&self, i: usize) -> bool {
        let d = i / 64;
        let b = i % 64;
        if d == 2 * N {
            (self.2 >> b) & 1 == 1
        } else if d >= N {
            (self.1[d - N] >> b) & 1 == 1
        } else {
            (self.0[d] >> b) & 1 == 1
        }
    }
}
