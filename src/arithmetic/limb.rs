//! Primitive operations on single machine-word limbs.

/// A single big-integer limb.
pub type Limb = u64;
/// A fixed-size array of limbs, least significant first.
pub type Limbs<const N: usize> = [Limb; N];
/// Two limbs' worth of precision, for intermediate products.
pub type WideLimb = u128;

/// Multiply two [`Limb`]'s and return the widened result.
#[inline(always)]
pub const fn widening_mul(a: Limb, b: Limb) -> WideLimb {
    a as WideLimb * b as WideLimb
}

/// Calculate `a + b * c`, returning the lower 64 bits of the result and
/// setting `carry` to the upper 64 bits.
#[inline(always)]
pub const fn mac(a: Limb, b: Limb, c: Limb) -> (Limb, Limb) {
    let a = a as WideLimb;
    let tmp = a + widening_mul(b, c);
    let carry = (tmp >> Limb::BITS) as Limb;
    (tmp as Limb, carry)
}

/// Calculate `a + (b * c) + carry`, returning the least significant digit
/// and setting carry to the most significant digit.
#[inline(always)]
pub const fn carrying_mac(
    a: Limb,
    b: Limb,
    c: Limb,
    carry: Limb,
) -> (Limb, Limb) {
    let a = a as WideLimb;
    let carry = carry as WideLimb;
    let tmp = a + widening_mul(b, c) + carry;
    let carry = (tmp >> Limb::BITS) as Limb;
    (tmp as Limb, carry)
}

/// Calculate `a + b + carry` and return the result and new carry.
#[inline(always)]
pub const fn adc(a: Limb, b: Limb, carry: Limb) -> (Limb, Limb) {
    let a = a as WideLimb;
    let b = b as WideLimb;
    let carry = carry as WideLimb;
    let tmp = a + b + carry;
    let carry = (tmp >> Limb::BITS) as Limb;
    (tmp as Limb, carry)
}

/// Calculate `a - b - borrow` and return the result and new borrow.
#[inline(always)]
pub const fn sbb(a: Limb, b: Limb, borrow: Limb) -> (Limb, Limb) {
    let a = a as WideLimb;
    let b = b as WideLimb;
    let borrow = borrow as WideLimb;
    let tmp = (1 << Limb::BITS) + a - b - borrow;
    let borrow = if tmp >> Limb::BITS == 0 { 1 } else { 0 };
    (tmp as Limb, borrow)
}

/// Sets `a = a + b + carry`, and returns the new carry.
#[inline(always)]
pub fn adc_assign(a: &mut Limb, b: Limb, carry: bool) -> bool {
    let (sum, carry1) = a.overflowing_add(b);
    let (sum, carry2) = sum.overflowing_add(Limb::from(carry));
    *a = sum;
    carry1 | carry2
}

/// Sets `a = a - b - borrow`, and returns the new borrow.
#[inline(always)]
pub fn sbb_assign(a: &mut Limb, b: Limb, borrow: bool) -> bool {
    let (sub, borrow1) = a.overflowing_sub(b);
    let (sub, borrow2) = sub.overflowing_sub(Limb::from(borrow));
    *a = sub;
    borrow1 | borrow2
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn mac_matches_widening_mul() {
        proptest!(|(a: Limb, b: Limb, c: Limb)| {
            let (lo, hi) = mac(a, b, c);
            let expected = a as WideLimb + widening_mul(b, c);
            prop_assert_eq!(lo, expected as Limb);
            prop_assert_eq!(hi, (expected >> 64) as Limb);
        });
    }

    #[test]
    fn adc_sbb_round_trip() {
        proptest!(|(a: Limb, b: Limb)| {
            let (sum, carry) = adc(a, b, 0);
            let (diff, borrow) = sbb(sum, b, 0);
            prop_assert_eq!(diff, a);
            prop_assert_eq!(borrow, carry);
        });
    }
}
