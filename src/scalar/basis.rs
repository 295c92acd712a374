//! Lattice basis reduction for half-size scalar splitting.
//!
//! Given a scalar `k` modulo the order `L`, finds a short vector
//! `(c0, c1)` of the lattice `{(a, b) : a = k * b (mod L)}`, so that
//! `c0 = k * c1 (mod L)` with both halves roughly `sqrt(L)` in size.
//! Verification uses the halves to shorten its double-scalar
//! multiplication.
//!
//! This is the binary variant of Pornin's reduction: each step shifts the
//! smaller-norm vector up to the size of the larger one and subtracts,
//! driving the squared norms down until one fits the target bit length.

use crate::arithmetic::{
    signed::{add_shifted, bit_length, is_negative, sub_shifted},
    uint::Uint,
};

/// Full product `a * b`, stored in twice as many limbs.
fn wide_product<const N: usize, const W: usize>(
    a: &Uint<N>,
    b: &Uint<N>,
) -> [u64; W] {
    let (lo, hi) = a.ct_widening_mul(b);
    let mut out = [0u64; W];
    out[..N].copy_from_slice(&lo.limbs);
    out[N..].copy_from_slice(&hi.limbs);
    out
}

/// Adds one to a little-endian limb array, wrapping on overflow.
fn increment<const W: usize>(x: &mut [u64; W]) {
    for limb in x.iter_mut() {
        let (next, carried) = limb.overflowing_add(1);
        *limb = next;
        if !carried {
            return;
        }
    }
}

/// Reduces the basis of the lattice `{(a, b) : a = k * b (mod L)}` and
/// returns a short vector `(c0, c1)` as signed two's complement limbs.
///
/// `order` is `L` and `max_norm_bits` bounds the squared norm of the
/// result, twice the bit size wanted for the halves. `W` must be `2 * N`.
///
/// Runs in time variable in `k`, which is derived from public data only.
pub(crate) fn reduce_basis_vartime<const N: usize, const W: usize>(
    k: &Uint<N>,
    order: &Uint<N>,
    max_norm_bits: u32,
) -> ([u64; N], [u64; N]) {
    debug_assert_eq!(W, 2 * N);

    // u and v span the lattice; both satisfy a = k * b (mod L).
    let mut u0 = order.limbs;
    let mut u1 = [0u64; N];
    let mut v0 = k.limbs;
    let mut v1 = [0u64; N];
    v1[0] = 1;

    // Squared norms of u and v, and their dot product. The norms stay
    // non-negative while the dot product is signed.
    let mut nu: [u64; W] = wide_product(order, order);
    let mut nv: [u64; W] = wide_product(k, k);
    increment(&mut nv);
    let mut sp: [u64; W] = wide_product(order, k);

    loop {
        // Keep u the larger of the two vectors.
        if Uint::new(nu).ct_lt(&Uint::new(nv)) {
            core::mem::swap(&mut u0, &mut v0);
            core::mem::swap(&mut u1, &mut v1);
            core::mem::swap(&mut nu, &mut nv);
        }

        let len_nv = bit_length(&nv);
        if len_nv <= max_norm_bits {
            return (v0, v1);
        }

        let s = bit_length(&sp).saturating_sub(len_nv);

        if is_negative(&sp) {
            add_shifted(&mut u0, &v0, s);
            add_shifted(&mut u1, &v1, s);
            add_shifted(&mut nu, &nv, 2 * s);
            add_shifted(&mut nu, &sp, s + 1);
            add_shifted(&mut sp, &nv, s);
        } else {
            sub_shifted(&mut u0, &v0, s);
            sub_shifted(&mut u1, &v1, s);
            add_shifted(&mut nu, &nv, 2 * s);
            sub_shifted(&mut nu, &sp, s + 1);
            sub_shifted(&mut sp, &nv, s);
        }
    }
}
