// SPDX-License-Identifier: MIT
// Q64.64 Fixed-Point Arithmetic Operations

use crate::constants::Q64;

pub const ONE_X64: u128 = Q64;

/// Multiply two Q64.64 numbers, returning Q64.64 result
/// Uses decomposition to avoid overflow
#[inline]
pub fn mul_q64(a: u128, b: u128) -> u128 {
    let a_hi = a >> 64;
    let a_lo = a & 0xFFFFFFFFFFFFFFFF;
    let b_hi = b >> 64;
    let b_lo = b & 0xFFFFFFFFFFFFFFFF;

    let term_hh = a_hi * b_hi;
    let term_hl = a_hi * b_lo;
    let term_lh = a_lo * b_hi;
    let term_ll = a_lo * b_lo;

    (term_hh << 64) + term_hl + term_lh + (term_ll >> 64)
}

/// Divide in Q64.64 format: (a * 2^64) / b
#[inline]
pub fn div_q64(a: u128, b: u128) -> u128 {
    if b == 0 { return u128::MAX; }

    if a <= (u128::MAX >> 64) {
        return (a << 64) / b;
    }

    let q = a / b;
    let r = a % b;

    let q_part = q << 64;
    let r_part = if r <= (u128::MAX >> 64) {
        (r << 64) / b
    } else {
        ((r >> 32) << 32) / (b >> 32).max(1)
    };

    q_part.saturating_add(r_part)
}
