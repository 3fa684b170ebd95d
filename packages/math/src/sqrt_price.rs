// SPDX-License-Identifier: MIT
// Sqrt Price Encoding

use crate::constants::{MAX_SQRT_PRICE, MIN_SQRT_PRICE};
use crate::q64::div_q64;

/// Integer square root (floor)
pub fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }

    // 2^ceil(bits/2) is always >= sqrt(n)
    let bits = 128 - n.leading_zeros();
    let mut x: u128 = 1u128 << ((bits + 1) / 2);

    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// Encode `reserve1 / reserve0` as a Q64.64 sqrt price
///
/// Formula: sqrt(reserve1 / reserve0) * 2^64
///
/// The ratio is first taken in Q64.64, then shifted left by as many even
/// bits as fit before the square root so precision is kept for small ratios.
///
/// # Panics
/// If `reserve0` is zero.
pub fn encode_price_sqrt(reserve1: u64, reserve0: u64) -> u128 {
    if reserve0 == 0 {
        panic!("encode_price_sqrt: zero reserve0");
    }

    // reserve1 < 2^64, so this is the exact branch of div_q64
    let ratio_x64 = div_q64(reserve1 as u128, reserve0 as u128);

    // sqrt(ratio * 2^64) = sqrt(ratio * 2^(2k)) * 2^(32 - k)
    let k = (ratio_x64.leading_zeros() / 2).min(32);
    isqrt(ratio_x64 << (2 * k)) << (32 - k)
}

/// Check that a sqrt price lies inside the supported range
#[inline]
pub fn is_valid_sqrt_price(sqrt_price_x64: u128) -> bool {
    (MIN_SQRT_PRICE..=MAX_SQRT_PRICE).contains(&sqrt_price_x64)
}
