// Unipilot Math Package
//
// Q64.64 sqrt price helpers shared by the factory contracts and the
// deployment harness.

#![no_std]

pub mod constants;
pub mod q64;
pub mod sqrt_price;

pub use constants::*;

pub use q64::{div_q64, mul_q64, ONE_X64};

pub use sqrt_price::{encode_price_sqrt, isqrt, is_valid_sqrt_price};
