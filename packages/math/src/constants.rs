// Price and fee constants shared across the workspace.

// ============================================================
// SQRT PRICE CONSTANTS (Q64.64 format)
// ============================================================

/// Q64 multiplier (2^64) for fixed-point math
pub const Q64: u128 = 1u128 << 64;

/// Minimum accepted sqrt price, just above 2^32 (a sqrt of ~2^-32)
/// Prices below ~2^-64 cannot be represented with useful precision.
/// The raw value is the lower bound Q64.96 AMMs use, read here as Q64.64
pub const MIN_SQRT_PRICE: u128 = 4295128739;

/// Maximum accepted sqrt price
pub const MAX_SQRT_PRICE: u128 = u128::MAX;

/// Sqrt price for 1:1 price ratio (2^64)
pub const SQRT_PRICE_1_1: u128 = 18446744073709551616_u128;

// ============================================================
// FEE TIER CONSTANTS (hundredths of a basis point)
// ============================================================

/// 0.05% - stable pairs
pub const FEE_LOW: u32 = 500;

/// 0.30% - volatile pairs
pub const FEE_MEDIUM: u32 = 3000;

/// 1.00% - exotic pairs
pub const FEE_HIGH: u32 = 10000;

/// Fee denominator: 1_000_000 = 100%
pub const FEE_DENOMINATOR: u32 = 1_000_000;

/// Tick spacing for the default fee tiers
pub const TICK_SPACING_LOW: i32 = 10;
pub const TICK_SPACING_MEDIUM: i32 = 60;
pub const TICK_SPACING_HIGH: i32 = 200;
