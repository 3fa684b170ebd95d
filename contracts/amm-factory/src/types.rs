//! AMM factory type definitions

use soroban_sdk::{contracttype, Address, BytesN};

// ============================================================
// FACTORY CONFIG
// ============================================================

/// Factory configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AmmConfig {
    pub admin: Address,
    /// Wrapped native asset used by routers and position managers
    pub wrapped_native: Address,
    pub pool_wasm_hash: BytesN<32>,
}

// ============================================================
// FEE TIER
// ============================================================

/// Fee tier configuration
///
/// Fees are in hundredths of a basis point:
/// - 500 (0.05%) + tick spacing 10 → Stablecoins
/// - 3000 (0.30%) + tick spacing 60 → Volatile
/// - 10000 (1.00%) + tick spacing 200 → Exotic
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeTier {
    pub fee: u32,
    pub tick_spacing: i32,
    pub enabled: bool,
}

// ============================================================
// POOL INFO
// ============================================================

/// Registry record written when a pool is deployed
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolInfo {
    pub pool: Address,
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub tick_spacing: i32,
    /// Price the pool is opened at, sqrt(price) * 2^64
    pub sqrt_price_x64: u128,
    pub creator: Address,
}
