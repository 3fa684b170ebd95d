//! Unipilot factory type definitions

use soroban_sdk::{contracttype, Address, BytesN, String};

/// Factory configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FactoryConfig {
    /// AMM factory whose pools the vaults manage
    pub amm_factory: Address,
    pub governance: Address,
    /// Rebalancing strategy, none until governance sets one
    pub strategy: Option<Address>,
}

/// Registry record for a created vault
///
/// The vault reads its own record back on initialization, so the
/// field layout is shared with the vault contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultInfo {
    pub vault: Address,
    pub pool: Address,
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    /// Price the pool was opened at, which differs from the requested
    /// price when the pool already existed
    pub sqrt_price_x64: u128,
    pub name: String,
    pub symbol: String,
    /// Salt the vault was deployed with
    pub salt: BytesN<32>,
    /// Position in creation order
    pub index: u32,
}

/// Fee tier as reported by the AMM factory
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeTier {
    pub fee: u32,
    pub tick_spacing: i32,
    pub enabled: bool,
}

/// Pool record as reported by the AMM factory
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolInfo {
    pub pool: Address,
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub tick_spacing: i32,
    pub sqrt_price_x64: u128,
    pub creator: Address,
}
