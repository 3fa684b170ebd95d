//! Unipilot vault type definitions

use soroban_sdk::{contracttype, Address, BytesN, String};

/// Identity of a vault, fixed at initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultConfig {
    /// Factory that deployed this vault
    pub factory: Address,
    pub pool: Address,
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub name: String,
    pub symbol: String,
}

/// Registry record as stored by the factory
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VaultInfo {
    pub vault: Address,
    pub pool: Address,
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub sqrt_price_x64: u128,
    pub name: String,
    pub symbol: String,
    pub salt: BytesN<32>,
    pub index: u32,
}
