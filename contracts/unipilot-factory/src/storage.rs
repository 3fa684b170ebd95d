// Unipilot factory storage module

use soroban_sdk::{contracttype, Address, BytesN, Env, Vec};

use crate::types::{FactoryConfig, VaultInfo};

#[contracttype]
pub enum DataKey {
    Config,
    /// Code hash new vaults are deployed from
    VaultWasmHash,
    VaultCount,
    VaultInfo(Address),
    VaultByIndex(u32),
    /// Vaults created for (token0, token1, fee)
    PairVaults(Address, Address, u32),
}

const PERSISTENT_THRESHOLD: u32 = 518_400;
const PERSISTENT_BUMP: u32 = 3_110_400;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_THRESHOLD, PERSISTENT_BUMP);
}

// ============================================================
// CONFIG
// ============================================================

pub fn has_config(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Config)
}

pub fn write_config(env: &Env, config: &FactoryConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_ttl(env, &DataKey::Config);
}

pub fn read_config(env: &Env) -> Option<FactoryConfig> {
    env.storage().persistent().get(&DataKey::Config)
}

pub fn write_vault_wasm_hash(env: &Env, hash: &BytesN<32>) {
    env.storage().persistent().set(&DataKey::VaultWasmHash, hash);
    extend_ttl(env, &DataKey::VaultWasmHash);
}

pub fn read_vault_wasm_hash(env: &Env) -> Option<BytesN<32>> {
    env.storage().persistent().get(&DataKey::VaultWasmHash)
}

// ============================================================
// VAULT REGISTRY
// ============================================================

pub fn sort_tokens(token_a: &Address, token_b: &Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a.clone(), token_b.clone())
    } else {
        (token_b.clone(), token_a.clone())
    }
}

pub fn read_vault_count(env: &Env) -> u32 {
    env.storage().persistent().get(&DataKey::VaultCount).unwrap_or(0)
}

pub fn read_vault_info(env: &Env, vault: &Address) -> Option<VaultInfo> {
    env.storage().persistent().get(&DataKey::VaultInfo(vault.clone()))
}

pub fn read_pair_vaults(env: &Env, token0: &Address, token1: &Address, fee: u32) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::PairVaults(token0.clone(), token1.clone(), fee))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn read_vault_by_index(env: &Env, index: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::VaultByIndex(index))
}

/// Record a vault under its address, its pair and `info.index`
pub fn register_vault(env: &Env, info: &VaultInfo) {
    let info_key = DataKey::VaultInfo(info.vault.clone());
    env.storage().persistent().set(&info_key, info);
    extend_ttl(env, &info_key);

    let pair_key = DataKey::PairVaults(info.token0.clone(), info.token1.clone(), info.fee);
    let mut vaults = read_pair_vaults(env, &info.token0, &info.token1, info.fee);
    vaults.push_back(info.vault.clone());
    env.storage().persistent().set(&pair_key, &vaults);
    extend_ttl(env, &pair_key);

    let index_key = DataKey::VaultByIndex(info.index);
    env.storage().persistent().set(&index_key, &info.vault);
    extend_ttl(env, &index_key);

    env.storage().persistent().set(&DataKey::VaultCount, &(info.index + 1));
    extend_ttl(env, &DataKey::VaultCount);
}
