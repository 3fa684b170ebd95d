// AMM factory storage module

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{AmmConfig, FeeTier, PoolInfo};

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    Config,
    Initialized,
    PoolCount,
    /// Pool address by (token0, token1, fee)
    Pool(Address, Address, u32),
    PoolInfo(Address),
    PoolByIndex(u32),
    FeeTier(u32),
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

const PERSISTENT_THRESHOLD: u32 = 518_400;
const PERSISTENT_BUMP: u32 = 3_110_400;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, PERSISTENT_THRESHOLD, PERSISTENT_BUMP);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    extend_ttl(env, &DataKey::Initialized);
}

// ============================================================
// FACTORY CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &AmmConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_ttl(env, &DataKey::Config);
}

pub fn read_config(env: &Env) -> Option<AmmConfig> {
    env.storage().persistent().get(&DataKey::Config)
}

// ============================================================
// POOL REGISTRY
// ============================================================

pub fn sort_tokens(token_a: &Address, token_b: &Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a.clone(), token_b.clone())
    } else {
        (token_b.clone(), token_a.clone())
    }
}

pub fn read_pool(env: &Env, token0: &Address, token1: &Address, fee: u32) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Pool(token0.clone(), token1.clone(), fee))
}

pub fn pool_exists(env: &Env, token0: &Address, token1: &Address, fee: u32) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Pool(token0.clone(), token1.clone(), fee))
}

/// Write pool under its pair key, its info record and the next index slot
pub fn register_pool(env: &Env, info: &PoolInfo) {
    let key = DataKey::Pool(info.token0.clone(), info.token1.clone(), info.fee);
    env.storage().persistent().set(&key, &info.pool);
    extend_ttl(env, &key);

    let info_key = DataKey::PoolInfo(info.pool.clone());
    env.storage().persistent().set(&info_key, info);
    extend_ttl(env, &info_key);

    let index = read_pool_count(env);
    let index_key = DataKey::PoolByIndex(index);
    env.storage().persistent().set(&index_key, &info.pool);
    extend_ttl(env, &index_key);

    env.storage().persistent().set(&DataKey::PoolCount, &(index + 1));
    extend_ttl(env, &DataKey::PoolCount);
}

pub fn read_pool_info(env: &Env, pool: &Address) -> Option<PoolInfo> {
    env.storage().persistent().get(&DataKey::PoolInfo(pool.clone()))
}

pub fn read_pool_count(env: &Env) -> u32 {
    env.storage().persistent().get(&DataKey::PoolCount).unwrap_or(0)
}

pub fn read_pool_list(env: &Env) -> Vec<Address> {
    let mut pools = Vec::new(env);
    for index in 0..read_pool_count(env) {
        if let Some(pool) = env.storage().persistent().get(&DataKey::PoolByIndex(index)) {
            pools.push_back(pool);
        }
    }
    pools
}

// ============================================================
// FEE TIERS
// ============================================================

pub fn write_fee_tier(env: &Env, tier: &FeeTier) {
    let key = DataKey::FeeTier(tier.fee);
    env.storage().persistent().set(&key, tier);
    extend_ttl(env, &key);
}

pub fn read_fee_tier(env: &Env, fee: u32) -> Option<FeeTier> {
    env.storage().persistent().get(&DataKey::FeeTier(fee))
}
