// Unipilot vault storage module

use soroban_sdk::{contracttype, Env};

use crate::types::VaultConfig;

#[contracttype]
pub enum DataKey {
    Config,
}

const INSTANCE_THRESHOLD: u32 = 518_400;
const INSTANCE_BUMP: u32 = 3_110_400;

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn write_config(env: &Env, config: &VaultConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    env.storage().instance().extend_ttl(INSTANCE_THRESHOLD, INSTANCE_BUMP);
}

pub fn read_config(env: &Env) -> Option<VaultConfig> {
    env.storage().instance().get(&DataKey::Config)
}
