#![allow(dead_code)]

use amm_factory::{AmmFactory, AmmFactoryClient};
use soroban_sdk::{testutils::Address as _, Address, Bytes, BytesN, Env, String};
use unipilot_factory::{UnipilotFactory, UnipilotFactoryClient};
use unipilot_vault::{UnipilotVault, UnipilotVaultClient};

pub const SQRT_PRICE_1_1: u128 = 1u128 << 64;

pub fn placeholder_hash(env: &Env) -> BytesN<32> {
    env.deployer().upload_contract_wasm(Bytes::new(env))
}

pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    env.register_stellar_asset_contract_v2(admin).address()
}

pub fn setup_factory(env: &Env) -> UnipilotFactoryClient<'_> {
    let amm_id = env.register_contract(None, AmmFactory);
    let amm = AmmFactoryClient::new(env, &amm_id);
    amm.initialize(&Address::generate(env), &create_token(env), &placeholder_hash(env));

    let factory_id = env.register_contract(None, UnipilotFactory);
    let factory = UnipilotFactoryClient::new(env, &factory_id);
    factory.initialize(&amm_id, &Address::generate(env), &None);
    factory.set_vault_wasm_hash(&placeholder_hash(env));
    factory
}

/// Create a vault through the factory and attach the vault implementation
/// to the deployed instance, without initializing it
pub fn create_vault<'a>(env: &'a Env, factory: &UnipilotFactoryClient<'a>) -> UnipilotVaultClient<'a> {
    let vault = factory.create_vault(
        &create_token(env),
        &create_token(env),
        &3000,
        &SQRT_PRICE_1_1,
        &String::from_str(env, "Unipilot LP"),
        &String::from_str(env, "UP-LP"),
    );
    env.register_contract(Some(&vault), UnipilotVault);
    UnipilotVaultClient::new(env, &vault)
}
