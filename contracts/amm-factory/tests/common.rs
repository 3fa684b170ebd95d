#![allow(dead_code)]

use amm_factory::{AmmFactory, AmmFactoryClient};
use soroban_sdk::{testutils::Address as _, Address, Bytes, BytesN, Env};

pub const SQRT_PRICE_1_1: u128 = 1u128 << 64;

/// Hash of the zero-byte code the sandbox host accepts for native test contracts.
/// Pools deployed from it get an instance but no callable code.
pub fn placeholder_pool_hash(env: &Env) -> BytesN<32> {
    env.deployer().upload_contract_wasm(Bytes::new(env))
}

pub fn setup_factory(env: &Env) -> (AmmFactoryClient<'_>, Address, Address) {
    let admin = Address::generate(env);
    let wrapped_native = create_token(env);
    let factory_id = env.register_contract(None, AmmFactory);
    let client = AmmFactoryClient::new(env, &factory_id);
    client.initialize(&admin, &wrapped_native, &placeholder_pool_hash(env));
    (client, admin, wrapped_native)
}

pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    env.register_stellar_asset_contract_v2(admin).address()
}
