#![allow(dead_code)]

use amm_factory::{AmmFactory, AmmFactoryClient};
use soroban_sdk::{testutils::Address as _, Address, Bytes, BytesN, Env, String};
use unipilot_factory::{UnipilotFactory, UnipilotFactoryClient};

pub const SQRT_PRICE_1_1: u128 = 1u128 << 64;

/// Hash of the zero-byte code the sandbox host runs native test contracts from
pub fn placeholder_hash(env: &Env) -> BytesN<32> {
    env.deployer().upload_contract_wasm(Bytes::new(env))
}

pub struct Setup<'a> {
    pub factory: UnipilotFactoryClient<'a>,
    pub amm: AmmFactoryClient<'a>,
    pub governance: Address,
}

pub fn setup_amm(env: &Env) -> AmmFactoryClient<'_> {
    let admin = Address::generate(env);
    let amm_id = env.register_contract(None, AmmFactory);
    let amm = AmmFactoryClient::new(env, &amm_id);
    amm.initialize(&admin, &create_token(env), &placeholder_hash(env));
    amm
}

/// AMM and vault factory wired together, vault code installed
pub fn setup(env: &Env) -> Setup<'_> {
    let amm = setup_amm(env);
    let governance = Address::generate(env);

    let factory_id = env.register_contract(None, UnipilotFactory);
    let factory = UnipilotFactoryClient::new(env, &factory_id);
    factory.initialize(&amm.address, &governance, &None);
    factory.set_vault_wasm_hash(&placeholder_hash(env));

    Setup { factory, amm, governance }
}

pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    env.register_stellar_asset_contract_v2(admin).address()
}

pub fn name(env: &Env) -> String {
    String::from_str(env, "Unipilot LP")
}

pub fn symbol(env: &Env) -> String {
    String::from_str(env, "UP-LP")
}
