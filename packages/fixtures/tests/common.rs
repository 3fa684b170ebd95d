#![allow(dead_code)]

use soroban_sdk::{testutils::Address as _, Address};
use tracing_subscriber::EnvFilter;
use unipilot_fixtures::{encode_price_sqrt, NetworkContext, VaultCreationParameters};

pub const FEE_MEDIUM: u32 = 3000;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn create_token(ctx: &NetworkContext) -> Address {
    let admin = Address::generate(ctx.env());
    ctx.env().register_stellar_asset_contract_v2(admin).address()
}

/// Parameters of the reference vault: 0.30% tier opened at price 1
pub fn default_params(ctx: &NetworkContext, token_a: &Address, token_b: &Address) -> VaultCreationParameters {
    VaultCreationParameters::new(
        ctx.env(),
        token_a,
        token_b,
        FEE_MEDIUM,
        encode_price_sqrt(1, 1),
        "Unipilot LP",
        "UP-LP",
    )
}
