//! Base AMM deployment: wrapped native asset and AMM factory

use amm_factory::{AmmFactory, AmmFactoryClient};
use soroban_sdk::{token, Address};

use crate::context::NetworkContext;
use crate::error::{settle, FixtureError};

/// Wrapped native asset of a deployment
#[derive(Clone, Debug)]
pub struct WrappedNative {
    pub address: Address,
    pub admin: Address,
}

impl WrappedNative {
    pub fn client<'a>(&self, ctx: &NetworkContext) -> token::Client<'a> {
        token::Client::new(ctx.env(), &self.address)
    }

    pub fn admin_client<'a>(&self, ctx: &NetworkContext) -> token::StellarAssetClient<'a> {
        token::StellarAssetClient::new(ctx.env(), &self.address)
    }
}

/// Initialized AMM deployment
pub struct AmmSuite<'a> {
    pub factory: AmmFactoryClient<'a>,
    pub wrapped_native: WrappedNative,
}

/// Deploy a new wrapped native asset administered by `signer`
pub fn deploy_wrapped_native(ctx: &NetworkContext, signer: &Address) -> WrappedNative {
    let contract = ctx.env().register_stellar_asset_contract_v2(signer.clone());
    tracing::debug!(wrapped_native = ?contract.address(), "deployed wrapped native asset");

    WrappedNative {
        address: contract.address(),
        admin: signer.clone(),
    }
}

/// Deploy and initialize the AMM factory around an existing wrapped native asset
pub fn deploy_amm_contracts<'a>(
    ctx: &NetworkContext,
    signer: &Address,
    wrapped_native: WrappedNative,
) -> Result<AmmSuite<'a>, FixtureError> {
    let env = ctx.env();
    let factory_id = env.register_contract(None, AmmFactory);
    let factory = AmmFactoryClient::new(env, &factory_id);

    settle(factory.try_initialize(signer, &wrapped_native.address, &ctx.native_code_hash()))?;

    Ok(AmmSuite {
        factory,
        wrapped_native,
    })
}

/// Stand up a fresh AMM and return its factory address
pub fn deploy_amm_factory(ctx: &NetworkContext, signer: &Address) -> Result<Address, FixtureError> {
    let wrapped_native = deploy_wrapped_native(ctx, signer);
    let suite = deploy_amm_contracts(ctx, signer, wrapped_native)?;
    let address = suite.factory.address.clone();

    tracing::info!(amm_factory = ?address, "deployed AMM factory");

    Ok(address)
}
