//! Vault factory deployment

use soroban_sdk::Address;
use unipilot_factory::{UnipilotFactory, UnipilotFactoryClient};

use crate::context::NetworkContext;
use crate::error::{settle, FixtureError};
use crate::vault::VaultArtifact;

pub struct UnipilotFactoryFixture<'a> {
    pub unipilot_factory: UnipilotFactoryClient<'a>,
}

/// Deploy a vault factory on top of `amm_factory`.
///
/// `deployer` becomes governance. The AMM address is not checked here; a
/// wrong one fails on the first vault creation.
pub fn unipilot_factory_fixture<'a>(
    ctx: &NetworkContext,
    deployer: &Address,
    amm_factory: &Address,
    strategy: Option<Address>,
    vault_artifact: &VaultArtifact,
) -> Result<UnipilotFactoryFixture<'a>, FixtureError> {
    let env = ctx.env();
    let factory_id = env.register_contract(None, UnipilotFactory);
    let unipilot_factory = UnipilotFactoryClient::new(env, &factory_id);

    settle(unipilot_factory.try_initialize(amm_factory, deployer, &strategy))?;
    settle(unipilot_factory.try_set_vault_wasm_hash(&vault_artifact.install(env)))?;

    tracing::info!(
        unipilot_factory = ?factory_id,
        amm_factory = ?amm_factory,
        "deployed vault factory"
    );

    Ok(UnipilotFactoryFixture { unipilot_factory })
}
