//! Full deployment: AMM, vault factory and a vault creator bound to them

use amm_factory::AmmFactoryClient;
use soroban_sdk::Address;
use unipilot_factory::UnipilotFactoryClient;
use unipilot_vault::UnipilotVaultClient;

use crate::amm::{deploy_amm_contracts, deploy_wrapped_native, WrappedNative};
use crate::context::NetworkContext;
use crate::error::FixtureError;
use crate::factory::unipilot_factory_fixture;
use crate::vault::{VaultArtifact, VaultCreationParameters, VaultCreator};

/// Which identities and code a fixture deploys with
#[derive(Clone, Debug)]
pub struct FixtureConfig {
    /// Signer that deploys everything and governs the vault factory
    pub deployer_index: usize,
    /// Second signer, reserved for tests acting as a non-privileged user
    pub other_index: usize,
    pub strategy: Option<Address>,
    pub vault_artifact: VaultArtifact,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            deployer_index: 0,
            other_index: 1,
            strategy: None,
            vault_artifact: VaultArtifact::Native,
        }
    }
}

pub struct UnipilotVaultFixture<'a> {
    pub unipilot_factory: UnipilotFactoryClient<'a>,
    pub amm_factory: AmmFactoryClient<'a>,
    pub wrapped_native: WrappedNative,
    pub creator: VaultCreator,
    pub deployer: Address,
    pub other: Address,
}

impl<'a> UnipilotVaultFixture<'a> {
    pub fn create_vault(
        &self,
        params: &VaultCreationParameters,
    ) -> Result<UnipilotVaultClient<'a>, FixtureError> {
        self.creator.create_vault(params)
    }
}

/// Deploy the AMM and a strategy-less vault factory with default identities
pub fn unipilot_vault_fixture<'a>(
    ctx: &NetworkContext,
) -> Result<UnipilotVaultFixture<'a>, FixtureError> {
    unipilot_vault_fixture_with(ctx, &FixtureConfig::default())
}

pub fn unipilot_vault_fixture_with<'a>(
    ctx: &NetworkContext,
    config: &FixtureConfig,
) -> Result<UnipilotVaultFixture<'a>, FixtureError> {
    let deployer = ctx.signer(config.deployer_index)?;
    let other = ctx.signer(config.other_index)?;

    let wrapped_native = deploy_wrapped_native(ctx, &deployer);
    let amm = deploy_amm_contracts(ctx, &deployer, wrapped_native)?;

    let factory = unipilot_factory_fixture(
        ctx,
        &deployer,
        &amm.factory.address,
        config.strategy.clone(),
        &config.vault_artifact,
    )?;

    let creator = VaultCreator::new(
        ctx.env(),
        &factory.unipilot_factory.address,
        config.vault_artifact.clone(),
    );

    Ok(UnipilotVaultFixture {
        unipilot_factory: factory.unipilot_factory,
        amm_factory: amm.factory,
        wrapped_native: amm.wrapped_native,
        creator,
        deployer,
        other,
    })
}
