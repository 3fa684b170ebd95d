//! Vault creation through the factory and handle binding

use soroban_sdk::{Address, Bytes, BytesN, Env, String};
use unipilot_factory::UnipilotFactoryClient;
use unipilot_vault::{UnipilotVault, UnipilotVaultClient};

use crate::error::{settle, FixtureError};
use crate::receipt::{extract_created_address, CreationReceipt};

/// Event the vault factory emits for every vault it deploys
pub const VAULT_CREATED_EVENT: &str = "VaultCreated";
/// Field of [`VAULT_CREATED_EVENT`] holding the vault address
pub const VAULT_ADDRESS_FIELD: &str = "_vault";

/// Code the factory deploys vaults from
///
/// Vault instances are deployed with the sandbox's empty executable and
/// get the implementation compiled into this crate when attached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum VaultArtifact {
    #[default]
    Native,
}

impl VaultArtifact {
    /// Upload the artifact's code and return its hash
    pub fn install(&self, env: &Env) -> BytesN<32> {
        match self {
            Self::Native => env.deployer().upload_contract_wasm(Bytes::new(env)),
        }
    }

    /// Make the contract at `address` executable under this artifact
    pub fn attach<'a>(&self, env: &Env, address: &Address) -> UnipilotVaultClient<'a> {
        match self {
            Self::Native => env.register_contract(Some(address), UnipilotVault),
        };
        UnipilotVaultClient::new(env, address)
    }
}

/// Arguments of the factory's `create_vault`, in call order
#[derive(Clone, Debug)]
pub struct VaultCreationParameters {
    pub token_a: Address,
    pub token_b: Address,
    /// Fee tier in hundredths of a basis point
    pub fee: u32,
    /// Initial sqrt price, Q64.64
    pub sqrt_price_x64: u128,
    pub name: String,
    pub symbol: String,
}

impl VaultCreationParameters {
    pub fn new(
        env: &Env,
        token_a: &Address,
        token_b: &Address,
        fee: u32,
        sqrt_price_x64: u128,
        name: &str,
        symbol: &str,
    ) -> Self {
        Self {
            token_a: token_a.clone(),
            token_b: token_b.clone(),
            fee,
            sqrt_price_x64,
            name: String::from_str(env, name),
            symbol: String::from_str(env, symbol),
        }
    }
}

/// Creates vaults through one factory and hands back bound vault clients
#[derive(Clone)]
pub struct VaultCreator {
    env: Env,
    factory: Address,
    artifact: VaultArtifact,
}

impl VaultCreator {
    pub fn new(env: &Env, factory: &Address, artifact: VaultArtifact) -> Self {
        Self {
            env: env.clone(),
            factory: factory.clone(),
            artifact,
        }
    }

    pub fn factory(&self) -> &Address {
        &self.factory
    }

    /// Create a vault and return a client for it, initialized and ready
    pub fn create_vault<'a>(
        &self,
        params: &VaultCreationParameters,
    ) -> Result<UnipilotVaultClient<'a>, FixtureError> {
        self.create_vault_with_receipt(params).map(|(vault, _)| vault)
    }

    /// As [`create_vault`](Self::create_vault), also returning the events
    /// the creation call emitted
    pub fn create_vault_with_receipt<'a>(
        &self,
        params: &VaultCreationParameters,
    ) -> Result<(UnipilotVaultClient<'a>, CreationReceipt), FixtureError> {
        let factory = UnipilotFactoryClient::new(&self.env, &self.factory);

        let (result, receipt) = CreationReceipt::capture(&self.env, || {
            factory.try_create_vault(
                &params.token_a,
                &params.token_b,
                &params.fee,
                &params.sqrt_price_x64,
                &params.name,
                &params.symbol,
            )
        });
        let returned = settle(result)?;

        let vault_address = extract_created_address(
            &self.env,
            &receipt,
            &self.factory,
            VAULT_CREATED_EVENT,
            VAULT_ADDRESS_FIELD,
        )?;
        if returned != vault_address {
            tracing::warn!(
                returned = ?returned,
                emitted = ?vault_address,
                "factory return value differs from VaultCreated event"
            );
        }

        let vault = self.artifact.attach(&self.env, &vault_address);
        settle(vault.try_initialize(&self.factory))?;

        tracing::info!(vault = ?vault_address, fee = params.fee, "created vault");

        Ok((vault, receipt))
    }
}
