#![no_std]

//! # Unipilot Factory
//!
//! Deploys liquidity-management vaults on top of AMM pools.
//!
//! ## Flow:
//! 1. Validate the pair, price and vault metadata
//! 2. Look up the pool on the AMM factory, creating it at the given price if missing
//! 3. Deploy a vault at a salt derived from pair, fee and creation index
//! 4. Record the vault and emit `VaultCreated`
//!
//! The vault is deployed but not invoked. It initializes itself later by
//! reading its record back from this factory.

use soroban_sdk::{
    contract, contractimpl, vec, xdr::ToXdr, Address, BytesN, Env, IntoVal, String, Symbol, Vec,
};
use unipilot_math::is_valid_sqrt_price;

mod error;
mod events;
mod storage;
mod types;

pub use error::UnipilotFactoryError;
use events::*;
use storage::*;
pub use types::*;

#[contract]
pub struct UnipilotFactory;

#[contractimpl]
impl UnipilotFactory {
    // ========================================================
    // WRITE FUNCTIONS
    // ========================================================

    /// Initialize factory
    ///
    /// # Arguments
    /// * `amm_factory` - AMM factory that owns the pools
    /// * `governance` - Address allowed to change code, strategy and governance
    /// * `strategy` - Optional rebalancing strategy
    pub fn initialize(
        env: Env,
        amm_factory: Address,
        governance: Address,
        strategy: Option<Address>,
    ) -> Result<(), UnipilotFactoryError> {
        governance.require_auth();

        if has_config(&env) {
            return Err(UnipilotFactoryError::AlreadyInitialized);
        }

        write_config(
            &env,
            &FactoryConfig {
                amm_factory: amm_factory.clone(),
                governance: governance.clone(),
                strategy,
            },
        );

        emit_initialized(&env, &amm_factory, &governance);

        Ok(())
    }

    /// Create a vault for a token pair and fee tier
    ///
    /// Returns the vault address. Identical parameters create a new
    /// vault on every call.
    pub fn create_vault(
        env: Env,
        token_a: Address,
        token_b: Address,
        fee: u32,
        sqrt_price_x64: u128,
        name: String,
        symbol: String,
    ) -> Result<Address, UnipilotFactoryError> {
        let config = read_config(&env).ok_or(UnipilotFactoryError::NotInitialized)?;

        // === VALIDATION ===
        if token_a == token_b {
            return Err(UnipilotFactoryError::IdenticalTokens);
        }
        if !is_valid_sqrt_price(sqrt_price_x64) {
            return Err(UnipilotFactoryError::InvalidSqrtPrice);
        }
        if name.is_empty() {
            return Err(UnipilotFactoryError::EmptyName);
        }
        if symbol.is_empty() {
            return Err(UnipilotFactoryError::EmptySymbol);
        }
        let vault_wasm_hash =
            read_vault_wasm_hash(&env).ok_or(UnipilotFactoryError::VaultCodeNotSet)?;

        let tier = Self::amm_fee_tier(&env, &config.amm_factory, fee);
        if !tier.map(|t| t.enabled).unwrap_or(false) {
            return Err(UnipilotFactoryError::InvalidFeeTier);
        }

        let (token0, token1) = sort_tokens(&token_a, &token_b);

        // === POOL ===
        let (pool, sqrt_price_x64) =
            Self::pool_or_create(&env, &config.amm_factory, &token0, &token1, fee, sqrt_price_x64);

        // === DEPLOY VAULT ===
        let index = read_vault_count(&env);
        let salt = Self::vault_salt(&env, &token0, &token1, fee, index);
        let vault = env
            .deployer()
            .with_current_contract(salt.clone())
            .deploy(vault_wasm_hash);

        register_vault(
            &env,
            &VaultInfo {
                vault: vault.clone(),
                pool,
                token0: token0.clone(),
                token1: token1.clone(),
                fee,
                sqrt_price_x64,
                name,
                symbol,
                salt,
                index,
            },
        );

        emit_vault_created(&env, &token0, &token1, fee, &vault);

        Ok(vault)
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    pub fn get_amm_factory(env: Env) -> Result<Address, UnipilotFactoryError> {
        Ok(Self::config(&env)?.amm_factory)
    }

    pub fn get_governance(env: Env) -> Result<Address, UnipilotFactoryError> {
        Ok(Self::config(&env)?.governance)
    }

    pub fn get_strategy(env: Env) -> Result<Option<Address>, UnipilotFactoryError> {
        Ok(Self::config(&env)?.strategy)
    }

    pub fn get_vault_wasm_hash(env: Env) -> Result<Option<BytesN<32>>, UnipilotFactoryError> {
        Self::config(&env)?;
        Ok(read_vault_wasm_hash(&env))
    }

    /// Get the registry record of a vault
    pub fn get_vault_info(env: Env, vault: Address) -> Result<VaultInfo, UnipilotFactoryError> {
        read_vault_info(&env, &vault).ok_or(UnipilotFactoryError::VaultNotFound)
    }

    /// Get vaults created for a pair and fee, oldest first
    pub fn get_vaults(env: Env, token_a: Address, token_b: Address, fee: u32) -> Vec<Address> {
        let (token0, token1) = sort_tokens(&token_a, &token_b);
        read_pair_vaults(&env, &token0, &token1, fee)
    }

    pub fn get_vault_at(env: Env, index: u32) -> Option<Address> {
        read_vault_by_index(&env, index)
    }

    pub fn get_total_vaults(env: Env) -> u32 {
        read_vault_count(&env)
    }

    // ========================================================
    // GOVERNANCE FUNCTIONS
    // ========================================================

    /// Transfer governance. Both old and new governance must authorize
    pub fn set_governance(env: Env, new_governance: Address) -> Result<(), UnipilotFactoryError> {
        let mut config = Self::config(&env)?;
        config.governance.require_auth();
        new_governance.require_auth();

        emit_governance_updated(&env, &config.governance, &new_governance);

        config.governance = new_governance;
        write_config(&env, &config);
        Ok(())
    }

    pub fn set_strategy(env: Env, strategy: Option<Address>) -> Result<(), UnipilotFactoryError> {
        let mut config = Self::config(&env)?;
        config.governance.require_auth();

        emit_strategy_updated(&env, &strategy);

        config.strategy = strategy;
        write_config(&env, &config);
        Ok(())
    }

    /// Set the code vaults are deployed from. Existing vaults are unaffected
    pub fn set_vault_wasm_hash(env: Env, hash: BytesN<32>) -> Result<(), UnipilotFactoryError> {
        let config = Self::config(&env)?;
        config.governance.require_auth();
        write_vault_wasm_hash(&env, &hash);
        Ok(())
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn config(env: &Env) -> Result<FactoryConfig, UnipilotFactoryError> {
        read_config(env).ok_or(UnipilotFactoryError::NotInitialized)
    }

    fn amm_fee_tier(env: &Env, amm_factory: &Address, fee: u32) -> Option<FeeTier> {
        env.invoke_contract(
            amm_factory,
            &Symbol::new(env, "get_fee_tier"),
            vec![env, fee.into_val(env)],
        )
    }

    fn pool_or_create(
        env: &Env,
        amm_factory: &Address,
        token0: &Address,
        token1: &Address,
        fee: u32,
        sqrt_price_x64: u128,
    ) -> (Address, u128) {
        let existing: Option<Address> = env.invoke_contract(
            amm_factory,
            &Symbol::new(env, "get_pool_address"),
            vec![env, token0.into_val(env), token1.into_val(env), fee.into_val(env)],
        );

        match existing {
            Some(pool) => {
                // Existing pools keep the price they were opened at
                let info: PoolInfo = env.invoke_contract(
                    amm_factory,
                    &Symbol::new(env, "get_pool_info"),
                    vec![env, pool.into_val(env)],
                );
                (pool, info.sqrt_price_x64)
            }
            None => {
                let pool = env.invoke_contract(
                    amm_factory,
                    &Symbol::new(env, "create_pool"),
                    vec![
                        env,
                        env.current_contract_address().into_val(env),
                        token0.into_val(env),
                        token1.into_val(env),
                        fee.into_val(env),
                        sqrt_price_x64.into_val(env),
                    ],
                );
                (pool, sqrt_price_x64)
            }
        }
    }

    fn vault_salt(env: &Env, token0: &Address, token1: &Address, fee: u32, index: u32) -> BytesN<32> {
        let mut salt_data = token0.clone().to_xdr(env);
        salt_data.append(&token1.clone().to_xdr(env));
        salt_data.append(&fee.to_xdr(env));
        salt_data.append(&index.to_xdr(env));
        env.crypto().sha256(&salt_data).to_bytes()
    }
}
