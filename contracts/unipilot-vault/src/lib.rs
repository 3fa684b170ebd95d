#![no_std]

//! # Unipilot Vault
//!
//! Liquidity-management vault over a single AMM pool.
//!
//! A vault is deployed by the Unipilot factory without being called. It
//! binds itself on `initialize` by reading its registry record from the
//! factory and checking the factory could only have deployed it at this
//! address.

use soroban_sdk::{
    contract, contractimpl, vec, Address, Env, IntoVal, InvokeError, String, Symbol,
};

mod error;
mod events;
mod storage;
mod types;

pub use error::UnipilotVaultError;
use events::*;
use storage::*;
pub use types::*;

#[contract]
pub struct UnipilotVault;

#[contractimpl]
impl UnipilotVault {
    /// Bind the vault to the pool its factory recorded for it
    pub fn initialize(env: Env, factory: Address) -> Result<(), UnipilotVaultError> {
        if has_config(&env) {
            return Err(UnipilotVaultError::AlreadyInitialized);
        }

        let this = env.current_contract_address();
        let info = match env.try_invoke_contract::<VaultInfo, InvokeError>(
            &factory,
            &Symbol::new(&env, "get_vault_info"),
            vec![&env, this.into_val(&env)],
        ) {
            Ok(Ok(info)) => info,
            _ => return Err(UnipilotVaultError::NotCreatedByFactory),
        };

        // Only the factory can deploy at (factory, salt)
        let expected = env
            .deployer()
            .with_address(factory.clone(), info.salt.clone())
            .deployed_address();
        if info.vault != this || expected != this {
            return Err(UnipilotVaultError::NotCreatedByFactory);
        }

        write_config(
            &env,
            &VaultConfig {
                factory: factory.clone(),
                pool: info.pool.clone(),
                token0: info.token0,
                token1: info.token1,
                fee: info.fee,
                name: info.name,
                symbol: info.symbol,
            },
        );

        emit_initialized(&env, &factory, &info.pool);

        Ok(())
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    pub fn is_initialized(env: Env) -> bool {
        has_config(&env)
    }

    pub fn get_config(env: Env) -> Result<VaultConfig, UnipilotVaultError> {
        read_config(&env).ok_or(UnipilotVaultError::NotInitialized)
    }

    pub fn factory(env: Env) -> Result<Address, UnipilotVaultError> {
        Ok(Self::get_config(env)?.factory)
    }

    pub fn pool(env: Env) -> Result<Address, UnipilotVaultError> {
        Ok(Self::get_config(env)?.pool)
    }

    pub fn token0(env: Env) -> Result<Address, UnipilotVaultError> {
        Ok(Self::get_config(env)?.token0)
    }

    pub fn token1(env: Env) -> Result<Address, UnipilotVaultError> {
        Ok(Self::get_config(env)?.token1)
    }

    /// Fee tier of the underlying pool, in hundredths of a basis point
    pub fn fee(env: Env) -> Result<u32, UnipilotVaultError> {
        Ok(Self::get_config(env)?.fee)
    }

    pub fn name(env: Env) -> Result<String, UnipilotVaultError> {
        Ok(Self::get_config(env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, UnipilotVaultError> {
        Ok(Self::get_config(env)?.symbol)
    }
}
