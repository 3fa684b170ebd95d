#![no_std]

//! # AMM Factory
//!
//! Base concentrated-liquidity AMM factory the Unipilot vaults sit on.
//!
//! ## Responsibilities:
//! 1. Fee tier standardization
//! 2. Deterministic pool deployment (one pool per pair + fee)
//! 3. Pool registry used by vault factories

use soroban_sdk::{contract, contractimpl, xdr::ToXdr, Address, BytesN, Env, Vec};
use unipilot_math::{
    is_valid_sqrt_price, FEE_DENOMINATOR, FEE_HIGH, FEE_LOW, FEE_MEDIUM, TICK_SPACING_HIGH,
    TICK_SPACING_LOW, TICK_SPACING_MEDIUM,
};

mod error;
mod events;
mod storage;
mod types;

pub use error::AmmFactoryError;
use events::*;
use storage::*;
pub use types::*;

// ============================================================
// CONTRACT
// ============================================================

#[contract]
pub struct AmmFactory;

#[contractimpl]
impl AmmFactory {
    // ========================================================
    // WRITE FUNCTIONS
    // ========================================================

    /// Initialize factory
    ///
    /// # Arguments
    /// * `admin` - Address allowed to manage fee tiers and pool code
    /// * `wrapped_native` - Wrapped native asset of the deployment
    /// * `pool_wasm_hash` - Code every pool is deployed from
    pub fn initialize(
        env: Env,
        admin: Address,
        wrapped_native: Address,
        pool_wasm_hash: BytesN<32>,
    ) -> Result<(), AmmFactoryError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(AmmFactoryError::AlreadyInitialized);
        }

        let config = AmmConfig {
            admin: admin.clone(),
            wrapped_native: wrapped_native.clone(),
            pool_wasm_hash,
        };
        write_config(&env, &config);
        set_initialized(&env);

        Self::init_fee_tiers(&env);

        emit_initialized(&env, &admin, &wrapped_native);

        Ok(())
    }

    /// Deploy and register the pool for a pair and fee tier
    ///
    /// Tokens are sorted, so `(a, b)` and `(b, a)` name the same pool.
    pub fn create_pool(
        env: Env,
        creator: Address,
        token_a: Address,
        token_b: Address,
        fee: u32,
        sqrt_price_x64: u128,
    ) -> Result<Address, AmmFactoryError> {
        creator.require_auth();

        let config = read_config(&env).ok_or(AmmFactoryError::NotInitialized)?;

        if token_a == token_b {
            return Err(AmmFactoryError::InvalidTokenPair);
        }

        let (token0, token1) = sort_tokens(&token_a, &token_b);

        if pool_exists(&env, &token0, &token1, fee) {
            return Err(AmmFactoryError::PoolAlreadyExists);
        }

        let tier = read_fee_tier(&env, fee)
            .filter(|t| t.enabled)
            .ok_or(AmmFactoryError::InvalidFeeTier)?;

        if !is_valid_sqrt_price(sqrt_price_x64) {
            return Err(AmmFactoryError::InvalidInitialPrice);
        }

        let pool = Self::deploy_pool(&env, &config, &token0, &token1, fee);

        let info = PoolInfo {
            pool: pool.clone(),
            token0: token0.clone(),
            token1: token1.clone(),
            fee,
            tick_spacing: tier.tick_spacing,
            sqrt_price_x64,
            creator: creator.clone(),
        };
        register_pool(&env, &info);

        emit_pool_created(&env, &pool, &token0, &token1, &creator, fee);

        Ok(pool)
    }

    // ========================================================
    // READ FUNCTIONS
    // ========================================================

    /// Get pool contract address by token pair and fee tier
    pub fn get_pool_address(env: Env, token_a: Address, token_b: Address, fee: u32) -> Option<Address> {
        let (token0, token1) = sort_tokens(&token_a, &token_b);
        read_pool(&env, &token0, &token1, fee)
    }

    /// Check if pool is already deployed for this pair+fee
    pub fn is_pool_deployed(env: Env, token_a: Address, token_b: Address, fee: u32) -> bool {
        let (token0, token1) = sort_tokens(&token_a, &token_b);
        pool_exists(&env, &token0, &token1, fee)
    }

    pub fn get_pool_info(env: Env, pool: Address) -> Result<PoolInfo, AmmFactoryError> {
        read_pool_info(&env, &pool).ok_or(AmmFactoryError::PoolNotFound)
    }

    /// Get total number of deployed pools
    pub fn get_total_pools(env: Env) -> u32 {
        read_pool_count(&env)
    }

    /// Get all deployed pool addresses, in creation order
    pub fn get_all_pool_addresses(env: Env) -> Vec<Address> {
        read_pool_list(&env)
    }

    /// Get fee tier configuration
    pub fn get_fee_tier(env: Env, fee: u32) -> Option<FeeTier> {
        read_fee_tier(&env, fee)
    }

    pub fn get_wrapped_native(env: Env) -> Result<Address, AmmFactoryError> {
        read_config(&env)
            .map(|c| c.wrapped_native)
            .ok_or(AmmFactoryError::NotInitialized)
    }

    pub fn get_admin(env: Env) -> Result<Address, AmmFactoryError> {
        read_config(&env)
            .map(|c| c.admin)
            .ok_or(AmmFactoryError::NotInitialized)
    }

    // ========================================================
    // ADMIN FUNCTIONS
    // ========================================================

    /// Update pool WASM hash (for future pool deployments)
    pub fn set_pool_wasm_hash(env: Env, new_hash: BytesN<32>) -> Result<(), AmmFactoryError> {
        let mut config = read_config(&env).ok_or(AmmFactoryError::NotInitialized)?;
        config.admin.require_auth();
        config.pool_wasm_hash = new_hash;
        write_config(&env, &config);
        Ok(())
    }

    /// Transfer admin role. Both old and new admin must authorize
    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), AmmFactoryError> {
        let mut config = read_config(&env).ok_or(AmmFactoryError::NotInitialized)?;
        config.admin.require_auth();
        new_admin.require_auth();

        emit_admin_updated(&env, &config.admin, &new_admin);

        config.admin = new_admin;
        write_config(&env, &config);
        Ok(())
    }

    /// Add or update fee tier configuration
    pub fn set_fee_tier(
        env: Env,
        fee: u32,
        tick_spacing: i32,
        enabled: bool,
    ) -> Result<(), AmmFactoryError> {
        let config = read_config(&env).ok_or(AmmFactoryError::NotInitialized)?;
        config.admin.require_auth();

        if tick_spacing <= 0 {
            return Err(AmmFactoryError::InvalidTickSpacing);
        }

        if fee == 0 || fee >= FEE_DENOMINATOR {
            return Err(AmmFactoryError::InvalidFeeTier);
        }

        write_fee_tier(&env, &FeeTier { fee, tick_spacing, enabled });

        emit_fee_tier_updated(&env, fee, tick_spacing, enabled);

        Ok(())
    }

    // ========================================================
    // INTERNAL HELPERS
    // ========================================================

    fn init_fee_tiers(env: &Env) {
        write_fee_tier(env, &FeeTier {
            fee: FEE_LOW,
            tick_spacing: TICK_SPACING_LOW,
            enabled: true,
        });

        write_fee_tier(env, &FeeTier {
            fee: FEE_MEDIUM,
            tick_spacing: TICK_SPACING_MEDIUM,
            enabled: true,
        });

        write_fee_tier(env, &FeeTier {
            fee: FEE_HIGH,
            tick_spacing: TICK_SPACING_HIGH,
            enabled: true,
        });
    }

    fn deploy_pool(
        env: &Env,
        config: &AmmConfig,
        token0: &Address,
        token1: &Address,
        fee: u32,
    ) -> Address {
        // Deterministic salt
        let mut salt_data = token0.clone().to_xdr(env);
        salt_data.append(&token1.clone().to_xdr(env));
        salt_data.append(&fee.to_xdr(env));
        let salt = env.crypto().sha256(&salt_data);

        env.deployer()
            .with_current_contract(salt)
            .deploy(config.pool_wasm_hash.clone())
    }
}
