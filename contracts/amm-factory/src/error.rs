// AMM factory error module

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AmmFactoryError {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Pool creation errors
    PoolAlreadyExists = 10,
    InvalidTokenPair = 11,
    InvalidFeeTier = 12,
    InvalidTickSpacing = 13,
    InvalidInitialPrice = 14,

    // Registry errors
    PoolNotFound = 20,
}
