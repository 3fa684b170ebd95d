// Unipilot factory error module

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum UnipilotFactoryError {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Vault creation errors
    IdenticalTokens = 10,
    InvalidFeeTier = 11,
    InvalidSqrtPrice = 12,
    EmptyName = 13,
    EmptySymbol = 14,
    VaultCodeNotSet = 15,

    // Registry errors
    VaultNotFound = 20,
}
