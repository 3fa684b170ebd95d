// Unipilot vault error module

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum UnipilotVaultError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// The factory's record does not derive this contract's address
    NotCreatedByFactory = 3,
}
