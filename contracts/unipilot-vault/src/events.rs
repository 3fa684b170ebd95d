//! Unipilot vault events

use soroban_sdk::{Address, Env, Symbol};

/// Emitted once the vault has bound itself to its pool
pub fn emit_initialized(env: &Env, factory: &Address, pool: &Address) {
    env.events().publish(
        (Symbol::new(env, "VaultInit"),),
        (factory.clone(), pool.clone()),
    );
}
