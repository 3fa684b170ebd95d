//! Unipilot factory events

use soroban_sdk::{Address, Env, IntoVal, Map, Symbol, Val};

/// Emitted when factory is initialized
pub fn emit_initialized(env: &Env, amm_factory: &Address, governance: &Address) {
    env.events().publish(
        (Symbol::new(env, "FactoryInit"),),
        (amm_factory.clone(), governance.clone()),
    );
}

/// Emitted when a vault is deployed
///
/// Body is a map keyed by field name so consumers can read `_vault`
/// without depending on field order.
pub fn emit_vault_created(
    env: &Env,
    token0: &Address,
    token1: &Address,
    fee: u32,
    vault: &Address,
) {
    let mut body: Map<Symbol, Val> = Map::new(env);
    body.set(Symbol::new(env, "_token0"), token0.into_val(env));
    body.set(Symbol::new(env, "_token1"), token1.into_val(env));
    body.set(Symbol::new(env, "_fee"), fee.into_val(env));
    body.set(Symbol::new(env, "_vault"), vault.into_val(env));

    env.events()
        .publish((Symbol::new(env, "VaultCreated"), token0.clone(), token1.clone()), body);
}

/// Emitted when governance is transferred
pub fn emit_governance_updated(env: &Env, old: &Address, new: &Address) {
    env.events().publish(
        (Symbol::new(env, "GovernanceUpdated"),),
        (old.clone(), new.clone()),
    );
}

pub fn emit_strategy_updated(env: &Env, strategy: &Option<Address>) {
    env.events()
        .publish((Symbol::new(env, "StrategyUpdated"),), strategy.clone());
}
