//! Events emitted by a single invocation, and address recovery from them

use soroban_sdk::{testutils::Events, Address, Env, Map, Symbol, TryFromVal, Val, Vec as SorobanVec};

use crate::error::CreationEventNotFound;

/// One contract event as it appeared in a receipt
#[derive(Clone, Debug)]
pub struct ReceiptEvent {
    pub contract: Address,
    pub topics: SorobanVec<Val>,
    pub data: Val,
}

impl ReceiptEvent {
    /// First topic as a symbol, if it is one
    pub fn name(&self, env: &Env) -> Option<Symbol> {
        let first = self.topics.get(0)?;
        Symbol::try_from_val(env, &first).ok()
    }
}

/// Ordered events of one invocation, nested calls included
#[derive(Clone, Debug, Default)]
pub struct CreationReceipt {
    events: Vec<ReceiptEvent>,
}

impl CreationReceipt {
    pub fn new(events: Vec<ReceiptEvent>) -> Self {
        Self { events }
    }

    /// Run `call` and collect the events it emitted.
    ///
    /// The ledger's event log only grows, so the receipt is whatever was
    /// appended while `call` ran.
    pub fn capture<T>(env: &Env, call: impl FnOnce() -> T) -> (T, Self) {
        let before = env.events().all().len();
        let value = call();
        let all = env.events().all();

        let events = all
            .slice(before.min(all.len())..)
            .iter()
            .map(|(contract, topics, data)| ReceiptEvent {
                contract,
                topics,
                data,
            })
            .collect::<Vec<_>>();
        tracing::debug!(events = events.len(), "captured receipt");

        (value, Self { events })
    }

    pub fn events(&self) -> &[ReceiptEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Address field of the first `event_name` event emitted by `emitter`.
///
/// Events are selected by name and emitter, never by position, so extra
/// events from nested calls do not shift the result.
pub fn extract_created_address(
    env: &Env,
    receipt: &CreationReceipt,
    emitter: &Address,
    event_name: &str,
    field: &str,
) -> Result<Address, CreationEventNotFound> {
    let wanted = Symbol::new(env, event_name);

    let event = receipt
        .events()
        .iter()
        .find(|e| &e.contract == emitter && e.name(env).as_ref() == Some(&wanted))
        .ok_or_else(|| CreationEventNotFound::NoMatchingEvent {
            event: event_name.to_string(),
        })?;

    let missing = || CreationEventNotFound::MissingField {
        event: event_name.to_string(),
        field: field.to_string(),
    };

    let body = Map::<Symbol, Val>::try_from_val(env, &event.data).map_err(|_| missing())?;
    let value = body.get(Symbol::new(env, field)).ok_or_else(missing)?;

    Address::try_from_val(env, &value).map_err(|_| CreationEventNotFound::InvalidField {
        event: event_name.to_string(),
        field: field.to_string(),
    })
}
