//! Error types for deployment fixtures

use amm_factory::AmmFactoryError;
use soroban_sdk::InvokeError;
use thiserror::Error;
use unipilot_factory::UnipilotFactoryError;
use unipilot_vault::UnipilotVaultError;

/// Failure of a deployment or creation step
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("signer #{index} requested, network context holds {available}")]
    MissingSigner { index: usize, available: usize },

    #[error("AMM factory rejected the call: {0:?}")]
    AmmFactory(AmmFactoryError),

    #[error("vault factory rejected the call: {0:?}")]
    VaultFactory(UnipilotFactoryError),

    #[error("vault rejected the call: {0:?}")]
    Vault(UnipilotVaultError),

    /// The host aborted the invocation, or a contract failed with a code
    /// the caller's interface does not declare
    #[error("invocation aborted: {0:?}")]
    Invoke(InvokeError),

    #[error("contract returned a value of an unexpected type")]
    Conversion,

    #[error(transparent)]
    CreationEvent(#[from] CreationEventNotFound),
}

/// The creation receipt does not name the created contract
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreationEventNotFound {
    #[error("no `{event}` event emitted by the expected contract")]
    NoMatchingEvent { event: String },

    #[error("`{event}` event carries no `{field}` field")]
    MissingField { event: String, field: String },

    #[error("`{field}` field of `{event}` is not an address")]
    InvalidField { event: String, field: String },
}

impl From<AmmFactoryError> for FixtureError {
    fn from(err: AmmFactoryError) -> Self {
        Self::AmmFactory(err)
    }
}

impl From<UnipilotFactoryError> for FixtureError {
    fn from(err: UnipilotFactoryError) -> Self {
        Self::VaultFactory(err)
    }
}

impl From<UnipilotVaultError> for FixtureError {
    fn from(err: UnipilotVaultError) -> Self {
        Self::Vault(err)
    }
}

impl From<InvokeError> for FixtureError {
    fn from(err: InvokeError) -> Self {
        Self::Invoke(err)
    }
}

impl From<soroban_sdk::Error> for FixtureError {
    fn from(err: soroban_sdk::Error) -> Self {
        Self::Invoke(InvokeError::from(err))
    }
}

/// Flatten the nested result of a generated `try_` client call
pub(crate) fn settle<T, C, E>(
    result: Result<Result<T, C>, Result<E, InvokeError>>,
) -> Result<T, FixtureError>
where
    FixtureError: From<E>,
{
    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(_)) => Err(FixtureError::Conversion),
        Err(Ok(err)) => Err(err.into()),
        Err(Err(invoke)) => Err(FixtureError::Invoke(invoke)),
    }
}
