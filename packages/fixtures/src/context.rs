//! Ledger handle and signing identities passed to every fixture

use soroban_sdk::{testutils::Address as _, Address, Bytes, BytesN, Env};

use crate::error::FixtureError;

/// Network a fixture deploys into
///
/// Each context owns its ledger; fixtures never reach for shared state.
#[derive(Clone)]
pub struct NetworkContext {
    env: Env,
    signers: Vec<Address>,
}

impl NetworkContext {
    pub fn new(env: Env, signers: Vec<Address>) -> Self {
        Self { env, signers }
    }

    /// Fresh in-memory ledger with `signer_count` generated identities.
    ///
    /// Every authorization is mocked and the host budget is lifted, so
    /// deployments are limited only by the calls themselves.
    pub fn sandbox(signer_count: usize) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.budget().reset_unlimited();

        let signers = (0..signer_count).map(|_| Address::generate(&env)).collect();
        tracing::debug!(signer_count, "sandbox ledger ready");

        Self { env, signers }
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn signers(&self) -> &[Address] {
        &self.signers
    }

    pub fn signer(&self, index: usize) -> Result<Address, FixtureError> {
        self.signers
            .get(index)
            .cloned()
            .ok_or(FixtureError::MissingSigner {
                index,
                available: self.signers.len(),
            })
    }

    /// Code hash of the zero-byte executable the sandbox host dispatches
    /// to natively registered contracts
    pub fn native_code_hash(&self) -> BytesN<32> {
        self.env.deployer().upload_contract_wasm(Bytes::new(&self.env))
    }
}
