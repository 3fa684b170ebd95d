//! # Unipilot fixtures
//!
//! Deployment harness for Unipilot vaults on a sandbox ledger.
//!
//! Dependencies are stood up leaves first:
//! 1. wrapped native asset and AMM factory ([`amm`])
//! 2. vault factory wired to the AMM ([`factory`])
//! 3. vault creation, with the vault address recovered from the
//!    factory's `VaultCreated` event ([`vault`], [`receipt`])
//!
//! [`unipilot_vault_fixture`] runs all three against a [`NetworkContext`].
//!
//! ```ignore
//! let ctx = NetworkContext::sandbox(2);
//! let fixture = unipilot_vault_fixture(&ctx)?;
//! let vault = fixture.create_vault(&params)?;
//! ```

pub mod amm;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod receipt;
pub mod vault;

pub use amm::{deploy_amm_contracts, deploy_amm_factory, deploy_wrapped_native, AmmSuite, WrappedNative};
pub use context::NetworkContext;
pub use error::{CreationEventNotFound, FixtureError};
pub use factory::{unipilot_factory_fixture, UnipilotFactoryFixture};
pub use fixture::{unipilot_vault_fixture, unipilot_vault_fixture_with, FixtureConfig, UnipilotVaultFixture};
pub use receipt::{extract_created_address, CreationReceipt, ReceiptEvent};
pub use unipilot_math::{encode_price_sqrt, SQRT_PRICE_1_1};
pub use vault::{VaultArtifact, VaultCreationParameters, VaultCreator};
