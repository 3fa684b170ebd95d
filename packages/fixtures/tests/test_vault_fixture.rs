mod common;

use proptest::prelude::*;
use soroban_sdk::{String, Symbol};
use unipilot_factory::UnipilotFactoryError;
use unipilot_fixtures::{
    encode_price_sqrt, extract_created_address, unipilot_vault_fixture, unipilot_vault_fixture_with, FixtureConfig,
    FixtureError, NetworkContext, VaultCreationParameters, SQRT_PRICE_1_1,
};

#[test]
fn test_fixture_creates_usable_vault() {
    common::init_tracing();
    let ctx = NetworkContext::sandbox(2);
    let fixture = unipilot_vault_fixture(&ctx).unwrap();
    let token_a = common::create_token(&ctx);
    let token_b = common::create_token(&ctx);

    let vault = fixture
        .create_vault(&common::default_params(&ctx, &token_a, &token_b))
        .unwrap();

    // Handle answers reads consistent with the creation inputs
    let (token0, token1) = if token_a < token_b {
        (token_a.clone(), token_b.clone())
    } else {
        (token_b.clone(), token_a.clone())
    };
    assert!(vault.is_initialized());
    assert_eq!(vault.token0(), token0);
    assert_eq!(vault.token1(), token1);
    assert_eq!(vault.factory(), fixture.unipilot_factory.address);
    assert_eq!(vault.fee(), common::FEE_MEDIUM);
    assert_eq!(vault.name(), String::from_str(ctx.env(), "Unipilot LP"));
    assert_eq!(vault.symbol(), String::from_str(ctx.env(), "UP-LP"));

    let pool = fixture
        .amm_factory
        .get_pool_address(&token_a, &token_b, &common::FEE_MEDIUM)
        .unwrap();
    assert_eq!(vault.pool(), pool);

    let info = fixture.unipilot_factory.get_vault_info(&vault.address);
    assert_eq!(info.vault, vault.address);
    assert_eq!(info.sqrt_price_x64, SQRT_PRICE_1_1);
}

#[test]
fn test_fixture_identities() {
    let ctx = NetworkContext::sandbox(2);
    let fixture = unipilot_vault_fixture(&ctx).unwrap();

    assert_eq!(fixture.deployer, ctx.signer(0).unwrap());
    assert_eq!(fixture.other, ctx.signer(1).unwrap());
    assert_eq!(fixture.unipilot_factory.get_governance(), fixture.deployer);
    assert_eq!(fixture.unipilot_factory.get_amm_factory(), fixture.amm_factory.address);
    assert_eq!(fixture.unipilot_factory.get_strategy(), None);
    assert_eq!(fixture.amm_factory.get_admin(), fixture.deployer);
    assert_eq!(fixture.amm_factory.get_wrapped_native(), fixture.wrapped_native.address);
    assert_eq!(fixture.creator.factory(), &fixture.unipilot_factory.address);
}

#[test]
fn test_handle_matches_vault_created_event() {
    common::init_tracing();
    let ctx = NetworkContext::sandbox(2);
    let fixture = unipilot_vault_fixture(&ctx).unwrap();
    let token_a = common::create_token(&ctx);
    let token_b = common::create_token(&ctx);

    let (vault, receipt) = fixture
        .creator
        .create_vault_with_receipt(&common::default_params(&ctx, &token_a, &token_b))
        .unwrap();

    let emitted = extract_created_address(
        ctx.env(),
        &receipt,
        &fixture.unipilot_factory.address,
        "VaultCreated",
        "_vault",
    )
    .unwrap();
    assert_eq!(vault.address, emitted);

    // The pool was created in the same call and its event comes first
    assert_eq!(receipt.len(), 2);
    let first = &receipt.events()[0];
    assert_eq!(first.contract, fixture.amm_factory.address);
    assert_eq!(first.name(ctx.env()), Some(Symbol::new(ctx.env(), "PoolCreated")));
}

#[test]
fn test_second_vault_on_same_pool() {
    let ctx = NetworkContext::sandbox(2);
    let fixture = unipilot_vault_fixture(&ctx).unwrap();
    let token_a = common::create_token(&ctx);
    let token_b = common::create_token(&ctx);
    let params = common::default_params(&ctx, &token_a, &token_b);

    let first = fixture.create_vault(&params).unwrap();
    let (second, receipt) = fixture.creator.create_vault_with_receipt(&params).unwrap();

    assert_ne!(first.address, second.address);
    assert_eq!(first.pool(), second.pool());
    assert_eq!(receipt.len(), 1);
    assert_eq!(fixture.unipilot_factory.get_total_vaults(), 2);
    assert_eq!(fixture.amm_factory.get_total_pools(), 1);
}

#[test]
fn test_creation_errors_propagate() {
    let ctx = NetworkContext::sandbox(2);
    let fixture = unipilot_vault_fixture(&ctx).unwrap();
    let token_a = common::create_token(&ctx);
    let token_b = common::create_token(&ctx);

    let same_token = common::default_params(&ctx, &token_a, &token_a);
    assert!(matches!(
        fixture.create_vault(&same_token),
        Err(FixtureError::VaultFactory(UnipilotFactoryError::IdenticalTokens))
    ));

    let mut zero_price = common::default_params(&ctx, &token_a, &token_b);
    zero_price.sqrt_price_x64 = 0;
    assert!(matches!(
        fixture.create_vault(&zero_price),
        Err(FixtureError::VaultFactory(UnipilotFactoryError::InvalidSqrtPrice))
    ));

    let unknown_fee = VaultCreationParameters::new(
        ctx.env(),
        &token_a,
        &token_b,
        2500,
        SQRT_PRICE_1_1,
        "Unipilot LP",
        "UP-LP",
    );
    assert!(matches!(
        fixture.create_vault(&unknown_fee),
        Err(FixtureError::VaultFactory(UnipilotFactoryError::InvalidFeeTier))
    ));

    let mut no_name = common::default_params(&ctx, &token_a, &token_b);
    no_name.name = String::from_str(ctx.env(), "");
    assert!(matches!(
        fixture.create_vault(&no_name),
        Err(FixtureError::VaultFactory(UnipilotFactoryError::EmptyName))
    ));

    assert_eq!(fixture.unipilot_factory.get_total_vaults(), 0);
    assert_eq!(fixture.amm_factory.get_total_pools(), 0);
}

#[test]
fn test_fixture_with_strategy() {
    let ctx = NetworkContext::sandbox(3);
    let strategy = ctx.signer(2).unwrap();
    let config = FixtureConfig {
        strategy: Some(strategy.clone()),
        ..FixtureConfig::default()
    };

    let fixture = unipilot_vault_fixture_with(&ctx, &config).unwrap();

    assert_eq!(fixture.unipilot_factory.get_strategy(), Some(strategy));
}

#[test]
fn test_fixture_needs_two_signers() {
    let ctx = NetworkContext::sandbox(1);

    let result = unipilot_vault_fixture(&ctx);

    assert!(matches!(
        result,
        Err(FixtureError::MissingSigner { index: 1, available: 1 })
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn fuzz_valid_parameters_yield_bound_vault(
        fee in prop::sample::select(vec![500u32, 3000, 10000]),
        reserve1 in 1u64..1_000_000,
        reserve0 in 1u64..1_000_000,
    ) {
        let ctx = NetworkContext::sandbox(2);
        let fixture = unipilot_vault_fixture(&ctx).unwrap();
        let token_a = common::create_token(&ctx);
        let token_b = common::create_token(&ctx);
        let params = VaultCreationParameters::new(
            ctx.env(),
            &token_a,
            &token_b,
            fee,
            encode_price_sqrt(reserve1, reserve0),
            "Unipilot LP",
            "UP-LP",
        );

        let vault = fixture.create_vault(&params).unwrap();

        prop_assert!(vault.is_initialized());
        prop_assert_eq!(vault.fee(), fee);
        prop_assert_eq!(fixture.unipilot_factory.get_vault_info(&vault.address).vault, vault.address);
    }
}
