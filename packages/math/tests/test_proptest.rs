// Property-Based Testing with Proptest
// Run with: cargo test -p unipilot-math --test test_proptest

use proptest::prelude::*;
use unipilot_math::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: isqrt(n) is the floor square root
    #[test]
    fn prop_isqrt_is_floor(n in 0u128..u128::MAX) {
        let r = isqrt(n);
        prop_assert!(r * r <= n);
        let next = r + 1;
        prop_assert!(next.checked_mul(next).map_or(true, |sq| sq > n));
    }

    /// Property: equal reserves always encode to 1.0
    #[test]
    fn prop_equal_reserves_encode_one(r in 1u64..u64::MAX) {
        prop_assert_eq!(encode_price_sqrt(r, r), SQRT_PRICE_1_1);
    }

    /// Property: encoding is monotone in reserve1, up to the 2^-32
    /// truncation step of the widest shift
    #[test]
    fn prop_encode_monotone(
        reserve1 in 0u64..u64::MAX / 2,
        bump in 1u64..1_000_000,
        reserve0 in 1u64..u64::MAX
    ) {
        let lower = encode_price_sqrt(reserve1, reserve0);
        let higher = encode_price_sqrt(reserve1 + bump, reserve0);
        prop_assert!(higher + (1u128 << 32) >= lower);
    }

    /// Property: swapping reserves inverts the price around 1.0
    #[test]
    fn prop_encode_inverse_sides(
        reserve1 in 1u64..u64::MAX,
        reserve0 in 1u64..u64::MAX
    ) {
        let forward = encode_price_sqrt(reserve1, reserve0);
        let backward = encode_price_sqrt(reserve0, reserve1);
        if reserve1 > reserve0 {
            prop_assert!(forward >= SQRT_PRICE_1_1);
            prop_assert!(backward <= SQRT_PRICE_1_1);
        } else if reserve1 < reserve0 {
            prop_assert!(forward <= SQRT_PRICE_1_1);
            prop_assert!(backward >= SQRT_PRICE_1_1);
        }
    }
}
