//! Property-based tests using `proptest` for pool invariant validation.
//!
//! Covers six properties:
//!
//! 1. **Invariant preservation**: `k` never decreases when fees are deducted.
//! 2. **Reserve direction**: a swap grows the input reserve by exactly the
//!    input and shrinks the output reserve.
//! 3. **Fee tiers**: the fee is always base or base plus surcharge, and the
//!    surcharge applies exactly when the price moved past the threshold.
//! 4. **Idempotent reads**: repeated reads observe the same snapshot.
//! 5. **Atomic failure**: a rejected swap leaves the state untouched.
//! 6. **Mirror symmetry**: `y → x` on `(a, b)` equals `x → y` on `(b, a)`.

use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::domain::{Amount, BasisPoints, FeeMode, Price, SwapDirection};
use crate::fee::compute_fee;
use crate::pools::DynamicFeePool;
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn make_pool(config: &PoolConfig, x: u128, y: u128) -> DynamicFeePool {
    let Ok(mut pool) = DynamicFeePool::from_config(config) else {
        panic!("valid config");
    };
    let Ok(_) = pool.add_liquidity(Amount::new(x), Amount::new(y)) else {
        panic!("valid deposit");
    };
    pool
}

fn deducted() -> PoolConfig {
    PoolConfig::default().with_fee_mode(FeeMode::Deducted)
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Reserves large enough for meaningful swaps and small enough that
/// `x · y` fits in `u128`.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=1_000_000_000_000_000_000
}

fn amount_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000_000
}

fn direction_strategy() -> impl Strategy<Value = SwapDirection> {
    prop_oneof![Just(SwapDirection::XToY), Just(SwapDirection::YToX)]
}

// ---------------------------------------------------------------------------
// 1. Invariant preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invariant_non_decreasing_with_deducted_fee(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        swaps in prop::collection::vec((direction_strategy(), amount_strategy()), 1..10),
    ) {
        let mut pool = make_pool(&deducted(), rx, ry);
        for (direction, amount) in swaps {
            let Some(k_before) = pool.state().invariant() else {
                panic!("invariant fits");
            };
            if pool.swap(direction, Amount::new(amount)).is_ok() {
                let Some(k_after) = pool.state().invariant() else {
                    panic!("invariant fits");
                };
                prop_assert!(
                    k_after >= k_before,
                    "k decreased: {} -> {}", k_before, k_after
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Reserve direction
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_moves_reserves_in_trade_direction(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        direction in direction_strategy(),
        amount in amount_strategy(),
    ) {
        let mut pool = make_pool(&PoolConfig::default(), rx, ry);
        let before = pool.balances();
        if let Ok(result) = pool.swap(direction, Amount::new(amount)) {
            let after = pool.balances();
            let (in_before, out_before) = direction.orient(before.reserve_x, before.reserve_y);
            let (in_after, out_after) = direction.orient(after.reserve_x, after.reserve_y);
            prop_assert_eq!(in_after.get(), in_before.get() + amount);
            prop_assert_eq!(out_after.get() + result.amount_out().get(), out_before.get());
            prop_assert!(out_after < out_before);
            prop_assert!(!result.amount_out().is_zero());
        }
    }
}

// ---------------------------------------------------------------------------
// 3. Fee tiers
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_fee_is_base_or_elevated(
        last in any::<u128>(),
        new in any::<u128>(),
        base in 0u32..=9_990,
    ) {
        let base = BasisPoints::new(base);
        let fee = compute_fee(Price::new(last), Price::new(new), base);
        let moved = last.abs_diff(new) > 100;
        if moved {
            prop_assert_eq!(fee.get(), base.get() + 10);
        } else {
            prop_assert_eq!(fee, base);
        }
    }

    #[test]
    fn prop_pool_fee_tier_in_range(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        swaps in prop::collection::vec((direction_strategy(), amount_strategy()), 1..10),
    ) {
        let mut pool = make_pool(&PoolConfig::default(), rx, ry);
        for (direction, amount) in swaps {
            let _ = pool.swap(direction, Amount::new(amount));
            let fee = pool.balances().current_fee;
            prop_assert!(fee == BasisPoints::new(30) || fee == BasisPoints::new(40));
        }
    }
}

// ---------------------------------------------------------------------------
// 4. Idempotent reads
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_reads_are_idempotent(
        rx in reserve_strategy(),
        ry in reserve_strategy(),
        direction in direction_strategy(),
        amount in amount_strategy(),
    ) {
        let mut pool = make_pool(&PoolConfig::default(), rx, ry);
        let _ = pool.swap(direction, Amount::new(amount));
        let first = (pool.balances(), pool.state(), pool.spot_price());
        let second = (pool.balances(), pool.state(), pool.spot_price());
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// 5. Atomic failure
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_failed_swap_leaves_state_unchanged(
        rx in 1u128..=1_000,
        ry in 1u128..=1_000,
        direction in direction_strategy(),
        amount in 0u128..=1_000_000,
        deduct in any::<bool>(),
    ) {
        let cfg = if deduct { deducted() } else { PoolConfig::default() };
        let mut pool = make_pool(&cfg, rx, ry);
        let before = pool.state();
        if pool.swap(direction, Amount::new(amount)).is_err() {
            prop_assert_eq!(pool.state(), before);
        }
    }
}

// ---------------------------------------------------------------------------
// 6. Mirror symmetry
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_directions_mirror(
        a in reserve_strategy(),
        b in reserve_strategy(),
        amount in amount_strategy(),
    ) {
        let mut forward = make_pool(&PoolConfig::default(), a, b);
        let mut mirrored = make_pool(&PoolConfig::default(), b, a);
        let lhs = forward.swap(SwapDirection::XToY, Amount::new(amount));
        let rhs = mirrored.swap(SwapDirection::YToX, Amount::new(amount));
        match (lhs, rhs) {
            (Ok(l), Ok(r)) => {
                prop_assert_eq!(l.amount_out(), r.amount_out());
                prop_assert_eq!(l.price(), r.price());
                prop_assert_eq!(l.fee(), r.fee());
                let fb = forward.balances();
                let mb = mirrored.balances();
                prop_assert_eq!(fb.reserve_x, mb.reserve_y);
                prop_assert_eq!(fb.reserve_y, mb.reserve_x);
            }
            (Err(l), Err(r)) => prop_assert_eq!(l, r),
            (l, r) => prop_assert!(false, "directions disagree: {:?} vs {:?}", l, r),
        }
    }
}
