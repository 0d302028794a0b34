//! Integration tests exercising the full system from config to pool operation.
//!
//! These tests verify end-to-end flows through the public API: the
//! reference trading scenarios, fee modes, concurrent trading through
//! `SharedPool`, and routing through the `PoolRegistry`.

#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;

use dynfee_amm::config::{FeePolicyConfig, PoolConfig};
use dynfee_amm::domain::{
    Amount, Balances, BasisPoints, FeeMode, Price, SwapDirection, TokenAddress, TokenPair,
};
use dynfee_amm::error::AmmError;
use dynfee_amm::fee::compute_fee;
use dynfee_amm::pools::{DynamicFeePool, SharedPool};
use dynfee_amm::registry::PoolRegistry;
use dynfee_amm::traits::{FromConfig, LiquidityPool, SwapPool};
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn empty_pool(config: &PoolConfig) -> DynamicFeePool {
    let Ok(pool) = DynamicFeePool::from_config(config) else {
        panic!("valid config");
    };
    pool
}

/// An empty default pool seeded with `(1000, 2000)`.
fn seeded_pool() -> DynamicFeePool {
    let mut pool = empty_pool(&PoolConfig::default());
    let Ok(_) = pool.add_liquidity(Amount::new(1_000), Amount::new(2_000)) else {
        panic!("valid deposit");
    };
    pool
}

fn addr(byte: u8) -> TokenAddress {
    TokenAddress::from_bytes([byte; 32])
}

fn pair(a: u8, b: u8) -> TokenPair {
    let Ok(pair) = TokenPair::new(addr(a), addr(b)) else {
        panic!("valid pair");
    };
    pair
}

// ---------------------------------------------------------------------------
// Reference scenarios
// ---------------------------------------------------------------------------

#[test]
fn initial_deposit_sets_balances() {
    init_tracing();
    let pool = seeded_pool();
    assert_eq!(
        pool.balances(),
        Balances {
            reserve_x: Amount::new(1_000),
            reserve_y: Amount::new(2_000),
            current_fee: BasisPoints::new(30),
        }
    );
}

#[test]
fn small_price_move_keeps_base_fee() {
    let fee = compute_fee(Price::new(1_000), Price::new(1_050), BasisPoints::new(30));
    assert_eq!(fee, BasisPoints::new(30));
}

#[test]
fn large_price_move_adds_surcharge() {
    let fee = compute_fee(Price::new(1_000), Price::new(1_200), BasisPoints::new(30));
    assert_eq!(fee, BasisPoints::new(40));
}

#[test]
fn single_swap_updates_reserves_and_fee() {
    init_tracing();
    let mut pool = seeded_pool();
    let Ok(out) = pool.swap_x_for_y(Amount::new(500)) else {
        panic!("expected Ok");
    };
    assert!(!out.is_zero());
    assert_eq!(out, Amount::new(667));

    let b = pool.balances();
    assert_eq!(b.reserve_x, Amount::new(1_500));
    assert!(b.reserve_y < Amount::new(2_000));
    assert_eq!(b.reserve_y, Amount::new(1_333));
    assert_eq!(b.current_fee, BasisPoints::new(40));
    assert_eq!(pool.state().last_price(), Price::new(749_625));
}

#[test]
fn sequential_swaps_track_previous_price() {
    init_tracing();
    let mut pool = seeded_pool();
    let (Ok(first), Ok(second)) = (
        pool.swap_x_for_y(Amount::new(100)),
        pool.swap_x_for_y(Amount::new(200)),
    ) else {
        panic!("expected Ok");
    };
    assert_eq!(first, Amount::new(182));
    assert_eq!(second, Amount::new(280));

    let b = pool.balances();
    assert_eq!(b.reserve_x, Amount::new(1_300));
    assert!(b.reserve_y < Amount::new(2_000));
    assert_eq!(b.reserve_y, Amount::new(1_538));
    // 549 450 → 714 285 is a move of 164 835, well past the threshold.
    assert_eq!(b.current_fee, BasisPoints::new(40));
}

// ---------------------------------------------------------------------------
// Full lifecycle
// ---------------------------------------------------------------------------

#[test]
fn deducted_round_trip_does_not_profit() {
    let cfg = PoolConfig::default().with_fee_mode(FeeMode::Deducted);
    let mut pool = empty_pool(&cfg);
    let Ok(_) = pool.add_liquidity(Amount::new(1_000), Amount::new(2_000)) else {
        panic!("valid deposit");
    };
    let Ok(y_out) = pool.swap_x_for_y(Amount::new(500)) else {
        panic!("expected Ok");
    };
    assert_eq!(y_out, Amount::new(664));
    let Ok(x_back) = pool.swap_y_for_x(y_out) else {
        panic!("expected Ok");
    };
    assert_eq!(x_back, Amount::new(496));
    assert!(x_back <= Amount::new(500));
}

#[test]
fn informational_round_trip_rounds_toward_trader() {
    let mut pool = seeded_pool();
    let Ok(y_out) = pool.swap_x_for_y(Amount::new(500)) else {
        panic!("expected Ok");
    };
    assert_eq!(y_out, Amount::new(667));
    // (1500, 1333): the floored output reserve hands back one extra unit.
    let Ok(x_back) = pool.swap_y_for_x(y_out) else {
        panic!("expected Ok");
    };
    assert_eq!(x_back, Amount::new(501));
    assert_eq!(pool.balances().reserve_x, Amount::new(999));
    assert_eq!(pool.balances().reserve_y, Amount::new(2_000));
}

#[test]
fn oversized_swap_empties_output_reserve() {
    let mut pool = seeded_pool();
    assert_eq!(
        pool.swap_x_for_y(Amount::new(10_000_000)),
        Ok(Amount::new(2_000))
    );
    assert_eq!(pool.balances().reserve_x, Amount::new(10_001_000));
    assert_eq!(pool.balances().reserve_y, Amount::ZERO);
    assert_eq!(
        pool.swap_x_for_y(Amount::new(1)),
        Err(AmmError::EmptyPool)
    );
}

#[test]
fn drain_guard_rejects_oversized_swap() {
    let cfg = PoolConfig::default().with_drain_guard(true);
    let mut pool = empty_pool(&cfg);
    let Ok(_) = pool.add_liquidity(Amount::new(1_000), Amount::new(2_000)) else {
        panic!("valid deposit");
    };
    assert_eq!(
        pool.swap_x_for_y(Amount::new(10_000_000)),
        Err(AmmError::InsufficientLiquidity)
    );
    assert_eq!(pool.balances().reserve_y, Amount::new(2_000));
}

#[test]
fn fee_falls_back_to_base_once_price_settles() {
    let Ok(policy) = FeePolicyConfig::new(BasisPoints::new(30), 100, BasisPoints::new(10)) else {
        panic!("valid policy");
    };
    let cfg = PoolConfig::default().with_fee_policy(policy);
    let mut pool = empty_pool(&cfg);
    let Ok(_) = pool.add_liquidity(
        Amount::new(1_000_000_000_000),
        Amount::new(1_000_000_000_000),
    ) else {
        panic!("valid deposit");
    };

    // The first swap always jumps from zero.
    let Ok(_) = pool.swap_x_for_y(Amount::new(1_000)) else {
        panic!("expected Ok");
    };
    assert_eq!(pool.balances().current_fee, BasisPoints::new(40));

    // Tiny follow-up swaps on deep reserves barely move the price.
    let Ok(_) = pool.swap_x_for_y(Amount::new(1_000)) else {
        panic!("expected Ok");
    };
    assert_eq!(pool.balances().current_fee, BasisPoints::new(30));
}

#[test]
fn deducted_mode_grows_invariant() {
    let cfg = PoolConfig::default().with_fee_mode(FeeMode::Deducted);
    let mut pool = empty_pool(&cfg);
    let Ok(_) = pool.add_liquidity(Amount::new(1_000), Amount::new(2_000)) else {
        panic!("valid deposit");
    };
    let Some(k_before) = pool.state().invariant() else {
        panic!("invariant fits");
    };
    let Ok(result) = pool.swap(SwapDirection::XToY, Amount::new(500)) else {
        panic!("expected Ok");
    };
    assert_eq!(result.fee_amount(), Amount::new(2));
    assert_eq!(result.amount_out(), Amount::new(664));
    let Some(k_after) = pool.state().invariant() else {
        panic!("invariant fits");
    };
    assert!(k_after >= k_before);
}

#[test]
fn quote_then_swap_agree() {
    let mut pool = seeded_pool();
    let Ok(quoted) = pool.quote(SwapDirection::YToX, Amount::new(300)) else {
        panic!("expected Ok");
    };
    let Ok(executed) = pool.swap(SwapDirection::YToX, Amount::new(300)) else {
        panic!("expected Ok");
    };
    assert_eq!(quoted, executed);
}

// ---------------------------------------------------------------------------
// Error paths leave the pool untouched
// ---------------------------------------------------------------------------

#[test]
fn swap_on_empty_pool() {
    let mut pool = empty_pool(&PoolConfig::default());
    assert_eq!(pool.swap_x_for_y(Amount::new(1)), Err(AmmError::EmptyPool));
    assert_eq!(pool.spot_price(), Err(AmmError::EmptyPool));
}

#[test]
fn zero_amounts_rejected() {
    let mut pool = seeded_pool();
    let before = pool.state();
    assert!(matches!(
        pool.swap_y_for_x(Amount::ZERO),
        Err(AmmError::InvalidInput(_))
    ));
    assert!(matches!(
        pool.add_liquidity(Amount::ZERO, Amount::new(1)),
        Err(AmmError::InvalidInput(_))
    ));
    assert_eq!(pool.state(), before);
}

#[test]
fn zero_output_rejected_in_deducted_mode() {
    let cfg = PoolConfig::default().with_fee_mode(FeeMode::Deducted);
    let mut pool = empty_pool(&cfg);
    let Ok(_) = pool.add_liquidity(Amount::new(1_000_000), Amount::new(1_000)) else {
        panic!("valid deposit");
    };
    let before = pool.state();
    assert_eq!(
        pool.swap_x_for_y(Amount::new(1_000)),
        Err(AmmError::ZeroOutput)
    );
    assert_eq!(pool.state(), before);
}

#[test]
fn overflowing_reserves_rejected() {
    let mut pool = empty_pool(&PoolConfig::default());
    let Ok(_) = pool.add_liquidity(Amount::new(1 << 64), Amount::new(1 << 64)) else {
        panic!("valid deposit");
    };
    let before = pool.state();
    assert!(matches!(
        pool.swap_x_for_y(Amount::new(1)),
        Err(AmmError::Overflow(_))
    ));
    assert_eq!(pool.state(), before);
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[test]
fn shared_pool_serializes_writers_and_readers() {
    init_tracing();
    let Ok(pool) = SharedPool::from_config(&PoolConfig::default()) else {
        panic!("valid config");
    };
    let Ok(_) = pool.add_liquidity(Amount::new(10_000_000), Amount::new(10_000_000)) else {
        panic!("valid deposit");
    };
    let pool = Arc::new(pool);

    let writers: Vec<_> = (0..4)
        .map(|_| {
            let pool = Arc::clone(&pool);
            thread::spawn(move || {
                for _ in 0..100 {
                    assert!(pool.swap_x_for_y(Amount::new(100)).is_ok());
                }
            })
        })
        .collect();
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let pool = Arc::clone(&pool);
            thread::spawn(move || {
                for _ in 0..100 {
                    let b = pool.balances();
                    // Every committed snapshot has x grown by a whole number of swaps.
                    assert_eq!((b.reserve_x.get() - 10_000_000) % 100, 0);
                    assert!(b.reserve_y <= Amount::new(10_000_000));
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        assert!(handle.join().is_ok());
    }
    assert_eq!(pool.balances().reserve_x, Amount::new(10_040_000));
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

#[test]
fn registry_routes_independent_markets() {
    init_tracing();
    let registry = PoolRegistry::default();
    let (Ok(ab), Ok(cd)) = (registry.create(pair(1, 2)), registry.create(pair(3, 4))) else {
        panic!("expected Ok");
    };
    let (Ok(_), Ok(_)) = (
        ab.add_liquidity(Amount::new(1_000), Amount::new(2_000)),
        cd.add_liquidity(Amount::new(2_000), Amount::new(1_000)),
    ) else {
        panic!("valid deposits");
    };

    // Selling token 1 is X → Y in pool (1, 2); selling token 4 is Y → X in (3, 4).
    let (Ok(r1), Ok(r2)) = (
        registry.swap(&pair(2, 1), &addr(1), Amount::new(500)),
        registry.swap(&pair(3, 4), &addr(4), Amount::new(500)),
    ) else {
        panic!("expected Ok");
    };
    assert_eq!(r1.direction(), SwapDirection::XToY);
    assert_eq!(r2.direction(), SwapDirection::YToX);
    assert_eq!(r1.amount_out(), r2.amount_out());

    assert_eq!(registry.pairs(), vec![pair(1, 2), pair(3, 4)]);
    assert!(registry.remove(&pair(1, 2)).is_ok());
    assert!(matches!(
        registry.swap(&pair(1, 2), &addr(1), Amount::new(1)),
        Err(AmmError::PoolNotFound)
    ));
}

#[test]
fn identical_tokens_rejected() {
    assert!(matches!(
        TokenPair::new(addr(7), addr(7)),
        Err(AmmError::InvalidToken(_))
    ));
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
#[test]
fn config_round_trips_through_json() {
    let cfg = PoolConfig::default()
        .with_fee_mode(FeeMode::Deducted)
        .with_deposit_tolerance(BasisPoints::new(50))
        .with_drain_guard(true);
    let Ok(json) = serde_json::to_string(&cfg) else {
        panic!("serializable");
    };
    let Ok(back) = serde_json::from_str::<PoolConfig>(&json) else {
        panic!("deserializable");
    };
    assert_eq!(back, cfg);
}
