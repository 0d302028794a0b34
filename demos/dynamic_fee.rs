//! Dynamic-fee AMM example.
//!
//! Demonstrates seeding a pool, watching the fee tier react to price
//! moves, comparing the informational and deducted fee modes, and routing
//! trades through a registry shared between threads.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=dynfee_amm=debug cargo run --example dynamic_fee
//! ```

use std::sync::Arc;
use std::thread;

use dynfee_amm::config::PoolConfig;
use dynfee_amm::domain::{Amount, FeeMode, SwapDirection, TokenAddress, TokenPair};
use dynfee_amm::pools::DynamicFeePool;
use dynfee_amm::registry::PoolRegistry;
use dynfee_amm::traits::{FromConfig, LiquidityPool, SwapPool};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Dynamic-Fee AMM (x · y = k) ===\n");

    // ── 1. Seed a pool with the default parameters ──────────────────────
    let config = PoolConfig::default();
    let policy = config.fee_policy();
    println!("Base fee:    {}", policy.base_fee());
    println!("Threshold:   {}", policy.volatility_threshold());
    println!("Surcharge:   {}", policy.surcharge());
    println!("Price scale: {}", config.price_scale());

    let mut pool = DynamicFeePool::from_config(&config)?;
    let balances = pool.add_liquidity(Amount::new(1_000), Amount::new(2_000))?;
    println!("\nSeeded:      {balances}");
    println!("Spot price:  {}", pool.spot_price()?);

    // ── 2. A sequence of swaps and the fee tier after each ──────────────
    println!("\n--- Swaps ---");
    for (direction, amount) in [
        (SwapDirection::XToY, 100),
        (SwapDirection::XToY, 200),
        (SwapDirection::YToX, 300),
        (SwapDirection::YToX, 1),
    ] {
        match pool.swap(direction, Amount::new(amount)) {
            Ok(result) => println!("  {result}"),
            Err(err) => println!("  {direction} in={amount} rejected: {err}"),
        }
    }
    println!("After swaps: {}", pool.balances());

    // ── 3. Same trade, both fee modes ───────────────────────────────────
    println!("\n--- Fee modes: sell 500 X into (1000, 2000) ---");
    for mode in [FeeMode::Informational, FeeMode::Deducted] {
        let mut pool = DynamicFeePool::from_config(&config.with_fee_mode(mode))?;
        pool.add_liquidity(Amount::new(1_000), Amount::new(2_000))?;
        let result = pool.swap(SwapDirection::XToY, Amount::new(500))?;
        println!("  {mode:?}: {result}");
    }

    // ── 4. A registry traded from several threads ───────────────────────
    let usdc = TokenAddress::from_bytes([1u8; 32]);
    let weth = TokenAddress::from_bytes([2u8; 32]);
    let pair = TokenPair::new(usdc, weth)?;

    let registry = Arc::new(PoolRegistry::default());
    registry
        .create(pair)?
        .add_liquidity(Amount::new(1_000_000), Amount::new(1_000_000))?;

    let handles: Vec<_> = [usdc, weth, usdc, weth]
        .into_iter()
        .map(|token_in| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.swap(&pair, &token_in, Amount::new(1_000)))
        })
        .collect();

    println!("\n--- Registry: {pair} ---");
    for handle in handles {
        match handle.join() {
            Ok(Ok(result)) => println!("  {result}"),
            Ok(Err(err)) => println!("  rejected: {err}"),
            Err(_) => println!("  worker panicked"),
        }
    }
    if let Some(pool) = registry.get(&pair) {
        println!("Final:       {}", pool.balances());
    }

    println!("\n=== Done ===");
    Ok(())
}
