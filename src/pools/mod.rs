//! Pool state, swap engine and pool handles.
//!
//! [`DynamicFeePool`] is the owned pool: it holds a [`PoolState`] and
//! drives it through the [`SwapEngine`] and the deposit logic.
//! [`SharedPool`] puts the same pool behind a reader-writer lock for
//! multi-threaded callers.
//!
//! # Layers
//!
//! | Type | Access | Role |
//! |------|--------|------|
//! | [`PoolState`] | plain value | reserves, last price, fee tier |
//! | [`SwapEngine`] | borrows policy + config | computes the next state |
//! | [`DynamicFeePool`] | `&mut self` | commits swaps and deposits |
//! | [`SharedPool`] | `&self` + `RwLock` | serializes mutations across threads |

mod dynamic_fee;
mod engine;
mod liquidity;
mod shared;
mod state;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use dynamic_fee::DynamicFeePool;
pub use engine::SwapEngine;
pub use shared::SharedPool;
pub use state::PoolState;
