//! Unified error types for the dynamic-fee AMM.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type.  Every variant is recoverable: a failed operation leaves the
//! pool exactly as it was before the call.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Errors reported by pool, fee policy, configuration and registry
/// operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AmmError {
    /// A zero amount was supplied to a mutating operation.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A swap was attempted against a pool with a zero reserve on either side.
    #[error("pool has an empty reserve")]
    EmptyPool,

    /// The computed output amount is zero; the trade is rejected.
    #[error("swap would produce zero output")]
    ZeroOutput,

    /// An intermediate product, sum or quotient left the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A subtraction would have gone below zero.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The swap would drain the output reserve completely.
    #[error("insufficient liquidity for swap")]
    InsufficientLiquidity,

    /// A deposit deviates from the current reserve ratio beyond the
    /// configured tolerance.
    #[error("deposit ratio deviates from reserve ratio beyond tolerance")]
    DepositRatioMismatch,

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A token is not usable in the requested context.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// No pool is registered for the requested pair.
    #[error("pool not found")]
    PoolNotFound,

    /// A pool is already registered for the requested pair.
    #[error("pool already exists")]
    PoolAlreadyExists,
}
