//! Value types used throughout the pool.
//!
//! Every quantity the pool touches is an integer newtype: reserves and trade
//! sizes are [`Amount`]s, fee rates are [`BasisPoints`], and observed
//! exchange rates are scaled [`Price`]s.

mod amount;
mod balances;
mod basis_points;
mod fee_mode;
mod price;
mod rounding;
mod swap_direction;
mod swap_result;
mod token_address;
mod token_pair;

pub use amount::Amount;
pub use balances::Balances;
pub use basis_points::BasisPoints;
pub use fee_mode::FeeMode;
pub use price::{Price, DEFAULT_PRICE_SCALE};
pub use rounding::Rounding;
pub use swap_direction::SwapDirection;
pub use swap_result::SwapResult;
pub use token_address::TokenAddress;
pub use token_pair::TokenPair;
