//! Chain-agnostic token identifier.

use core::fmt;

/// Identifies one of the two assets a pool trades.
///
/// Wraps a fixed-size `[u8; 32]` byte array; every byte sequence is a valid
/// address.  The ordering of addresses decides which token of a
/// [`TokenPair`](super::TokenPair) plays the X role.
///
/// # Examples
///
/// ```
/// use dynfee_amm::domain::TokenAddress;
///
/// let addr = TokenAddress::from_bytes([1u8; 32]);
/// assert_eq!(addr.as_bytes(), [1u8; 32]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenAddress([u8; 32]);

impl TokenAddress {
    /// Creates a `TokenAddress` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

/// Lowercase hex of the first four bytes, enough to tell pools apart in logs.
impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter().take(4) {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "…")
    }
}
