//! Player identity: an opaque wallet address plus a display name.
//!
//! The core treats the address as a storage key and never interprets it, but
//! a malformed address must make the dependent operation fail up front rather
//! than corrupt per-player state, so the shape is checked once at
//! construction.

use serde::{Deserialize, Serialize};
use std::fmt;

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Minimum/maximum length of a base58-encoded Solana address.
const MIN_ADDRESS_LEN: usize = 32;
const MAX_ADDRESS_LEN: usize = 44;

/// Rejection reason for a malformed identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityError {
    EmptyAddress,
    BadLength,
    NotBase58,
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityError::EmptyAddress => write!(f, "address is empty"),
            IdentityError::BadLength => write!(
                f,
                "address length outside {}..={} characters",
                MIN_ADDRESS_LEN, MAX_ADDRESS_LEN
            ),
            IdentityError::NotBase58 => write!(f, "address contains non-base58 characters"),
        }
    }
}

/// True if `address` has the shape of a base58 wallet address.
pub fn is_valid_address(address: &str) -> bool {
    validate_address(address).is_ok()
}

fn validate_address(address: &str) -> Result<(), IdentityError> {
    if address.is_empty() {
        return Err(IdentityError::EmptyAddress);
    }
    if address.len() < MIN_ADDRESS_LEN || address.len() > MAX_ADDRESS_LEN {
        return Err(IdentityError::BadLength);
    }
    if !address.chars().all(|c| BASE58_ALPHABET.contains(c)) {
        return Err(IdentityError::NotBase58);
    }
    Ok(())
}

/// A validated player identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIdentity {
    pub address: String,
    pub display_name: String,
}

impl PlayerIdentity {
    /// Validates the address shape; the display name is free-form and falls
    /// back to a truncated address when blank.
    pub fn new(address: impl Into<String>, display_name: impl Into<String>) -> Result<Self, IdentityError> {
        let address = address.into();
        validate_address(&address)?;
        let display_name = display_name.into();
        let display_name = if display_name.trim().is_empty() {
            short_address(&address)
        } else {
            display_name
        };
        Ok(Self {
            address,
            display_name,
        })
    }
}

impl fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, short_address(&self.address))
    }
}

/// Abbreviated address for display: first and last four characters.
pub fn short_address(address: &str) -> String {
    if address.len() <= 8 {
        address.to_string()
    } else {
        format!("{}..{}", &address[..4], &address[address.len() - 4..])
    }
}
