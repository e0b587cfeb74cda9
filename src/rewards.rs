//! Reward issuance collaborator.
//!
//! Quest claims pay out through an injected [`RewardIssuer`]; the quest
//! tracker only marks a quest claimed after the issuer acknowledges success,
//! so a transient failure leaves the quest completed-but-unclaimed for retry
//! and double issuance cannot happen.

use crate::identity::is_valid_address;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Why an issuance attempt failed. All variants are retryable from the quest
/// tracker's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewardError {
    /// The treasury backing the rewards is not configured or unreachable.
    TreasuryUnavailable,
    /// The treasury cannot cover the requested amount.
    InsufficientTreasury { needed: u64, available: u64 },
    /// The recipient address failed validation.
    InvalidRecipient,
    /// The backend rejected the transfer.
    Rejected(String),
}

impl fmt::Display for RewardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewardError::TreasuryUnavailable => write!(f, "treasury unavailable"),
            RewardError::InsufficientTreasury { needed, available } => write!(
                f,
                "insufficient treasury balance: need {} lamports, have {}",
                needed, available
            ),
            RewardError::InvalidRecipient => write!(f, "invalid recipient address"),
            RewardError::Rejected(reason) => write!(f, "transfer rejected: {}", reason),
        }
    }
}

/// Record of a successful payout, mirrored into the claim result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardReceipt {
    /// Opaque transaction reference from the backend.
    pub signature: String,
    pub lamports: u64,
    pub recipient: String,
    pub timestamp: i64,
}

/// Something that can move lamports to a player. Implementations may fail
/// transiently; callers must treat failure as "not claimed".
pub trait RewardIssuer {
    fn issue_reward(&mut self, recipient: &str, lamports: u64) -> Result<RewardReceipt, RewardError>;
}

/// Offline issuer backed by a local balance counter. Stands in for the real
/// treasury service in the terminal build and enforces the same invariants:
/// recipient validation and balance checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalTreasury {
    pub balance_lamports: u64,
    issued_count: u64,
}

impl LocalTreasury {
    pub fn new(balance_lamports: u64) -> Self {
        Self {
            balance_lamports,
            issued_count: 0,
        }
    }
}

impl RewardIssuer for LocalTreasury {
    fn issue_reward(&mut self, recipient: &str, lamports: u64) -> Result<RewardReceipt, RewardError> {
        if !is_valid_address(recipient) {
            return Err(RewardError::InvalidRecipient);
        }
        if self.balance_lamports < lamports {
            return Err(RewardError::InsufficientTreasury {
                needed: lamports,
                available: self.balance_lamports,
            });
        }
        self.balance_lamports -= lamports;
        self.issued_count += 1;
        Ok(RewardReceipt {
            signature: format!("local-{:08}-{}", self.issued_count, &recipient[..4]),
            lamports,
            recipient: recipient.to_string(),
            timestamp: chrono::Utc::now().timestamp(),
        })
    }
}
