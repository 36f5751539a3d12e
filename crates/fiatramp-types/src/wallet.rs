//! Fiat wallet model.
//!
//! One wallet per user, denominated in NGN (see
//! [`constants::FIAT_CURRENCY`](crate::constants::FIAT_CURRENCY)).
//! Invariant: `balance >= 0` at all times. Only the ledger mutates wallets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::UserId;

/// A user's fiat wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wallet {
    /// The owning user.
    pub user_id: UserId,
    /// Current fiat balance. Never negative.
    pub balance: Decimal,
}

impl Wallet {
    /// Create an empty wallet for a user.
    #[must_use]
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            balance: Decimal::ZERO,
        }
    }

    /// Whether the balance covers a debit of `amount`.
    #[must_use]
    pub fn can_cover(&self, amount: Decimal) -> bool {
        self.balance >= amount
    }

    /// Whether this wallet holds no funds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balance.is_zero()
    }
}
