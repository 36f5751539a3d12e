//! Fiat wallet store — the Ledger Mutator.
//!
//! Tracks one NGN wallet per user. All mutations are atomic: the debit
//! rejects before touching the balance, so a failed call leaves the wallet
//! exactly as it was. Invariant: every balance stays >= 0.

use std::collections::HashMap;

use fiatramp_types::{GatewayError, Result, UserId, Wallet};
use rust_decimal::Decimal;

/// Manages user fiat wallets.
///
/// The FiatLedger is the source of truth for all balance state. The
/// settlement engine calls into it to debit funds once compliance passes.
pub struct FiatLedger {
    /// Per-user wallets.
    wallets: HashMap<UserId, Wallet>,
}

impl FiatLedger {
    /// Create a new empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            wallets: HashMap::new(),
        }
    }

    /// Create a zero wallet for a user if one does not exist.
    pub fn open_wallet(&mut self, user_id: UserId) {
        self.wallets
            .entry(user_id)
            .or_insert_with(|| Wallet::new(user_id));
    }

    /// Credit funds (seeding / deposit path). Creates the wallet if absent.
    pub fn credit(&mut self, user_id: UserId, amount: Decimal) {
        let wallet = self
            .wallets
            .entry(user_id)
            .or_insert_with(|| Wallet::new(user_id));
        wallet.balance += amount;
    }

    /// Debit funds. Decrements the balance by exactly `amount` and returns
    /// the new balance.
    ///
    /// # Errors
    /// - `WalletNotFound` if the user has no wallet
    /// - `InsufficientFunds` if `balance < amount`
    ///
    /// In both cases the wallet is left unmodified.
    pub fn debit(&mut self, user_id: UserId, amount: Decimal) -> Result<Decimal> {
        let wallet = self
            .wallets
            .get_mut(&user_id)
            .ok_or(GatewayError::WalletNotFound(user_id))?;

        if wallet.balance < amount {
            return Err(GatewayError::InsufficientFunds {
                needed: amount,
                available: wallet.balance,
            });
        }

        wallet.balance -= amount;
        Ok(wallet.balance)
    }

    /// Look up a user's wallet.
    #[must_use]
    pub fn wallet(&self, user_id: UserId) -> Option<&Wallet> {
        self.wallets.get(&user_id)
    }

    /// A user's current balance.
    ///
    /// # Errors
    /// Returns `WalletNotFound` if the user has no wallet.
    pub fn balance(&self, user_id: UserId) -> Result<Decimal> {
        self.wallets
            .get(&user_id)
            .map(|w| w.balance)
            .ok_or(GatewayError::WalletNotFound(user_id))
    }

    /// Total fiat held across all wallets (for invariant checks).
    #[must_use]
    pub fn total_float(&self) -> Decimal {
        self.wallets.values().map(|w| w.balance).sum()
    }
}

impl Default for FiatLedger {
    fn default() -> Self {
        Self::new()
    }
}
