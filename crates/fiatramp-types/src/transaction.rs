//! Transaction model — the immutable intent record of a settlement attempt.
//!
//! A `Transaction` is created once per attempt, after compliance passes and
//! paired with a successful debit. It is append-only in this flow: created
//! here, never updated afterward. The `Complete`/`Failed` statuses belong to
//! the lifecycle owned by downstream reconciliation.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PartnerId, TransactionId, UserId};

/// The kind of flow a transaction belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// Fiat in, digital assets out.
    #[serde(rename = "ONRAMP")]
    Onramp,
    /// Digital assets in, fiat out. Not settled by this gateway yet.
    #[serde(rename = "OFFRAMP")]
    Offramp,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Onramp => write!(f, "ONRAMP"),
            Self::Offramp => write!(f, "OFFRAMP"),
        }
    }
}

/// Settlement status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Debited and handed to the partner; awaiting downstream finality.
    #[serde(rename = "PROCESSING")]
    Processing,
    /// Confirmed by the partner network.
    #[serde(rename = "COMPLETE")]
    Complete,
    /// Terminally failed downstream.
    #[serde(rename = "FAILED")]
    Failed,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Processing => write!(f, "PROCESSING"),
            Self::Complete => write!(f, "COMPLETE"),
            Self::Failed => write!(f, "FAILED"),
        }
    }
}

/// An immutable settlement intent record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Globally unique transaction identifier.
    pub id: TransactionId,
    /// The user whose wallet was debited.
    pub user_id: UserId,
    /// Debited fiat amount (NGN).
    pub amount: Decimal,
    /// Flow kind.
    pub tx_type: TransactionType,
    /// The licensed partner notified for this settlement.
    pub partner_id: PartnerId,
    /// Settlement status. Initialized to `Processing`.
    pub status: TransactionStatus,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a fresh `Processing` record with a newly generated id,
    /// timestamped now.
    #[must_use]
    pub fn new(
        user_id: UserId,
        amount: Decimal,
        tx_type: TransactionType,
        partner_id: PartnerId,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            user_id,
            amount,
            tx_type,
            partner_id,
            status: TransactionStatus::Processing,
            created_at: Utc::now(),
        }
    }
}
