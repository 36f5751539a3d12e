//! Settlement lifecycle types.
//!
//! Each settlement request walks a linear state machine with no branching
//! back: **START → COMPLIANCE_CHECKED → DEBITED → RECORDED → NOTIFIED →
//! DONE**. A failure in the compliance or debit transition exits to the
//! terminal ABORTED state — no partial transaction is persisted and the
//! wallet is left untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{PartnerAck, TransactionId, TransactionStatus};

/// The per-request settlement phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettlementPhase {
    /// Request accepted, nothing evaluated yet.
    Start,
    /// Compliance gate passed.
    ComplianceChecked,
    /// Wallet debited.
    Debited,
    /// Transaction record persisted.
    Recorded,
    /// Partner acknowledged.
    Notified,
    /// Settlement returned to the caller.
    Done,
    /// Terminal failure exit (compliance or debit rejected).
    Aborted,
}

impl fmt::Display for SettlementPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "START"),
            Self::ComplianceChecked => write!(f, "COMPLIANCE_CHECKED"),
            Self::Debited => write!(f, "DEBITED"),
            Self::Recorded => write!(f, "RECORDED"),
            Self::Notified => write!(f, "NOTIFIED"),
            Self::Done => write!(f, "DONE"),
            Self::Aborted => write!(f, "ABORTED"),
        }
    }
}

impl SettlementPhase {
    /// Whether the machine can make no further transitions.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Aborted)
    }
}

/// The success value of a settlement call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementOutcome {
    /// The persisted transaction's id.
    pub transaction_id: TransactionId,
    /// Status of the persisted transaction.
    pub status: TransactionStatus,
    /// The partner's acknowledgement.
    pub acknowledgement: PartnerAck,
}
