//! Audit event types for the FiatRamp observability trail.
//!
//! Every settlement outcome emits an [`AuditEvent`] through the audit trail.
//! Events are observational only: emission must never affect the settlement
//! result (the trail swallows sink failures).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of action an audit event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditEventKind {
    /// A settlement passed all gates: debit applied, transaction recorded,
    /// partner acknowledged.
    OnrampInitiated,
    /// A settlement was rejected by compliance or by the ledger.
    OnrampRejected,
}

impl fmt::Display for AuditEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnrampInitiated => write!(f, "ONRAMP_INITIATED"),
            Self::OnrampRejected => write!(f, "ONRAMP_REJECTED"),
        }
    }
}

/// A structured observability record: timestamp, event kind, payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// What happened.
    pub kind: AuditEventKind,
    /// Structured event payload (transaction id, user, amounts, ...).
    pub payload: serde_json::Value,
    /// When the event was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl AuditEvent {
    /// Build an event stamped with the current time.
    #[must_use]
    pub fn now(kind: AuditEventKind, payload: serde_json::Value) -> Self {
        Self {
            kind,
            payload,
            recorded_at: Utc::now(),
        }
    }
}
