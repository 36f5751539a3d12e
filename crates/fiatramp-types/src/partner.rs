//! Partner acknowledgement types.
//!
//! The external licensed partner (VASP) acknowledges every on-ramp
//! notification with a [`PartnerAck`]; the user id doubles as the external
//! reference the partner keys the notification by.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PartnerId, UserId};

/// Acknowledgement status reported by the partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AckStatus {
    /// The partner received the notification.
    #[serde(rename = "RECEIVED")]
    Received,
}

impl fmt::Display for AckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Received => write!(f, "RECEIVED"),
        }
    }
}

/// A partner's synchronous acknowledgement of an on-ramp notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartnerAck {
    /// The partner that acknowledged.
    pub partner_id: PartnerId,
    /// External reference — the gateway user id.
    pub reference: UserId,
    /// The acknowledged fiat amount.
    pub amount: Decimal,
    /// Acknowledgement status.
    pub status: AckStatus,
}
