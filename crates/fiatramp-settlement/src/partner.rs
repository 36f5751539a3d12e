//! Partner notification seam.
//!
//! The orchestrator talks to the external licensed partner through the
//! [`PartnerClient`] trait, so the simulated client used here is a drop-in
//! swap for a real network client without touching the orchestrator.

use fiatramp_types::{AckStatus, PartnerAck, PartnerId, Result, UserId};
use rust_decimal::Decimal;

/// Capability to notify an external licensed partner of an on-ramp.
pub trait PartnerClient: Send {
    /// Notify the partner and return its acknowledgement. The user id is
    /// passed as the external reference the partner keys the notification by.
    ///
    /// # Errors
    /// Returns `PartnerUnavailable` when the partner cannot acknowledge.
    fn initiate(
        &mut self,
        partner_id: &PartnerId,
        reference: UserId,
        amount: Decimal,
    ) -> Result<PartnerAck>;
}

/// Synchronous simulated partner with no network effect. Always acknowledges.
pub struct SimulatedPartnerClient;

impl SimulatedPartnerClient {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimulatedPartnerClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PartnerClient for SimulatedPartnerClient {
    fn initiate(
        &mut self,
        partner_id: &PartnerId,
        reference: UserId,
        amount: Decimal,
    ) -> Result<PartnerAck> {
        tracing::debug!(
            partner_id = %partner_id,
            reference = %reference,
            amount = %amount,
            "simulated partner notification"
        );
        Ok(PartnerAck {
            partner_id: partner_id.clone(),
            reference,
            amount,
            status: AckStatus::Received,
        })
    }
}
