//! User model for the FiatRamp gateway.
//!
//! Users are created externally (seeding or admin tooling) and mutated by
//! out-of-scope risk-scoring processes; the settlement flow only reads them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::UserId;

/// Know-Your-Customer verification level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KycTier {
    /// Basic identity captured; lowest limits.
    #[serde(rename = "TIER_1")]
    Tier1,
    /// Government ID verified.
    #[serde(rename = "TIER_2")]
    Tier2,
    /// Full verification including proof of address.
    #[serde(rename = "TIER_3")]
    Tier3,
}

impl fmt::Display for KycTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tier1 => write!(f, "TIER_1"),
            Self::Tier2 => write!(f, "TIER_2"),
            Self::Tier3 => write!(f, "TIER_3"),
        }
    }
}

/// A gateway user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Human-readable display name.
    pub display_name: String,
    /// KYC verification level.
    pub kyc_tier: KycTier,
    /// AML risk score in `0.0..=1.0`. Maintained by an out-of-scope
    /// risk-scoring pipeline; the compliance evaluator only reads it.
    pub risk_score: f64,
    /// Whether the account is active.
    pub active: bool,
}

impl User {
    /// Create an active user with a fresh id.
    #[must_use]
    pub fn new(display_name: impl Into<String>, kyc_tier: KycTier, risk_score: f64) -> Self {
        Self {
            id: UserId::new(),
            display_name: display_name.into(),
            kyc_tier,
            risk_score,
            active: true,
        }
    }
}
