//! Error types for the FiatRamp gateway.
//!
//! All errors use the `FR_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Compliance rejections
//! - 2xx: Ledger errors
//! - 3xx: Lookup errors
//! - 4xx: Partner errors
//! - 9xx: General / internal errors
//!
//! Compliance and ledger rejections are expected business outcomes, not
//! system faults: they carry a stable public code (see [`GatewayError::code`])
//! and are surfaced to the caller verbatim. Everything in the 4xx/9xx range
//! is logged with its full cause and erased to a generic external message.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{PartnerId, UserId};

/// Central error enum for all FiatRamp operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    // =================================================================
    // Compliance Rejections (1xx)
    // =================================================================
    /// The requested amount is zero or negative.
    #[error("FR_ERR_100: Invalid amount: {amount}")]
    InvalidAmount { amount: Decimal },

    /// The partner is not in the licensed partner set.
    #[error("FR_ERR_101: Partner is not licensed: {0}")]
    UnlicensedPartner(PartnerId),

    /// The requested amount exceeds the configured daily limit.
    #[error("FR_ERR_102: Amount {amount} exceeds daily limit {limit}")]
    LimitExceeded { amount: Decimal, limit: Decimal },

    /// The user's AML risk score exceeds the allowed threshold.
    #[error("FR_ERR_103: AML risk score {score} exceeds threshold {threshold}")]
    AmlRisk { score: f64, threshold: f64 },

    // =================================================================
    // Ledger Errors (2xx)
    // =================================================================
    /// Not enough fiat balance to cover the debit. The wallet is left
    /// unmodified.
    #[error("FR_ERR_200: Insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: Decimal, available: Decimal },

    // =================================================================
    // Lookup Errors (3xx)
    // =================================================================
    /// No user exists with this identifier.
    #[error("FR_ERR_300: User not found: {0}")]
    UserNotFound(UserId),

    /// The user exists but has no fiat wallet.
    #[error("FR_ERR_301: Wallet not found for user: {0}")]
    WalletNotFound(UserId),

    // =================================================================
    // Partner Errors (4xx)
    // =================================================================
    /// The external partner did not acknowledge the notification.
    #[error("FR_ERR_400: Partner notification failed: {reason}")]
    PartnerUnavailable { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("FR_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Configuration error (bad environment variable, empty partner set, etc.).
    #[error("FR_ERR_901: Configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, GatewayError>;

impl GatewayError {
    /// Stable public code for API responses. The HTTP layer keys off this,
    /// never off the display message.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
            Self::UnlicensedPartner(_) => "UNLICENSED_PARTNER",
            Self::LimitExceeded { .. } => "LIMIT_EXCEEDED",
            Self::AmlRisk { .. } => "AML_RISK",
            Self::InsufficientFunds { .. } => "INSUFFICIENT_FUNDS",
            Self::UserNotFound(_) | Self::WalletNotFound(_) => "NOT_FOUND",
            Self::PartnerUnavailable { .. } => "PARTNER_UNAVAILABLE",
            Self::Internal(_) | Self::Configuration(_) => "INTERNAL",
        }
    }

    /// Whether this is an expected business-rule rejection (compliance or
    /// ledger), as opposed to a client lookup error or a system fault.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount { .. }
                | Self::UnlicensedPartner(_)
                | Self::LimitExceeded { .. }
                | Self::AmlRisk { .. }
                | Self::InsufficientFunds { .. }
        )
    }

    /// Whether this is a missing-user / missing-wallet client error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::WalletNotFound(_))
    }
}
