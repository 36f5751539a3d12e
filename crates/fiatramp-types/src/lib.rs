//! # fiatramp-types
//!
//! Shared types, errors, and configuration for the **FiatRamp** on-ramp
//! settlement gateway.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`UserId`], [`TransactionId`], [`PartnerId`]
//! - **User model**: [`User`], [`KycTier`]
//! - **Wallet model**: [`Wallet`]
//! - **Transaction model**: [`Transaction`], [`TransactionType`], [`TransactionStatus`]
//! - **Partner model**: [`PartnerAck`], [`AckStatus`]
//! - **Audit model**: [`AuditEvent`], [`AuditEventKind`]
//! - **Settlement model**: [`SettlementPhase`], [`SettlementOutcome`]
//! - **Configuration**: [`GatewayConfig`]
//! - **Errors**: [`GatewayError`] with `FR_ERR_` prefix codes
//! - **Constants**: system-wide limits and defaults

pub mod audit;
pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod partner;
pub mod settlement;
pub mod transaction;
pub mod user;
pub mod wallet;

// Re-export all primary types at crate root for ergonomic imports:
//   use fiatramp_types::{User, Wallet, Transaction, GatewayError, ...};

pub use audit::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use partner::*;
pub use settlement::*;
pub use transaction::*;
pub use user::*;
pub use wallet::*;

// Constants are accessed via `fiatramp_types::constants::FOO`
// (not re-exported to avoid name collisions).
