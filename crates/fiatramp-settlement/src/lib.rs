//! # fiatramp-settlement
//!
//! **Settlement plane**: the orchestrator that composes the compliance
//! gate, the fiat ledger, the transaction log, the partner notifier, and
//! the audit trail into one all-or-nothing operation per request.
//!
//! ## Settlement Flow
//!
//! ```text
//! Gateway → ComplianceEvaluator.evaluate()   (gate: abort on reject)
//!         → FiatLedger.debit()               (effect: abort on insufficient funds)
//!         → TransactionLog.record()          (effect: commits with the debit)
//!         → PartnerClient.initiate()         (side call)
//!         → AuditTrail.record()              (side effect: never aborts)
//!         → SettlementOutcome
//! ```
//!
//! A rejection before the debit leaves no trace beyond an audit event; a
//! partner failure after the debit leaves the debit and record in place
//! (see DESIGN.md for the compensation question).

pub mod audit_trail;
pub mod engine;
pub mod partner;

pub use audit_trail::{AuditSink, AuditTrail, MemoryAuditSink, TracingAuditSink};
pub use engine::SettlementEngine;
pub use partner::{PartnerClient, SimulatedPartnerClient};
