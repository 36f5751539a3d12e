//! # fiatramp-compliance
//!
//! **Compliance plane**: the pure rule gate every settlement must pass
//! before any balance mutation.
//!
//! ## Design Principles
//!
//! - **Fail-closed**: the first failing rule rejects the request
//! - **No bypass**: the orchestrator has no path to the ledger that skips
//!   the gate
//! - **Pure**: `evaluate` takes `&self` and has no side effects — the same
//!   inputs always produce the same decision

pub mod evaluator;

pub use evaluator::ComplianceEvaluator;
