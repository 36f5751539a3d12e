//! # fiatramp-gateway
//!
//! **HTTP plane**: the thin transport shell around the settlement core.
//!
//! One settlement endpoint (`POST /onramp`) plus a health probe. The
//! mutable core — user directory and settlement engine — sits behind a
//! single mutex, which serializes settlement calls (see DESIGN.md for the
//! serialization decision). Handlers translate the typed gateway errors
//! into stable HTTP codes; everything unexpected is logged with its cause
//! and erased to a generic 500.

pub mod api;
pub mod state;

pub use api::router;
pub use state::{AppState, GatewayCore};
