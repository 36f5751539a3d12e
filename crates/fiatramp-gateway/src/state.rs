//! Shared application state.
//!
//! The user directory and the settlement engine live together behind one
//! `Arc<Mutex<_>>`: a settlement call holds the lock from user lookup to
//! outcome, so settlements are serialized and a per-user double-spend race
//! cannot occur.

use std::sync::{Arc, Mutex};

use fiatramp_ledger::UserDirectory;
use fiatramp_settlement::{AuditTrail, SettlementEngine, SimulatedPartnerClient, TracingAuditSink};
use fiatramp_types::{GatewayConfig, KycTier, User, UserId};
use rust_decimal::Decimal;

/// The mutable gateway core: users table + settlement engine (which owns
/// the wallet store and transaction log).
pub struct GatewayCore {
    pub users: UserDirectory,
    pub engine: SettlementEngine,
}

impl GatewayCore {
    /// Build a core with empty stores, a simulated partner client, and a
    /// tracing audit sink.
    #[must_use]
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            users: UserDirectory::new(),
            engine: SettlementEngine::new(
                config,
                Box::new(SimulatedPartnerClient::new()),
                AuditTrail::with_sink(Box::new(TracingAuditSink)),
            ),
        }
    }

    /// Register a user and open their wallet with an opening balance.
    pub fn add_user(&mut self, user: User, opening_balance: Decimal) -> UserId {
        let id = self.users.insert(user);
        self.engine.ledger_mut().credit(id, opening_balance);
        id
    }

    /// Seed the demo fixtures: one low-risk funded user and one user above
    /// the AML threshold. Their ids are logged so the API is usable
    /// immediately.
    pub fn seed_demo_users(&mut self) {
        let low_risk = self.add_user(
            User::new("Amaka Obi", KycTier::Tier2, 0.2),
            Decimal::new(15_000_000, 0),
        );
        let high_risk = self.add_user(
            User::new("Tunde Bello", KycTier::Tier1, 0.85),
            Decimal::new(3_000_000, 0),
        );
        tracing::info!(user_id = %low_risk, "seeded low-risk demo user");
        tracing::info!(user_id = %high_risk, "seeded high-risk demo user");
    }
}

/// Cloneable handle shared across request handlers.
#[derive(Clone)]
pub struct AppState {
    pub core: Arc<Mutex<GatewayCore>>,
}

impl AppState {
    /// State over an empty core.
    #[must_use]
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            core: Arc::new(Mutex::new(GatewayCore::new(config))),
        }
    }

    /// State with the demo fixtures seeded.
    #[must_use]
    pub fn seeded(config: GatewayConfig) -> Self {
        let state = Self::new(config);
        if let Ok(mut core) = state.core.lock() {
            core.seed_demo_users();
        }
        state
    }
}
