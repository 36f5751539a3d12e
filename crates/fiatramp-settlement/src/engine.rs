//! Settlement orchestrator.
//!
//! One call, one linear pass:
//! 1. Evaluate compliance (abort on reject — nothing mutated)
//! 2. Debit the wallet (abort on insufficient funds — wallet unchanged)
//! 3. Record the transaction (commits together with the debit)
//! 4. Notify the partner
//! 5. Emit the audit event (never aborts)
//!
//! The debit and the record form one unit of work: the ledger rejects
//! before any mutation and the append-only log cannot fail after it, so a
//! debit without its record is unobservable. A partner failure after the
//! debit is NOT rolled back; the cause is logged and surfaced as
//! `PartnerUnavailable` (compensation policy: see DESIGN.md).

use fiatramp_compliance::ComplianceEvaluator;
use fiatramp_ledger::{FiatLedger, TransactionLog};
use fiatramp_types::{
    AuditEventKind, GatewayConfig, GatewayError, PartnerId, Result, SettlementOutcome,
    SettlementPhase, TransactionType, User,
};
use rust_decimal::Decimal;
use serde_json::json;

use crate::audit_trail::AuditTrail;
use crate::partner::PartnerClient;

/// Composes the compliance gate, ledger, transaction log, partner client,
/// and audit trail into one settlement operation per request.
///
/// The engine assumes exclusive access for the duration of one `settle`
/// call; the gateway serializes calls around it (see DESIGN.md).
pub struct SettlementEngine {
    evaluator: ComplianceEvaluator,
    ledger: FiatLedger,
    log: TransactionLog,
    partner: Box<dyn PartnerClient>,
    audit: AuditTrail,
}

impl SettlementEngine {
    /// Build an engine with empty stores.
    #[must_use]
    pub fn new(config: GatewayConfig, partner: Box<dyn PartnerClient>, audit: AuditTrail) -> Self {
        Self {
            evaluator: ComplianceEvaluator::new(config),
            ledger: FiatLedger::new(),
            log: TransactionLog::new(),
            partner,
            audit,
        }
    }

    /// Settle one on-ramp request.
    ///
    /// # Errors
    /// - the compliance rejections (`InvalidAmount`, `UnlicensedPartner`,
    ///   `LimitExceeded`, `AmlRisk`) — no state mutated
    /// - `WalletNotFound` / `InsufficientFunds` — no state mutated
    /// - `PartnerUnavailable` — the debit and record stand
    pub fn settle(
        &mut self,
        user: &User,
        partner_id: &PartnerId,
        amount: Decimal,
    ) -> Result<SettlementOutcome> {
        // 1. Compliance gate.
        if let Err(err) = self.evaluator.evaluate(user, amount, partner_id) {
            self.audit_reject(user, partner_id, amount, SettlementPhase::Start, &err);
            return Err(err);
        }

        // 2 + 3. Debit and record, committing together.
        let new_balance = match self.ledger.debit(user.id, amount) {
            Ok(balance) => balance,
            Err(err) => {
                self.audit_reject(
                    user,
                    partner_id,
                    amount,
                    SettlementPhase::ComplianceChecked,
                    &err,
                );
                return Err(err);
            }
        };
        let tx = self
            .log
            .record(user.id, amount, TransactionType::Onramp, partner_id.clone());

        // 4. Partner notification. Not rolled back on failure.
        let ack = match self.partner.initiate(partner_id, user.id, amount) {
            Ok(ack) => ack,
            Err(err) => {
                tracing::error!(
                    transaction_id = %tx.id,
                    partner_id = %partner_id,
                    phase = %SettlementPhase::Recorded,
                    error = %err,
                    "partner notification failed after debit; record retained"
                );
                return Err(err);
            }
        };

        // 5. Audit event. Never aborts the settlement.
        self.audit.record(
            AuditEventKind::OnrampInitiated,
            json!({
                "transaction_id": tx.id.to_string(),
                "user_id": user.id.to_string(),
                "partner_id": partner_id.to_string(),
                "amount": amount.to_string(),
                "new_balance": new_balance.to_string(),
            }),
        );

        Ok(SettlementOutcome {
            transaction_id: tx.id,
            status: tx.status,
            acknowledgement: ack,
        })
    }

    fn audit_reject(
        &mut self,
        user: &User,
        partner_id: &PartnerId,
        amount: Decimal,
        phase: SettlementPhase,
        err: &GatewayError,
    ) {
        self.audit.record(
            AuditEventKind::OnrampRejected,
            json!({
                "user_id": user.id.to_string(),
                "partner_id": partner_id.to_string(),
                "amount": amount.to_string(),
                "phase": phase.to_string(),
                "code": err.code(),
            }),
        );
    }

    /// The wallet store.
    #[must_use]
    pub fn ledger(&self) -> &FiatLedger {
        &self.ledger
    }

    /// Mutable wallet store (seeding / deposit path).
    pub fn ledger_mut(&mut self) -> &mut FiatLedger {
        &mut self.ledger
    }

    /// The transaction log.
    #[must_use]
    pub fn transactions(&self) -> &TransactionLog {
        &self.log
    }

    /// The configuration the compliance gate enforces.
    #[must_use]
    pub fn config(&self) -> &GatewayConfig {
        self.evaluator.config()
    }
}
