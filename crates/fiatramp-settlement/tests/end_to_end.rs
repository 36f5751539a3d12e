//! End-to-end settlement tests across the compliance, ledger, and
//! settlement planes.
//!
//! These exercise the full per-request pipeline:
//! `ComplianceEvaluator` -> `FiatLedger` -> `TransactionLog` ->
//! `PartnerClient` -> `AuditTrail`, pinning the externally observable
//! properties: rejection codes, exact debits, record counts, ack status,
//! and audit payloads.

use fiatramp_settlement::{
    AuditTrail, MemoryAuditSink, PartnerClient, SettlementEngine, SimulatedPartnerClient,
};
use fiatramp_types::{
    AckStatus, AuditEventKind, GatewayConfig, GatewayError, KycTier, PartnerAck, PartnerId,
    TransactionStatus, User, UserId,
};
use rust_decimal::Decimal;

/// Helper: an engine wired with a simulated partner and an inspectable
/// audit buffer, plus a funded default user.
struct OnrampHarness {
    engine: SettlementEngine,
    audit: MemoryAuditSink,
}

impl OnrampHarness {
    fn new() -> Self {
        Self::with_partner(Box::new(SimulatedPartnerClient::new()))
    }

    fn with_partner(partner: Box<dyn PartnerClient>) -> Self {
        let audit = MemoryAuditSink::new();
        let engine = SettlementEngine::new(
            GatewayConfig::nigeria_default(),
            partner,
            AuditTrail::with_sink(Box::new(audit.clone())),
        );
        Self { engine, audit }
    }

    fn funded_user(&mut self, risk_score: f64, balance: Decimal) -> User {
        let user = User::new("Amaka", KycTier::Tier2, risk_score);
        self.engine.ledger_mut().credit(user.id, balance);
        user
    }
}

fn vasp(id: &str) -> PartnerId {
    PartnerId::new(id)
}

// =============================================================================
// Test: the worked success example
// =============================================================================
#[test]
fn e2e_worked_example_succeeds() {
    let mut h = OnrampHarness::new();
    let user = h.funded_user(0.2, Decimal::new(15_000_000, 0));

    let outcome = h
        .engine
        .settle(&user, &vasp("vasp_001"), Decimal::new(5_000_000, 0))
        .unwrap();

    // Balance decreased by exactly the amount.
    assert_eq!(
        h.engine.ledger().balance(user.id).unwrap(),
        Decimal::new(10_000_000, 0)
    );

    // Exactly one PROCESSING record with the returned id.
    assert_eq!(h.engine.transactions().len(), 1);
    let tx = h.engine.transactions().get(&outcome.transaction_id).unwrap();
    assert_eq!(tx.status, TransactionStatus::Processing);
    assert_eq!(tx.amount, Decimal::new(5_000_000, 0));
    assert_eq!(outcome.status, TransactionStatus::Processing);

    // Partner acknowledged with the user id as reference.
    assert_eq!(outcome.acknowledgement.status, AckStatus::Received);
    assert_eq!(outcome.acknowledgement.reference, user.id);
    assert_eq!(outcome.acknowledgement.partner_id, vasp("vasp_001"));

    // One ONRAMP_INITIATED audit event carrying the matching transaction id.
    let events = h.audit.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, AuditEventKind::OnrampInitiated);
    assert_eq!(
        events[0].payload["transaction_id"],
        outcome.transaction_id.to_string()
    );
    assert_eq!(events[0].payload["new_balance"], "10000000");
}

// =============================================================================
// Test: the worked limit example
// =============================================================================
#[test]
fn e2e_worked_example_limit_exceeded() {
    let mut h = OnrampHarness::new();
    let user = h.funded_user(0.2, Decimal::new(15_000_000, 0));

    let err = h
        .engine
        .settle(&user, &vasp("vasp_001"), Decimal::new(20_000_000, 0))
        .unwrap_err();

    assert!(matches!(err, GatewayError::LimitExceeded { .. }));
    assert_eq!(err.code(), "LIMIT_EXCEEDED");
    assert_eq!(
        h.engine.ledger().balance(user.id).unwrap(),
        Decimal::new(15_000_000, 0)
    );
    assert!(h.engine.transactions().is_empty());
}

// =============================================================================
// Test: every compliance rejection leaves wallet and log untouched
// =============================================================================
#[test]
fn e2e_non_positive_amounts_rejected() {
    let mut h = OnrampHarness::new();
    let user = h.funded_user(0.2, Decimal::new(1_000_000, 0));

    for amount in [Decimal::ZERO, Decimal::new(-5_000, 0)] {
        let err = h.engine.settle(&user, &vasp("vasp_001"), amount).unwrap_err();
        assert!(matches!(err, GatewayError::InvalidAmount { .. }));
    }

    assert_eq!(
        h.engine.ledger().balance(user.id).unwrap(),
        Decimal::new(1_000_000, 0)
    );
    assert!(h.engine.transactions().is_empty());
}

#[test]
fn e2e_unlicensed_partner_rejected() {
    let mut h = OnrampHarness::new();
    let user = h.funded_user(0.2, Decimal::new(1_000_000, 0));

    let err = h
        .engine
        .settle(&user, &vasp("vasp_777"), Decimal::new(100, 0))
        .unwrap_err();

    assert!(matches!(err, GatewayError::UnlicensedPartner(_)));
    assert_eq!(err.code(), "UNLICENSED_PARTNER");
    assert!(h.engine.transactions().is_empty());
}

#[test]
fn e2e_aml_risk_rejected_despite_funds() {
    let mut h = OnrampHarness::new();
    let user = h.funded_user(0.95, Decimal::new(50_000_000, 0));

    let err = h
        .engine
        .settle(&user, &vasp("vasp_001"), Decimal::new(100, 0))
        .unwrap_err();

    assert!(matches!(err, GatewayError::AmlRisk { .. }));
    assert_eq!(
        h.engine.ledger().balance(user.id).unwrap(),
        Decimal::new(50_000_000, 0)
    );
}

#[test]
fn e2e_check_order_is_fixed() {
    // A zero amount sent to an unlicensed partner reports InvalidAmount:
    // the amount rule runs first.
    let mut h = OnrampHarness::new();
    let user = h.funded_user(0.2, Decimal::new(1_000, 0));

    let err = h.engine.settle(&user, &vasp("vasp_777"), Decimal::ZERO).unwrap_err();
    assert!(matches!(err, GatewayError::InvalidAmount { .. }));
}

// =============================================================================
// Test: insufficient funds is detected inside the mutation, wallet unchanged
// =============================================================================
#[test]
fn e2e_insufficient_funds_after_all_gates() {
    let mut h = OnrampHarness::new();
    let user = h.funded_user(0.2, Decimal::new(2_000_000, 0));

    let err = h
        .engine
        .settle(&user, &vasp("vasp_001"), Decimal::new(3_000_000, 0))
        .unwrap_err();

    assert!(matches!(
        err,
        GatewayError::InsufficientFunds { needed, available }
            if needed == Decimal::new(3_000_000, 0) && available == Decimal::new(2_000_000, 0)
    ));
    assert_eq!(err.code(), "INSUFFICIENT_FUNDS");
    assert_eq!(
        h.engine.ledger().balance(user.id).unwrap(),
        Decimal::new(2_000_000, 0)
    );
    assert!(h.engine.transactions().is_empty());

    let events = h.audit.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, AuditEventKind::OnrampRejected);
    assert_eq!(events[0].payload["code"], "INSUFFICIENT_FUNDS");
}

// =============================================================================
// Test: no deduplication — two identical requests, two debits, two records
// =============================================================================
#[test]
fn e2e_identical_requests_settle_twice() {
    let mut h = OnrampHarness::new();
    let user = h.funded_user(0.2, Decimal::new(10_000_000, 0));

    let first = h
        .engine
        .settle(&user, &vasp("vasp_001"), Decimal::new(4_000_000, 0))
        .unwrap();
    let second = h
        .engine
        .settle(&user, &vasp("vasp_001"), Decimal::new(4_000_000, 0))
        .unwrap();

    assert_ne!(first.transaction_id, second.transaction_id);
    assert_eq!(h.engine.transactions().len(), 2);
    assert_eq!(
        h.engine.ledger().balance(user.id).unwrap(),
        Decimal::new(2_000_000, 0)
    );
}

// =============================================================================
// Test: audit sink failure never aborts a settlement
// =============================================================================
struct PoisonedSink;

impl fiatramp_settlement::AuditSink for PoisonedSink {
    fn emit(&mut self, _event: &fiatramp_types::AuditEvent) -> fiatramp_types::Result<()> {
        Err(GatewayError::Internal("observability outage".into()))
    }
}

#[test]
fn e2e_audit_failure_does_not_abort_settlement() {
    let mut engine = SettlementEngine::new(
        GatewayConfig::nigeria_default(),
        Box::new(SimulatedPartnerClient::new()),
        AuditTrail::with_sink(Box::new(PoisonedSink)),
    );
    let user = User::new("Amaka", KycTier::Tier2, 0.2);
    engine.ledger_mut().credit(user.id, Decimal::new(1_000_000, 0));

    let outcome = engine
        .settle(&user, &vasp("vasp_001"), Decimal::new(250_000, 0))
        .unwrap();

    assert_eq!(outcome.status, TransactionStatus::Processing);
    assert_eq!(
        engine.ledger().balance(user.id).unwrap(),
        Decimal::new(750_000, 0)
    );
}

// =============================================================================
// Test: partner failure after the debit is surfaced, not rolled back
// =============================================================================
struct DownPartner;

impl PartnerClient for DownPartner {
    fn initiate(
        &mut self,
        _partner_id: &PartnerId,
        _reference: UserId,
        _amount: Decimal,
    ) -> fiatramp_types::Result<PartnerAck> {
        Err(GatewayError::PartnerUnavailable {
            reason: "connection refused".into(),
        })
    }
}

#[test]
fn e2e_partner_failure_leaves_debit_and_record() {
    let mut h = OnrampHarness::with_partner(Box::new(DownPartner));
    let user = h.funded_user(0.2, Decimal::new(1_000_000, 0));

    let err = h
        .engine
        .settle(&user, &vasp("vasp_001"), Decimal::new(400_000, 0))
        .unwrap_err();

    assert!(matches!(err, GatewayError::PartnerUnavailable { .. }));

    // Known gap, pinned: the debit and the PROCESSING record both stand.
    assert_eq!(
        h.engine.ledger().balance(user.id).unwrap(),
        Decimal::new(600_000, 0)
    );
    assert_eq!(h.engine.transactions().len(), 1);
    assert_eq!(
        h.engine.transactions().entries()[0].status,
        TransactionStatus::Processing
    );

    // No ONRAMP_INITIATED event was emitted for the failed notification.
    assert!(h.audit.events().is_empty());
}

// =============================================================================
// Test: total float only moves by settled debits
// =============================================================================
#[test]
fn e2e_total_float_conservation() {
    let mut h = OnrampHarness::new();
    let alice = h.funded_user(0.2, Decimal::new(8_000_000, 0));
    let bob = h.funded_user(0.3, Decimal::new(2_000_000, 0));

    assert_eq!(h.engine.ledger().total_float(), Decimal::new(10_000_000, 0));

    h.engine
        .settle(&alice, &vasp("vasp_001"), Decimal::new(3_000_000, 0))
        .unwrap();
    let _ = h
        .engine
        .settle(&bob, &vasp("vasp_001"), Decimal::new(5_000_000, 0))
        .unwrap_err(); // insufficient: must not move the float

    assert_eq!(h.engine.ledger().total_float(), Decimal::new(7_000_000, 0));
}
