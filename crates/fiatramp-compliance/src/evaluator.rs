//! Compliance evaluator — hard gate ahead of the ledger.
//!
//! Rules run in a fixed order and the first failure wins; later rules do
//! not run. The gate is a pure function of (user, amount, partner) and the
//! immutable [`GatewayConfig`].

use fiatramp_types::{GatewayConfig, GatewayError, PartnerId, Result, User};
use rust_decimal::Decimal;

/// Ordered compliance rule gate.
pub struct ComplianceEvaluator {
    config: GatewayConfig,
}

impl ComplianceEvaluator {
    /// Create an evaluator over an immutable configuration snapshot.
    #[must_use]
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    /// The configuration this evaluator enforces.
    #[must_use]
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Validate a settlement request against all compliance rules.
    ///
    /// Rule order is part of the contract — the first failure is the one
    /// reported:
    /// 1. non-positive amount → `InvalidAmount`
    /// 2. partner outside the licensed set → `UnlicensedPartner`
    /// 3. amount above the daily limit → `LimitExceeded`
    /// 4. risk score above the AML threshold → `AmlRisk`
    ///
    /// # Errors
    /// Returns the specific rejection for the first rule that fails.
    pub fn evaluate(&self, user: &User, amount: Decimal, partner_id: &PartnerId) -> Result<()> {
        // 1. Amount must be positive. Decimal is always finite.
        if amount <= Decimal::ZERO {
            return Err(GatewayError::InvalidAmount { amount });
        }

        // 2. Partner must hold a licence.
        if !self.config.is_licensed(partner_id) {
            return Err(GatewayError::UnlicensedPartner(partner_id.clone()));
        }

        // 3. Daily limit, regardless of balance.
        if amount > self.config.daily_limit {
            return Err(GatewayError::LimitExceeded {
                amount,
                limit: self.config.daily_limit,
            });
        }

        // 4. AML risk score, strictly above the threshold.
        if user.risk_score > self.config.aml_risk_threshold {
            return Err(GatewayError::AmlRisk {
                score: user.risk_score,
                threshold: self.config.aml_risk_threshold,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use fiatramp_types::KycTier;

    use super::*;

    fn evaluator() -> ComplianceEvaluator {
        ComplianceEvaluator::new(GatewayConfig::nigeria_default())
    }

    fn low_risk_user() -> User {
        User::new("Amaka", KycTier::Tier2, 0.2)
    }

    fn licensed() -> PartnerId {
        PartnerId::new("vasp_001")
    }

    #[test]
    fn clean_request_passes() {
        let result = evaluator().evaluate(&low_risk_user(), Decimal::new(5_000_000, 0), &licensed());
        assert!(result.is_ok());
    }

    #[test]
    fn zero_amount_rejected() {
        let err = evaluator()
            .evaluate(&low_risk_user(), Decimal::ZERO, &licensed())
            .unwrap_err();
        assert!(matches!(err, GatewayError::InvalidAmount { .. }));
    }

    #[test]
    fn negative_amount_rejected() {
        let err = evaluator()
            .evaluate(&low_risk_user(), Decimal::new(-100, 0), &licensed())
            .unwrap_err();
        assert!(matches!(err, GatewayError::InvalidAmount { .. }));
    }

    #[test]
    fn unlicensed_partner_rejected() {
        let partner = PartnerId::new("vasp_999");
        let err = evaluator()
            .evaluate(&low_risk_user(), Decimal::new(1_000, 0), &partner)
            .unwrap_err();
        assert!(matches!(err, GatewayError::UnlicensedPartner(p) if p == partner));
    }

    #[test]
    fn over_limit_rejected() {
        let err = evaluator()
            .evaluate(&low_risk_user(), Decimal::new(20_000_000, 0), &licensed())
            .unwrap_err();
        assert!(matches!(err, GatewayError::LimitExceeded { .. }));
    }

    #[test]
    fn amount_exactly_at_limit_passes() {
        let result = evaluator().evaluate(&low_risk_user(), Decimal::new(10_000_000, 0), &licensed());
        assert!(result.is_ok());
    }

    #[test]
    fn risky_user_rejected() {
        let user = User::new("Risky", KycTier::Tier1, 0.85);
        let err = evaluator()
            .evaluate(&user, Decimal::new(1_000, 0), &licensed())
            .unwrap_err();
        assert!(matches!(err, GatewayError::AmlRisk { .. }));
    }

    #[test]
    fn risk_score_exactly_at_threshold_passes() {
        let user = User::new("Edge", KycTier::Tier1, 0.7);
        let result = evaluator().evaluate(&user, Decimal::new(1_000, 0), &licensed());
        assert!(result.is_ok());
    }

    #[test]
    fn first_failure_wins_invalid_amount_over_partner() {
        // Both rules would fire; the amount rule runs first.
        let partner = PartnerId::new("vasp_999");
        let err = evaluator()
            .evaluate(&low_risk_user(), Decimal::ZERO, &partner)
            .unwrap_err();
        assert!(matches!(err, GatewayError::InvalidAmount { .. }));
    }

    #[test]
    fn first_failure_wins_limit_over_risk() {
        let user = User::new("RiskyWhale", KycTier::Tier3, 0.95);
        let err = evaluator()
            .evaluate(&user, Decimal::new(20_000_000, 0), &licensed())
            .unwrap_err();
        assert!(matches!(err, GatewayError::LimitExceeded { .. }));
    }

    #[test]
    fn evaluation_is_deterministic() {
        let eval = evaluator();
        let user = low_risk_user();
        let amount = Decimal::new(3_000_000, 0);
        let partner = licensed();
        for _ in 0..3 {
            assert!(eval.evaluate(&user, amount, &partner).is_ok());
        }
    }
}
