//! Gateway configuration.
//!
//! The daily limit and the licensed partner set are loaded once at process
//! start and passed around as an immutable value — there is no process-wide
//! mutable settings state.

use std::collections::HashSet;
use std::env;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{GatewayError, PartnerId, Result, constants};

/// Immutable configuration for the settlement gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Per-transaction daily limit in NGN.
    pub daily_limit: Decimal,
    /// The set of licensed partner (VASP) identifiers.
    pub licensed_partners: HashSet<PartnerId>,
    /// AML risk threshold; scores strictly above this are rejected.
    pub aml_risk_threshold: f64,
}

impl GatewayConfig {
    /// Build a config from an explicit limit and partner set. The AML
    /// threshold comes from [`constants::AML_RISK_THRESHOLD`].
    #[must_use]
    pub fn new(daily_limit: Decimal, licensed_partners: HashSet<PartnerId>) -> Self {
        Self {
            daily_limit,
            licensed_partners,
            aml_risk_threshold: constants::AML_RISK_THRESHOLD,
        }
    }

    /// The default Nigerian deployment: 10,000,000 NGN daily limit and the
    /// registry's default licensed partners.
    #[must_use]
    pub fn nigeria_default() -> Self {
        Self::new(
            Decimal::new(constants::DEFAULT_DAILY_LIMIT_NGN, 0),
            constants::DEFAULT_LICENSED_PARTNERS
                .iter()
                .copied()
                .map(PartnerId::new)
                .collect(),
        )
    }

    /// Load configuration from the environment, falling back to
    /// [`Self::nigeria_default`] values for anything unset.
    ///
    /// # Errors
    /// Returns [`GatewayError::Configuration`] for an unparseable limit or
    /// an explicitly empty partner set.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            env::var(constants::ENV_DAILY_LIMIT).ok().as_deref(),
            env::var(constants::ENV_LICENSED_PARTNERS).ok().as_deref(),
        )
    }

    fn from_vars(daily_limit: Option<&str>, partners: Option<&str>) -> Result<Self> {
        let defaults = Self::nigeria_default();

        let daily_limit = match daily_limit {
            Some(raw) => raw.trim().parse::<Decimal>().map_err(|e| {
                GatewayError::Configuration(format!("{}: {e}", constants::ENV_DAILY_LIMIT))
            })?,
            None => defaults.daily_limit,
        };

        let licensed_partners = match partners {
            Some(raw) => {
                let set: HashSet<PartnerId> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(PartnerId::new)
                    .collect();
                if set.is_empty() {
                    return Err(GatewayError::Configuration(format!(
                        "{}: at least one licensed partner is required",
                        constants::ENV_LICENSED_PARTNERS
                    )));
                }
                set
            }
            None => defaults.licensed_partners,
        };

        Ok(Self::new(daily_limit, licensed_partners))
    }

    /// Whether a partner is in the licensed set.
    #[must_use]
    pub fn is_licensed(&self, partner_id: &PartnerId) -> bool {
        self.licensed_partners.contains(partner_id)
    }
}
