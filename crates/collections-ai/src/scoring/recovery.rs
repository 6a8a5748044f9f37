use tracing::warn;

use super::domain::{CaseRecord, RiskProfile};

/// Maps case features to a recovery-probability estimate via additive
/// heuristic adjustments around a fixed base rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecoveryEstimator;

impl RecoveryEstimator {
    /// Probabilities never reach the open ends of the unit interval.
    pub const FLOOR: f64 = 0.05;
    pub const CEILING: f64 = 0.95;
    /// Neutral estimate substituted when a computation degenerates.
    pub const FALLBACK: f64 = 0.5;

    const BASE: f64 = 0.65;

    /// Estimate the probability of recovering the owed amount, always within
    /// `[FLOOR, CEILING]`.
    pub fn estimate(&self, case: &CaseRecord) -> f64 {
        let mut probability = Self::BASE;

        if case.aging_days > 120 {
            probability -= 0.3;
        } else if case.aging_days > 90 {
            probability -= 0.2;
        } else if case.aging_days > 60 {
            probability -= 0.1;
        }

        if case.debt_amount > 20_000.0 {
            probability += 0.1;
        } else if case.debt_amount < 500.0 {
            probability -= 0.15;
        }

        probability += match case.customer_risk_profile {
            RiskProfile::Low => 0.15,
            RiskProfile::Medium => 0.0,
            RiskProfile::High => -0.15,
            RiskProfile::Critical => -0.25,
        };

        if case.previous_interactions > 10 {
            probability -= 0.2;
        } else if case.previous_interactions > 5 {
            probability -= 0.1;
        }

        if let Some(success_rate) = case.payment_success_rate() {
            probability += (success_rate - 0.5) * 0.2;
        }

        if !probability.is_finite() {
            warn!(case_id = %case.case_id, "recovery estimate degenerated, using fallback");
            return Self::FALLBACK;
        }

        probability.clamp(Self::FLOOR, Self::CEILING)
    }
}
