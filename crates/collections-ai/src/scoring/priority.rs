use tracing::warn;

use super::domain::{CaseRecord, RiskProfile};

/// Relative weights of the priority sub-scores. The defaults sum to 1.0 so the
/// weighted blend stays on the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorityWeights {
    pub debt_amount: f64,
    pub aging: f64,
    pub recovery: f64,
    pub customer_risk: f64,
    pub business_impact: f64,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            debt_amount: 0.25,
            aging: 0.30,
            recovery: 0.25,
            customer_risk: 0.15,
            business_impact: 0.05,
        }
    }
}

/// Computes a case's priority score (weighted blend of sub-scores) and an
/// independent risk score (unweighted mean of bucketed risk factors), both on
/// a 0-100 scale.
#[derive(Debug, Clone, Copy, Default)]
pub struct CasePrioritizer {
    weights: PriorityWeights,
}

/// Neutral score substituted when a calculation degenerates.
pub const NEUTRAL_SCORE: f64 = 50.0;

impl CasePrioritizer {
    pub fn new(weights: PriorityWeights) -> Self {
        Self { weights }
    }

    pub fn priority_score(&self, case: &CaseRecord) -> f64 {
        let score = debt_amount_score(case.debt_amount) * self.weights.debt_amount
            + aging_score(case.aging_days) * self.weights.aging
            + recovery_outlook_score(case.debt_amount, case.aging_days) * self.weights.recovery
            + customer_risk_score(case.customer_risk_profile) * self.weights.customer_risk
            + business_impact_score(&case.service_type, &case.customer_segment)
                * self.weights.business_impact;

        if !score.is_finite() {
            warn!(case_id = %case.case_id, "priority score degenerated, using neutral fallback");
            return NEUTRAL_SCORE;
        }

        score.clamp(0.0, 100.0)
    }

    pub fn risk_score(&self, case: &CaseRecord) -> f64 {
        let factors = [
            aging_risk_factor(case.aging_days),
            amount_risk_factor(case.debt_amount),
            profile_risk_factor(case.customer_risk_profile),
            payment_history_risk_factor(case),
            interaction_risk_factor(case.previous_interactions),
        ];

        let score = factors.iter().sum::<f64>() / factors.len() as f64;

        if !score.is_finite() {
            warn!(case_id = %case.case_id, "risk score degenerated, using neutral fallback");
            return NEUTRAL_SCORE;
        }

        score.clamp(0.0, 100.0)
    }
}

pub(crate) fn debt_amount_score(debt_amount: f64) -> f64 {
    if debt_amount >= 50_000.0 {
        95.0
    } else if debt_amount >= 20_000.0 {
        85.0
    } else if debt_amount >= 10_000.0 {
        75.0
    } else if debt_amount >= 5_000.0 {
        65.0
    } else if debt_amount >= 1_000.0 {
        50.0
    } else {
        30.0
    }
}

pub(crate) fn aging_score(aging_days: u32) -> f64 {
    if aging_days >= 120 {
        100.0
    } else if aging_days >= 90 {
        90.0
    } else if aging_days >= 60 {
        75.0
    } else if aging_days >= 30 {
        60.0
    } else {
        40.0
    }
}

pub(crate) fn customer_risk_score(profile: RiskProfile) -> f64 {
    match profile {
        RiskProfile::Critical => 95.0,
        RiskProfile::High => 80.0,
        RiskProfile::Medium => 50.0,
        RiskProfile::Low => 30.0,
    }
}

/// Coarse recovery outlook used only inside the priority blend. Deliberately
/// simpler than [`super::recovery::RecoveryEstimator`]: aging and amount only.
pub(crate) fn recovery_outlook_score(debt_amount: f64, aging_days: u32) -> f64 {
    let mut score: f64 = 70.0;

    if aging_days > 90 {
        score -= 30.0;
    } else if aging_days > 60 {
        score -= 15.0;
    }

    if debt_amount > 20_000.0 {
        score += 10.0;
    } else if debt_amount < 500.0 {
        score -= 20.0;
    }

    score.clamp(10.0, 95.0)
}

pub(crate) fn business_impact_score(service_type: &str, customer_segment: &str) -> f64 {
    let mut score: f64 = 50.0;

    match service_type {
        "ENTERPRISE" => score += 20.0,
        "PREMIUM" => score += 10.0,
        _ => {}
    }

    match customer_segment {
        "VIP" => score += 15.0,
        "CORPORATE" => score += 10.0,
        _ => {}
    }

    score.min(100.0)
}

fn aging_risk_factor(aging_days: u32) -> f64 {
    if aging_days > 120 {
        85.0
    } else if aging_days > 90 {
        70.0
    } else if aging_days > 60 {
        50.0
    } else {
        20.0
    }
}

// Both extremes are risky: large balances are hard to settle in full, tiny
// ones are rarely worth the customer's attention.
fn amount_risk_factor(debt_amount: f64) -> f64 {
    if debt_amount > 50_000.0 {
        75.0
    } else if debt_amount < 100.0 {
        80.0
    } else {
        30.0
    }
}

fn profile_risk_factor(profile: RiskProfile) -> f64 {
    match profile {
        RiskProfile::Low => 20.0,
        RiskProfile::Medium => 50.0,
        RiskProfile::High => 80.0,
        RiskProfile::Critical => 95.0,
    }
}

fn payment_history_risk_factor(case: &CaseRecord) -> f64 {
    if case.payment_history.is_empty() {
        return 70.0;
    }

    let recent_paid = case
        .payment_history
        .iter()
        .rev()
        .take(5)
        .filter(|p| p.paid())
        .count();

    if recent_paid == 0 {
        85.0
    } else if recent_paid < 2 {
        60.0
    } else {
        25.0
    }
}

fn interaction_risk_factor(previous_interactions: u32) -> f64 {
    if previous_interactions > 10 {
        75.0
    } else if previous_interactions > 5 {
        50.0
    } else {
        30.0
    }
}
