use serde::Serialize;

use super::domain::{CaseRecord, RiskProfile};

/// Debt-amount bucket, highest tier inclusive at 50 000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AmountCategory {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl AmountCategory {
    pub const fn label(self) -> &'static str {
        match self {
            AmountCategory::VeryLow => "VERY_LOW",
            AmountCategory::Low => "LOW",
            AmountCategory::Medium => "MEDIUM",
            AmountCategory::High => "HIGH",
            AmountCategory::VeryHigh => "VERY_HIGH",
        }
    }
}

/// Case-age bucket, from freshly overdue to critically aged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgingCategory {
    Fresh,
    Low,
    Medium,
    High,
    Critical,
}

impl AgingCategory {
    pub const fn label(self) -> &'static str {
        match self {
            AgingCategory::Fresh => "FRESH",
            AgingCategory::Low => "LOW",
            AgingCategory::Medium => "MEDIUM",
            AgingCategory::High => "HIGH",
            AgingCategory::Critical => "CRITICAL",
        }
    }
}

/// Canonical projection of a [`CaseRecord`] consumed by the downstream scorers.
/// Built once per case and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedFeatures {
    pub debt_amount: f64,
    pub aging_days: u32,
    pub previous_interactions: u32,
    pub risk_profile: RiskProfile,
    pub service_type: String,
    pub customer_segment: String,
    pub payment_history_len: usize,
    pub payment_success_rate: Option<f64>,
    pub amount_category: AmountCategory,
    pub aging_category: AgingCategory,
    pub base_risk_score: f64,
}

/// Normalizes a raw case record into the canonical feature set. Total
/// function: every valid record produces features, with no side effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureProcessor;

impl FeatureProcessor {
    pub fn process(&self, case: &CaseRecord) -> ProcessedFeatures {
        ProcessedFeatures {
            debt_amount: case.debt_amount,
            aging_days: case.aging_days,
            previous_interactions: case.previous_interactions,
            risk_profile: case.customer_risk_profile,
            service_type: case.service_type.clone(),
            customer_segment: case.customer_segment.clone(),
            payment_history_len: case.payment_history.len(),
            payment_success_rate: case.payment_success_rate(),
            amount_category: categorize_amount(case.debt_amount),
            aging_category: categorize_aging(case.aging_days),
            base_risk_score: base_risk_score(case),
        }
    }
}

pub(crate) fn categorize_amount(amount: f64) -> AmountCategory {
    if amount >= 50_000.0 {
        AmountCategory::VeryHigh
    } else if amount >= 20_000.0 {
        AmountCategory::High
    } else if amount >= 5_000.0 {
        AmountCategory::Medium
    } else if amount >= 1_000.0 {
        AmountCategory::Low
    } else {
        AmountCategory::VeryLow
    }
}

pub(crate) fn categorize_aging(aging_days: u32) -> AgingCategory {
    if aging_days >= 120 {
        AgingCategory::Critical
    } else if aging_days >= 90 {
        AgingCategory::High
    } else if aging_days >= 60 {
        AgingCategory::Medium
    } else if aging_days >= 30 {
        AgingCategory::Low
    } else {
        AgingCategory::Fresh
    }
}

pub(crate) fn base_risk_score(case: &CaseRecord) -> f64 {
    let mut score: f64 = 0.0;

    if case.aging_days > 90 {
        score += 40.0;
    } else if case.aging_days > 60 {
        score += 25.0;
    } else if case.aging_days > 30 {
        score += 10.0;
    }

    score += match case.customer_risk_profile {
        RiskProfile::Low => 5.0,
        RiskProfile::Medium => 15.0,
        RiskProfile::High => 30.0,
        RiskProfile::Critical => 50.0,
    };

    if case.previous_interactions > 10 {
        score += 20.0;
    } else if case.previous_interactions > 5 {
        score += 10.0;
    }

    score.clamp(0.0, 100.0)
}
