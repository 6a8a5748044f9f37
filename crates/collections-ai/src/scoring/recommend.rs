use serde::Serialize;

use super::domain::{CaseRecord, RiskProfile};

/// Handling urgency derived from the combined priority, risk, and aging
/// signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl Urgency {
    pub const fn label(self) -> &'static str {
        match self {
            Urgency::Low => "LOW",
            Urgency::Medium => "MEDIUM",
            Urgency::High => "HIGH",
            Urgency::Critical => "CRITICAL",
        }
    }
}

/// Concrete follow-up with a relative deadline. Callers anchor `due_in_days`
/// to their own clock when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextAction {
    pub action: &'static str,
    pub description: &'static str,
    pub priority: &'static str,
    pub due_in_days: u32,
}

/// Expected handling milestones, all as day offsets from the prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionTimeline {
    pub expected_resolution_days: u32,
    pub next_review_in_days: u32,
    pub escalation_in_days: u32,
    pub write_off_in_days: u32,
}

/// Turns raw scores into operator-facing guidance: free-text recommendations,
/// a confidence figure, urgency, next actions, and a timeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn recommendations(
        &self,
        case: &CaseRecord,
        recovery_probability: f64,
        priority_score: f64,
        risk_score: f64,
    ) -> Vec<String> {
        let mut out = Vec::new();

        if recovery_probability > 0.8 {
            out.push("High recovery probability - prioritize immediate contact".to_string());
            out.push("Consider offering early payment discount".to_string());
        } else if recovery_probability > 0.6 {
            out.push("Moderate recovery probability - standard collection process".to_string());
            out.push("Schedule follow-up within 48 hours".to_string());
        } else {
            out.push("Low recovery probability - consider alternative strategies".to_string());
            out.push("Evaluate for legal action or write-off".to_string());
        }

        if case.aging_days > 90 {
            out.push("Case is significantly aged - escalate urgently".to_string());
            out.push("Consider skip tracing if contact information is outdated".to_string());
        } else if case.aging_days > 60 {
            out.push("Case aging - increase contact frequency".to_string());
        }

        if case.debt_amount > 10_000.0 {
            out.push("High-value case - assign to senior agent".to_string());
            out.push("Consider payment plan options".to_string());
        }

        if case.customer_risk_profile == RiskProfile::High {
            out.push("High-risk customer - use specialized approach".to_string());
            out.push("Document all interactions thoroughly".to_string());
        }

        if priority_score > 80.0 {
            out.push("High priority case - immediate action required".to_string());
        }

        if risk_score > 70.0 {
            out.push("High-risk case - proceed with caution".to_string());
            out.push("Ensure compliance with all regulations".to_string());
        }

        out
    }

    /// Confidence grows with data completeness and with how extreme the
    /// recovery estimate is, capped at 1.0.
    pub fn confidence(&self, case: &CaseRecord, recovery_probability: f64) -> f64 {
        let mut confidence: f64 = 0.7;

        if !case.payment_history.is_empty() {
            confidence += 0.1;
        }
        if case.previous_interactions > 0 {
            confidence += 0.1;
        }
        if case.aging_days > 0 {
            confidence += 0.05;
        }
        if recovery_probability > 0.8 || recovery_probability < 0.2 {
            confidence += 0.1;
        }

        confidence.min(1.0)
    }

    pub fn urgency(&self, priority_score: f64, risk_score: f64, aging_days: u32) -> Urgency {
        let aging = f64::from(aging_days.min(120));
        let urgency_score = priority_score * 0.4 + risk_score * 0.3 + aging * 0.3;

        if urgency_score > 80.0 || aging_days > 90 {
            Urgency::Critical
        } else if urgency_score > 60.0 || aging_days > 60 {
            Urgency::High
        } else if urgency_score > 40.0 {
            Urgency::Medium
        } else {
            Urgency::Low
        }
    }

    pub fn next_actions(
        &self,
        case: &CaseRecord,
        recovery_probability: f64,
        urgency: Urgency,
    ) -> Vec<NextAction> {
        let mut actions = Vec::new();

        if urgency == Urgency::Critical {
            actions.push(NextAction {
                action: "immediate_contact",
                description: "Contact customer within 24 hours",
                priority: "HIGH",
                due_in_days: 1,
            });
        }

        if recovery_probability > 0.7 {
            actions.push(NextAction {
                action: "payment_negotiation",
                description: "Initiate payment plan discussion",
                priority: "MEDIUM",
                due_in_days: 3,
            });
        }

        if case.aging_days > 60 {
            actions.push(NextAction {
                action: "escalation_review",
                description: "Review case for potential escalation",
                priority: "MEDIUM",
                due_in_days: 7,
            });
        }

        actions
    }

    pub fn timeline(&self, urgency: Urgency) -> ResolutionTimeline {
        let expected_resolution_days = match urgency {
            Urgency::Critical => 7,
            Urgency::High => 14,
            Urgency::Medium => 30,
            Urgency::Low => 60,
        };

        ResolutionTimeline {
            expected_resolution_days,
            next_review_in_days: 7,
            escalation_in_days: (f64::from(expected_resolution_days) * 0.8).round() as u32,
            write_off_in_days: 120,
        }
    }
}
