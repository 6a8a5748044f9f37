use super::common::*;
use crate::scoring::domain::RiskProfile;
use crate::scoring::recommend::{RecommendationEngine, Urgency};

#[test]
fn aged_case_gets_an_escalation_recommendation() {
    let engine = RecommendationEngine;
    let case = severe_case();

    let recommendations = engine.recommendations(&case, 0.3, 83.0, 71.0);

    assert!(recommendations
        .iter()
        .any(|r| r == "Case is significantly aged - escalate urgently"));
    assert!(recommendations
        .iter()
        .any(|r| r == "High priority case - immediate action required"));
    assert!(recommendations
        .iter()
        .any(|r| r == "High-risk case - proceed with caution"));
}

#[test]
fn high_recovery_probability_suggests_immediate_contact() {
    let recommendations =
        RecommendationEngine.recommendations(&moderate_case(), 0.85, 60.0, 40.0);

    assert_eq!(
        recommendations[0],
        "High recovery probability - prioritize immediate contact"
    );
    assert!(recommendations
        .iter()
        .any(|r| r == "Consider offering early payment discount"));
}

#[test]
fn high_value_and_high_risk_profile_each_add_guidance() {
    let mut case = case(15_000.0, 20, RiskProfile::High);
    case.case_id = "CASE-HV".to_string();

    let recommendations = RecommendationEngine.recommendations(&case, 0.65, 55.0, 50.0);

    assert!(recommendations
        .iter()
        .any(|r| r == "High-value case - assign to senior agent"));
    assert!(recommendations
        .iter()
        .any(|r| r == "High-risk customer - use specialized approach"));
}

#[test]
fn confidence_grows_with_data_completeness() {
    let engine = RecommendationEngine;

    let bare = case(5_000.0, 0, RiskProfile::Medium);
    assert!((engine.confidence(&bare, 0.65) - 0.7).abs() < 1e-9);

    let mut rich = moderate_case();
    rich.previous_interactions = 2;
    rich.payment_history = vec![payment("paid")];
    // 0.7 + 0.1 history + 0.1 interactions + 0.05 aging
    assert!((engine.confidence(&rich, 0.65) - 0.95).abs() < 1e-9);
}

#[test]
fn extreme_estimates_raise_confidence_up_to_the_cap() {
    let engine = RecommendationEngine;
    let mut rich = moderate_case();
    rich.previous_interactions = 2;
    rich.payment_history = vec![payment("paid")];

    assert_eq!(engine.confidence(&rich, 0.9), 1.0);
}

#[test]
fn urgency_escalates_with_score_and_aging() {
    let engine = RecommendationEngine;

    assert_eq!(engine.urgency(20.0, 20.0, 5), Urgency::Low);
    assert_eq!(engine.urgency(50.0, 50.0, 40), Urgency::Medium);
    assert_eq!(engine.urgency(70.0, 60.0, 50), Urgency::High);
    assert_eq!(engine.urgency(90.0, 85.0, 100), Urgency::Critical);
    // Aging alone forces escalation regardless of scores.
    assert_eq!(engine.urgency(10.0, 10.0, 95), Urgency::Critical);
    assert_eq!(engine.urgency(10.0, 10.0, 70), Urgency::High);
}

#[test]
fn next_actions_follow_urgency_recovery_and_aging() {
    let engine = RecommendationEngine;
    let case = case(5_000.0, 70, RiskProfile::Medium);

    let actions = engine.next_actions(&case, 0.75, Urgency::Critical);

    let names: Vec<&str> = actions.iter().map(|a| a.action).collect();
    assert_eq!(
        names,
        ["immediate_contact", "payment_negotiation", "escalation_review"]
    );
    assert_eq!(actions[0].due_in_days, 1);
    assert_eq!(actions[1].due_in_days, 3);
    assert_eq!(actions[2].due_in_days, 7);
}

#[test]
fn calm_case_has_no_next_actions() {
    let actions = RecommendationEngine.next_actions(
        &case(2_000.0, 10, RiskProfile::Low),
        0.6,
        Urgency::Low,
    );
    assert!(actions.is_empty());
}

#[test]
fn timeline_tracks_urgency() {
    let engine = RecommendationEngine;

    let critical = engine.timeline(Urgency::Critical);
    assert_eq!(critical.expected_resolution_days, 7);
    assert_eq!(critical.escalation_in_days, 6);
    assert_eq!(critical.next_review_in_days, 7);
    assert_eq!(critical.write_off_in_days, 120);

    let low = engine.timeline(Urgency::Low);
    assert_eq!(low.expected_resolution_days, 60);
    assert_eq!(low.escalation_in_days, 48);
}
