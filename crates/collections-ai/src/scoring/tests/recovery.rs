use super::common::*;
use crate::scoring::domain::RiskProfile;
use crate::scoring::recovery::RecoveryEstimator;

#[test]
fn moderate_case_stays_near_the_base_rate() {
    let probability = RecoveryEstimator.estimate(&moderate_case());
    // No adjustment fires: 5000 is mid-range, 45 days is below every aging cut.
    assert!((probability - 0.65).abs() < 1e-9);
    assert!((0.5..=0.75).contains(&probability));
}

#[test]
fn worst_case_clamps_to_the_floor() {
    let mut case = case(300.0, 150, RiskProfile::Critical);
    case.previous_interactions = 15;
    case.payment_history = vec![payment("missed"), payment("missed")];

    assert_eq!(RecoveryEstimator.estimate(&case), RecoveryEstimator::FLOOR);
}

#[test]
fn best_case_clamps_to_the_ceiling() {
    let mut case = case(30_000.0, 5, RiskProfile::Low);
    case.payment_history = vec![payment("paid"), payment("paid"), payment("paid")];

    // 0.65 + 0.1 + 0.15 + 0.1 = 1.0, clamped.
    assert_eq!(RecoveryEstimator.estimate(&case), RecoveryEstimator::CEILING);
}

#[test]
fn payment_history_shifts_the_estimate_both_ways() {
    let mut reliable = moderate_case();
    reliable.payment_history = vec![payment("paid"), payment("paid")];

    let mut delinquent = moderate_case();
    delinquent.payment_history = vec![payment("missed"), payment("missed")];

    let up = RecoveryEstimator.estimate(&reliable);
    let down = RecoveryEstimator.estimate(&delinquent);

    assert!((up - 0.75).abs() < 1e-9);
    assert!((down - 0.55).abs() < 1e-9);
}

#[test]
fn aging_tiers_reduce_the_estimate_progressively() {
    let p70 = RecoveryEstimator.estimate(&case(5_000.0, 70, RiskProfile::Medium));
    let p100 = RecoveryEstimator.estimate(&case(5_000.0, 100, RiskProfile::Medium));
    let p130 = RecoveryEstimator.estimate(&case(5_000.0, 130, RiskProfile::Medium));

    assert!((p70 - 0.55).abs() < 1e-9);
    assert!((p100 - 0.45).abs() < 1e-9);
    assert!((p130 - 0.35).abs() < 1e-9);
}
