use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use super::common::*;
use crate::scoring::cache::{CacheKey, NoCache, PredictionCache};
use crate::scoring::domain::RiskProfile;
use crate::scoring::prediction::{
    CasePrediction, PredictionPipeline, RecoveryBand, ScoreBand,
};
use crate::scoring::priority::{CasePrioritizer, PriorityWeights};
use crate::scoring::recommend::Urgency;
use crate::scoring::service::ScoringService;
use crate::scoring::ScoreBenchmarks;

#[derive(Default)]
struct MemoryCache {
    entries: Mutex<HashMap<CacheKey, CasePrediction>>,
    hits: Mutex<u32>,
}

impl PredictionCache for MemoryCache {
    fn get(&self, key: &CacheKey) -> Option<CasePrediction> {
        let found = self.entries.lock().expect("cache lock").get(key).cloned();
        if found.is_some() {
            *self.hits.lock().expect("hits lock") += 1;
        }
        found
    }

    fn put(&self, key: CacheKey, prediction: CasePrediction) {
        self.entries.lock().expect("cache lock").insert(key, prediction);
    }
}

fn pipeline() -> PredictionPipeline<NoCache> {
    PredictionPipeline::new(CasePrioritizer::default(), None)
}

fn service() -> ScoringService<NoCache> {
    ScoringService::new(PriorityWeights::default(), ScoreBenchmarks::default(), None)
}

#[test]
fn moderate_case_prediction_is_internally_consistent() {
    let prediction = pipeline().predict(&moderate_case());

    assert_eq!(prediction.case_id, "CASE-001");
    assert!((prediction.scores.recovery_probability - 0.65).abs() < 1e-9);
    assert!((prediction.scores.priority_score - 61.75).abs() < 1e-9);
    assert_eq!(prediction.classification.priority_level, ScoreBand::High);
    assert_eq!(prediction.classification.recovery_band, RecoveryBand::Good);
    assert!(!prediction.recommended_actions.is_empty());
}

#[test]
fn severe_case_is_classified_critical_end_to_end() {
    let prediction = pipeline().predict(&severe_case());

    assert_eq!(prediction.classification.priority_level, ScoreBand::Critical);
    assert_eq!(prediction.classification.urgency, Urgency::Critical);
    assert!(prediction
        .recommended_actions
        .iter()
        .any(|r| r == "Case is significantly aged - escalate urgently"));
    assert!(prediction
        .next_actions
        .iter()
        .any(|a| a.action == "immediate_contact"));
    assert_eq!(prediction.timeline.expected_resolution_days, 7);
}

#[test]
fn repeated_predictions_are_served_from_cache() {
    let cache = Arc::new(MemoryCache::default());
    let pipeline = PredictionPipeline::new(CasePrioritizer::default(), Some(Arc::clone(&cache)));
    let case = moderate_case();

    let first = pipeline.predict(&case);
    let second = pipeline.predict(&case);

    assert_eq!(first, second);
    assert_eq!(*cache.hits.lock().expect("hits lock"), 1);
}

#[test]
fn changing_case_content_misses_the_cache() {
    let cache = Arc::new(MemoryCache::default());
    let pipeline = PredictionPipeline::new(CasePrioritizer::default(), Some(Arc::clone(&cache)));

    let case = moderate_case();
    pipeline.predict(&case);

    let mut updated = moderate_case();
    updated.aging_days = 95;
    pipeline.predict(&updated);

    assert_eq!(*cache.hits.lock().expect("hits lock"), 0);
    assert_eq!(cache.entries.lock().expect("cache lock").len(), 2);
}

#[test]
fn invalid_debt_amount_is_rejected_for_single_prediction() {
    let invalid = case(-10.0, 30, RiskProfile::Medium);
    assert!(service().predict(&invalid).is_err());
}

#[test]
fn batch_isolates_invalid_cases_with_a_fallback_entry() {
    let mut invalid = case(0.0, 30, RiskProfile::Medium);
    invalid.case_id = "CASE-BAD".to_string();

    let cases = [moderate_case(), invalid, severe_case()];
    let predictions = service().predict_batch(&cases);

    assert_eq!(predictions.len(), 3);
    assert_eq!(predictions[0].case_id, "CASE-001");
    assert_eq!(predictions[2].case_id, "CASE-SEV");

    let fallback = &predictions[1];
    assert_eq!(fallback.case_id, "CASE-BAD");
    assert_eq!(fallback.scores.recovery_probability, 0.5);
    assert_eq!(fallback.scores.priority_score, 50.0);
    assert_eq!(fallback.confidence, 0.1);
    assert_eq!(
        fallback.recommended_actions,
        ["Manual review required".to_string()]
    );
}

#[test]
fn status_reports_every_component_loaded() {
    let status = service().status();

    assert_eq!(status.version, "1.0.0");
    assert_eq!(status.components.len(), 6);
    assert!(status.components.iter().all(|c| c.loaded));
    assert!(status
        .components
        .iter()
        .any(|c| c.name == "assignment_optimizer"));
}

#[test]
fn prediction_serializes_with_camel_case_wire_names() {
    let prediction = pipeline().predict(&moderate_case());
    let value = serde_json::to_value(&prediction).expect("serializable");

    let object = value.as_object().expect("object");
    assert!(object.contains_key("caseId"));
    assert!(object.contains_key("recoveryProbability"));
    assert!(object.contains_key("priorityScore"));
    assert!(object.contains_key("riskScore"));
    assert!(object.contains_key("recommendedActions"));

    let classification = &value["classification"];
    assert_eq!(classification["priorityLevel"], Value::from("HIGH"));
    assert_eq!(classification["recoveryBand"], Value::from("GOOD"));
}
