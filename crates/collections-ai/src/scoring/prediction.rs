use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::cache::{CacheKey, PredictionCache};
use super::domain::CaseRecord;
use super::features::FeatureProcessor;
use super::priority::CasePrioritizer;
use super::recommend::{NextAction, RecommendationEngine, ResolutionTimeline, Urgency};
use super::recovery::RecoveryEstimator;

/// Qualitative band for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreBand {
    Low,
    Medium,
    High,
    Critical,
}

impl ScoreBand {
    pub fn classify(score: f64) -> Self {
        if score > 80.0 {
            ScoreBand::Critical
        } else if score > 60.0 {
            ScoreBand::High
        } else if score > 40.0 {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScoreBand::Low => "LOW",
            ScoreBand::Medium => "MEDIUM",
            ScoreBand::High => "HIGH",
            ScoreBand::Critical => "CRITICAL",
        }
    }
}

/// Qualitative band for a recovery probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecoveryBand {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl RecoveryBand {
    pub fn classify(probability: f64) -> Self {
        if probability > 0.8 {
            RecoveryBand::Excellent
        } else if probability > 0.6 {
            RecoveryBand::Good
        } else if probability > 0.4 {
            RecoveryBand::Fair
        } else {
            RecoveryBand::Poor
        }
    }
}

/// The three numeric outputs of a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionScores {
    pub recovery_probability: f64,
    pub priority_score: f64,
    pub risk_score: f64,
}

/// Qualitative reading of the scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionClassification {
    pub risk_level: ScoreBand,
    pub priority_level: ScoreBand,
    pub recovery_band: RecoveryBand,
    pub urgency: Urgency,
}

/// Complete prediction for a single case.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CasePrediction {
    pub case_id: String,
    #[serde(flatten)]
    pub scores: PredictionScores,
    pub confidence: f64,
    pub classification: PredictionClassification,
    pub recommended_actions: Vec<String>,
    pub next_actions: Vec<NextAction>,
    pub timeline: ResolutionTimeline,
}

/// Runs a validated case through feature processing, scoring, and
/// recommendation generation. Completed predictions are cached by case
/// content when a cache is supplied.
pub struct PredictionPipeline<C> {
    features: FeatureProcessor,
    recovery: RecoveryEstimator,
    prioritizer: CasePrioritizer,
    recommender: RecommendationEngine,
    cache: Option<Arc<C>>,
}

impl<C: PredictionCache> PredictionPipeline<C> {
    pub fn new(prioritizer: CasePrioritizer, cache: Option<Arc<C>>) -> Self {
        Self {
            features: FeatureProcessor,
            recovery: RecoveryEstimator,
            prioritizer,
            recommender: RecommendationEngine,
            cache,
        }
    }

    pub fn predict(&self, case: &CaseRecord) -> CasePrediction {
        let key = CacheKey::for_case(case);
        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.get(&key) {
                debug!(case_id = %case.case_id, "serving cached prediction");
                return cached;
            }
        }

        let features = self.features.process(case);

        let recovery_probability = self.recovery.estimate(case);
        let priority_score = self.prioritizer.priority_score(case);
        let risk_score = self.prioritizer.risk_score(case);

        let urgency = self
            .recommender
            .urgency(priority_score, risk_score, case.aging_days);

        let prediction = CasePrediction {
            case_id: case.case_id.clone(),
            scores: PredictionScores {
                recovery_probability,
                priority_score,
                risk_score,
            },
            confidence: self.recommender.confidence(case, recovery_probability),
            classification: PredictionClassification {
                risk_level: ScoreBand::classify(risk_score),
                priority_level: ScoreBand::classify(priority_score),
                recovery_band: RecoveryBand::classify(recovery_probability),
                urgency,
            },
            recommended_actions: self.recommender.recommendations(
                case,
                recovery_probability,
                priority_score,
                risk_score,
            ),
            next_actions: self.recommender.next_actions(case, recovery_probability, urgency),
            timeline: self.recommender.timeline(urgency),
        };

        info!(
            case_id = %case.case_id,
            recovery = recovery_probability,
            priority = priority_score,
            amount_category = features.amount_category.label(),
            aging_category = features.aging_category.label(),
            "prediction completed"
        );

        if let Some(cache) = &self.cache {
            cache.put(key, prediction.clone());
        }

        prediction
    }

    /// Prediction of last resort for a case that failed validation inside a
    /// batch. Neutral scores, minimal confidence, and a single instruction to
    /// route the case to a human.
    pub fn fallback(&self, case_id: &str) -> CasePrediction {
        let urgency = self.recommender.urgency(50.0, 50.0, 0);
        CasePrediction {
            case_id: case_id.to_string(),
            scores: PredictionScores {
                recovery_probability: 0.5,
                priority_score: 50.0,
                risk_score: 50.0,
            },
            confidence: 0.1,
            classification: PredictionClassification {
                risk_level: ScoreBand::classify(50.0),
                priority_level: ScoreBand::classify(50.0),
                recovery_band: RecoveryBand::classify(0.5),
                urgency,
            },
            recommended_actions: vec!["Manual review required".to_string()],
            next_actions: Vec::new(),
            timeline: self.recommender.timeline(urgency),
        }
    }
}

/// Liveness report for one scoring component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStatus {
    pub name: &'static str,
    pub loaded: bool,
}

/// Engine-wide status snapshot served by the status endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineStatus {
    pub version: &'static str,
    pub components: Vec<ComponentStatus>,
}

impl EngineStatus {
    pub const VERSION: &'static str = "1.0.0";

    pub fn current() -> Self {
        let components = [
            "feature_processor",
            "recovery_estimator",
            "case_prioritizer",
            "agency_scorer",
            "recommendation_engine",
            "assignment_optimizer",
        ]
        .into_iter()
        .map(|name| ComponentStatus { name, loaded: true })
        .collect();

        Self {
            version: Self::VERSION,
            components,
        }
    }
}
