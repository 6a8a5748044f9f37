//! Debt-collection scoring engine: case predictions, agency grading, and
//! assignment optimization behind one service facade.

pub mod agency;
pub mod assignment;
pub mod cache;
pub mod domain;
pub mod features;
pub mod prediction;
pub mod priority;
pub mod recommend;
pub mod recovery;
pub mod router;
pub mod service;

pub use agency::{AgencyInsights, AgencyScorer, BenchmarkTiers, ScoreBenchmarks};
pub use assignment::{AgencyCandidate, Assignment, AssignmentOptimizer};
pub use cache::{CacheKey, NoCache, PredictionCache};
pub use domain::{
    AgencyCapacity, AgencyRecord, AssignmentConstraints, CaseRecord, PaymentEvent, RiskProfile,
    ValidationError,
};
pub use features::{FeatureProcessor, ProcessedFeatures};
pub use prediction::{CasePrediction, EngineStatus, PredictionPipeline, RecoveryBand, ScoreBand};
pub use priority::{CasePrioritizer, PriorityWeights};
pub use recommend::{NextAction, RecommendationEngine, ResolutionTimeline, Urgency};
pub use recovery::RecoveryEstimator;
pub use router::scoring_router;
pub use service::{AgencyScorecard, ScoringService};

#[cfg(test)]
mod tests;
