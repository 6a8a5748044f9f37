use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use super::agency::{AgencyScorer, ScoreBenchmarks};
use super::assignment::{Assignment, AssignmentOptimizer};
use super::cache::PredictionCache;
use super::domain::{AgencyRecord, AssignmentConstraints, CaseRecord, ValidationError};
use super::prediction::{CasePrediction, EngineStatus, PredictionPipeline};
use super::priority::{CasePrioritizer, PriorityWeights};

/// Full grading of one agency, ready for serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyScorecard {
    pub dca_id: String,
    pub name: String,
    pub performance_score: f64,
    pub reliability_score: f64,
    pub efficiency_score: f64,
    pub overall_rating: f64,
    pub ranking: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Application facade over the scoring engine. Owns every model component and
/// enforces boundary validation before any of them run.
pub struct ScoringService<C> {
    pipeline: PredictionPipeline<C>,
    agency_scorer: AgencyScorer,
    optimizer: AssignmentOptimizer,
}

impl<C: PredictionCache> ScoringService<C> {
    pub fn new(
        weights: PriorityWeights,
        benchmarks: ScoreBenchmarks,
        cache: Option<Arc<C>>,
    ) -> Self {
        let prioritizer = CasePrioritizer::new(weights);
        Self {
            pipeline: PredictionPipeline::new(prioritizer, cache),
            agency_scorer: AgencyScorer::new(benchmarks),
            optimizer: AssignmentOptimizer::new(prioritizer),
        }
    }

    pub fn predict(&self, case: &CaseRecord) -> Result<CasePrediction, ValidationError> {
        case.validate()?;
        Ok(self.pipeline.predict(case))
    }

    /// Batch scoring never fails as a whole: an invalid case yields a
    /// low-confidence fallback entry while the rest score normally. Output
    /// order matches input order.
    pub fn predict_batch(&self, cases: &[CaseRecord]) -> Vec<CasePrediction> {
        let mut successful = 0usize;
        let predictions = cases
            .iter()
            .map(|case| match case.validate() {
                Ok(()) => {
                    successful += 1;
                    self.pipeline.predict(case)
                }
                Err(err) => {
                    warn!(case_id = %case.case_id, %err, "falling back to manual review");
                    self.pipeline.fallback(&case.case_id)
                }
            })
            .collect();

        info!(
            total = cases.len(),
            successful, "batch prediction completed"
        );
        predictions
    }

    pub fn score_agency(&self, agency: &AgencyRecord) -> Result<AgencyScorecard, ValidationError> {
        agency.validate()?;
        info!(dca_id = %agency.dca_id, "scoring agency performance");

        let performance_score = self.agency_scorer.performance_score(agency);
        let reliability_score = self.agency_scorer.reliability_score(agency);
        let efficiency_score = self.agency_scorer.efficiency_score(agency);
        let overall_rating = (performance_score + reliability_score + efficiency_score) / 3.0;
        let insights = self.agency_scorer.insights(agency);

        Ok(AgencyScorecard {
            dca_id: agency.dca_id.clone(),
            name: agency.name.clone(),
            performance_score,
            reliability_score,
            efficiency_score,
            overall_rating,
            ranking: ranking_tier(overall_rating),
            strengths: insights.strengths,
            improvements: insights.improvements,
        })
    }

    /// Validates every record up front: one bad case or agency rejects the
    /// whole optimization request.
    pub fn optimize_assignments(
        &self,
        cases: &[CaseRecord],
        agencies: &[AgencyRecord],
        constraints: &AssignmentConstraints,
    ) -> Result<Vec<Assignment>, ValidationError> {
        for case in cases {
            case.validate()?;
        }
        for agency in agencies {
            agency.validate()?;
        }
        Ok(self.optimizer.optimize(cases, agencies, constraints))
    }

    pub fn status(&self) -> EngineStatus {
        EngineStatus::current()
    }
}

// Banded stand-in for a portfolio-wide ranking, which would need every
// agency's rating in one place.
fn ranking_tier(overall_rating: f64) -> u8 {
    if overall_rating >= 90.0 {
        1
    } else if overall_rating >= 80.0 {
        2
    } else if overall_rating >= 70.0 {
        3
    } else if overall_rating >= 60.0 {
        4
    } else {
        5
    }
}
