use serde::Serialize;
use tracing::info;

use super::domain::{AgencyRecord, AssignmentConstraints, CaseRecord};
use super::priority::CasePrioritizer;

/// One agency considered for a case, with its match score and the reasons it
/// scored that way.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyCandidate {
    pub dca_id: String,
    pub name: String,
    pub score: f64,
    pub reasoning: String,
}

/// Recommended routing for a single case. `recommended_dca` is `None` when no
/// agency has spare capacity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub case_id: String,
    #[serde(rename = "recommendedDCA")]
    pub recommended_dca: Option<String>,
    pub match_score: f64,
    pub priority: f64,
    pub reasoning: String,
    #[serde(rename = "alternativeDCAs")]
    pub alternative_dcas: Vec<AgencyCandidate>,
}

/// Matches a portfolio of cases to the best available agencies. Cases are
/// handled in descending priority order so the strongest agencies are named
/// first for the cases that matter most.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssignmentOptimizer {
    prioritizer: CasePrioritizer,
}

impl AssignmentOptimizer {
    pub fn new(prioritizer: CasePrioritizer) -> Self {
        Self { prioritizer }
    }

    pub fn optimize(
        &self,
        cases: &[CaseRecord],
        agencies: &[AgencyRecord],
        constraints: &AssignmentConstraints,
    ) -> Vec<Assignment> {
        info!(
            cases = cases.len(),
            agencies = agencies.len(),
            "optimizing case assignments"
        );

        let mut prioritized: Vec<(&CaseRecord, f64)> = cases
            .iter()
            .map(|case| (case, self.prioritizer.priority_score(case)))
            .collect();
        // Stable sort: equal priorities keep their submission order.
        prioritized.sort_by(|a, b| b.1.total_cmp(&a.1));

        prioritized
            .into_iter()
            .map(|(case, priority)| self.assign(case, priority, agencies, constraints))
            .collect()
    }

    fn assign(
        &self,
        case: &CaseRecord,
        priority: f64,
        agencies: &[AgencyRecord],
        constraints: &AssignmentConstraints,
    ) -> Assignment {
        let mut best: Option<AgencyCandidate> = None;
        let mut best_score = 0.0;
        let mut alternatives: Vec<AgencyCandidate> = Vec::new();

        for agency in agencies {
            if agency.capacity.at_capacity() {
                continue;
            }

            let candidate = score_candidate(case, agency, constraints);

            if candidate.score > best_score {
                if let Some(demoted) = best.take() {
                    alternatives.push(demoted);
                }
                best_score = candidate.score;
                best = Some(candidate);
            } else if alternatives.len() < 3 {
                alternatives.push(candidate);
            }
        }

        alternatives.truncate(3);
        // Raw scores drive the comparison above; everything emitted stays on
        // the 0-100 scale.
        for alternative in &mut alternatives {
            alternative.score = alternative.score.clamp(0.0, 100.0);
        }

        match best {
            Some(candidate) => Assignment {
                case_id: case.case_id.clone(),
                recommended_dca: Some(candidate.dca_id),
                match_score: candidate.score.clamp(0.0, 100.0),
                priority,
                reasoning: candidate.reasoning,
                alternative_dcas: alternatives,
            },
            None => Assignment {
                case_id: case.case_id.clone(),
                recommended_dca: None,
                match_score: 0.0,
                priority,
                reasoning: "No suitable DCA found".to_string(),
                alternative_dcas: Vec::new(),
            },
        }
    }
}

fn score_candidate(
    case: &CaseRecord,
    agency: &AgencyRecord,
    constraints: &AssignmentConstraints,
) -> AgencyCandidate {
    let mut score = 0.0;
    let mut reasons: Vec<&str> = Vec::new();

    if agency
        .specializations
        .iter()
        .any(|s| *s == case.service_type)
    {
        score += 30.0;
        reasons.push("Specialization match");
    }

    score += agency.average_recovery_rate * 0.4;
    score += agency.sla_compliance * 0.3;

    // Less loaded agencies are preferred.
    let utilization = agency.capacity.utilization().unwrap_or(1.0);
    score += (1.0 - utilization) * 20.0;

    score += (agency.customer_satisfaction_score / 5.0) * 10.0;

    if constraints
        .preferred_dcas
        .iter()
        .any(|id| *id == agency.dca_id)
    {
        score += 15.0;
        reasons.push("Preferred DCA");
    }

    let reasoning = if reasons.is_empty() {
        "General performance match".to_string()
    } else {
        reasons.join("; ")
    };

    AgencyCandidate {
        dca_id: agency.dca_id.clone(),
        name: agency.name.clone(),
        score,
        reasoning,
    }
}
