use serde::Serialize;

use super::benchmarks::ScoreBenchmarks;
use crate::scoring::domain::AgencyRecord;

/// Narrative read of a scorecard: what the agency does well and where to
/// focus next. Both lists are always non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgencyInsights {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

pub(super) fn generate(agency: &AgencyRecord, benchmarks: &ScoreBenchmarks) -> AgencyInsights {
    let mut strengths = Vec::new();
    let mut improvements = Vec::new();

    let recovery = &benchmarks.recovery_rate;
    if agency.average_recovery_rate >= recovery.excellent {
        strengths.push("Excellent recovery rate performance".to_string());
    } else if agency.average_recovery_rate >= recovery.good {
        strengths.push("Good recovery rate performance".to_string());
    } else if agency.average_recovery_rate < recovery.average {
        improvements.push("Improve recovery strategies and techniques".to_string());
    }

    let resolution = &benchmarks.resolution_time;
    if agency.average_resolution_time <= resolution.excellent {
        strengths.push("Outstanding case resolution speed".to_string());
    } else if agency.average_resolution_time <= resolution.good {
        strengths.push("Good case resolution efficiency".to_string());
    } else if agency.average_resolution_time > resolution.average {
        improvements.push("Reduce average case resolution time".to_string());
    }

    let sla = &benchmarks.sla_compliance;
    if agency.sla_compliance >= sla.excellent {
        strengths.push("Excellent SLA compliance record".to_string());
    } else if agency.sla_compliance >= sla.good {
        strengths.push("Good SLA compliance performance".to_string());
    } else if agency.sla_compliance < sla.average {
        improvements.push("Focus on meeting SLA requirements consistently".to_string());
    }

    let satisfaction = &benchmarks.satisfaction;
    if agency.customer_satisfaction_score >= satisfaction.excellent {
        strengths.push("Outstanding customer satisfaction scores".to_string());
    } else if agency.customer_satisfaction_score >= satisfaction.good {
        strengths.push("Good customer satisfaction levels".to_string());
    } else if agency.customer_satisfaction_score < satisfaction.average {
        improvements.push("Improve customer service and communication".to_string());
    }

    if agency.total_cases_handled >= 5000 {
        strengths.push("Extensive experience with high case volume".to_string());
    } else if agency.total_cases_handled >= 2000 {
        strengths.push("Good experience with substantial case handling".to_string());
    } else if agency.total_cases_handled < 500 {
        improvements.push("Build experience through increased case volume".to_string());
    }

    if let Some(utilization) = agency.capacity.utilization() {
        let utilization = utilization * 100.0;
        if utilization > 95.0 {
            improvements.push("Consider expanding capacity to handle demand".to_string());
        } else if utilization < 50.0 {
            improvements.push("Optimize capacity utilization".to_string());
        } else if (70.0..=80.0).contains(&utilization) {
            strengths.push("Optimal capacity utilization".to_string());
        }
    }

    if agency.specializations.len() >= 3 {
        strengths.push("Diverse specialization portfolio".to_string());
    } else if agency.specializations.is_empty() {
        improvements.push("Develop specialized expertise in key areas".to_string());
    }

    if strengths.is_empty() {
        strengths.push("Consistent performance across key metrics".to_string());
    }
    if improvements.is_empty() {
        improvements.push("Continue maintaining current performance standards".to_string());
    }

    AgencyInsights {
        strengths,
        improvements,
    }
}
