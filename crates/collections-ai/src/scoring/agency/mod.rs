//! Agency performance grading against fixed industry benchmarks.

mod benchmarks;
mod insights;

use tracing::warn;

use super::domain::AgencyRecord;

pub use benchmarks::{BenchmarkTiers, ScoreBenchmarks};
pub use insights::AgencyInsights;

/// Grades an agency on three axes (performance, reliability, efficiency),
/// each 0-100, by interpolating its raw metrics against [`ScoreBenchmarks`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AgencyScorer {
    benchmarks: ScoreBenchmarks,
}

impl AgencyScorer {
    pub fn new(benchmarks: ScoreBenchmarks) -> Self {
        Self { benchmarks }
    }

    /// Recovery outcome quality: graded recovery rate dominates, with the
    /// graded resolution time as a secondary signal.
    pub fn performance_score(&self, agency: &AgencyRecord) -> f64 {
        let recovery = self.benchmarks.recovery_rate.score(agency.average_recovery_rate);
        let time = self
            .benchmarks
            .resolution_time
            .score_inverted(agency.average_resolution_time);

        let score = recovery * 0.7 + time * 0.3;
        if !score.is_finite() {
            warn!(dca_id = %agency.dca_id, "performance score degenerated, using neutral fallback");
            return 50.0;
        }
        score.clamp(0.0, 100.0)
    }

    /// SLA adherence, graded on the compliance benchmark tiers.
    pub fn reliability_score(&self, agency: &AgencyRecord) -> f64 {
        let score = self.benchmarks.sla_compliance.score(agency.sla_compliance);
        if !score.is_finite() {
            warn!(dca_id = %agency.dca_id, "reliability score degenerated, using fallback");
            return 80.0;
        }
        score.clamp(0.0, 100.0)
    }

    /// Operational efficiency: satisfaction, capacity utilization, and case
    /// volume experience in a 50/30/20 blend.
    pub fn efficiency_score(&self, agency: &AgencyRecord) -> f64 {
        let satisfaction = self
            .benchmarks
            .satisfaction
            .score(agency.customer_satisfaction_score);
        let utilization = utilization_score(agency);
        let experience = experience_score(agency.total_cases_handled);

        let score = satisfaction * 0.5 + utilization * 0.3 + experience * 0.2;
        if !score.is_finite() {
            warn!(dca_id = %agency.dca_id, "efficiency score degenerated, using fallback");
            return 70.0;
        }
        score.clamp(0.0, 100.0)
    }

    pub fn insights(&self, agency: &AgencyRecord) -> AgencyInsights {
        insights::generate(agency, &self.benchmarks)
    }
}

// Utilization is graded on a band, not a line: 70-80% is the sweet spot and
// both idle and saturated agencies score down from there.
fn utilization_score(agency: &AgencyRecord) -> f64 {
    let Some(utilization) = agency.capacity.utilization() else {
        return 50.0;
    };
    let pct = utilization * 100.0;

    if (70.0..=80.0).contains(&pct) {
        100.0
    } else if (60.0..70.0).contains(&pct) || (pct > 80.0 && pct <= 90.0) {
        80.0
    } else if (50.0..60.0).contains(&pct) || (pct > 90.0 && pct <= 95.0) {
        60.0
    } else {
        40.0
    }
}

fn experience_score(total_cases_handled: u32) -> f64 {
    if total_cases_handled >= 5000 {
        100.0
    } else if total_cases_handled >= 2000 {
        80.0
    } else if total_cases_handled >= 500 {
        60.0
    } else {
        40.0
    }
}
