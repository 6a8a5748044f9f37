/// Named tiers a raw metric is graded against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkTiers {
    pub excellent: f64,
    pub good: f64,
    pub average: f64,
}

impl BenchmarkTiers {
    /// Piecewise-linear grade for a higher-is-better metric: 100 at or above
    /// the excellent tier, 70-100 between good and excellent, 40-70 between
    /// average and good, proportional below average, floored at 0.
    pub(crate) fn score(&self, value: f64) -> f64 {
        if value >= self.excellent {
            100.0
        } else if value >= self.good {
            70.0 + (value - self.good) / (self.excellent - self.good) * 30.0
        } else if value >= self.average {
            40.0 + (value - self.average) / (self.good - self.average) * 30.0
        } else {
            (value / self.average * 40.0).max(0.0)
        }
    }

    /// Mirrored grade for a lower-is-better metric (resolution time). Past the
    /// average tier the score tapers half a point per extra day, floored at 0.
    pub(crate) fn score_inverted(&self, value: f64) -> f64 {
        if value <= self.excellent {
            100.0
        } else if value <= self.good {
            70.0 + (self.good - value) / (self.good - self.excellent) * 30.0
        } else if value <= self.average {
            40.0 + (self.average - value) / (self.average - self.good) * 30.0
        } else {
            (40.0 - (value - self.average) * 0.5).max(0.0)
        }
    }
}

/// Benchmark tables for every graded agency metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBenchmarks {
    pub recovery_rate: BenchmarkTiers,
    /// Days; lower is better.
    pub resolution_time: BenchmarkTiers,
    pub sla_compliance: BenchmarkTiers,
    pub satisfaction: BenchmarkTiers,
}

impl Default for ScoreBenchmarks {
    fn default() -> Self {
        Self {
            recovery_rate: BenchmarkTiers {
                excellent: 80.0,
                good: 65.0,
                average: 50.0,
            },
            resolution_time: BenchmarkTiers {
                excellent: 30.0,
                good: 45.0,
                average: 60.0,
            },
            sla_compliance: BenchmarkTiers {
                excellent: 95.0,
                good: 85.0,
                average: 75.0,
            },
            satisfaction: BenchmarkTiers {
                excellent: 4.5,
                good: 3.5,
                average: 2.5,
            },
        }
    }
}
