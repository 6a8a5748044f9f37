use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Customer risk tier reported by the upstream case-management system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskProfile {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl RiskProfile {
    pub const fn label(self) -> &'static str {
        match self {
            RiskProfile::Low => "LOW",
            RiskProfile::Medium => "MEDIUM",
            RiskProfile::High => "HIGH",
            RiskProfile::Critical => "CRITICAL",
        }
    }
}

/// Single entry in a case's payment history. Only `status` is required; the
/// scoring pipeline counts entries whose status is exactly `"paid"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentEvent {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_on: Option<NaiveDate>,
}

impl PaymentEvent {
    pub fn paid(&self) -> bool {
        self.status == "paid"
    }
}

fn default_category() -> String {
    "STANDARD".to_string()
}

/// Immutable snapshot of a collection case as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    pub case_id: String,
    pub customer_id: String,
    pub debt_amount: f64,
    pub aging_days: u32,
    pub customer_risk_profile: RiskProfile,
    #[serde(default = "default_category")]
    pub service_type: String,
    #[serde(default = "default_category")]
    pub customer_segment: String,
    #[serde(default)]
    pub previous_interactions: u32,
    #[serde(default)]
    pub payment_history: Vec<PaymentEvent>,
}

impl CaseRecord {
    /// Boundary validation mirroring the API contract: scores are only defined
    /// for a positive, finite debt amount.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.debt_amount.is_finite() || self.debt_amount <= 0.0 {
            return Err(ValidationError::DebtAmount {
                case_id: self.case_id.clone(),
                value: self.debt_amount,
            });
        }
        Ok(())
    }

    /// Fraction of payment-history entries marked paid, when any history exists.
    pub fn payment_success_rate(&self) -> Option<f64> {
        if self.payment_history.is_empty() {
            return None;
        }
        let paid = self.payment_history.iter().filter(|p| p.paid()).count();
        Some(paid as f64 / self.payment_history.len() as f64)
    }
}

/// Reported workload bounds for an agency. All fields are optional; absent
/// values fall back to a 1000-case limit with zero occupancy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyCapacity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cases: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_cases: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_agents: Option<u32>,
}

impl AgencyCapacity {
    pub const DEFAULT_MAX_CASES: u32 = 1000;

    pub fn limit(&self) -> u32 {
        self.max_cases.unwrap_or(Self::DEFAULT_MAX_CASES)
    }

    pub fn occupancy(&self) -> u32 {
        self.current_cases.unwrap_or(0)
    }

    pub fn at_capacity(&self) -> bool {
        self.occupancy() >= self.limit()
    }

    /// Current load as a fraction of the limit. `None` when the limit is zero.
    pub fn utilization(&self) -> Option<f64> {
        let limit = self.limit();
        if limit == 0 {
            return None;
        }
        Some(f64::from(self.occupancy()) / f64::from(limit))
    }
}

/// Immutable performance snapshot of a debt-collection agency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgencyRecord {
    pub dca_id: String,
    pub name: String,
    pub total_cases_handled: u32,
    pub total_recovered: f64,
    pub average_recovery_rate: f64,
    pub average_resolution_time: f64,
    pub sla_compliance: f64,
    pub customer_satisfaction_score: f64,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[serde(default)]
    pub capacity: AgencyCapacity,
}

impl AgencyRecord {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.check_range("averageRecoveryRate", self.average_recovery_rate, 0.0, 100.0)?;
        self.check_range("slaCompliance", self.sla_compliance, 0.0, 100.0)?;
        self.check_range(
            "customerSatisfactionScore",
            self.customer_satisfaction_score,
            0.0,
            5.0,
        )?;
        if !self.average_resolution_time.is_finite() || self.average_resolution_time <= 0.0 {
            return Err(ValidationError::ResolutionTime {
                dca_id: self.dca_id.clone(),
                value: self.average_resolution_time,
            });
        }
        if !self.total_recovered.is_finite() || self.total_recovered < 0.0 {
            return Err(ValidationError::MetricRange {
                dca_id: self.dca_id.clone(),
                field: "totalRecovered",
                min: 0.0,
                max: f64::INFINITY,
                value: self.total_recovered,
            });
        }
        Ok(())
    }

    fn check_range(
        &self,
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    ) -> Result<(), ValidationError> {
        if !value.is_finite() || value < min || value > max {
            return Err(ValidationError::MetricRange {
                dca_id: self.dca_id.clone(),
                field,
                min,
                max,
                value,
            });
        }
        Ok(())
    }
}

/// Optional steering inputs for the assignment optimizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentConstraints {
    #[serde(default, rename = "preferredDCAs")]
    pub preferred_dcas: Vec<String>,
}

/// Rejection raised at the API boundary before any scoring runs.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("case {case_id}: debtAmount must be positive, got {value}")]
    DebtAmount { case_id: String, value: f64 },
    #[error("agency {dca_id}: {field} must be between {min} and {max}, got {value}")]
    MetricRange {
        dca_id: String,
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("agency {dca_id}: averageResolutionTime must be positive, got {value}")]
    ResolutionTime { dca_id: String, value: f64 },
}
