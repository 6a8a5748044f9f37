use crate::scoring::domain::{
    AgencyCapacity, AgencyRecord, CaseRecord, PaymentEvent, RiskProfile,
};

pub(super) fn case(debt_amount: f64, aging_days: u32, profile: RiskProfile) -> CaseRecord {
    CaseRecord {
        case_id: "CASE-001".to_string(),
        customer_id: "CUST-001".to_string(),
        debt_amount,
        aging_days,
        customer_risk_profile: profile,
        service_type: "STANDARD".to_string(),
        customer_segment: "STANDARD".to_string(),
        previous_interactions: 0,
        payment_history: Vec::new(),
    }
}

pub(super) fn moderate_case() -> CaseRecord {
    case(5_000.0, 45, RiskProfile::Medium)
}

pub(super) fn severe_case() -> CaseRecord {
    CaseRecord {
        case_id: "CASE-SEV".to_string(),
        ..case(60_000.0, 130, RiskProfile::Critical)
    }
}

pub(super) fn payment(status: &str) -> PaymentEvent {
    PaymentEvent {
        status: status.to_string(),
        amount: Some(250.0),
        recorded_on: None,
    }
}

pub(super) fn agency(dca_id: &str) -> AgencyRecord {
    AgencyRecord {
        dca_id: dca_id.to_string(),
        name: format!("Agency {dca_id}"),
        total_cases_handled: 2_500,
        total_recovered: 1_200_000.0,
        average_recovery_rate: 70.0,
        average_resolution_time: 40.0,
        sla_compliance: 88.0,
        customer_satisfaction_score: 4.0,
        specializations: vec!["STANDARD".to_string()],
        capacity: AgencyCapacity {
            max_cases: Some(1_000),
            current_cases: Some(400),
            available_agents: Some(25),
        },
    }
}

pub(super) fn top_tier_agency() -> AgencyRecord {
    AgencyRecord {
        average_recovery_rate: 85.0,
        average_resolution_time: 25.0,
        sla_compliance: 97.0,
        customer_satisfaction_score: 4.6,
        ..agency("DCA-TOP")
    }
}

pub(super) fn full_capacity_agency() -> AgencyRecord {
    AgencyRecord {
        capacity: AgencyCapacity {
            max_cases: Some(500),
            current_cases: Some(500),
            available_agents: Some(0),
        },
        ..agency("DCA-FULL")
    }
}
