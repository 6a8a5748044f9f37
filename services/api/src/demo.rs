use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;

use collections_ai::error::AppError;
use collections_ai::scoring::{
    AgencyCapacity, AgencyRecord, AssignmentConstraints, CasePrediction, CaseRecord, NoCache,
    PaymentEvent, PriorityWeights, RiskProfile, ScoreBenchmarks, ScoringService,
};

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// JSON file containing a case object or an array of cases
    #[arg(long)]
    pub(crate) file: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the assignment optimization portion of the demo output
    #[arg(long)]
    pub(crate) skip_assignment: bool,
}

fn scoring_service() -> Arc<ScoringService<NoCache>> {
    Arc::new(ScoringService::new(
        PriorityWeights::default(),
        ScoreBenchmarks::default(),
        None,
    ))
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let raw = fs::read_to_string(&args.file)?;

    // A single case object is accepted as a batch of one.
    let cases: Vec<CaseRecord> = match serde_json::from_str::<Vec<CaseRecord>>(&raw) {
        Ok(cases) => cases,
        Err(_) => vec![serde_json::from_str::<CaseRecord>(&raw)?],
    };

    let service = scoring_service();
    let predictions = service.predict_batch(&cases);

    let rendered = serde_json::to_string_pretty(&predictions)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = scoring_service();

    println!("Collections scoring demo");

    println!("\nCase predictions");
    for case in demo_cases() {
        let prediction = service.predict(&case)?;
        render_prediction(&case, &prediction);
    }

    println!("\nAgency scorecards");
    for agency in demo_agencies() {
        let scorecard = service.score_agency(&agency)?;
        println!(
            "- {} ({}): performance {:.1} | reliability {:.1} | efficiency {:.1} | overall {:.1} (tier {})",
            scorecard.name,
            scorecard.dca_id,
            scorecard.performance_score,
            scorecard.reliability_score,
            scorecard.efficiency_score,
            scorecard.overall_rating,
            scorecard.ranking
        );
        for strength in &scorecard.strengths {
            println!("    + {strength}");
        }
        for improvement in &scorecard.improvements {
            println!("    - {improvement}");
        }
    }

    if args.skip_assignment {
        return Ok(());
    }

    println!("\nAssignment optimization");
    let constraints = AssignmentConstraints {
        preferred_dcas: vec!["DCA-NORTH".to_string()],
    };
    let assignments = service.optimize_assignments(&demo_cases(), &demo_agencies(), &constraints)?;
    for assignment in assignments {
        match assignment.recommended_dca {
            Some(dca_id) => println!(
                "- {} -> {} (match {:.1}, priority {:.1}): {}",
                assignment.case_id,
                dca_id,
                assignment.match_score,
                assignment.priority,
                assignment.reasoning
            ),
            None => println!(
                "- {} -> unassigned (priority {:.1}): {}",
                assignment.case_id, assignment.priority, assignment.reasoning
            ),
        }
        for alternative in assignment.alternative_dcas {
            println!("    alt: {} (score {:.1})", alternative.dca_id, alternative.score);
        }
    }

    Ok(())
}

fn render_prediction(case: &CaseRecord, prediction: &CasePrediction) {
    println!(
        "- {} (${:.0}, {} days, {}): recovery {:.2} | priority {:.1} | risk {:.1} | urgency {}",
        case.case_id,
        case.debt_amount,
        case.aging_days,
        case.customer_risk_profile.label(),
        prediction.scores.recovery_probability,
        prediction.scores.priority_score,
        prediction.scores.risk_score,
        prediction.classification.urgency.label()
    );
    for action in &prediction.recommended_actions {
        println!("    * {action}");
    }
}

fn demo_cases() -> Vec<CaseRecord> {
    vec![
        CaseRecord {
            case_id: "CASE-1001".to_string(),
            customer_id: "CUST-204".to_string(),
            debt_amount: 5_000.0,
            aging_days: 45,
            customer_risk_profile: RiskProfile::Medium,
            service_type: "STANDARD".to_string(),
            customer_segment: "STANDARD".to_string(),
            previous_interactions: 2,
            payment_history: vec![
                PaymentEvent {
                    status: "paid".to_string(),
                    amount: Some(250.0),
                    recorded_on: None,
                },
                PaymentEvent {
                    status: "missed".to_string(),
                    amount: None,
                    recorded_on: None,
                },
            ],
        },
        CaseRecord {
            case_id: "CASE-1002".to_string(),
            customer_id: "CUST-377".to_string(),
            debt_amount: 60_000.0,
            aging_days: 130,
            customer_risk_profile: RiskProfile::Critical,
            service_type: "ENTERPRISE".to_string(),
            customer_segment: "CORPORATE".to_string(),
            previous_interactions: 8,
            payment_history: Vec::new(),
        },
    ]
}

fn demo_agencies() -> Vec<AgencyRecord> {
    vec![
        AgencyRecord {
            dca_id: "DCA-NORTH".to_string(),
            name: "Northern Recovery Partners".to_string(),
            total_cases_handled: 6_200,
            total_recovered: 9_800_000.0,
            average_recovery_rate: 82.0,
            average_resolution_time: 28.0,
            sla_compliance: 96.0,
            customer_satisfaction_score: 4.5,
            specializations: vec!["ENTERPRISE".to_string(), "STANDARD".to_string()],
            capacity: AgencyCapacity {
                max_cases: Some(1_000),
                current_cases: Some(760),
                available_agents: Some(48),
            },
        },
        AgencyRecord {
            dca_id: "DCA-EAST".to_string(),
            name: "Eastline Collections".to_string(),
            total_cases_handled: 1_400,
            total_recovered: 1_100_000.0,
            average_recovery_rate: 58.0,
            average_resolution_time: 52.0,
            sla_compliance: 81.0,
            customer_satisfaction_score: 3.2,
            specializations: vec!["STANDARD".to_string()],
            capacity: AgencyCapacity {
                max_cases: Some(600),
                current_cases: Some(210),
                available_agents: Some(12),
            },
        },
    ]
}
