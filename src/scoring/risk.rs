//! Severity tagging over the evaluated factors.

use super::domain::{FactorKind, FactorResult, RiskFactor, Severity};

const OVERALL_SCORE_IMPACT: i32 = -50;
const SALARY_MISSING_IMPACT: i32 = -20;

/// Re-examines the per-factor deltas and tags each negative one with a
/// severity bucket. Synthetic entries for an extreme aggregate score and for
/// missing income data always land after the evaluated factors.
pub(crate) fn classify(
    factors: &[FactorResult],
    final_score: i32,
    declared_salary: Option<f64>,
) -> Vec<RiskFactor> {
    let mut risk_factors = Vec::new();

    for factor in factors {
        let severity = if factor.delta < -10 {
            Severity::High
        } else if factor.delta < 0 {
            Severity::Medium
        } else {
            continue;
        };
        risk_factors.push(RiskFactor {
            kind: factor.kind,
            severity,
            description: factor.description.clone(),
            impact: factor.delta,
        });
    }

    if final_score < 500 {
        risk_factors.push(RiskFactor {
            kind: FactorKind::OverallScore,
            severity: Severity::High,
            description: "overall credit rating is too low".to_string(),
            impact: OVERALL_SCORE_IMPACT,
        });
    }

    if declared_salary.is_none() {
        risk_factors.push(RiskFactor {
            kind: FactorKind::SalaryMissing,
            severity: Severity::Medium,
            description: "no salary was provided with the application".to_string(),
            impact: SALARY_MISSING_IMPACT,
        });
    }

    risk_factors
}
