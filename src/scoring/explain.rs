//! Human-readable justification: rejection reasons, recommendations, and the
//! coarse risk-level label.

use super::domain::{Decision, FactorKind, RiskFactor, RiskLevel, Severity};
use super::policy::MANUAL_REVIEW_SCORE;

/// Ordered rejection reasons for the non-approved tiers. Score-driven
/// reasons come first, then one reason per high-severity factor, then up to
/// two medium-severity ones, with a generic fallback so the list is never
/// returned empty.
pub(crate) fn rejection_reasons(
    score: i32,
    risk_factors: &[RiskFactor],
    manual_review: bool,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if score < 500 {
        reasons.push("insufficient credit rating".to_string());
    } else if score < MANUAL_REVIEW_SCORE {
        reasons.push("low level of creditworthiness".to_string());
    }

    for factor in high_severity(risk_factors) {
        match factor.kind {
            FactorKind::IncomeSufficiency => {
                reasons.push("income is insufficient for the requested amount".to_string());
            }
            FactorKind::SalaryMissing => {
                reasons.push("salary data is required to confirm income".to_string());
            }
            FactorKind::AmountRatio => {
                reasons.push("requested amount exceeds the allowed limits".to_string());
            }
            FactorKind::OverallScore => {
                reasons.push("overall risk level exceeds acceptable values".to_string());
            }
            _ => {}
        }
    }

    for factor in medium_severity(risk_factors).take(2) {
        match factor.kind {
            FactorKind::TermRatio => {
                reasons.push("requested loan term carries elevated risk".to_string());
            }
            FactorKind::PassportRisk => {
                reasons.push("passport data requires additional verification".to_string());
            }
            FactorKind::SalaryStability => {
                reasons.push("declared salary does not support the requested loan".to_string());
            }
            _ => {}
        }
    }

    if reasons.is_empty() {
        if manual_review {
            reasons.push("manual verification of applicant data is required".to_string());
        } else {
            reasons.push("application does not meet the bank's credit policy".to_string());
        }
    }

    reasons
}

/// Applicant-facing guidance; always non-empty.
pub(crate) fn recommendations(
    score: i32,
    risk_factors: &[RiskFactor],
    decision: Decision,
    risk_level: RiskLevel,
    salary_declared: bool,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    match decision {
        Decision::Rejected => {
            if score < MANUAL_REVIEW_SCORE {
                recommendations.push("consider applying for a smaller amount".to_string());
                recommendations.push("consider extending the loan term".to_string());
            }
            if !salary_declared {
                recommendations.push("provide your salary data with the application".to_string());
            }
            for factor in high_severity(risk_factors) {
                if factor.kind == FactorKind::IncomeSufficiency {
                    recommendations
                        .push("provide documents confirming additional income".to_string());
                }
            }
        }
        Decision::ManualReview => {
            recommendations.push("prepare additional documents confirming income".to_string());
            recommendations.push("expect a call from a credit specialist".to_string());
            if !salary_declared {
                recommendations.push("provide your salary data with the application".to_string());
            }
        }
        Decision::Approved | Decision::ApprovedLimited => {
            if risk_level == RiskLevel::Medium {
                recommendations
                    .push("consider credit insurance to reduce the interest rate".to_string());
            }
        }
    }

    if recommendations.is_empty() {
        recommendations.push("contact a bank branch to clarify the details".to_string());
    }

    recommendations
}

/// Label reported in the decision details; mirrors the tier thresholds but
/// branches nothing else.
pub(crate) fn risk_level(score: i32) -> RiskLevel {
    if score >= 750 {
        RiskLevel::Low
    } else if score >= 650 {
        RiskLevel::Medium
    } else if score >= 550 {
        RiskLevel::High
    } else {
        RiskLevel::VeryHigh
    }
}

fn high_severity(risk_factors: &[RiskFactor]) -> impl Iterator<Item = &RiskFactor> {
    risk_factors
        .iter()
        .filter(|factor| factor.severity == Severity::High)
}

fn medium_severity(risk_factors: &[RiskFactor]) -> impl Iterator<Item = &RiskFactor> {
    risk_factors
        .iter()
        .filter(|factor| factor.severity == Severity::Medium)
}
