use super::common::risk_entry;
use crate::scoring::domain::{Decision, FactorKind, RiskLevel, Severity};
use crate::scoring::explain::{recommendations, rejection_reasons, risk_level};

#[test]
fn score_reasons_precede_factor_reasons() {
    let factors = vec![risk_entry(
        FactorKind::IncomeSufficiency,
        Severity::High,
        -30,
    )];

    let reasons = rejection_reasons(480, &factors, false);
    assert_eq!(reasons[0], "insufficient credit rating");
    assert!(reasons[1].contains("income is insufficient"));

    let reasons = rejection_reasons(520, &[], false);
    assert_eq!(reasons, vec!["low level of creditworthiness".to_string()]);
}

#[test]
fn at_most_two_medium_factors_are_reported() {
    let factors = vec![
        risk_entry(FactorKind::TermRatio, Severity::Medium, -10),
        risk_entry(FactorKind::PassportRisk, Severity::Medium, -5),
        risk_entry(FactorKind::SalaryStability, Severity::Medium, -10),
    ];

    let reasons = rejection_reasons(560, &factors, true);
    assert_eq!(reasons.len(), 2);
    assert!(reasons[0].contains("loan term"));
    assert!(reasons[1].contains("passport data"));
}

#[test]
fn fallback_reason_depends_on_review_mode() {
    assert_eq!(
        rejection_reasons(560, &[], true),
        vec!["manual verification of applicant data is required".to_string()]
    );
    assert_eq!(
        rejection_reasons(560, &[], false),
        vec!["application does not meet the bank's credit policy".to_string()]
    );
}

#[test]
fn rejection_recommendations_cover_amount_term_and_income() {
    let factors = vec![risk_entry(
        FactorKind::IncomeSufficiency,
        Severity::High,
        -30,
    )];

    let recs = recommendations(480, &factors, Decision::Rejected, RiskLevel::VeryHigh, false);
    assert!(recs.iter().any(|rec| rec.contains("smaller amount")));
    assert!(recs.iter().any(|rec| rec.contains("extending the loan term")));
    assert!(recs.iter().any(|rec| rec.contains("salary data")));
    assert!(recs.iter().any(|rec| rec.contains("additional income")));
}

#[test]
fn manual_review_recommendations_mention_documents_and_call() {
    let recs = recommendations(600, &[], Decision::ManualReview, RiskLevel::High, true);
    assert!(recs.iter().any(|rec| rec.contains("additional documents")));
    assert!(recs.iter().any(|rec| rec.contains("call")));
    assert!(!recs.iter().any(|rec| rec.contains("salary data")));

    let recs = recommendations(600, &[], Decision::ManualReview, RiskLevel::High, false);
    assert!(recs.iter().any(|rec| rec.contains("salary data")));
}

#[test]
fn approved_medium_risk_suggests_insurance() {
    let recs = recommendations(700, &[], Decision::ApprovedLimited, RiskLevel::Medium, true);
    assert_eq!(recs.len(), 1);
    assert!(recs[0].contains("insurance"));

    // No rule fires for a clean full approval; the generic fallback applies.
    let recs = recommendations(800, &[], Decision::Approved, RiskLevel::Low, true);
    assert_eq!(
        recs,
        vec!["contact a bank branch to clarify the details".to_string()]
    );
}

#[test]
fn risk_level_label_tracks_score_bands() {
    assert_eq!(risk_level(850), RiskLevel::Low);
    assert_eq!(risk_level(750), RiskLevel::Low);
    assert_eq!(risk_level(749), RiskLevel::Medium);
    assert_eq!(risk_level(650), RiskLevel::Medium);
    assert_eq!(risk_level(649), RiskLevel::High);
    assert_eq!(risk_level(550), RiskLevel::High);
    assert_eq!(risk_level(549), RiskLevel::VeryHigh);
    assert_eq!(risk_level(300), RiskLevel::VeryHigh);
}
