use super::common::request;
use crate::scoring::domain::FactorKind;
use crate::scoring::factors::{evaluate_all, weight_for, ASSUMED_MONTHLY_INCOME};

fn delta_of(request: &crate::scoring::ScoringRequest, kind: FactorKind) -> i32 {
    evaluate_all(request)
        .into_iter()
        .find(|factor| factor.kind == kind)
        .map(|factor| factor.delta)
        .unwrap_or_else(|| panic!("{kind:?} missing from evaluation"))
}

#[test]
fn evaluators_run_in_canonical_order() {
    let factors = evaluate_all(&request());
    let kinds: Vec<FactorKind> = factors.iter().map(|factor| factor.kind).collect();
    assert_eq!(
        kinds,
        vec![
            FactorKind::AmountRatio,
            FactorKind::TermRatio,
            FactorKind::PassportRisk,
            FactorKind::TaxIdRisk,
            FactorKind::ApplicationRisk,
            FactorKind::IncomeSufficiency,
            FactorKind::SalaryStability,
        ]
    );
}

#[test]
fn amount_ratio_tiers() {
    let mut req = request();
    for (amount, expected) in [
        (100_000.0, 50),
        (100_001.0, 30),
        (500_000.0, 30),
        (1_000_000.0, 10),
        (1_000_001.0, -20),
    ] {
        req.loan_amount = amount;
        assert_eq!(
            delta_of(&req, FactorKind::AmountRatio),
            expected,
            "amount {amount}"
        );
    }
}

#[test]
fn term_ratio_tiers() {
    let mut req = request();
    for (term, expected) in [(12, 40), (13, 20), (36, 20), (37, -10)] {
        req.loan_term = term;
        assert_eq!(delta_of(&req, FactorKind::TermRatio), expected, "term {term}");
    }
}

#[test]
fn identifier_factors_are_deterministic_and_bounded() {
    let req = request();
    let passport = delta_of(&req, FactorKind::PassportRisk);
    let tax_id = delta_of(&req, FactorKind::TaxIdRisk);

    assert!((-20..=20).contains(&passport), "passport delta {passport}");
    assert!((-15..=15).contains(&tax_id), "tax id delta {tax_id}");

    // Same identifiers must always reduce to the same deltas.
    assert_eq!(delta_of(&req, FactorKind::PassportRisk), passport);
    assert_eq!(delta_of(&req, FactorKind::TaxIdRisk), tax_id);
}

#[test]
fn distinct_identifiers_stay_in_range() {
    let mut req = request();
    for seed in 0..50u64 {
        req.passport_number = format!("{:010}", seed * 97 + 1);
        req.tax_id = format!("{:012}", seed * 131 + 7);
        let passport = delta_of(&req, FactorKind::PassportRisk);
        let tax_id = delta_of(&req, FactorKind::TaxIdRisk);
        assert!((-20..=20).contains(&passport));
        assert!((-15..=15).contains(&tax_id));
    }
}

#[test]
fn application_risk_follows_modulus_rule() {
    let mut req = request();
    for (id, expected) in [(1, -9), (10, 0), (15, 5), (20, 10), (21, -10), (31, 0)] {
        req.application_id = id;
        assert_eq!(
            delta_of(&req, FactorKind::ApplicationRisk),
            expected,
            "application id {id}"
        );
    }
}

#[test]
fn income_sufficiency_tiers_with_declared_salary() {
    let mut req = request();
    req.loan_term = 10;
    req.monthly_salary = Some(100_000.0);
    // payment = amount / 10, ratio = payment / 100_000
    for (amount, expected) in [
        (100_000.0, 40),  // ratio 0.10
        (250_000.0, 20),  // ratio 0.25
        (400_000.0, 0),   // ratio 0.40
        (600_000.0, -15), // ratio 0.60
        (700_000.0, -30), // ratio 0.70
    ] {
        req.loan_amount = amount;
        assert_eq!(
            delta_of(&req, FactorKind::IncomeSufficiency),
            expected,
            "amount {amount}"
        );
    }
}

#[test]
fn income_sufficiency_falls_back_to_assumed_income() {
    let mut req = request();
    req.monthly_salary = None;
    req.loan_term = 10;
    // payment = amount / 10, ratio = payment / ASSUMED_MONTHLY_INCOME
    for (ratio, expected) in [(0.1, 20), (0.4, 0), (0.6, -15), (0.9, -35)] {
        req.loan_amount = ratio * ASSUMED_MONTHLY_INCOME * 10.0;
        let factors = evaluate_all(&req);
        let factor = factors
            .iter()
            .find(|factor| factor.kind == FactorKind::IncomeSufficiency)
            .expect("income factor present");
        assert_eq!(factor.delta, expected, "ratio {ratio}");
        assert!(
            factor.description.contains("salary not provided"),
            "fallback descriptions flag the missing salary"
        );
    }
}

#[test]
fn income_sufficiency_treats_zero_salary_as_missing() {
    let mut req = request();
    req.monthly_salary = Some(0.0);
    let factors = evaluate_all(&req);
    let factor = factors
        .iter()
        .find(|factor| factor.kind == FactorKind::IncomeSufficiency)
        .expect("income factor present");
    assert!(factor.description.contains("salary not provided"));
}

#[test]
fn salary_stability_tiers() {
    let mut req = request();
    for (salary, expected) in [
        (None, -20),
        (Some(0.0), -20),
        (Some(20_000.0), -10),
        (Some(50_000.0), 10),
        (Some(100_000.0), 25),
        (Some(200_000.0), 35),
    ] {
        req.monthly_salary = salary;
        assert_eq!(
            delta_of(&req, FactorKind::SalaryStability),
            expected,
            "salary {salary:?}"
        );
    }
}

#[test]
fn weight_table_is_attached_but_informational() {
    let factors = evaluate_all(&request());
    for factor in &factors {
        assert_eq!(factor.weight, weight_for(factor.kind));
    }
    assert_eq!(weight_for(FactorKind::AmountRatio), 2.0);
    assert_eq!(weight_for(FactorKind::TermRatio), 1.5);
    assert_eq!(weight_for(FactorKind::IncomeSufficiency), 2.5);
    assert_eq!(weight_for(FactorKind::SalaryStability), 1.8);
    assert_eq!(weight_for(FactorKind::PassportRisk), 1.2);
    assert_eq!(weight_for(FactorKind::TaxIdRisk), 1.0);
    assert_eq!(weight_for(FactorKind::ApplicationRisk), 0.8);
    assert_eq!(weight_for(FactorKind::OverallScore), 1.0);
}
