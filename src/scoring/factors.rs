//! The seven factor evaluators feeding the aggregate score.
//!
//! Each evaluator is a pure function of the request and returns a signed
//! delta plus a human-readable description. Identifier factors stand in for
//! unavailable bureau data: they hash the identifier string purely to obtain
//! a stable pseudo-random delta per applicant, nothing security relevant.

use md5::Md5;
use sha2::{Digest, Sha256};

use super::domain::{FactorKind, FactorResult, ScoringRequest};

/// Divisor applied to the monthly payment when no salary was declared.
pub(crate) const ASSUMED_MONTHLY_INCOME: f64 = 50_000.0;

/// Runs every evaluator in the canonical order. Risk classification and the
/// rendered breakdown both rely on this ordering.
pub(crate) fn evaluate_all(request: &ScoringRequest) -> Vec<FactorResult> {
    vec![
        amount_ratio(request.loan_amount),
        term_ratio(request.loan_term),
        passport_risk(&request.passport_number),
        tax_id_risk(&request.tax_id),
        application_risk(request.application_id),
        income_sufficiency(
            request.loan_amount,
            request.loan_term,
            request.declared_salary(),
        ),
        salary_stability(request.declared_salary()),
    ]
}

/// Informational weight table attached to each factor for audit output.
/// Deliberately never applied to the score sum.
pub(crate) fn weight_for(kind: FactorKind) -> f64 {
    match kind {
        FactorKind::AmountRatio => 2.0,
        FactorKind::TermRatio => 1.5,
        FactorKind::IncomeSufficiency => 2.5,
        FactorKind::SalaryStability => 1.8,
        FactorKind::PassportRisk => 1.2,
        FactorKind::TaxIdRisk => 1.0,
        FactorKind::ApplicationRisk => 0.8,
        _ => 1.0,
    }
}

fn factor(kind: FactorKind, delta: i32, description: &str) -> FactorResult {
    FactorResult {
        kind,
        delta,
        description: description.to_string(),
        weight: weight_for(kind),
    }
}

fn amount_ratio(amount: f64) -> FactorResult {
    let (delta, description) = if amount <= 100_000.0 {
        (50, "low loan amount: minimal risk")
    } else if amount <= 500_000.0 {
        (30, "medium loan amount: moderate risk")
    } else if amount <= 1_000_000.0 {
        (10, "high loan amount: elevated risk")
    } else {
        (-20, "very high loan amount: high risk")
    };
    factor(FactorKind::AmountRatio, delta, description)
}

fn term_ratio(term: u32) -> FactorResult {
    let (delta, description) = if term <= 12 {
        (40, "short term: low risk")
    } else if term <= 36 {
        (20, "medium term: moderate risk")
    } else {
        (-10, "long term: elevated risk")
    };
    factor(FactorKind::TermRatio, delta, description)
}

/// Stable pseudo-random delta in [-20, 20] derived from the passport number.
fn passport_risk(passport: &str) -> FactorResult {
    let delta = id_risk(Md5::digest(passport.as_bytes()).as_slice(), 41) - 20;
    let description = if delta > 10 {
        "passport data: low risk"
    } else if delta > 0 {
        "passport data: moderate risk"
    } else {
        "passport data: needs further check"
    };
    factor(FactorKind::PassportRisk, delta, description)
}

/// Stable pseudo-random delta in [-15, 15] derived from the tax id.
fn tax_id_risk(tax_id: &str) -> FactorResult {
    let delta = id_risk(Sha256::digest(tax_id.as_bytes()).as_slice(), 31) - 15;
    let description = if delta > 5 {
        "tax id: low risk"
    } else if delta > -5 {
        "tax id: standard risk"
    } else {
        "tax id: elevated risk"
    };
    factor(FactorKind::TaxIdRisk, delta, description)
}

/// Reduces a digest, read as a big-endian integer, modulo `modulus`.
fn id_risk(digest: &[u8], modulus: u32) -> i32 {
    let modulus = u64::from(modulus);
    let residue = digest
        .iter()
        .fold(0u64, |acc, byte| (acc * 256 + u64::from(*byte)) % modulus);
    residue as i32
}

fn application_risk(application_id: i64) -> FactorResult {
    let delta = (application_id.rem_euclid(21) - 10) as i32;
    let description = if delta > 0 {
        "application: low risk"
    } else {
        "application: standard risk"
    };
    factor(FactorKind::ApplicationRisk, delta, description)
}

/// Single evaluator over an optional salary; the assumed-income fallback
/// keeps the two input shapes from drifting apart.
fn income_sufficiency(amount: f64, term: u32, salary: Option<f64>) -> FactorResult {
    let monthly_payment = if term == 0 {
        0.0
    } else {
        amount / f64::from(term)
    };

    let (delta, description) = match salary {
        Some(salary) => {
            let ratio = monthly_payment / salary;
            if ratio < 0.20 {
                (40, "payment is a small share of declared salary")
            } else if ratio < 0.35 {
                (20, "payment is a moderate share of declared salary")
            } else if ratio < 0.50 {
                (0, "payment is a noticeable share of declared salary")
            } else if ratio < 0.65 {
                (-15, "payment is a high share of declared salary")
            } else {
                (-30, "payment is an excessive share of declared salary")
            }
        }
        None => {
            let ratio = monthly_payment / ASSUMED_MONTHLY_INCOME;
            if ratio < 0.30 {
                (20, "payment is a small share of assumed income (salary not provided)")
            } else if ratio < 0.50 {
                (0, "payment is a moderate share of assumed income (salary not provided)")
            } else if ratio < 0.70 {
                (-15, "payment is a high share of assumed income (salary not provided)")
            } else {
                (
                    -35,
                    "payment is an excessive share of assumed income (salary not provided)",
                )
            }
        }
    };
    factor(FactorKind::IncomeSufficiency, delta, description)
}

fn salary_stability(salary: Option<f64>) -> FactorResult {
    let (delta, description) = match salary {
        None => (-20, "no declared salary"),
        Some(salary) if salary < 30_000.0 => (-10, "declared salary is low"),
        Some(salary) if salary < 70_000.0 => (10, "declared salary is adequate"),
        Some(salary) if salary < 150_000.0 => (25, "declared salary is solid"),
        Some(_) => (35, "declared salary is high"),
    };
    factor(FactorKind::SalaryStability, delta, description)
}
