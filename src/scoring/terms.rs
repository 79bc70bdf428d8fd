//! Loan terms offered on the approved tiers.

use crate::config::ScoringConfig;

use super::domain::{ApprovalTerms, ScoringRequest};

const LIMITED_AMOUNT_CAP: f64 = 1_000_000.0;
const LIMITED_TERM_CAP: u32 = 36;
const MINIMUM_RATE: f64 = 5.0;
const INSURANCE_AMOUNT_THRESHOLD: f64 = 500_000.0;
const INSURANCE_SCORE_THRESHOLD: i32 = 700;
const INSURANCE_SALARY_THRESHOLD: f64 = 50_000.0;

pub(crate) fn approval_terms(
    request: &ScoringRequest,
    score: i32,
    config: &ScoringConfig,
    limited: bool,
) -> ApprovalTerms {
    let (approved_amount, approved_term) = if limited {
        (
            request.loan_amount.min(LIMITED_AMOUNT_CAP),
            request.loan_term.min(LIMITED_TERM_CAP),
        )
    } else {
        (request.loan_amount, request.loan_term)
    };

    let interest_rate = interest_rate(score, approved_term, config.base_interest_rate);
    let monthly_payment = monthly_payment(approved_amount, interest_rate, approved_term);
    let insurance_required = approved_amount > INSURANCE_AMOUNT_THRESHOLD
        || score < INSURANCE_SCORE_THRESHOLD
        || request
            .monthly_salary
            .map(|salary| salary < INSURANCE_SALARY_THRESHOLD)
            .unwrap_or(false);

    ApprovalTerms {
        approved_amount,
        approved_term,
        interest_rate,
        monthly_payment,
        insurance_required,
    }
}

pub(crate) fn interest_rate(score: i32, term: u32, base_rate: f64) -> f64 {
    let score_adjustment = if score >= 800 {
        -4.0
    } else if score >= 750 {
        -2.5
    } else if score >= 700 {
        -1.5
    } else if score >= 650 {
        -0.5
    } else {
        1.0
    };

    let term_adjustment = if term > 36 {
        1.5
    } else if term > 24 {
        0.5
    } else {
        0.0
    };

    MINIMUM_RATE.max(base_rate + score_adjustment + term_adjustment)
}

/// Standard annuity payment, rounded to 2 decimal places. A zero term is
/// guarded upstream; here it degrades to a zero payment instead of dividing
/// by zero.
pub(crate) fn monthly_payment(amount: f64, annual_rate: f64, term: u32) -> f64 {
    if term == 0 {
        return 0.0;
    }
    let monthly_rate = annual_rate / 100.0 / 12.0;
    let growth = (1.0 + monthly_rate).powi(term as i32);
    let payment = amount * (monthly_rate * growth) / (growth - 1.0);
    (payment * 100.0).round() / 100.0
}
