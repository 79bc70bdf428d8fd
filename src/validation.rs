//! Boundary validation for incoming scoring requests.
//!
//! The engine itself never re-checks identifier formats or numeric ranges;
//! callers are expected to run [`validate`] before invoking it.

use crate::scoring::ScoringRequest;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    TaxIdFormat,
    PassportFormat,
    NonPositiveAmount,
    NonPositiveTerm,
    NegativeSalary,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::TaxIdFormat => write!(f, "tax id must be exactly 12 digits"),
            ValidationError::PassportFormat => {
                write!(f, "passport number must be exactly 10 digits")
            }
            ValidationError::NonPositiveAmount => write!(f, "loan amount must be greater than 0"),
            ValidationError::NonPositiveTerm => {
                write!(f, "loan term must be at least 1 month")
            }
            ValidationError::NegativeSalary => {
                write!(f, "monthly salary must not be negative when provided")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub fn validate(request: &ScoringRequest) -> Result<(), ValidationError> {
    if !all_digits(&request.tax_id, 12) {
        return Err(ValidationError::TaxIdFormat);
    }
    if !all_digits(&request.passport_number, 10) {
        return Err(ValidationError::PassportFormat);
    }
    // The comparison direction also rejects NaN amounts.
    if !(request.loan_amount > 0.0) {
        return Err(ValidationError::NonPositiveAmount);
    }
    if request.loan_term == 0 {
        return Err(ValidationError::NonPositiveTerm);
    }
    if let Some(salary) = request.monthly_salary {
        if salary < 0.0 {
            return Err(ValidationError::NegativeSalary);
        }
    }
    Ok(())
}

fn all_digits(value: &str, expected_len: usize) -> bool {
    value.len() == expected_len && value.bytes().all(|byte| byte.is_ascii_digit())
}
