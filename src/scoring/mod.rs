//! The scoring-and-decision engine.
//!
//! One call to [`ScoringEngine::evaluate`] runs the whole pipeline: factor
//! evaluation, score aggregation, risk-factor tagging, tier classification,
//! approval terms or rejection reasons, and recommendations. Every stage is
//! a pure function of the request plus the fixed configuration; the only
//! non-determinism is the per-call score adjustment behind the
//! [`AdjustmentSource`] seam.

mod explain;
mod factors;
mod policy;
mod risk;
mod terms;

pub mod domain;

#[cfg(test)]
mod tests;

pub use domain::{
    ApprovalTerms, Decision, DecisionDetails, FactorKind, FactorResult, RiskFactor, RiskLevel,
    ScoreBreakdown, ScoringRequest, ScoringResult, Severity,
};

use crate::config::ScoringConfig;
use chrono::Utc;
use rand::Rng;

const BASE_SCORE: i32 = 500;
const MIN_SCORE: i32 = 300;
const MAX_SCORE: i32 = 850;

/// Source of the per-evaluation score adjustment. Injectable so audit-replay
/// and tests can substitute a fixed value.
pub trait AdjustmentSource: Send + Sync {
    fn draw(&self) -> i32;
}

/// Default source: uniform draw from [-15, 15] on every call, not seeded.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformAdjustment;

impl AdjustmentSource for UniformAdjustment {
    fn draw(&self) -> i32 {
        rand::rng().random_range(-15..=15)
    }
}

/// Stateless engine holding only read-only configuration; safe to share
/// across concurrent callers without locking.
pub struct ScoringEngine {
    config: ScoringConfig,
    adjustment: Box<dyn AdjustmentSource>,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_adjustment(config, Box::new(UniformAdjustment))
    }

    pub fn with_adjustment(config: ScoringConfig, adjustment: Box<dyn AdjustmentSource>) -> Self {
        Self { config, adjustment }
    }

    /// Read-only view of the rule-table parameters for boundary introspection.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Runs the factor evaluators, sums their deltas with the base score and
    /// the random adjustment, clamps into [300, 850], and tags risk factors.
    pub fn score(&self, request: &ScoringRequest) -> ScoreBreakdown {
        let factors = factors::evaluate_all(request);
        let random_adjustment = self.adjustment.draw();

        let delta_sum: i32 = factors.iter().map(|factor| factor.delta).sum();
        let final_score = (BASE_SCORE + delta_sum + random_adjustment).clamp(MIN_SCORE, MAX_SCORE);

        let risk_factors = risk::classify(&factors, final_score, request.declared_salary());

        ScoreBreakdown {
            factors,
            random_adjustment,
            final_score,
            risk_factors,
        }
    }

    /// Full evaluation of a loan application. Total over its documented
    /// input domain: no error outcomes.
    pub fn evaluate(&self, request: &ScoringRequest) -> ScoringResult {
        let breakdown = self.score(request);
        let score = breakdown.final_score;

        let decision = policy::classify_score(score);
        let risk_level = explain::risk_level(score);

        let terms = match decision {
            Decision::Approved => Some(terms::approval_terms(request, score, &self.config, false)),
            Decision::ApprovedLimited => {
                Some(terms::approval_terms(request, score, &self.config, true))
            }
            Decision::ManualReview | Decision::Rejected => None,
        };

        let rejection_reasons = match decision {
            Decision::ManualReview => {
                explain::rejection_reasons(score, &breakdown.risk_factors, true)
            }
            Decision::Rejected => explain::rejection_reasons(score, &breakdown.risk_factors, false),
            Decision::Approved | Decision::ApprovedLimited => Vec::new(),
        };

        let salary_declared = request.declared_salary().is_some();
        let recommendations = explain::recommendations(
            score,
            &breakdown.risk_factors,
            decision,
            risk_level,
            salary_declared,
        );

        ScoringResult {
            application_id: request.application_id,
            user_id: request.user_id,
            decision,
            score,
            approved_amount: terms.as_ref().map(|terms| terms.approved_amount),
            approved_term: terms.as_ref().map(|terms| terms.approved_term),
            interest_rate: terms.as_ref().map(|terms| terms.interest_rate),
            monthly_payment: terms.as_ref().map(|terms| terms.monthly_payment),
            rejection_reason: if rejection_reasons.is_empty() {
                None
            } else {
                Some(rejection_reasons.join("; "))
            },
            insurance_required: terms
                .as_ref()
                .map(|terms| terms.insurance_required)
                .unwrap_or(false),
            details: DecisionDetails {
                risk_level,
                breakdown,
                rejection_reasons,
                recommendations,
                decision_timestamp: Utc::now(),
            },
        }
    }
}
