use crate::config::ScoringConfig;
use crate::scoring::domain::{FactorKind, RiskFactor, ScoringRequest, Severity};
use crate::scoring::{AdjustmentSource, ScoringEngine};

/// Pins the per-call adjustment so evaluations become reproducible.
pub(super) struct FixedAdjustment(pub(super) i32);

impl AdjustmentSource for FixedAdjustment {
    fn draw(&self) -> i32 {
        self.0
    }
}

pub(super) fn deterministic_engine() -> ScoringEngine {
    ScoringEngine::with_adjustment(ScoringConfig::default(), Box::new(FixedAdjustment(0)))
}

pub(super) fn request() -> ScoringRequest {
    ScoringRequest {
        application_id: 1,
        user_id: 42,
        tax_id: "123456789012".to_string(),
        passport_number: "4510123456".to_string(),
        loan_amount: 200_000.0,
        loan_term: 24,
        monthly_salary: Some(80_000.0),
    }
}

pub(super) fn risk_entry(kind: FactorKind, severity: Severity, impact: i32) -> RiskFactor {
    RiskFactor {
        kind,
        severity,
        description: format!("{kind:?} flagged for test"),
        impact,
    }
}
