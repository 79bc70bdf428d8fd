use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validated loan application attributes handed to the engine.
///
/// Format and range checks (identifier shape, positive amount and term)
/// happen at the boundary; the engine only reads these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringRequest {
    pub application_id: i64,
    pub user_id: i64,
    pub tax_id: String,
    pub passport_number: String,
    pub loan_amount: f64,
    pub loan_term: u32,
    #[serde(default)]
    pub monthly_salary: Option<f64>,
}

impl ScoringRequest {
    /// Whether a usable salary figure accompanied the application.
    pub fn declared_salary(&self) -> Option<f64> {
        self.monthly_salary.filter(|salary| *salary > 0.0)
    }
}

/// Named contributors to the aggregate score and derived risk entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    AmountRatio,
    TermRatio,
    PassportRisk,
    TaxIdRisk,
    ApplicationRisk,
    IncomeSufficiency,
    SalaryStability,
    OverallScore,
    SalaryMissing,
}

/// Discrete contribution to an evaluation, allowing transparent audits.
///
/// `weight` is audit metadata rendered alongside the delta; it is never
/// multiplied into the aggregate sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorResult {
    pub kind: FactorKind,
    pub delta: i32,
    pub description: String,
    pub weight: f64,
}

/// Qualitative risk bucket derived from a factor's numeric impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Medium,
    High,
}

/// Negative contributor surfaced for adverse-action reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub kind: FactorKind,
    pub severity: Severity,
    pub description: String,
    pub impact: i32,
}

/// Full audit trail of one scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub factors: Vec<FactorResult>,
    pub random_adjustment: i32,
    pub final_score: i32,
    pub risk_factors: Vec<RiskFactor>,
}

/// Adjudication outcome for a scored application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Approved,
    ApprovedLimited,
    ManualReview,
    Rejected,
}

impl Decision {
    pub fn is_approved(self) -> bool {
        matches!(self, Decision::Approved | Decision::ApprovedLimited)
    }
}

/// Coarse label reported to consumers; not used for branching in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Concrete loan conditions offered on an approved tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalTerms {
    pub approved_amount: f64,
    pub approved_term: u32,
    pub interest_rate: f64,
    pub monthly_payment: f64,
    pub insurance_required: bool,
}

/// Supporting detail attached to every decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionDetails {
    pub risk_level: RiskLevel,
    pub breakdown: ScoreBreakdown,
    pub rejection_reasons: Vec<String>,
    pub recommendations: Vec<String>,
    pub decision_timestamp: DateTime<Utc>,
}

/// Final decision object returned to the caller; constructed once per
/// evaluation and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub application_id: i64,
    pub user_id: i64,
    pub decision: Decision,
    pub score: i32,
    pub approved_amount: Option<f64>,
    pub approved_term: Option<u32>,
    pub interest_rate: Option<f64>,
    pub monthly_payment: Option<f64>,
    pub rejection_reason: Option<String>,
    pub insurance_required: bool,
    pub details: DecisionDetails,
}
