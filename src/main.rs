use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use scoring_service::config::{AppConfig, ScoringConfig};
use scoring_service::error::AppError;
use scoring_service::scoring::{
    Decision, DecisionDetails, RiskLevel, ScoreBreakdown, ScoringEngine, ScoringRequest,
    ScoringResult,
};
use scoring_service::{telemetry, validation};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
struct AppState {
    engine: Arc<ScoringEngine>,
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Credit Scoring Service",
    about = "Run the credit scoring service or evaluate a single application from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single loan application and print the decision
    Evaluate(EvaluateArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct EvaluateArgs {
    /// Application identifier
    #[arg(long)]
    application_id: i64,
    /// Applicant identifier
    #[arg(long)]
    user_id: i64,
    /// National tax id (12 digits)
    #[arg(long)]
    tax_id: String,
    /// Passport number (10 digits)
    #[arg(long)]
    passport: String,
    /// Requested loan amount
    #[arg(long)]
    amount: f64,
    /// Requested loan term in months
    #[arg(long)]
    term: u32,
    /// Declared monthly salary, if any
    #[arg(long)]
    salary: Option<f64>,
}

/// Envelope shared by the scoring endpoints: either a decision object or a
/// human-readable error string, never both.
#[derive(Debug, Serialize, Deserialize)]
struct ScoringResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<ScoringResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    timestamp: DateTime<Utc>,
}

impl ScoringResponse {
    fn success(result: ScoringResult) -> Self {
        Self {
            success: true,
            data: Some(result),
            error: None,
            timestamp: Utc::now(),
        }
    }

    fn failure(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            timestamp: Utc::now(),
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Evaluate(args) => run_evaluate(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(config.environment, &config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        engine: Arc::new(ScoringEngine::new(config.scoring.clone())),
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let app = router(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "credit scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/scoring/evaluate", post(evaluate_endpoint))
        .route("/api/v1/scoring/config", get(config_endpoint))
        .route("/api/v1/scoring/simulate/:status", post(simulate_endpoint))
        .with_state(state)
}

fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;

    let request = ScoringRequest {
        application_id: args.application_id,
        user_id: args.user_id,
        tax_id: args.tax_id,
        passport_number: args.passport,
        loan_amount: args.amount,
        loan_term: args.term,
        monthly_salary: args.salary,
    };
    validation::validate(&request)?;

    let engine = ScoringEngine::new(config.scoring);
    let result = engine.evaluate(&request);
    render_scoring_result(&result);

    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn evaluate_endpoint(
    State(state): State<AppState>,
    Json(request): Json<ScoringRequest>,
) -> (StatusCode, Json<ScoringResponse>) {
    if let Err(err) = validation::validate(&request) {
        warn!(
            application_id = request.application_id,
            %err,
            "rejecting malformed scoring request"
        );
        return (
            StatusCode::BAD_REQUEST,
            Json(ScoringResponse::failure(err.to_string())),
        );
    }

    info!(
        application_id = request.application_id,
        "processing scoring request"
    );
    let result = state.engine.evaluate(&request);
    info!(
        application_id = request.application_id,
        decision = ?result.decision,
        score = result.score,
        "scoring completed"
    );

    (StatusCode::OK, Json(ScoringResponse::success(result)))
}

async fn config_endpoint(State(state): State<AppState>) -> Json<ScoringConfig> {
    Json(state.engine.config().clone())
}

/// Returns a canned decision so downstream consumers can exercise each
/// outcome without depending on the score model.
async fn simulate_endpoint(
    State(state): State<AppState>,
    Path(status): Path<String>,
    Json(request): Json<ScoringRequest>,
) -> (StatusCode, Json<ScoringResponse>) {
    let decision = match status.as_str() {
        "approved" => Decision::Approved,
        "rejected" => Decision::Rejected,
        "manual" => Decision::ManualReview,
        other => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ScoringResponse::failure(format!(
                    "invalid simulation status '{other}': use approved, rejected, or manual"
                ))),
            );
        }
    };

    info!(
        application_id = request.application_id,
        %status,
        "returning simulated scoring result"
    );
    let result = simulated_result(&request, decision, state.engine.config());
    (StatusCode::OK, Json(ScoringResponse::success(result)))
}

fn simulated_result(
    request: &ScoringRequest,
    decision: Decision,
    config: &ScoringConfig,
) -> ScoringResult {
    let score = match decision {
        Decision::Approved | Decision::ApprovedLimited => 800,
        Decision::ManualReview => 600,
        Decision::Rejected => 400,
    };
    let approved = decision.is_approved();
    let rejection_reasons = match decision {
        Decision::ManualReview => vec!["simulated manual review".to_string()],
        Decision::Rejected => vec!["simulated rejection".to_string()],
        _ => Vec::new(),
    };

    ScoringResult {
        application_id: request.application_id,
        user_id: request.user_id,
        decision,
        score,
        approved_amount: approved.then_some(request.loan_amount),
        approved_term: approved.then_some(request.loan_term),
        interest_rate: approved.then_some(config.base_interest_rate - 2.0),
        monthly_payment: approved.then_some(15_000.0),
        rejection_reason: if rejection_reasons.is_empty() {
            None
        } else {
            Some(rejection_reasons.join("; "))
        },
        insurance_required: false,
        details: DecisionDetails {
            risk_level: match score {
                score if score >= 750 => RiskLevel::Low,
                score if score >= 650 => RiskLevel::Medium,
                score if score >= 550 => RiskLevel::High,
                _ => RiskLevel::VeryHigh,
            },
            breakdown: ScoreBreakdown {
                factors: Vec::new(),
                random_adjustment: 0,
                final_score: score,
                risk_factors: Vec::new(),
            },
            rejection_reasons,
            recommendations: Vec::new(),
            decision_timestamp: Utc::now(),
        },
    }
}

fn render_scoring_result(result: &ScoringResult) {
    println!(
        "Application {} (user {})",
        result.application_id, result.user_id
    );
    println!(
        "Decision: {:?} | score {} | risk level {:?}",
        result.decision, result.score, result.details.risk_level
    );

    println!("\nScore factors");
    for factor in &result.details.breakdown.factors {
        println!(
            "- {:?}: {:+} (weight {:.1}) {}",
            factor.kind, factor.delta, factor.weight, factor.description
        );
    }
    println!(
        "- random adjustment: {:+}",
        result.details.breakdown.random_adjustment
    );

    if result.details.breakdown.risk_factors.is_empty() {
        println!("\nRisk factors: none");
    } else {
        println!("\nRisk factors");
        for risk in &result.details.breakdown.risk_factors {
            println!(
                "- [{:?}] {:?}: {} (impact {})",
                risk.severity, risk.kind, risk.description, risk.impact
            );
        }
    }

    if let (Some(amount), Some(term), Some(rate), Some(payment)) = (
        result.approved_amount,
        result.approved_term,
        result.interest_rate,
        result.monthly_payment,
    ) {
        println!("\nApproved terms");
        println!("- amount: {amount:.2}");
        println!("- term: {term} months");
        println!("- interest rate: {rate:.2}%");
        println!("- monthly payment: {payment:.2}");
        println!(
            "- insurance required: {}",
            if result.insurance_required { "yes" } else { "no" }
        );
    } else if let Some(reason) = &result.rejection_reason {
        println!("\nRejection reasons: {reason}");
    }

    println!("\nRecommendations");
    for recommendation in &result.details.recommendations {
        println!("- {recommendation}");
    }
}
