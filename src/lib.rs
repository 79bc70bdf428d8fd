//! Credit scoring microservice core.
//!
//! The [`scoring`] module holds the decision engine: factor evaluation, score
//! aggregation, tier classification, approval terms, and explanation text.
//! The remaining modules carry the service plumbing (configuration,
//! telemetry, boundary validation, error types).

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
pub mod validation;
