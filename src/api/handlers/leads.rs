use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::api::errors::ApiError;
use crate::domain::gateways::CrmGateway;
use crate::domain::lead::{Lead, LeadSubmission};
use crate::relay::relay_lead;

/// Response from a successfully captured lead
#[derive(Debug, Serialize)]
pub struct LeadCapturedResponse {
    pub success: bool,
    pub deal_id: i64,
    pub message: String,
}

/// Capture a marketing-form lead and relay it into the CRM
///
/// POST /api/leads
///
/// A malformed body maps to 500 like any other relay failure, keeping the
/// response envelope uniform for the form scripts; only a missing name or
/// email is the caller's 400.
pub async fn capture_lead(
    State(crm): State<Arc<dyn CrmGateway>>,
    payload: Result<Json<LeadSubmission>, JsonRejection>,
) -> Result<Json<LeadCapturedResponse>, ApiError> {
    let Json(submission) =
        payload.map_err(|rejection| ApiError::internal_server_error(rejection.body_text()))?;

    let lead = Lead::from_submission(submission).map_err(ApiError::bad_request)?;

    tracing::info!(source = lead.source(), pipeline = %lead.pipeline(), "lead received");

    let report = relay_lead(crm.as_ref(), &lead).await?;

    Ok(Json(LeadCapturedResponse {
        success: true,
        deal_id: report.deal_id,
        message: "Lead captured successfully".to_string(),
    }))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
