use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppError;
use crate::services::providers::{GenerationParams, ProviderError};
use crate::startup::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "brand is required"))]
    pub brand: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "industry is required"))]
    pub industry: String,
}

/// Analyze a brand: validate the request, render the instruction, make the
/// single upstream call, and relay the model's JSON verbatim.
///
/// The pipeline is linear with early exits; no branch leaves the request
/// without a `{"error": ...}` response.
#[tracing::instrument(skip(state, body))]
pub async fn analyze(
    State(state): State<AppState>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let Json(request) =
        body.map_err(|rejection| AppError::BadRequest(anyhow::anyhow!(rejection.body_text())))?;

    request.validate()?;

    // Checked before the provider is touched: a missing key must never
    // produce an outbound call.
    if state.config.gemini.api_key.as_deref().unwrap_or("").is_empty() {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "GEMINI_API_KEY is not set"
        )));
    }

    let prompt = state.prompt.render(&request.brand, &request.industry);

    let response = state
        .text_provider
        .generate(&prompt, &GenerationParams::json())
        .await?;

    let text = response.text.ok_or_else(|| {
        ProviderError::NoCandidates("The model returned an empty response".to_string())
    })?;

    let result: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
        AppError::InternalError(anyhow::anyhow!("Model output was not valid JSON: {}", e))
    })?;

    tracing::info!(
        brand = %request.brand,
        industry = %request.industry,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "Analysis completed"
    );

    Ok((StatusCode::OK, Json(result)))
}

/// CORS preflight: empty 200, answered before any other check. The fixed
/// cross-origin headers come from the middleware layer.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Method gate for `/api/analyze`: anything besides POST and OPTIONS.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
