use axum::{
    extract::{FromRequest, Multipart, Request, State},
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Json, Response},
    Form,
};
use std::sync::Arc;
use tracing::{error, info};

use crate::error::RelayError;
use crate::handlers::AppState;
use crate::models::common::SubmissionResponse;
use crate::models::form::FormPayload;
use crate::models::record::AirtableRecord;

const ALLOW_ANY_ORIGIN: (HeaderName, &str) = (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");

// Form submission endpoint
pub async fn submit_form(State(state): State<Arc<AppState>>, request: Request) -> Response {
    let result = match extract_form_payload(request).await {
        Ok(payload) => state.relay.submit(&payload).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(record) => (
            StatusCode::OK,
            [ALLOW_ANY_ORIGIN],
            Json(SubmissionResponse::submitted(record.id)),
        )
            .into_response(),
        Err(err) => {
            error!("Form submission error: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [ALLOW_ANY_ORIGIN],
                Json(SubmissionResponse::failed(err.to_string())),
            )
                .into_response()
        }
    }
}

// CORS preflight for the submission endpoint
pub async fn preflight() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            ALLOW_ANY_ORIGIN,
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
        .into_response()
}

// Any other method on the submission endpoint
pub async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

// List stored submissions (development only)
pub async fn list_submissions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AirtableRecord>>, StatusCode> {
    info!(
        "Received request to list submissions from '{}'",
        state.relay.client().table_name()
    );

    match state.relay.client().list_records().await {
        Ok(records) => {
            info!("Successfully retrieved {} submissions", records.len());
            Ok(Json(records))
        }
        Err(err) => {
            error!("Failed to retrieve submissions: {}", err);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Decode a URL-encoded or multipart form body.
pub async fn extract_form_payload(request: Request) -> Result<FormPayload, RelayError> {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"));

    if is_multipart {
        let mut multipart = Multipart::from_request(request, &())
            .await
            .map_err(|e| RelayError::MalformedInput(e.to_string()))?;

        let mut pairs = Vec::new();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| RelayError::MalformedInput(e.to_string()))?
        {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };
            // File inputs are not part of any form on the site
            if field.file_name().is_some() {
                continue;
            }
            let value = field
                .text()
                .await
                .map_err(|e| RelayError::MalformedInput(e.to_string()))?;
            pairs.push((name, value));
        }
        return Ok(FormPayload::from_pairs(pairs));
    }

    let Form(pairs) = Form::<Vec<(String, String)>>::from_request(request, &())
        .await
        .map_err(|e| RelayError::MalformedInput(e.to_string()))?;
    Ok(FormPayload::from_pairs(pairs))
}
