//! Request handlers

use super::ServerState;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use council_application::ClientError;
use council_infrastructure::{ChatRequest, ChatResponse, ErrorBody};
use serde_json::json;
use tracing::{error, info, warn};

const INTERNAL_ERROR: &str = "Failed to process chat request";
const MISSING_KEY: &str = "GEMINI_API_KEY is not configured";

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// `POST /api/chat`
///
/// Takes the raw body so malformed JSON is reported like a missing message.
pub async fn chat(State(state): State<ServerState>, body: Bytes) -> Response {
    let (message, history) = match ChatRequest::parse(&body) {
        Ok(parsed) => parsed,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    info!(
        "Chat request ({} chars, {} history entries)",
        message.len(),
        history.len()
    );

    match state.client.request_replies(&message, history).await {
        Ok(round) => (StatusCode::OK, Json(ChatResponse::from(&round))).into_response(),
        Err(ClientError::InvalidRequest(reason)) => {
            error_response(StatusCode::BAD_REQUEST, reason)
        }
        Err(ClientError::NotConfigured(reason)) => {
            warn!("Rejecting chat request: {}", reason);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, MISSING_KEY)
        }
        Err(e) => {
            error!("Error in chat API: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    }
}

/// `GET /health`
pub async fn health(State(state): State<ServerState>) -> impl IntoResponse {
    Json(json!({"status": "ok", "personas": state.personas}))
}
