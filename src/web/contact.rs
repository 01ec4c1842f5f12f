use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use log::{error, warn};
use serde_json::{json, Value};

use crate::{
    models::contact::ContactSubmission,
    services::contact::{self, ContactError},
};

use super::AppState;

const SUBMIT_FAILED: &str = "Failed to submit contact form";

pub async fn submit_contact(State(state): State<AppState>, body: Bytes) -> (StatusCode, Json<Value>) {
    let submission: ContactSubmission = match serde_json::from_slice(&body) {
        Ok(submission) => submission,
        Err(err) => {
            error!("Error submitting contact form: {}", err);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": SUBMIT_FAILED })),
            );
        }
    };

    match contact::submit(state.source.as_ref(), submission).await {
        Ok(receipt) => (
            StatusCode::CREATED,
            Json(json!({
                "success": true,
                "message": receipt.message,
                "id": receipt.id,
            })),
        ),
        Err(err @ (ContactError::MissingFields | ContactError::MissingApplicationFields)) => {
            warn!("Rejected contact form: {}", err);
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": err.to_string() })),
            )
        }
        Err(ContactError::Storage(_)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": SUBMIT_FAILED })),
        ),
    }
}
