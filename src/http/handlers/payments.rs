use crate::domain::payment::{CreatePaymentRequest, ErrorEnvelope, ErrorPayload, PaymentStatus};
use crate::service::payment_service::ProcessError;
use crate::validation::ValidationErrorEnvelope;
use crate::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

pub async fn create_payment(
    State(state): State<AppState>,
    Json(req): Json<CreatePaymentRequest>,
) -> impl IntoResponse {
    match state.payment_service.process(req).await {
        // A Rejected record means the bank gave no decision: persisted and
        // returned, but as a client error like any other non-approval.
        Ok(record) if record.status == PaymentStatus::Rejected => {
            (axum::http::StatusCode::BAD_REQUEST, Json(record)).into_response()
        }
        Ok(record) => (axum::http::StatusCode::OK, Json(record)).into_response(),
        Err(ProcessError::Invalid { errors, .. }) => (
            axum::http::StatusCode::BAD_REQUEST,
            Json(ValidationErrorEnvelope { errors }),
        )
            .into_response(),
    }
}

pub async fn get_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<Uuid>,
) -> impl IntoResponse {
    match state.payment_service.lookup(payment_id) {
        Some(record) => (axum::http::StatusCode::OK, Json(record)).into_response(),
        None => (
            axum::http::StatusCode::NOT_FOUND,
            Json(ErrorEnvelope {
                error: ErrorPayload {
                    code: "PAYMENT_NOT_FOUND".to_string(),
                    message: "no payment exists for the given id".to_string(),
                    details: None,
                },
            }),
        )
            .into_response(),
    }
}

pub async fn health() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "ok")
}
