//! Inbound HTTP adapter for the webhook endpoint.
//!
//! Maps delivery outcomes onto status codes: 200 for completed deliveries
//! (including no-ops), 400 for malformed payloads, 404 when no project is
//! linked to the repository, and 500 for unexpected internal failures.
//! Non-2xx responses leave redelivery to the sending webhook provider.

use crate::board::ports::{ProjectRepository, TaskRepository};
use crate::sync::domain::{DeliveryOutcome, RejectionKind};
use crate::sync::services::CommitSyncService;
use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;

/// Header carrying the delivery event type.
pub const EVENT_TYPE_HEADER: &str = "x-github-event";

/// Path of the webhook endpoint.
pub const WEBHOOK_PATH: &str = "/webhooks/github";

/// Response body returned by the webhook endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncResponse {
    /// Whether the delivery was processed, including no-op completions.
    pub success: bool,
    /// Human-readable outcome description.
    pub message: String,
}

/// Builds the webhook router over a synchronization service.
pub fn router<P, T, C>(service: Arc<CommitSyncService<P, T, C>>) -> Router
where
    P: ProjectRepository + 'static,
    T: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(|| async { StatusCode::OK }))
        .route(WEBHOOK_PATH, post(receive_delivery::<P, T, C>))
        .with_state(service)
}

async fn receive_delivery<P, T, C>(
    State(service): State<Arc<CommitSyncService<P, T, C>>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response
where
    P: ProjectRepository + 'static,
    T: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Some(event_type) = headers
        .get(EVENT_TYPE_HEADER)
        .and_then(|value| value.to_str().ok())
    else {
        return respond(
            StatusCode::BAD_REQUEST,
            false,
            format!("missing {EVENT_TYPE_HEADER} header"),
        );
    };

    match service.process_delivery(event_type, &body).await {
        Ok(DeliveryOutcome::Completed { tasks_updated }) => respond(
            StatusCode::OK,
            true,
            format!("delivery processed, {tasks_updated} task update(s) applied"),
        ),
        Ok(DeliveryOutcome::Rejected(RejectionKind::MalformedPayload { detail })) => {
            respond(StatusCode::BAD_REQUEST, false, format!("malformed payload: {detail}"))
        }
        Ok(DeliveryOutcome::Rejected(RejectionKind::ProjectNotFound { repo_full_name })) => respond(
            StatusCode::NOT_FOUND,
            false,
            format!("no project linked to repository {repo_full_name}"),
        ),
        Err(err) => {
            error!(error = %err, "delivery processing failed");
            respond(
                StatusCode::INTERNAL_SERVER_ERROR,
                false,
                format!("internal error while processing delivery: {err}"),
            )
        }
    }
}

fn respond(status: StatusCode, success: bool, message: String) -> Response {
    (status, Json(SyncResponse { success, message })).into_response()
}
