use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::api::state::AppState;
use crate::error::Result;
use crate::models::TickRequest;

#[derive(Debug, Serialize, Deserialize)]
pub struct TickAck {
    pub status: String,
}

/// Processes one scheduled tick. The acknowledgment does not reflect whether
/// the notification reached `return_url`.
pub async fn monitor_spending(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TickRequest>,
) -> Result<Json<TickAck>> {
    let outcome = state.monitor.run_tick(&payload).await?;

    info!(
        status = %outcome.report.evaluation.status,
        delivered = outcome.delivered,
        "tick processed"
    );

    Ok(Json(TickAck {
        status: "success".to_string(),
    }))
}
