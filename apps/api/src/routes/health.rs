use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and which optional artifacts are loaded.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "pivotpath-api",
        "asset_dir": state.config.asset_dir.display().to_string(),
        "artifacts": state.advisor.artifact_status()
    }))
}
