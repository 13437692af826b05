//! Liveness, readiness and build info, mounted outside the API prefix.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct Status {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

impl Status {
    const fn new(status: &'static str, database: Option<&'static str>) -> Self {
        Self { status, database }
    }
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

/// Process is up; no dependencies checked.
async fn live() -> Json<Status> {
    Json(Status::new("ok", None))
}

/// Ready only while the document collection answers a ping.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Status>) {
    match state.pokemon.ping().await {
        Ok(()) => (StatusCode::OK, Json(Status::new("ok", Some("ok")))),
        Err(e) => {
            tracing::warn!(error = %e, "database ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Status::new("degraded", Some("unavailable"))),
            )
        }
    }
}

async fn build_info() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live))
        .route("/ready", get(ready))
        .route("/version", get(build_info))
        .with_state(state)
}
