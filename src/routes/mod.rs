//! Routers and the assembled application.

mod common;
mod pokemon;

pub use common::common_routes;
pub use pokemon::pokemon_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Prefix every catalog route is mounted under.
pub const API_PREFIX: &str = "/api/v2";

/// Request bodies above this size are rejected before reaching a handler.
pub const BODY_LIMIT_BYTES: usize = 256 * 1024;

/// Full application: common routes at the root, catalog routes under [`API_PREFIX`].
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest(API_PREFIX, pokemon_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
