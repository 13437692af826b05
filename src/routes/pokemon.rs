//! Pokemon CRUD routes. `:term` is a catalog number, an ObjectId or a name; DELETE takes an ObjectId.
//! Nothing else is mounted below `/pokemon/`, so every term reaches the lookup.

use crate::handlers::pokemon::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn pokemon_routes(state: AppState) -> Router {
    Router::new()
        .route("/pokemon", get(list).post(create))
        .route(
            "/pokemon/:term",
            get(read).patch(update).delete(delete_handler),
        )
        .with_state(state)
}
