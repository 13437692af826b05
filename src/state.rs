//! Shared application state for all routes.

use crate::service::PokemonService;

#[derive(Clone)]
pub struct AppState {
    pub pokemon: PokemonService,
}
