//! Pokedex API: a Pokemon catalog REST backend over MongoDB.

pub mod config;
pub mod error;
pub mod model;
pub mod response;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use config::AppConfig;
pub use error::{AppError, ConfigError, StoreError};
pub use model::{CreatePokemon, Pagination, Pokemon, UpdatePokemon};
pub use state::AppState;
pub use store::{MemoryStore, MongoStore, PokemonStore};
pub use routes::{app, common_routes, pokemon_routes, API_PREFIX};
pub use service::PokemonService;
