//! PokemonService: catalog operations over a document collection, plus request validation.

mod pokemon;
mod validation;
pub use pokemon::{PokemonService, BULK_LIMIT};
pub use validation::RequestValidator;
