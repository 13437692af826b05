//! Pokemon record, request payloads, pagination and lookup keys.

mod lookup;
mod pagination;
mod pokemon;

pub use lookup::{Lookup, LookupKey};
pub use pagination::{Page, Pagination};
pub use pokemon::{CreatePokemon, Pokemon, UpdatePokemon};
