//! Document collection seam: the persistence calls the service makes, and their backends.

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use crate::error::StoreError;
use crate::model::{CreatePokemon, LookupKey, Page, Pokemon, UpdatePokemon};
use async_trait::async_trait;
use bson::oid::ObjectId;
use futures::stream::BoxStream;

/// Records of one list read, in `no` order. Consumed once.
pub type PokemonStream = BoxStream<'static, Result<Pokemon, StoreError>>;

/// A collection of Pokemon documents with unique `no` and `name`.
///
/// Every method is a single-document (or single-query) operation; implementations
/// report unique index violations as [`StoreError::DuplicateKey`].
#[async_trait]
pub trait PokemonStore: Send + Sync {
    /// Insert a new record and return it with its assigned id.
    async fn insert(&self, new: &CreatePokemon) -> Result<Pokemon, StoreError>;

    /// Records sorted by `no` ascending, `page.offset` skipped, at most `page.limit` yielded.
    async fn find_page(&self, page: Page) -> Result<PokemonStream, StoreError>;

    async fn find_one(&self, key: &LookupKey) -> Result<Option<Pokemon>, StoreError>;

    /// Set the fields present in `patch` on the record with `id`. No-op when `patch` is empty.
    async fn update_by_id(&self, id: &ObjectId, patch: &UpdatePokemon) -> Result<(), StoreError>;

    /// Delete the record with `id`; returns how many records were removed (0 or 1).
    async fn delete_by_id(&self, id: &ObjectId) -> Result<u64, StoreError>;

    /// Round trip to the backend, for readiness checks.
    async fn ping(&self) -> Result<(), StoreError>;
}
