//! Create, list, look up, update and delete Pokemon records.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::model::{CreatePokemon, Lookup, Page, Pagination, Pokemon, UpdatePokemon};
use crate::service::RequestValidator;
use crate::store::PokemonStore;
use bson::oid::ObjectId;
use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};
use std::sync::Arc;

/// Maximum number of records accepted by one bulk create.
pub const BULK_LIMIT: usize = 100;

#[derive(Clone)]
pub struct PokemonService {
    store: Arc<dyn PokemonStore>,
    default_limit: u64,
}

impl PokemonService {
    pub fn new(store: Arc<dyn PokemonStore>, config: &AppConfig) -> Self {
        Self {
            store,
            default_limit: config.default_limit,
        }
    }

    /// Insert one record with its name lowercased.
    pub async fn create(&self, input: CreatePokemon) -> Result<Pokemon, AppError> {
        let input = input.normalized();
        let pokemon = self.store.insert(&input).await?;
        tracing::info!(id = %pokemon.id, no = pokemon.no, name = %pokemon.name, "pokemon created");
        Ok(pokemon)
    }

    /// Create records one by one, in order. Stops at the first failure; earlier records stay.
    pub async fn create_many(&self, inputs: Vec<CreatePokemon>) -> Result<Vec<Pokemon>, AppError> {
        if inputs.is_empty() {
            return Err(AppError::BadRequest("bulk create needs at least one item".into()));
        }
        if inputs.len() > BULK_LIMIT {
            return Err(AppError::BadRequest(format!(
                "bulk create limited to {} items",
                BULK_LIMIT
            )));
        }
        let mut out = Vec::with_capacity(inputs.len());
        for input in inputs {
            out.push(self.create(input).await?);
        }
        Ok(out)
    }

    /// `pagination` with the configured page size and offset 0 filled in.
    pub fn page_for(&self, pagination: Pagination) -> Page {
        pagination.resolve(self.default_limit)
    }

    /// Records ordered by `no`, one page of them. `limit` defaults to the configured page size
    /// and must be at least 1 (MongoDB reads a zero limit as "no limit").
    pub async fn find_all(
        &self,
        pagination: Pagination,
    ) -> Result<BoxStream<'static, Result<Pokemon, AppError>>, AppError> {
        RequestValidator::validate_pagination(&pagination)?;
        let page = self.page_for(pagination);
        let stream = self.store.find_page(page).await?;
        Ok(stream.map_err(AppError::from).boxed())
    }

    /// Look a record up by `no`, then by id, then by lowercased name. First hit wins.
    pub async fn find_one(&self, term: &str) -> Result<Pokemon, AppError> {
        for key in Lookup::keys(term) {
            if let Some(pokemon) = self.store.find_one(&key).await? {
                return Ok(pokemon);
            }
        }
        Err(AppError::NotFound(format!(
            "Pokemon with id, name or no \"{}\" not found",
            term
        )))
    }

    /// Apply `patch` to the record `term` resolves to and return the merged view.
    pub async fn update(&self, term: &str, patch: UpdatePokemon) -> Result<Pokemon, AppError> {
        let pokemon = self.find_one(term).await?;
        let patch = patch.normalized();
        self.store.update_by_id(&pokemon.id, &patch).await?;
        tracing::info!(id = %pokemon.id, "pokemon updated");
        Ok(pokemon.merged(&patch))
    }

    pub async fn remove(&self, id: &ObjectId) -> Result<(), AppError> {
        let deleted = self.store.delete_by_id(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!("Pokemon with id \"{}\" not found", id)));
        }
        tracing::info!(id = %id, "pokemon removed");
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        Ok(self.store.ping().await?)
    }
}
