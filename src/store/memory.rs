//! In-process collection for tests and local runs without a database.

use super::{PokemonStore, PokemonStream};
use crate::error::StoreError;
use crate::model::{CreatePokemon, LookupKey, Page, Pokemon, UpdatePokemon};
use async_trait::async_trait;
use bson::oid::ObjectId;
use futures::stream::{self, StreamExt};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Vec-backed store enforcing the same unique keys as the MongoDB indexes.
#[derive(Clone, Default)]
pub struct MemoryStore {
    docs: Arc<RwLock<Vec<Pokemon>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn count(&self) -> u64 {
        self.docs.read().await.len() as u64
    }

    /// Store pre-filled with `records`, ids included. Unique keys are not re-checked.
    pub fn with_records(records: impl IntoIterator<Item = Pokemon>) -> Self {
        Self {
            docs: Arc::new(RwLock::new(records.into_iter().collect())),
        }
    }
}

/// First unique-key clash between the candidate values and any record other than `skip`.
fn conflict(docs: &[Pokemon], skip: Option<&ObjectId>, no: Option<i64>, name: Option<&str>) -> Option<StoreError> {
    let others = move || docs.iter().filter(move |p| Some(&p.id) != skip);
    if let Some(no) = no {
        if others().any(|p| p.no == no) {
            return Some(StoreError::DuplicateKey(json!({ "no": no })));
        }
    }
    if let Some(name) = name {
        if others().any(|p| p.name == name) {
            return Some(StoreError::DuplicateKey(json!({ "name": name })));
        }
    }
    None
}

#[async_trait]
impl PokemonStore for MemoryStore {
    async fn insert(&self, new: &CreatePokemon) -> Result<Pokemon, StoreError> {
        let mut docs = self.docs.write().await;
        if let Some(err) = conflict(&docs, None, Some(new.no), Some(&new.name)) {
            return Err(err);
        }
        let pokemon = Pokemon {
            id: ObjectId::new(),
            no: new.no,
            name: new.name.clone(),
        };
        docs.push(pokemon.clone());
        Ok(pokemon)
    }

    async fn find_page(&self, page: Page) -> Result<PokemonStream, StoreError> {
        let mut snapshot = self.docs.read().await.clone();
        snapshot.sort_by_key(|p| p.no);
        let offset = usize::try_from(page.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit).unwrap_or(usize::MAX);
        let items: Vec<_> = snapshot.into_iter().skip(offset).take(limit).collect();
        Ok(stream::iter(items.into_iter().map(Ok)).boxed())
    }

    async fn find_one(&self, key: &LookupKey) -> Result<Option<Pokemon>, StoreError> {
        let docs = self.docs.read().await;
        Ok(docs.iter().find(|p| key.matches(p)).cloned())
    }

    async fn update_by_id(&self, id: &ObjectId, patch: &UpdatePokemon) -> Result<(), StoreError> {
        let mut docs = self.docs.write().await;
        if let Some(err) = conflict(&docs, Some(id), patch.no, patch.name.as_deref()) {
            return Err(err);
        }
        if let Some(doc) = docs.iter_mut().find(|p| p.id == *id) {
            *doc = doc.merged(patch);
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &ObjectId) -> Result<u64, StoreError> {
        let mut docs = self.docs.write().await;
        let before = docs.len();
        docs.retain(|p| p.id != *id);
        Ok((before - docs.len()) as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::TryStreamExt;

    #[tokio::test]
    async fn insert_rejects_duplicate_no_and_name() {
        let store = MemoryStore::new();
        store.insert(&CreatePokemon::new(1, "bulbasaur")).await.unwrap();

        let err = store.insert(&CreatePokemon::new(1, "ivysaur")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey(ref k) if *k == json!({ "no": 1 })));

        let err = store.insert(&CreatePokemon::new(2, "bulbasaur")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey(ref k) if *k == json!({ "name": "bulbasaur" })));

        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn find_page_sorts_by_no() {
        let store = MemoryStore::new();
        for (no, name) in [(3, "venusaur"), (1, "bulbasaur"), (2, "ivysaur")] {
            store.insert(&CreatePokemon::new(no, name)).await.unwrap();
        }
        let page: Vec<_> = store
            .find_page(Page { limit: 10, offset: 0 })
            .await
            .unwrap()
            .try_collect()
            .await
            .unwrap();
        let nos: Vec<_> = page.iter().map(|p| p.no).collect();
        assert_eq!(nos, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn update_may_keep_its_own_unique_values() {
        let store = MemoryStore::new();
        let p = store.insert(&CreatePokemon::new(4, "charmander")).await.unwrap();
        let patch = UpdatePokemon {
            no: Some(4),
            name: Some("charmander".into()),
        };
        store.update_by_id(&p.id, &patch).await.unwrap();
        let found = store.find_one(&LookupKey::Id(p.id)).await.unwrap().unwrap();
        assert_eq!(found, p);
    }
}
