//! MongoDB-backed collection.

use super::{PokemonStore, PokemonStream};
use crate::error::StoreError;
use crate::model::{CreatePokemon, LookupKey, Page, Pokemon, UpdatePokemon};
use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{doc, Bson, Document};
use futures::{StreamExt, TryStreamExt};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{ClientOptions, FindOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Database used when the connection string names none.
pub const DEFAULT_DATABASE: &str = "pokedex";

pub const COLLECTION: &str = "pokemons";

/// Server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Clone)]
pub struct MongoStore {
    database: Database,
    collection: Collection<Pokemon>,
}

impl MongoStore {
    /// Connect with `uri`, pick its default database and make sure the unique indexes exist.
    pub async fn connect(uri: &str) -> Result<Self, StoreError> {
        let options = ClientOptions::parse(uri).await?;
        let db_name = options
            .default_database
            .clone()
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());
        let client = Client::with_options(options)?;
        let store = Self::from_database(client.database(&db_name));
        store.ensure_indexes().await?;
        tracing::info!(database = %db_name, collection = COLLECTION, "connected to mongodb");
        Ok(store)
    }

    pub fn from_database(database: Database) -> Self {
        let collection = database.collection::<Pokemon>(COLLECTION);
        Self {
            database,
            collection,
        }
    }

    /// Unique indexes on `no` and `name`. Idempotent.
    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let unique = || IndexOptions::builder().unique(true).build();
        let models = vec![
            IndexModel::builder().keys(doc! { "no": 1 }).options(unique()).build(),
            IndexModel::builder().keys(doc! { "name": 1 }).options(unique()).build(),
        ];
        self.collection.create_indexes(models, None).await?;
        Ok(())
    }

    fn raw(&self) -> Collection<Document> {
        self.collection.clone_with_type()
    }
}

fn filter_for(key: &LookupKey) -> Document {
    match key {
        LookupKey::No(no) => doc! { "no": *no },
        LookupKey::Id(id) => doc! { "_id": *id },
        LookupKey::Name(name) => doc! { "name": name.as_str() },
    }
}

fn set_document(patch: &UpdatePokemon) -> Document {
    let mut set = Document::new();
    if let Some(no) = patch.no {
        set.insert("no", no);
    }
    if let Some(name) = &patch.name {
        set.insert("name", name.as_str());
    }
    set
}

/// Turn a driver error into `DuplicateKey` when it is a unique index violation on `attempted`.
fn classify(err: mongodb::error::Error, attempted: &Document) -> StoreError {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write)) if write.code == DUPLICATE_KEY_CODE => {
            StoreError::DuplicateKey(duplicate_key(&write.message, attempted))
        }
        _ => StoreError::Mongo(err),
    }
}

/// The conflicting `{field: value}` named by an E11000 message, falling back to the whole attempt.
fn duplicate_key(message: &str, attempted: &Document) -> Value {
    static INDEX: OnceLock<Regex> = OnceLock::new();
    let re = INDEX.get_or_init(|| {
        Regex::new(r"index: (?:\S+\.\$)?([A-Za-z0-9_]+?)_-?1\b").expect("static regex")
    });
    let field = re
        .captures(message)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str());
    match field.and_then(|f| attempted.get(f).map(|v| (f, v))) {
        Some((f, v)) => {
            let mut key = Document::new();
            key.insert(f, v.clone());
            Bson::Document(key).into_relaxed_extjson()
        }
        None => Bson::Document(attempted.clone()).into_relaxed_extjson(),
    }
}

#[async_trait]
impl PokemonStore for MongoStore {
    async fn insert(&self, new: &CreatePokemon) -> Result<Pokemon, StoreError> {
        let document = doc! { "no": new.no, "name": new.name.as_str() };
        let result = self
            .raw()
            .insert_one(&document, None)
            .await
            .map_err(|e| classify(e, &document))?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Backend(format!("unexpected _id {}", result.inserted_id)))?;
        Ok(Pokemon {
            id,
            no: new.no,
            name: new.name.clone(),
        })
    }

    async fn find_page(&self, page: Page) -> Result<PokemonStream, StoreError> {
        let options = FindOptions::builder()
            .sort(doc! { "no": 1 })
            .skip(page.offset)
            .limit(i64::try_from(page.limit).unwrap_or(i64::MAX))
            .projection(doc! { "__v": 0 })
            .build();
        tracing::debug!(limit = page.limit, offset = page.offset, "find page");
        let cursor = self.collection.find(doc! {}, options).await?;
        Ok(cursor.map_err(StoreError::from).boxed())
    }

    async fn find_one(&self, key: &LookupKey) -> Result<Option<Pokemon>, StoreError> {
        let filter = filter_for(key);
        tracing::debug!(filter = %filter, "find one");
        Ok(self.collection.find_one(filter, None).await?)
    }

    async fn update_by_id(&self, id: &ObjectId, patch: &UpdatePokemon) -> Result<(), StoreError> {
        let set = set_document(patch);
        if set.is_empty() {
            return Ok(());
        }
        self.collection
            .update_one(doc! { "_id": *id }, doc! { "$set": set.clone() }, None)
            .await
            .map_err(|e| classify(e, &set))?;
        Ok(())
    }

    async fn delete_by_id(&self, id: &ObjectId) -> Result<u64, StoreError> {
        let result = self.collection.delete_one(doc! { "_id": *id }, None).await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }
}
