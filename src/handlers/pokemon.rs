//! Pokemon handlers: create (single or batch), list, read, update, delete.

use crate::error::AppError;
use crate::model::{CreatePokemon, Pagination, UpdatePokemon};
use crate::response;
use crate::service::RequestValidator;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bson::oid::ObjectId;
use futures::TryStreamExt;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

fn parse_id(id_str: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id_str)
        .map_err(|_| AppError::BadRequest(format!("{} is not a valid MongoId", id_str)))
}

fn parse_body<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|e| AppError::Validation(e.to_string()))
}

fn parse_pagination(params: HashMap<String, String>) -> Result<Pagination, AppError> {
    let mut pagination = Pagination::default();
    for (k, v) in params {
        let n = || {
            v.trim()
                .parse::<u64>()
                .map_err(|_| AppError::Validation(format!("{} must be a non-negative integer", k)))
        };
        match k.as_str() {
            "limit" => pagination.limit = Some(n()?),
            "offset" => pagination.offset = Some(n()?),
            _ => return Err(AppError::BadRequest(format!("property {} should not exist", k))),
        }
    }
    RequestValidator::validate_pagination(&pagination)?;
    Ok(pagination)
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let pagination = parse_pagination(params)?;
    let page = state.pokemon.page_for(pagination);
    let rows: Vec<_> = state.pokemon.find_all(pagination).await?.try_collect().await?;
    Ok(response::page(rows, page))
}

/// One object creates one record; an array creates each element in order.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Response, AppError> {
    match body {
        Value::Array(arr) => {
            let items = arr
                .into_iter()
                .map(parse_body::<CreatePokemon>)
                .collect::<Result<Vec<_>, _>>()?;
            for item in &items {
                RequestValidator::validate_create(item)?;
            }
            let rows = state.pokemon.create_many(items).await?;
            Ok(response::created_many(rows).into_response())
        }
        body => {
            let input: CreatePokemon = parse_body(body)?;
            RequestValidator::validate_create(&input)?;
            let row = state.pokemon.create(input).await?;
            Ok(response::created(row).into_response())
        }
    }
}

pub async fn read(
    State(state): State<AppState>,
    Path(term): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let row = state.pokemon.find_one(&term).await?;
    Ok(response::ok(row))
}

pub async fn update(
    State(state): State<AppState>,
    Path(term): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let patch: UpdatePokemon = parse_body(body)?;
    RequestValidator::validate_update(&patch)?;
    let row = state.pokemon.update(&term, patch).await?;
    Ok(response::ok(row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state.pokemon.remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
