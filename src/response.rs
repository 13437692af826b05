//! `{data, meta}` success envelopes.

use crate::model::Page;
use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<ListMeta>,
}

/// Size of a returned list, plus the page it was read with when paginated.
#[derive(Serialize)]
pub struct ListMeta {
    pub count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

type Reply<T> = (StatusCode, Json<Envelope<T>>);

fn one<T: Serialize>(status: StatusCode, data: T) -> Reply<T> {
    (status, Json(Envelope { data, meta: None }))
}

fn many<T: Serialize>(status: StatusCode, data: Vec<T>, page: Option<Page>) -> Reply<Vec<T>> {
    let meta = ListMeta {
        count: data.len() as u64,
        limit: page.map(|p| p.limit),
        offset: page.map(|p| p.offset),
    };
    (status, Json(Envelope { data, meta: Some(meta) }))
}

/// 201 with the created record.
pub fn created<T: Serialize>(data: T) -> Reply<T> {
    one(StatusCode::CREATED, data)
}

pub fn ok<T: Serialize>(data: T) -> Reply<T> {
    one(StatusCode::OK, data)
}

/// 200 with one page of records.
pub fn page<T: Serialize>(data: Vec<T>, page: Page) -> Reply<Vec<T>> {
    many(StatusCode::OK, data, Some(page))
}

/// 201 with every record of a bulk create.
pub fn created_many<T: Serialize>(data: Vec<T>) -> Reply<Vec<T>> {
    many(StatusCode::CREATED, data, None)
}
