//! Axum handlers, generic over the resource descriptor.
//! `routes::build_router` instantiates them once per record type.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{collection, singleton, CollectionResource, SingletonResource};
use crate::errors::AppError;
use crate::routes::extract::{ValidJson, ValidQuery};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub tag: Option<String>,
}

/// GET /api/{profile,skills}
pub async fn handle_fetch<S: SingletonResource>(
    State(state): State<AppState>,
) -> Result<Json<S>, AppError> {
    Ok(Json(singleton::fetch::<S>(state.store.as_ref()).await?))
}

/// PUT /api/{profile,skills}
pub async fn handle_replace<S: SingletonResource>(
    State(state): State<AppState>,
    ValidJson(record): ValidJson<S>,
) -> Result<Json<S>, AppError> {
    Ok(Json(singleton::replace(state.store.as_ref(), record).await?))
}

/// GET /api/{collection}[?tag=]
pub async fn handle_list<R: CollectionResource>(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ListQuery>,
) -> Result<Json<Vec<R>>, AppError> {
    let records = collection::list::<R>(state.store.as_ref(), query.tag.as_deref()).await?;
    Ok(Json(records))
}

/// GET /api/{collection}/:id
pub async fn handle_get<R: CollectionResource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<R>, AppError> {
    Ok(Json(collection::get_one::<R>(state.store.as_ref(), &id).await?))
}

/// POST /api/{collection}
pub async fn handle_create<R: CollectionResource>(
    State(state): State<AppState>,
    ValidJson(draft): ValidJson<R::Draft>,
) -> Result<Json<R>, AppError> {
    let today = Local::now().date_naive();
    Ok(Json(
        collection::create::<R>(state.store.as_ref(), draft, today).await?,
    ))
}

/// PUT /api/{collection}/:id
pub async fn handle_update<R: CollectionResource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(draft): ValidJson<R::Draft>,
) -> Result<Json<R>, AppError> {
    Ok(Json(
        collection::update::<R>(state.store.as_ref(), &id, draft).await?,
    ))
}

/// DELETE /api/{collection}/:id
pub async fn handle_delete<R: CollectionResource>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    collection::delete::<R>(state.store.as_ref(), &id).await?;
    Ok(Json(json!({ "message": format!("{} deleted", R::LABEL) })))
}
