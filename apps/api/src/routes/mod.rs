pub mod extract;
pub mod health;

use axum::{http::Uri, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::models::{BlogPost, Education, Experience, Profile, Project, Skills};
use crate::resources::handlers::{
    handle_create, handle_delete, handle_fetch, handle_get, handle_list, handle_replace,
    handle_update,
};
use crate::errors::AppError;
use crate::resources::{CollectionResource, SingletonResource};
use crate::state::AppState;

const API_PREFIX: &str = "/api";

/// GET /api/
async fn root() -> Json<Value> {
    Json(json!({ "message": "Portfolio API - Version 1.0" }))
}

/// Unmatched paths get the same JSON error body as handler failures.
async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

fn singleton_routes<S: SingletonResource>() -> Router<AppState> {
    Router::new().route(
        &format!("{API_PREFIX}/{}", S::COLLECTION),
        get(handle_fetch::<S>).put(handle_replace::<S>),
    )
}

fn collection_routes<R: CollectionResource>() -> Router<AppState> {
    Router::new()
        .route(
            &format!("{API_PREFIX}/{}", R::COLLECTION),
            get(handle_list::<R>).post(handle_create::<R>),
        )
        .route(
            &format!("{API_PREFIX}/{}/:id", R::COLLECTION),
            get(handle_get::<R>)
                .put(handle_update::<R>)
                .delete(handle_delete::<R>),
        )
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(API_PREFIX, get(root))
        .route(&format!("{API_PREFIX}/"), get(root))
        // Singletons: fetch (with fallback) + replace
        .merge(singleton_routes::<Profile>())
        .merge(singleton_routes::<Skills>())
        // Collections: list, get, create, update, delete
        .merge(collection_routes::<Experience>())
        .merge(collection_routes::<Education>())
        .merge(collection_routes::<Project>())
        .merge(collection_routes::<BlogPost>())
        .fallback(route_not_found)
        .with_state(state)
}
