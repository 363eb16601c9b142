use axum::extract::{FromRequest, FromRequestParts};

use crate::errors::AppError;

/// `Json<T>` whose rejections surface as `AppError` (400 / 415 with the JSON error body)
/// instead of Axum's plain-text defaults.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidJson<T>(pub T);

/// `Query<T>` with the same error body as `ValidJson`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ValidQuery<T>(pub T);
