//! Generic CRUD over the document store.
//!
//! Each portfolio record type describes itself once through `SingletonResource`
//! or `CollectionResource`; the service functions and Axum handlers in this
//! module are instantiated per type by the router.

pub mod collection;
pub mod handlers;
pub mod singleton;

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::store::StoreError;

/// A resource with at most one stored record (profile, skills).
pub trait SingletonResource: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection name, also the route segment.
    const COLLECTION: &'static str;

    /// Returned by fetch when nothing is stored.
    fn fallback() -> Self;
}

/// A resource with many records keyed by a server-generated string `id`.
pub trait CollectionResource: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection name, also the route segment.
    const COLLECTION: &'static str;
    /// Human-readable name used in not-found and delete messages.
    const LABEL: &'static str;
    /// Array field that `?tag=` filters on. `None` disables tag filtering.
    const TAG_FIELD: Option<&'static str> = None;

    /// The creatable schema: every client-suppliable field, no server-generated ones.
    type Draft: Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Builds the stored record from a draft plus server-generated fields.
    fn mint(id: String, draft: Self::Draft, today: NaiveDate) -> Self;
}

pub(crate) fn encode<T: Serialize>(record: &T) -> Result<Value, StoreError> {
    Ok(serde_json::to_value(record)?)
}

pub(crate) fn decode<T: DeserializeOwned>(doc: Value) -> Result<T, StoreError> {
    Ok(serde_json::from_value(doc)?)
}
