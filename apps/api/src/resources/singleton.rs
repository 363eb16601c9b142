use tracing::info;

use super::{decode, encode, SingletonResource};
use crate::errors::AppError;
use crate::store::DocumentStore;

/// Returns the stored record, or the resource's fallback when none is stored.
pub async fn fetch<S: SingletonResource>(store: &dyn DocumentStore) -> Result<S, AppError> {
    let stored = store.find_all(S::COLLECTION).await?;
    match stored.into_iter().next() {
        Some(doc) => Ok(decode(doc)?),
        None => Ok(S::fallback()),
    }
}

/// Clears the collection, then stores `record` as its only document.
pub async fn replace<S: SingletonResource>(
    store: &dyn DocumentStore,
    record: S,
) -> Result<S, AppError> {
    let doc = encode(&record)?;
    let cleared = store.delete_all(S::COLLECTION).await?;
    store.insert(S::COLLECTION, doc).await?;
    info!("Replaced {} (cleared {cleared} previous)", S::COLLECTION);
    Ok(record)
}
