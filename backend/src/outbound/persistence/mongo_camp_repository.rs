//! MongoDB-backed `CampRepository` implementation.

use async_trait::async_trait;
use bson::doc;
use futures_util::TryStreamExt;

use crate::domain::Camp;
use crate::domain::ports::{CampRepository, CampRepositoryError};

use super::documents::CampDocument;
use super::mongo_error_mapping::{MongoFailure, classify};
use super::mongo_store::MongoStore;

/// Camp repository over the `camps` collection.
#[derive(Clone, Debug)]
pub struct MongoCampRepository {
    store: MongoStore,
}

impl MongoCampRepository {
    pub fn new(store: MongoStore) -> Self {
        Self { store }
    }
}

fn map_mongo_error(error: &mongodb::error::Error) -> CampRepositoryError {
    match classify(error) {
        MongoFailure::Connection(message) => CampRepositoryError::connection(message),
        // Camps carry no unique index, so a duplicate key is just a failed query.
        MongoFailure::DuplicateKey => CampRepositoryError::query(error.to_string()),
        MongoFailure::Query(message) => CampRepositoryError::query(message),
    }
}

#[async_trait]
impl CampRepository for MongoCampRepository {
    async fn insert(&self, camp: &Camp) -> Result<(), CampRepositoryError> {
        self.store
            .camps()
            .insert_one(CampDocument::from(camp))
            .await
            .map(|_| ())
            .map_err(|err| map_mongo_error(&err))
    }

    async fn list(&self) -> Result<Vec<Camp>, CampRepositoryError> {
        let cursor = self
            .store
            .camps()
            .find(doc! {})
            .await
            .map_err(|err| map_mongo_error(&err))?;
        let documents: Vec<CampDocument> = cursor
            .try_collect()
            .await
            .map_err(|err| map_mongo_error(&err))?;
        documents
            .into_iter()
            .map(|doc| Camp::try_from(doc).map_err(|err| CampRepositoryError::query(err.to_string())))
            .collect()
    }
}
