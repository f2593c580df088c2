//! MongoDB-backed `DonorRepository` implementation.

use async_trait::async_trait;
use bson::doc;
use futures_util::TryStreamExt;

use crate::domain::ports::{DonorRepository, DonorRepositoryError};
use crate::domain::{Donor, DonorProfile, Email};

use super::documents::{DonorDocument, DonorProfileDocument};
use super::mongo_error_mapping::{MongoFailure, classify};
use super::mongo_store::MongoStore;

/// Donor repository over the `donors` collection.
#[derive(Clone, Debug)]
pub struct MongoDonorRepository {
    store: MongoStore,
}

impl MongoDonorRepository {
    pub fn new(store: MongoStore) -> Self {
        Self { store }
    }
}

fn map_mongo_error(error: &mongodb::error::Error, email: &str) -> DonorRepositoryError {
    match classify(error) {
        MongoFailure::DuplicateKey => DonorRepositoryError::duplicate_email(email),
        MongoFailure::Connection(message) => DonorRepositoryError::connection(message),
        MongoFailure::Query(message) => DonorRepositoryError::query(message),
    }
}

#[async_trait]
impl DonorRepository for MongoDonorRepository {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Donor>, DonorRepositoryError> {
        let found = self
            .store
            .donors()
            .find_one(doc! { "email": email.as_str() })
            .await
            .map_err(|err| map_mongo_error(&err, email.as_str()))?;
        found
            .map(Donor::try_from)
            .transpose()
            .map_err(|err| DonorRepositoryError::query(err.to_string()))
    }

    async fn insert(&self, donor: &Donor) -> Result<(), DonorRepositoryError> {
        self.store
            .donors()
            .insert_one(DonorDocument::from(donor))
            .await
            .map(|_| ())
            .map_err(|err| map_mongo_error(&err, donor.email().as_str()))
    }

    async fn list_profiles(&self) -> Result<Vec<DonorProfile>, DonorRepositoryError> {
        let cursor = self
            .store
            .donors()
            .clone_with_type::<DonorProfileDocument>()
            .find(doc! {})
            // `_id` stays: it dates legacy records that lack `registered_at`.
            .projection(doc! { "password": 0 })
            .await
            .map_err(|err| map_mongo_error(&err, ""))?;
        let documents: Vec<DonorProfileDocument> = cursor
            .try_collect()
            .await
            .map_err(|err| map_mongo_error(&err, ""))?;
        documents
            .into_iter()
            .map(|doc| {
                DonorProfile::try_from(doc)
                    .map_err(|err| DonorRepositoryError::query(err.to_string()))
            })
            .collect()
    }
}
