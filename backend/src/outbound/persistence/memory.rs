//! In-memory repositories used by tests and by the development fallback.
//!
//! A single mutex guards each collection so the donor email check and
//! insert happen atomically.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{
    CampRepository, CampRepositoryError, DonorRepository, DonorRepositoryError,
};
use crate::domain::{Camp, Donor, DonorProfile, Email};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Donor repository holding records in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryDonorRepository {
    donors: Mutex<Vec<Donor>>,
}

impl InMemoryDonorRepository {
    /// Number of stored donors.
    pub fn len(&self) -> usize {
        lock(&self.donors).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl DonorRepository for InMemoryDonorRepository {
    async fn find_by_email(&self, email: &Email) -> Result<Option<Donor>, DonorRepositoryError> {
        Ok(lock(&self.donors)
            .iter()
            .find(|donor| donor.email() == email)
            .cloned())
    }

    async fn insert(&self, donor: &Donor) -> Result<(), DonorRepositoryError> {
        let mut donors = lock(&self.donors);
        if donors.iter().any(|existing| existing.email() == donor.email()) {
            return Err(DonorRepositoryError::duplicate_email(donor.email().as_str()));
        }
        donors.push(donor.clone());
        Ok(())
    }

    async fn list_profiles(&self) -> Result<Vec<DonorProfile>, DonorRepositoryError> {
        Ok(lock(&self.donors).iter().map(Donor::to_profile).collect())
    }
}

/// Camp repository holding records in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryCampRepository {
    camps: Mutex<Vec<Camp>>,
}

#[async_trait]
impl CampRepository for InMemoryCampRepository {
    async fn insert(&self, camp: &Camp) -> Result<(), CampRepositoryError> {
        lock(&self.camps).push(camp.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Camp>, CampRepositoryError> {
        Ok(lock(&self.camps).clone())
    }
}
