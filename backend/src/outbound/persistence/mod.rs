//! Document store adapters.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories only translate between BSON documents
//!   and domain types. No business logic resides here.
//! - **Internal documents**: the document structs in `documents.rs` never
//!   leave this module.
//! - **Strongly typed errors**: driver errors are classified into the port
//!   error types (duplicate key, connection, query).
//!
//! The in-memory repositories implement the same ports for tests and for
//! running without a configured store.

mod documents;
mod memory;
mod mongo_camp_repository;
mod mongo_donor_repository;
mod mongo_error_mapping;
mod mongo_store;

pub use memory::{InMemoryCampRepository, InMemoryDonorRepository};
pub use mongo_camp_repository::MongoCampRepository;
pub use mongo_donor_repository::MongoDonorRepository;
pub use mongo_store::{MongoStore, StoreConfig, StoreError};
