//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod camp_repository;
mod camps_command;
mod camps_query;
mod donor_registration;
mod donor_repository;
mod donors_query;
mod login_service;
mod password_hasher;
mod token_issuer;

#[cfg(test)]
pub use camp_repository::MockCampRepository;
pub use camp_repository::{CampRepository, CampRepositoryError};
pub use camps_command::CampsCommand;
#[cfg(test)]
pub use camps_command::MockCampsCommand;
pub use camps_query::CampsQuery;
#[cfg(test)]
pub use camps_query::MockCampsQuery;
pub use donor_registration::DonorRegistrationCommand;
#[cfg(test)]
pub use donor_registration::MockDonorRegistrationCommand;
#[cfg(test)]
pub use donor_repository::MockDonorRepository;
pub use donor_repository::{DonorRepository, DonorRepositoryError};
pub use donors_query::DonorsQuery;
#[cfg(test)]
pub use donors_query::MockDonorsQuery;
pub use login_service::LoginService;
#[cfg(test)]
pub use login_service::MockLoginService;
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use token_issuer::MockTokenIssuer;
pub use token_issuer::{TokenIssueError, TokenIssuer};
