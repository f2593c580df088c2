//! Classification of driver errors into repository error kinds.

use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use tracing::debug;

/// Server error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Coarse failure categories shared by the Mongo repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MongoFailure {
    DuplicateKey,
    Connection(String),
    Query(String),
}

pub(crate) fn classify(error: &MongoError) -> MongoFailure {
    debug!(error = %error, "document store operation failed");
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write)) if write.code == DUPLICATE_KEY_CODE => {
            MongoFailure::DuplicateKey
        }
        ErrorKind::Command(command) if command.code == DUPLICATE_KEY_CODE => {
            MongoFailure::DuplicateKey
        }
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::DnsResolve { .. } => MongoFailure::Connection(error.to_string()),
        _ => MongoFailure::Query(error.to_string()),
    }
}
