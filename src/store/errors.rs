//! Store error types

use thiserror::Error;

use crate::persist::PersistError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by store operations.
///
/// The `NotFound` and `EmptyCatalog` messages are the ones clients see,
/// so they stay in the service's wire language.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Requested id is absent from the collection
    #[error("Produto id: {0}, não encontrado")]
    NotFound(u64),

    /// Extremum/mean query against an empty collection
    #[error("nenhum produto cadastrado")]
    EmptyCatalog,

    /// The backing file could not be read or rewritten
    #[error(transparent)]
    Persist(#[from] PersistError),
}
