//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`StockError`]
//! via `#[from]`. Adapters wrap their infrastructure errors in the boxed
//! `Storage` variant so the domain stays free of sqlx types.

/// Top-level error for all panstock operations.
#[derive(Debug, thiserror::Error)]
pub enum StockError {
    /// A domain invariant was violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A referenced item does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// An infrastructure failure from a storage adapter.
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Violations of domain invariants.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The item name is empty.
    #[error("el nombre del insumo no puede estar vacío")]
    EmptyName,

    /// The quantity is zero or negative.
    #[error("la cantidad debe ser mayor a cero")]
    NonPositiveQuantity,

    /// A supplied identifier is not a valid UUID.
    #[error("el id del insumo no es válido")]
    InvalidId,
}

/// A lookup failed because the item does not exist.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    /// The kind of entity that was looked up.
    pub entity: &'static str,
    /// The identifier that failed to resolve.
    pub id: String,
}
