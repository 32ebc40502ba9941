use crate::domain::errors::RepositoryError;

/// Failures of cart operations. No variant is produced after a partial
/// write: either the store accepted the whole cart or nothing changed.
#[derive(Debug, thiserror::Error)]
pub enum CartError {
    /// A request field is missing or out of range. Carries the field name.
    #[error("cart.invalid_input.{0}")]
    InvalidInput(&'static str),
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.not_found")]
    CartNotFound,
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("repository.persistence")]
    StoreUnavailable(#[from] RepositoryError),
}
