use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductId;

use super::model::Product;

/// Read-only view of the product catalog.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Returns `RepositoryError::NotFound` when no product has this id.
    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
}
