use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::catalog::ProductCatalog;
use business::domain::product::model::Product;
use business::domain::shared::value_objects::ProductId;

use super::entity::ProductEntity;
use crate::db::repository_error;

pub struct ProductCatalogPostgres {
    pool: PgPool,
}

impl ProductCatalogPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductCatalog for ProductCatalogPostgres {
    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, price, description, image_url FROM products WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| repository_error("product.get_by_id", e))?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}
