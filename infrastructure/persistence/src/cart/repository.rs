use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::CartEntity;
use crate::db::repository_error;

/// Stores each cart as one row keyed by `user_id`, with its lines in a
/// JSONB document column.
pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Cart>, RepositoryError> {
        let entity = sqlx::query_as::<_, CartEntity>(
            "SELECT user_id, items, total, last_updated FROM carts WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| repository_error("cart.find_by_user_id", e))?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn insert(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let entity = CartEntity::from_domain(cart);

        sqlx::query(
            "INSERT INTO carts (user_id, items, total, last_updated) VALUES ($1, $2, $3, $4)",
        )
        .bind(entity.user_id)
        .bind(entity.items)
        .bind(entity.total)
        .bind(entity.last_updated)
        .execute(&self.pool)
        .await
        .map_err(|e| repository_error("cart.insert", e))?;

        Ok(())
    }

    async fn update(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let entity = CartEntity::from_domain(cart);

        let result = sqlx::query(
            "UPDATE carts SET items = $2, total = $3, last_updated = $4 WHERE user_id = $1",
        )
        .bind(entity.user_id)
        .bind(entity.items)
        .bind(entity.total)
        .bind(entity.last_updated)
        .execute(&self.pool)
        .await
        .map_err(|e| repository_error("cart.update", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete_by_user_id(&self, user_id: &UserId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM carts WHERE user_id = $1")
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| repository_error("cart.delete_by_user_id", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
