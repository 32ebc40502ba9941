use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Cart;

/// Document store holding one cart per user.
///
/// Each call is atomic on its own. Nothing ties a read to a later write,
/// so two concurrent read-modify-write sequences on the same user race
/// and the later write wins.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Cart>, RepositoryError>;
    /// Fails with `RepositoryError::Duplicated` when the user already has a cart.
    async fn insert(&self, cart: &Cart) -> Result<(), RepositoryError>;
    /// Replaces the stored cart. Fails with `RepositoryError::NotFound` when there is none.
    async fn update(&self, cart: &Cart) -> Result<(), RepositoryError>;
    /// Fails with `RepositoryError::NotFound` when there is nothing to delete.
    async fn delete_by_user_id(&self, user_id: &UserId) -> Result<(), RepositoryError>;
}
