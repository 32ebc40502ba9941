use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::shared::value_objects::UserId;

pub struct ListItemsParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait ListItemsUseCase: Send + Sync {
    async fn execute(&self, params: ListItemsParams) -> Result<Vec<CartItem>, CartError>;
}
