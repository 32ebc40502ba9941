use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::{ProductId, UserId};

pub struct RemoveItemParams {
    pub user_id: UserId,
    pub product_id: ProductId,
}

#[async_trait]
pub trait RemoveItemUseCase: Send + Sync {
    async fn execute(&self, params: RemoveItemParams) -> Result<Cart, CartError>;
}
