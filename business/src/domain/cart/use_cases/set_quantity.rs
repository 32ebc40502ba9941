use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::{ProductId, UserId};

pub struct SetQuantityParams {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i64,
}

#[async_trait]
pub trait SetQuantityUseCase: Send + Sync {
    async fn execute(&self, params: SetQuantityParams) -> Result<Cart, CartError>;
}
