use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::{ProductId, UserId};

pub struct AddItemParams {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i64,
}

pub struct AddItemOutcome {
    pub cart: Cart,
    /// True when this call created the cart.
    pub created: bool,
}

#[async_trait]
pub trait AddItemUseCase: Send + Sync {
    async fn execute(&self, params: AddItemParams) -> Result<AddItemOutcome, CartError>;
}
