use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartItem};

#[derive(Debug, Clone, Object)]
pub struct AddItemRequest {
    /// Catalog product identifier
    pub product_id: String,
    /// Units to add (must be greater than zero)
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct SetQuantityRequest {
    /// New quantity; zero removes the line
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    pub product_id: String,
    pub quantity: u32,
    /// Price captured when the product was first added, as a decimal string
    pub unit_price: String,
    pub name: String,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            product_id: item.product_id.as_str().to_string(),
            quantity: item.quantity,
            unit_price: item.unit_price.to_string(),
            name: item.name,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub user_id: String,
    pub items: Vec<CartItemResponse>,
    /// Sum of unit price times quantity over all lines, as a decimal string
    pub total: String,
    /// Time of the last mutation
    pub last_updated: DateTime<Utc>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let user_id = cart.user_id.as_str().to_string();
        let total = cart.total().to_string();
        let last_updated = cart.last_updated;

        Self {
            user_id,
            items: cart.into_items().into_iter().map(Into::into).collect(),
            total,
            last_updated,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct DeleteCartResponse {
    pub user_id: String,
    pub deleted: bool,
}
