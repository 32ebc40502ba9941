use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

use business::domain::cart::model::{Cart, CartItem};
use business::domain::shared::value_objects::{ProductId, UserId};

/// One element of the `items` JSON array of a cart document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDocument {
    pub product_id: String,
    pub quantity: u32,
    pub unit_price: BigDecimal,
    pub name: String,
}

#[derive(Debug, FromRow)]
pub struct CartEntity {
    pub user_id: String,
    pub items: Json<Vec<CartItemDocument>>,
    pub total: BigDecimal,
    pub last_updated: DateTime<Utc>,
}

impl CartEntity {
    /// The stored `total` column is informational only; the domain
    /// recomputes it from the lines.
    pub fn into_domain(self) -> Cart {
        let items = self
            .items
            .0
            .into_iter()
            .map(|doc| CartItem {
                product_id: ProductId::new(doc.product_id),
                quantity: doc.quantity,
                unit_price: doc.unit_price,
                name: doc.name,
            })
            .collect();

        Cart::from_repository(UserId::new(self.user_id), items, self.last_updated)
    }

    pub fn from_domain(cart: &Cart) -> Self {
        let items = cart
            .items()
            .iter()
            .map(|item| CartItemDocument {
                product_id: item.product_id.as_str().to_string(),
                quantity: item.quantity,
                unit_price: item.unit_price.clone(),
                name: item.name.clone(),
            })
            .collect();

        Self {
            user_id: cart.user_id.as_str().to_string(),
            items: Json(items),
            total: cart.total().clone(),
            last_updated: cart.last_updated,
        }
    }
}
