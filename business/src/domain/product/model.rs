use bigdecimal::BigDecimal;

use crate::domain::shared::value_objects::ProductId;

/// A catalog entry. Carts only ever read products; they never write them.
/// Price validity is enforced where a price is captured into a cart line.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: BigDecimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        name: String,
        price: BigDecimal,
        description: Option<String>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            description,
            image_url,
        }
    }
}
