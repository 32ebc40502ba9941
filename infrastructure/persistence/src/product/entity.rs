use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::product::model::Product;
use business::domain::shared::value_objects::ProductId;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: String,
    pub name: String,
    pub price: BigDecimal,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::new(self.id),
            self.name,
            self.price,
            self.description,
            self.image_url,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_row_to_product() {
        let entity = ProductEntity {
            id: "p1".to_string(),
            name: "Widget".to_string(),
            price: BigDecimal::from(10),
            description: Some("A widget".to_string()),
            image_url: None,
        };

        let product = entity.into_domain();

        assert_eq!(product.id, ProductId::new("p1"));
        assert_eq!(product.price, BigDecimal::from(10));
        assert_eq!(product.description.as_deref(), Some("A widget"));
        assert!(product.image_url.is_none());
    }
}
