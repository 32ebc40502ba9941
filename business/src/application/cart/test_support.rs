use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use mockall::mock;

use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::catalog::ProductCatalog;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::{ProductId, UserId};

mock! {
    pub CartRepo {}

    #[async_trait]
    impl CartRepository for CartRepo {
        async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Cart>, RepositoryError>;
        async fn insert(&self, cart: &Cart) -> Result<(), RepositoryError>;
        async fn update(&self, cart: &Cart) -> Result<(), RepositoryError>;
        async fn delete_by_user_id(&self, user_id: &UserId) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Catalog {}

    #[async_trait]
    impl ProductCatalog for Catalog {
        async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn test_user_id() -> UserId {
    UserId::new("u1")
}

pub fn product(id: &str, name: &str, price: &str) -> Product {
    Product::from_repository(
        ProductId::new(id),
        name.to_string(),
        BigDecimal::from_str(price).unwrap(),
        None,
        None,
    )
}

/// Product p1 = ("Widget", 10).
pub fn widget() -> Product {
    product("p1", "Widget", "10")
}

/// Stored cart for `u1` holding `quantity` widgets.
pub fn cart_with_widgets(quantity: u32) -> Cart {
    let mut cart = Cart::new(test_user_id());
    cart.add_item(&widget(), quantity).unwrap();
    cart
}
