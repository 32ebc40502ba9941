use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::support::{
    non_negative_quantity, require_product_id, require_user_id, store_failure,
};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::set_quantity::{SetQuantityParams, SetQuantityUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct SetQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetQuantityUseCase for SetQuantityUseCaseImpl {
    async fn execute(&self, params: SetQuantityParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Setting quantity of {} to {} in cart of {}",
            params.product_id, params.quantity, params.user_id
        ));

        require_user_id(&params.user_id)?;
        require_product_id(&params.product_id)?;
        let quantity = non_negative_quantity(params.quantity)?;

        let mut cart = self
            .repository
            .find_by_user_id(&params.user_id)
            .await
            .map_err(|e| store_failure(self.logger.as_ref(), &params.user_id, e))?
            .ok_or(CartError::CartNotFound)?;

        cart.set_quantity(&params.product_id, quantity)?;

        self.repository
            .update(&cart)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::CartNotFound,
                other => store_failure(self.logger.as_ref(), &params.user_id, other),
            })?;

        if quantity == 0 {
            self.logger.debug(&format!(
                "Quantity 0 dropped line {} from cart of {}",
                params.product_id, params.user_id
            ));
        }
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::test_support::{
        MockCartRepo, cart_with_widgets, mock_logger, test_user_id,
    };
    use crate::domain::shared::value_objects::ProductId;
    use bigdecimal::BigDecimal;
    use num_traits::Zero;

    fn params(product_id: &str, quantity: i64) -> SetQuantityParams {
        SetQuantityParams {
            user_id: test_user_id(),
            product_id: ProductId::new(product_id),
            quantity,
        }
    }

    #[tokio::test]
    async fn should_set_quantity_and_recompute_total() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_find_by_user_id()
            .returning(|_| Ok(Some(cart_with_widgets(5))));
        mock_repo
            .expect_update()
            .withf(|cart: &Cart| cart.total() == &BigDecimal::from(30))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = SetQuantityUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case.execute(params("p1", 3)).await.unwrap();

        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(cart.items()[0].unit_price, BigDecimal::from(10));
    }

    #[tokio::test]
    async fn should_remove_line_when_quantity_is_zero() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_find_by_user_id()
            .returning(|_| Ok(Some(cart_with_widgets(5))));
        mock_repo
            .expect_update()
            .withf(|cart: &Cart| cart.is_empty())
            .returning(|_| Ok(()));

        let use_case = SetQuantityUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let cart = use_case.execute(params("p1", 0)).await.unwrap();

        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[tokio::test]
    async fn should_reject_negative_quantity_before_loading_cart() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_find_by_user_id().never();

        let use_case = SetQuantityUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("p1", -1)).await;

        assert!(matches!(result, Err(CartError::InvalidInput("quantity"))));
    }

    #[tokio::test]
    async fn should_return_cart_not_found() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_find_by_user_id().returning(|_| Ok(None));

        let use_case = SetQuantityUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("p1", 2)).await;

        assert!(matches!(result, Err(CartError::CartNotFound)));
    }

    #[tokio::test]
    async fn should_return_item_not_found_without_update() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_find_by_user_id()
            .returning(|_| Ok(Some(cart_with_widgets(1))));
        mock_repo.expect_update().never();

        let use_case = SetQuantityUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("p7", 2)).await;

        assert!(matches!(result, Err(CartError::ItemNotFound)));
    }
}
