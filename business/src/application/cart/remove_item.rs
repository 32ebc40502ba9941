use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::support::{require_product_id, require_user_id, store_failure};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveItemParams, RemoveItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct RemoveItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveItemUseCase for RemoveItemUseCaseImpl {
    async fn execute(&self, params: RemoveItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Removing {} from cart of {}",
            params.product_id, params.user_id
        ));

        require_user_id(&params.user_id)?;
        require_product_id(&params.product_id)?;

        let mut cart = self
            .repository
            .find_by_user_id(&params.user_id)
            .await
            .map_err(|e| store_failure(self.logger.as_ref(), &params.user_id, e))?
            .ok_or(CartError::CartNotFound)?;

        cart.remove_item(&params.product_id)?;

        // An emptied cart stays persisted as an empty document.
        self.repository
            .update(&cart)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::CartNotFound,
                other => store_failure(self.logger.as_ref(), &params.user_id, other),
            })?;

        self.logger.info(&format!(
            "Removed {} from cart of {}",
            params.product_id, params.user_id
        ));
        Ok(cart)
    }
}
