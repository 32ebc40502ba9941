use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::support::{
    positive_quantity, require_product_id, require_user_id, store_failure,
};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddItemOutcome, AddItemParams, AddItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::catalog::ProductCatalog;

pub struct AddItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddItemUseCase for AddItemUseCaseImpl {
    async fn execute(&self, params: AddItemParams) -> Result<AddItemOutcome, CartError> {
        self.logger.info(&format!(
            "Adding {} x {} to cart of {}",
            params.quantity, params.product_id, params.user_id
        ));

        require_user_id(&params.user_id)?;
        require_product_id(&params.product_id)?;
        let quantity = positive_quantity(params.quantity)?;

        let product = self
            .catalog
            .get_by_id(&params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => store_failure(self.logger.as_ref(), &params.user_id, other),
            })?;

        let existing = self
            .repository
            .find_by_user_id(&params.user_id)
            .await
            .map_err(|e| store_failure(self.logger.as_ref(), &params.user_id, e))?;

        let mut created = existing.is_none();
        let mut cart = existing.unwrap_or_else(|| Cart::new(params.user_id.clone()));
        cart.add_item(&product, quantity)?;

        // Concurrent writers race on the same document; the last write wins.
        let write = if created {
            match self.repository.insert(&cart).await {
                Err(RepositoryError::Duplicated) => {
                    self.logger.warn(&format!(
                        "Cart of {} was created concurrently, overwriting",
                        params.user_id
                    ));
                    created = false;
                    self.repository.update(&cart).await
                }
                other => other,
            }
        } else {
            let updated = self.repository.update(&cart).await;
            match updated {
                Err(RepositoryError::NotFound) => {
                    self.logger.warn(&format!(
                        "Cart of {} was deleted concurrently, recreating",
                        params.user_id
                    ));
                    cart = Cart::new(params.user_id.clone());
                    cart.add_item(&product, quantity)?;
                    created = true;
                    self.repository.insert(&cart).await
                }
                other => other,
            }
        };
        write.map_err(|e| store_failure(self.logger.as_ref(), &params.user_id, e))?;

        self.logger.info(&format!(
            "Cart of {} now holds {} lines, total {}",
            cart.user_id,
            cart.items().len(),
            cart.total()
        ));
        Ok(AddItemOutcome { cart, created })
    }
}
