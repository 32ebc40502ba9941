use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::support::{require_user_id, store_failure};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::list_items::{ListItemsParams, ListItemsUseCase};
use crate::domain::logger::Logger;

pub struct ListItemsUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListItemsUseCase for ListItemsUseCaseImpl {
    async fn execute(&self, params: ListItemsParams) -> Result<Vec<CartItem>, CartError> {
        self.logger
            .info(&format!("Listing cart items of {}", params.user_id));

        require_user_id(&params.user_id)?;

        let items = self
            .repository
            .find_by_user_id(&params.user_id)
            .await
            .map_err(|e| store_failure(self.logger.as_ref(), &params.user_id, e))?
            .map(|cart| cart.into_items())
            .unwrap_or_default();

        self.logger
            .info(&format!("Retrieved {} cart items", items.len()));
        Ok(items)
    }
}
