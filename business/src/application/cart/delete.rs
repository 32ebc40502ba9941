use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::support::{require_user_id, store_failure};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::delete::{DeleteCartParams, DeleteCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct DeleteCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCartUseCase for DeleteCartUseCaseImpl {
    async fn execute(&self, params: DeleteCartParams) -> Result<(), CartError> {
        self.logger
            .info(&format!("Deleting cart of {}", params.user_id));

        require_user_id(&params.user_id)?;

        self.repository
            .delete_by_user_id(&params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::CartNotFound,
                other => store_failure(self.logger.as_ref(), &params.user_id, other),
            })?;

        self.logger
            .info(&format!("Cart of {} deleted", params.user_id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::test_support::{MockCartRepo, mock_logger, test_user_id};

    #[tokio::test]
    async fn should_delete_existing_cart() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_delete_by_user_id()
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteCartParams {
                user_id: test_user_id(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_cart_not_found_when_deleting_nonexistent() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_delete_by_user_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteCartParams {
                user_id: test_user_id(),
            })
            .await;

        assert!(matches!(result, Err(CartError::CartNotFound)));
    }

    #[tokio::test]
    async fn should_surface_database_error_as_store_unavailable() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_delete_by_user_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = DeleteCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteCartParams {
                user_id: test_user_id(),
            })
            .await;

        assert!(matches!(result, Err(CartError::StoreUnavailable(_))));
    }
}
