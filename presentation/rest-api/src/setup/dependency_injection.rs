use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::product::catalog::ProductCatalogPostgres;

use business::application::cart::add_item::AddItemUseCaseImpl;
use business::application::cart::delete::DeleteCartUseCaseImpl;
use business::application::cart::list_items::ListItemsUseCaseImpl;
use business::application::cart::remove_item::RemoveItemUseCaseImpl;
use business::application::cart::set_quantity::SetQuantityUseCaseImpl;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub cart_api: crate::api::cart::routes::CartApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger::new("cart"));
        let health_api = crate::api::health::routes::Api::new(pool.clone());

        // Infrastructure adapters
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool.clone()));
        let product_catalog = Arc::new(ProductCatalogPostgres::new(pool));

        // Cart use cases
        let add_item_use_case = Arc::new(AddItemUseCaseImpl {
            repository: cart_repository.clone(),
            catalog: product_catalog,
            logger: logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveItemUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let set_quantity_use_case = Arc::new(SetQuantityUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let list_items_use_case = Arc::new(ListItemsUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let delete_cart_use_case = Arc::new(DeleteCartUseCaseImpl {
            repository: cart_repository,
            logger,
        });

        let cart_api = crate::api::cart::routes::CartApi::new(
            add_item_use_case,
            remove_item_use_case,
            set_quantity_use_case,
            list_items_use_case,
            delete_cart_use_case,
        );

        Self {
            health_api,
            cart_api,
        }
    }
}
