use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_item::{AddItemParams, AddItemUseCase};
use business::domain::cart::use_cases::delete::{DeleteCartParams, DeleteCartUseCase};
use business::domain::cart::use_cases::list_items::{ListItemsParams, ListItemsUseCase};
use business::domain::cart::use_cases::remove_item::{RemoveItemParams, RemoveItemUseCase};
use business::domain::cart::use_cases::set_quantity::{SetQuantityParams, SetQuantityUseCase};
use business::domain::shared::value_objects::{ProductId, UserId};

use crate::api::cart::dto::{
    AddItemRequest, CartItemResponse, CartResponse, DeleteCartResponse, SetQuantityRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    add_item_use_case: Arc<dyn AddItemUseCase>,
    remove_item_use_case: Arc<dyn RemoveItemUseCase>,
    set_quantity_use_case: Arc<dyn SetQuantityUseCase>,
    list_items_use_case: Arc<dyn ListItemsUseCase>,
    delete_cart_use_case: Arc<dyn DeleteCartUseCase>,
}

impl CartApi {
    pub fn new(
        add_item_use_case: Arc<dyn AddItemUseCase>,
        remove_item_use_case: Arc<dyn RemoveItemUseCase>,
        set_quantity_use_case: Arc<dyn SetQuantityUseCase>,
        list_items_use_case: Arc<dyn ListItemsUseCase>,
        delete_cart_use_case: Arc<dyn DeleteCartUseCase>,
    ) -> Self {
        Self {
            add_item_use_case,
            remove_item_use_case,
            set_quantity_use_case,
            list_items_use_case,
            delete_cart_use_case,
        }
    }
}

/// Shopping cart API
///
/// One cart per user. Line prices are fixed when a product is first added.
#[OpenApi]
impl CartApi {
    /// Add an item
    ///
    /// Adds `quantity` units of a catalog product, creating the cart if the
    /// user has none yet. Adding a product already in the cart increases its
    /// quantity and keeps the original price.
    #[oai(path = "/carts/:user_id/items", method = "post", tag = "ApiTags::Carts")]
    async fn add_item(&self, user_id: Path<String>, body: Json<AddItemRequest>) -> AddItemResponse {
        let params = AddItemParams {
            user_id: UserId::new(user_id.0),
            product_id: ProductId::new(body.0.product_id),
            quantity: body.0.quantity,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(outcome) if outcome.created => AddItemResponse::Created(Json(outcome.cart.into())),
            Ok(outcome) => AddItemResponse::Ok(Json(outcome.cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddItemResponse::BadRequest(json),
                    404 => AddItemResponse::NotFound(json),
                    _ => AddItemResponse::InternalError(json),
                }
            }
        }
    }

    /// List cart items
    ///
    /// Returns the lines of the user's cart, or an empty list when the user
    /// has no cart.
    #[oai(path = "/carts/:user_id/items", method = "get", tag = "ApiTags::Carts")]
    async fn list_items(&self, user_id: Path<String>) -> ListItemsResponse {
        let params = ListItemsParams {
            user_id: UserId::new(user_id.0),
        };

        match self.list_items_use_case.execute(params).await {
            Ok(items) => {
                let responses: Vec<CartItemResponse> =
                    items.into_iter().map(|i| i.into()).collect();
                ListItemsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ListItemsResponse::BadRequest(json),
                    _ => ListItemsResponse::InternalError(json),
                }
            }
        }
    }

    /// Set an item's quantity
    ///
    /// Overwrites the quantity of a line already in the cart. A quantity of
    /// zero removes the line.
    #[oai(
        path = "/carts/:user_id/items/:product_id",
        method = "put",
        tag = "ApiTags::Carts"
    )]
    async fn set_quantity(
        &self,
        user_id: Path<String>,
        product_id: Path<String>,
        body: Json<SetQuantityRequest>,
    ) -> CartMutationResponse {
        let params = SetQuantityParams {
            user_id: UserId::new(user_id.0),
            product_id: ProductId::new(product_id.0),
            quantity: body.0.quantity,
        };

        CartMutationResponse::from_result(
            self.set_quantity_use_case
                .execute(params)
                .await
                .map(Into::into),
        )
    }

    /// Remove an item
    ///
    /// Removes a line from the cart. The cart itself is kept even when it
    /// becomes empty.
    #[oai(
        path = "/carts/:user_id/items/:product_id",
        method = "delete",
        tag = "ApiTags::Carts"
    )]
    async fn remove_item(
        &self,
        user_id: Path<String>,
        product_id: Path<String>,
    ) -> CartMutationResponse {
        let params = RemoveItemParams {
            user_id: UserId::new(user_id.0),
            product_id: ProductId::new(product_id.0),
        };

        CartMutationResponse::from_result(
            self.remove_item_use_case
                .execute(params)
                .await
                .map(Into::into),
        )
    }

    /// Delete a cart
    ///
    /// Deletes the user's cart with all its lines.
    #[oai(path = "/carts/:user_id", method = "delete", tag = "ApiTags::Carts")]
    async fn delete_cart(&self, user_id: Path<String>) -> DeleteCartApiResponse {
        let user_id = user_id.0;

        match self
            .delete_cart_use_case
            .execute(DeleteCartParams {
                user_id: UserId::new(user_id.clone()),
            })
            .await
        {
            Ok(()) => DeleteCartApiResponse::Ok(Json(DeleteCartResponse {
                user_id,
                deleted: true,
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => DeleteCartApiResponse::BadRequest(json),
                    404 => DeleteCartApiResponse::NotFound(json),
                    _ => DeleteCartApiResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddItemResponse {
    #[oai(status = 201)]
    Created(Json<CartResponse>),
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CartItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartMutationResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl CartMutationResponse {
    fn from_result<E: IntoErrorResponse>(result: Result<CartResponse, E>) -> Self {
        match result {
            Ok(cart) => Self::Ok(Json(cart)),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => Self::BadRequest(json),
                    404 => Self::NotFound(json),
                    _ => Self::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteCartApiResponse {
    #[oai(status = 200)]
    Ok(Json<DeleteCartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use bigdecimal::BigDecimal;
    use poem::Route;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    use business::domain::cart::errors::CartError;
    use business::domain::cart::model::{Cart, CartItem};
    use business::domain::cart::use_cases::add_item::AddItemOutcome;
    use business::domain::errors::RepositoryError;
    use business::domain::product::model::Product;

    use super::*;

    fn widget_cart(user_id: &str, quantity: u32) -> Cart {
        let widget = Product::from_repository(
            ProductId::new("p1"),
            "Widget".to_string(),
            BigDecimal::from(10),
            None,
            None,
        );
        let mut cart = Cart::new(UserId::new(user_id));
        cart.add_item(&widget, quantity).unwrap();
        cart
    }

    struct StubAdd;

    #[async_trait]
    impl AddItemUseCase for StubAdd {
        async fn execute(&self, params: AddItemParams) -> Result<AddItemOutcome, CartError> {
            match params.product_id.as_str() {
                "missing" => Err(CartError::ProductNotFound),
                _ if params.quantity <= 0 => Err(CartError::InvalidInput("quantity")),
                // "u1" already holds two widgets.
                _ if params.user_id.as_str() == "u1" => Ok(AddItemOutcome {
                    cart: widget_cart("u1", 2 + params.quantity as u32),
                    created: false,
                }),
                _ => Ok(AddItemOutcome {
                    cart: widget_cart(params.user_id.as_str(), params.quantity as u32),
                    created: true,
                }),
            }
        }
    }

    struct StubRemove;

    #[async_trait]
    impl RemoveItemUseCase for StubRemove {
        async fn execute(&self, params: RemoveItemParams) -> Result<Cart, CartError> {
            match params.product_id.as_str() {
                "p1" => Ok(Cart::new(params.user_id)),
                _ => Err(CartError::ItemNotFound),
            }
        }
    }

    struct StubSet;

    #[async_trait]
    impl SetQuantityUseCase for StubSet {
        async fn execute(&self, params: SetQuantityParams) -> Result<Cart, CartError> {
            match params.product_id.as_str() {
                "p1" => Ok(widget_cart(params.user_id.as_str(), params.quantity as u32)),
                _ => Err(CartError::StoreUnavailable(RepositoryError::DatabaseError)),
            }
        }
    }

    struct StubList;

    #[async_trait]
    impl ListItemsUseCase for StubList {
        async fn execute(&self, params: ListItemsParams) -> Result<Vec<CartItem>, CartError> {
            if params.user_id.as_str() == "u1" {
                Ok(widget_cart("u1", 2).into_items())
            } else {
                Ok(Vec::new())
            }
        }
    }

    struct StubDelete;

    #[async_trait]
    impl DeleteCartUseCase for StubDelete {
        async fn execute(&self, params: DeleteCartParams) -> Result<(), CartError> {
            if params.user_id.as_str() == "u1" {
                Ok(())
            } else {
                Err(CartError::CartNotFound)
            }
        }
    }

    fn client() -> TestClient<Route> {
        let api = CartApi::new(
            Arc::new(StubAdd),
            Arc::new(StubRemove),
            Arc::new(StubSet),
            Arc::new(StubList),
            Arc::new(StubDelete),
        );
        let service = OpenApiService::new(api, "Cart Service API", "test");
        TestClient::new(Route::new().nest("/", service))
    }

    #[tokio::test]
    async fn should_answer_created_with_cart_on_first_add() {
        let resp = client()
            .post("/carts/u2/items")
            .body_json(&serde_json::json!({ "product_id": "p1", "quantity": 2 }))
            .send()
            .await;

        resp.assert_status(StatusCode::CREATED);
        let json = resp.json().await;
        let cart = json.value().object();
        cart.get("user_id").assert_string("u2");
        cart.get("total").assert_string("20");
        cart.get("items").array().assert_len(1);
    }

    #[tokio::test]
    async fn should_answer_ok_when_adding_to_existing_cart() {
        let resp = client()
            .post("/carts/u1/items")
            .body_json(&serde_json::json!({ "product_id": "p1", "quantity": 1 }))
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let cart = json.value().object();
        cart.get("user_id").assert_string("u1");
        cart.get("total").assert_string("30");
        cart.get("items").array().get(0).object().get("quantity").assert_i64(3);
    }

    #[tokio::test]
    async fn should_answer_not_found_for_unknown_product() {
        let resp = client()
            .post("/carts/u1/items")
            .body_json(&serde_json::json!({ "product_id": "missing", "quantity": 1 }))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_answer_bad_request_for_zero_quantity() {
        let resp = client()
            .post("/carts/u1/items")
            .body_json(&serde_json::json!({ "product_id": "p1", "quantity": 0 }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_list_empty_items_for_user_without_cart() {
        let resp = client().get("/carts/nobody/items").send().await;

        resp.assert_status_is_ok();
        resp.json().await.value().array().assert_len(0);
    }

    #[tokio::test]
    async fn should_list_items_with_pinned_price() {
        let resp = client().get("/carts/u1/items").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let item = json.value().array().get(0).object();
        item.get("product_id").assert_string("p1");
        item.get("unit_price").assert_string("10");
        item.get("quantity").assert_i64(2);
    }

    #[tokio::test]
    async fn should_return_recomputed_cart_after_removing_item() {
        let resp = client().delete("/carts/u1/items/p1").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let cart = json.value().object();
        cart.get("items").array().assert_len(0);
        cart.get("total").assert_string("0");
    }

    #[tokio::test]
    async fn should_return_recomputed_cart_after_setting_quantity() {
        let resp = client()
            .put("/carts/u1/items/p1")
            .body_json(&serde_json::json!({ "quantity": 3 }))
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let cart = json.value().object();
        cart.get("total").assert_string("30");
        cart.get("items").array().get(0).object().get("quantity").assert_i64(3);
    }

    #[tokio::test]
    async fn should_answer_not_found_when_removing_missing_item() {
        let resp = client().delete("/carts/u1/items/p2").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_answer_internal_error_without_leaking_detail() {
        let resp = client()
            .put("/carts/u1/items/broken")
            .body_json(&serde_json::json!({ "quantity": 3 }))
            .send()
            .await;

        resp.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let json = resp.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("repository.persistence");
    }

    #[tokio::test]
    async fn should_confirm_cart_deletion() {
        let resp = client().delete("/carts/u1").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value().object().get("deleted").assert_bool(true);
    }

    #[tokio::test]
    async fn should_answer_not_found_when_deleting_missing_cart() {
        let resp = client().delete("/carts/u2").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }
}
