use crate::domain::cart::errors::CartError;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::{ProductId, UserId};

pub(crate) fn require_user_id(user_id: &UserId) -> Result<(), CartError> {
    if user_id.is_blank() {
        return Err(CartError::InvalidInput("user_id"));
    }
    Ok(())
}

pub(crate) fn require_product_id(product_id: &ProductId) -> Result<(), CartError> {
    if product_id.is_blank() {
        return Err(CartError::InvalidInput("product_id"));
    }
    Ok(())
}

/// Quantity for an add: strictly positive and representable.
pub(crate) fn positive_quantity(quantity: i64) -> Result<u32, CartError> {
    if quantity <= 0 {
        return Err(CartError::InvalidInput("quantity"));
    }
    u32::try_from(quantity).map_err(|_| CartError::InvalidInput("quantity"))
}

/// Quantity for a set: zero allowed (it removes the line), negatives rejected.
pub(crate) fn non_negative_quantity(quantity: i64) -> Result<u32, CartError> {
    u32::try_from(quantity).map_err(|_| CartError::InvalidInput("quantity"))
}

/// Logs an unexpected store error and hides it behind the generic variant.
pub(crate) fn store_failure(logger: &dyn Logger, user_id: &UserId, err: RepositoryError) -> CartError {
    logger.error(&format!("Cart store failure for user {}: {}", user_id, err));
    CartError::StoreUnavailable(err)
}
