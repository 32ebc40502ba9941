use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;

use super::errors::CartError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::{ProductId, UserId};

/// A single product line. Price and name are captured when the line is
/// first added and never refreshed from the catalog afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: BigDecimal,
    pub name: String,
}

impl CartItem {
    pub fn line_total(&self) -> BigDecimal {
        &self.unit_price * BigDecimal::from(self.quantity)
    }
}

/// Per-user cart.
///
/// Lines and total are private so that every change goes through a method
/// that keeps them consistent: at most one line per product, no line with
/// a zero quantity, and `total` equal to the sum of the line totals.
#[derive(Debug, Clone)]
pub struct Cart {
    pub user_id: UserId,
    items: Vec<CartItem>,
    total: BigDecimal,
    pub last_updated: DateTime<Utc>,
}

impl Cart {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            items: Vec::new(),
            total: BigDecimal::zero(),
            last_updated: Utc::now(),
        }
    }

    /// Constructor for data already persisted in the repository.
    ///
    /// Any stored total is discarded; the total is derived from `items`.
    pub fn from_repository(
        user_id: UserId,
        items: Vec<CartItem>,
        last_updated: DateTime<Utc>,
    ) -> Self {
        let total = Self::sum_lines(&items);
        Self {
            user_id,
            items,
            total,
            last_updated,
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    pub fn total(&self) -> &BigDecimal {
        &self.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `quantity` units of `product`.
    ///
    /// An existing line for the same product only grows in quantity; its
    /// captured price and name stay as they were.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidInput("quantity"));
        }

        match self
            .items
            .iter_mut()
            .find(|item| item.product_id == product.id)
        {
            Some(existing) => {
                existing.quantity = existing
                    .quantity
                    .checked_add(quantity)
                    .ok_or(CartError::InvalidInput("quantity"))?;
            }
            None => {
                if product.price < BigDecimal::zero() {
                    return Err(CartError::InvalidInput("unit_price"));
                }
                self.items.push(CartItem {
                    product_id: product.id.clone(),
                    quantity,
                    unit_price: product.price.clone(),
                    name: product.name.clone(),
                });
            }
        }

        self.touch();
        Ok(())
    }

    /// Removes the line for `product_id` and returns it.
    pub fn remove_item(&mut self, product_id: &ProductId) -> Result<CartItem, CartError> {
        let index = self.position(product_id)?;
        let removed = self.items.remove(index);

        self.touch();
        Ok(removed)
    }

    /// Sets the quantity of an existing line. Zero removes the line.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) -> Result<(), CartError> {
        let index = self.position(product_id)?;

        if quantity == 0 {
            self.items.remove(index);
        } else if let Some(item) = self.items.get_mut(index) {
            item.quantity = quantity;
        }

        self.touch();
        Ok(())
    }

    fn position(&self, product_id: &ProductId) -> Result<usize, CartError> {
        self.items
            .iter()
            .position(|item| &item.product_id == product_id)
            .ok_or(CartError::ItemNotFound)
    }

    fn touch(&mut self) {
        self.total = Self::sum_lines(&self.items);
        self.last_updated = Utc::now();
    }

    fn sum_lines(items: &[CartItem]) -> BigDecimal {
        items
            .iter()
            .fold(BigDecimal::zero(), |acc, item| acc + item.line_total())
    }
}
