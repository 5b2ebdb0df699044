use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::order::model::{CheckoutItem, CheckoutRequest};
use crate::domain::shared::value_objects::ProductId;

/// One product entry in the cart.
///
/// `name` and `unit_price` are captured when the product is first added and
/// are never refreshed from the catalog, even if the listed price changes
/// while the cart is open. This is also the schema persisted to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub total_item_count: u64,
    pub total_value: Decimal,
}

/// Ordered sequence of cart lines for one session.
///
/// Invariants: at most one line per product id, and every line has
/// `quantity >= 1`. A line whose quantity would reach zero is removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.lines.iter().any(|line| &line.product_id == product_id)
    }

    /// Replaces the whole line sequence, e.g. with lines loaded from the
    /// persistence store.
    pub fn replace(&mut self, lines: Vec<CartLine>) {
        self.lines = lines;
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Adds one unit of a product. An existing line keeps its captured name
    /// and price and gains one unit; otherwise a new line is appended with
    /// quantity 1.
    pub fn add(&mut self, product_id: ProductId, name: impl Into<String>, unit_price: Decimal) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            line.quantity += 1;
            return;
        }

        self.lines.push(CartLine {
            product_id,
            name: name.into(),
            unit_price,
            quantity: 1,
        });
    }

    /// Removes the line for a product. Returns whether a line was present.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| &line.product_id != product_id);
        self.lines.len() != before
    }

    /// Sets a line's quantity to an absolute value. Zero removes the line.
    /// Returns whether the sequence changed; an unknown id changes nothing.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(product_id);
        }

        match self
            .lines
            .iter_mut()
            .find(|line| &line.product_id == product_id)
        {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Recomputes the item count and monetary total from the current lines.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            total_item_count: self.lines.iter().map(|line| u64::from(line.quantity)).sum(),
            total_value: self
                .lines
                .iter()
                .map(|line| line.unit_price * Decimal::from(line.quantity))
                .sum(),
        }
    }

    /// Snapshots the current lines into an order submission.
    pub fn checkout_request(&self) -> CheckoutRequest {
        CheckoutRequest {
            items: self
                .lines
                .iter()
                .map(|line| CheckoutItem {
                    product_id: line.product_id.clone(),
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                })
                .collect(),
            total: self.summary().total_value,
        }
    }
}
