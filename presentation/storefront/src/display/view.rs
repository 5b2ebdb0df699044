use std::sync::RwLock;

use rust_decimal::Decimal;

use business::domain::cart::model::{CartLine, CartSummary};
use business::domain::cart::observer::CartObserver;

/// Snapshot of the cart the UI renders from: the badge count, the sidebar
/// total, and the line list.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total_item_count: u64,
    pub total_value: Decimal,
}

impl Default for CartView {
    fn default() -> Self {
        Self {
            lines: Vec::new(),
            total_item_count: 0,
            total_value: Decimal::ZERO,
        }
    }
}

/// Keeps the latest cart snapshot for the UI to read after each change.
#[derive(Default)]
pub struct CartViewModel {
    current: RwLock<CartView>,
}

impl CartViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> CartView {
        self.current
            .read()
            .map(|view| view.clone())
            .unwrap_or_default()
    }
}

impl CartObserver for CartViewModel {
    fn cart_changed(&self, lines: &[CartLine], summary: &CartSummary) {
        if let Ok(mut current) = self.current.write() {
            *current = CartView {
                lines: lines.to_vec(),
                total_item_count: summary.total_item_count,
                total_value: summary.total_value,
            };
        }
    }
}
