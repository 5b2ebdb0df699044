use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use strum_macros::{Display, EnumString};

use crate::domain::shared::value_objects::ProductId;

/// One line of an order submission, carrying the price captured at add-time.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: Decimal,
}

/// Order submission derived from the cart at checkout time. Never stored;
/// rebuilt from the current lines on every attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRequest {
    pub items: Vec<CheckoutItem>,
    pub total: Decimal,
}

/// Acknowledgement returned by the order service on acceptance.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReceipt {
    pub order_id: Option<String>,
}

/// Order lifecycle status as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum OrderStatus {
    #[default]
    #[strum(serialize = "PENDENTE")]
    Pending,
    #[strum(serialize = "PROCESSANDO")]
    Processing,
    #[strum(serialize = "FINALIZADO")]
    Finished,
    #[strum(serialize = "CANCELADO")]
    Cancelled,
}

impl OrderStatus {
    /// Maps a backend status string, defaulting unknown or missing values
    /// to pending.
    pub fn from_wire(value: Option<&str>) -> Self {
        value
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

/// One row of the order history listing.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub id: String,
    pub placed_at: Option<NaiveDateTime>,
    pub total: Decimal,
    pub status: OrderStatus,
}

/// One page of order history.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderPage {
    pub orders: Vec<OrderSummary>,
    pub total_pages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_backend_status_strings() {
        assert_eq!(OrderStatus::from_wire(Some("FINALIZADO")), OrderStatus::Finished);
        assert_eq!(OrderStatus::from_wire(Some("CANCELADO")), OrderStatus::Cancelled);
        assert_eq!(OrderStatus::from_wire(Some("PROCESSANDO")), OrderStatus::Processing);
        assert_eq!(OrderStatus::from_wire(Some("PENDENTE")), OrderStatus::Pending);
    }

    #[test]
    fn should_default_unknown_status_to_pending() {
        assert_eq!(OrderStatus::from_wire(Some("EM_ROTA")), OrderStatus::Pending);
        assert_eq!(OrderStatus::from_wire(None), OrderStatus::Pending);
    }

    #[test]
    fn should_render_status_in_wire_format() {
        assert_eq!(OrderStatus::Finished.to_string(), "FINALIZADO");
    }
}
