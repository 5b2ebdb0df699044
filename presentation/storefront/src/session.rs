use std::sync::Arc;

use business::application::cart::manager::{CartManager, CheckoutOutcome};
use business::domain::cart::errors::CheckoutError;
use business::domain::notifier::Notifier;
use business::domain::order::errors::OrderServiceError;
use business::domain::order::model::OrderPage;
use business::domain::order::service::OrderService;

const ORDERS_PAGE_SIZE: u32 = 10;

/// Dashboard sections the customer navigates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Products,
    Orders,
}

/// One customer's dashboard session: the cart, the section being shown,
/// and access to the order history.
pub struct StorefrontSession {
    cart: CartManager,
    orders: Arc<dyn OrderService>,
    notifier: Arc<dyn Notifier>,
    section: Section,
}

impl StorefrontSession {
    pub fn new(
        cart: CartManager,
        orders: Arc<dyn OrderService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            cart,
            orders,
            notifier,
            section: Section::Products,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn show_section(&mut self, section: Section) {
        self.section = section;
    }

    pub fn cart(&self) -> &CartManager {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartManager {
        &mut self.cart
    }

    /// Submits the cart. A completed order moves the session to the order
    /// history; a service failure surfaces as an error toast and leaves
    /// both the cart and the current section unchanged, ready for a retry.
    pub async fn checkout(&mut self) -> Result<CheckoutOutcome, CheckoutError> {
        match self.cart.checkout().await {
            Ok(outcome) => {
                if matches!(outcome, CheckoutOutcome::Completed(_)) {
                    self.section = Section::Orders;
                }
                Ok(outcome)
            }
            Err(err) => {
                let CheckoutError::OrderService(service_err) = &err;
                self.notifier.error(&display_message(service_err));
                Err(err)
            }
        }
    }

    /// Fetches one page of the customer's order history.
    pub async fn order_history(&self, page: u32) -> Result<OrderPage, OrderServiceError> {
        self.orders.list_orders(page, ORDERS_PAGE_SIZE).await
    }
}

/// Rejections carry the backend's own message; everything else shows its
/// code for the UI to localize.
fn display_message(err: &OrderServiceError) -> String {
    match err {
        OrderServiceError::Rejected(message) => message.clone(),
        other => other.to_string(),
    }
}
