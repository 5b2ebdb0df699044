use async_trait::async_trait;

use crate::domain::order::errors::OrderServiceError;
use crate::domain::order::model::{CheckoutRequest, OrderPage, OrderReceipt};

/// Remote collaborator that accepts finalized orders and serves the
/// authenticated customer's order history.
#[async_trait]
pub trait OrderService: Send + Sync {
    async fn create_order(
        &self,
        request: &CheckoutRequest,
    ) -> Result<OrderReceipt, OrderServiceError>;

    async fn list_orders(&self, page: u32, limit: u32) -> Result<OrderPage, OrderServiceError>;
}
