use crate::domain::order::errors::OrderServiceError;

/// Checkout failures. Cart state is guaranteed untouched when one of these
/// is returned; the caller decides how to display it and the user retries
/// by submitting again.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.order_service")]
    OrderService(#[from] OrderServiceError),
}
