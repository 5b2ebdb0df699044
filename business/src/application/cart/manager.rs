use std::sync::Arc;

use rust_decimal::Decimal;

use crate::domain::cart::errors::CheckoutError;
use crate::domain::cart::model::{Cart, CartLine, CartSummary};
use crate::domain::cart::observer::CartObserver;
use crate::domain::cart::store::{CartStore, StorageKey};
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::order::model::OrderReceipt;
use crate::domain::order::service::OrderService;
use crate::domain::shared::value_objects::{ProductId, UserId};

/// Result of a checkout attempt that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// The cart was empty; nothing was submitted and no call was made.
    NothingToSubmit,
    /// The order was accepted and the cart has been cleared. The caller
    /// should transition the display to the order-history view.
    Completed(OrderReceipt),
}

/// Owns one session's cart: the current user, the line sequence, and the
/// ports it mirrors state through. The in-memory cart is authoritative;
/// persistence failures degrade to "not saved this session" and are never
/// surfaced to the user as errors.
pub struct CartManager {
    user_id: Option<UserId>,
    cart: Cart,
    store: Arc<dyn CartStore>,
    order_service: Arc<dyn OrderService>,
    observer: Arc<dyn CartObserver>,
    notifier: Arc<dyn Notifier>,
    logger: Arc<dyn Logger>,
}

impl CartManager {
    pub fn new(
        store: Arc<dyn CartStore>,
        order_service: Arc<dyn OrderService>,
        observer: Arc<dyn CartObserver>,
        notifier: Arc<dyn Notifier>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            user_id: None,
            cart: Cart::new(),
            store,
            order_service,
            observer,
            notifier,
            logger,
        }
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Recomputed on every call; never cached and never fails.
    pub fn summary(&self) -> CartSummary {
        self.cart.summary()
    }

    /// Binds the session to a user (or the anonymous fallback) and replaces
    /// the in-memory cart with whatever the store holds for that key. A
    /// missing entry, a malformed entry, and a store failure all yield an
    /// empty cart; none of them fail the session.
    pub async fn initialize(&mut self, user_id: Option<UserId>) {
        self.user_id = user_id;
        let key = self.storage_key();

        let lines = match self.store.load(&key).await {
            Ok(Some(lines)) => lines,
            Ok(None) => Vec::new(),
            Err(err) => {
                self.logger
                    .warn(&format!("Cart load failed for {key}: {err}"));
                Vec::new()
            }
        };

        self.logger
            .info(&format!("Cart initialized for {key} with {} lines", lines.len()));
        self.cart.replace(lines);
        self.publish();
    }

    /// Adds one unit of a product. A line that already exists keeps the
    /// name and price captured when it was first added.
    pub async fn add_item(
        &mut self,
        product_id: ProductId,
        name: impl Into<String>,
        unit_price: Decimal,
    ) {
        self.logger
            .info(&format!("Adding product {product_id} to cart"));
        self.cart.add(product_id, name, unit_price);
        self.persist().await;
        self.publish();
        self.notifier.success("cart.item_added");
    }

    /// Removes a product's line. Removing an absent product is a no-op,
    /// not an error; the mirror is rewritten either way.
    pub async fn remove_item(&mut self, product_id: &ProductId) {
        self.cart.remove(product_id);
        self.persist().await;
        self.publish();
    }

    /// Sets a line's quantity; zero removes the line. An unknown product id
    /// changes nothing and writes nothing.
    pub async fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if !self.cart.set_quantity(product_id, quantity) {
            return;
        }
        self.persist().await;
        self.publish();
    }

    /// Submits the current cart as an order.
    ///
    /// The request is snapshotted before the call; on failure the line
    /// sequence is left exactly as it was so the user can resubmit, and on
    /// success the cart is emptied and the empty state persisted. There is
    /// no automatic retry and no timeout on the submission.
    pub async fn checkout(&mut self) -> Result<CheckoutOutcome, CheckoutError> {
        if self.cart.is_empty() {
            self.notifier.warning("cart.empty");
            return Ok(CheckoutOutcome::NothingToSubmit);
        }

        let request = self.cart.checkout_request();
        self.logger.info(&format!(
            "Submitting order with {} items, total {}",
            request.items.len(),
            request.total
        ));

        let receipt = match self.order_service.create_order(&request).await {
            Ok(receipt) => receipt,
            Err(err) => {
                self.logger.error(&format!("Order submission failed: {err}"));
                return Err(err.into());
            }
        };

        self.cart.clear();
        self.persist().await;
        self.publish();
        self.notifier.success("order.placed");
        self.logger.info(&format!(
            "Order accepted{}",
            receipt
                .order_id
                .as_deref()
                .map(|id| format!(" with id {id}"))
                .unwrap_or_default()
        ));

        Ok(CheckoutOutcome::Completed(receipt))
    }

    fn storage_key(&self) -> StorageKey {
        StorageKey::for_user(self.user_id.as_ref())
    }

    async fn persist(&self) {
        let key = self.storage_key();
        if let Err(err) = self.store.save(&key, self.cart.lines()).await {
            self.logger
                .error(&format!("Cart save failed for {key}: {err}"));
        }
    }

    fn publish(&self) {
        self.observer.cart_changed(self.cart.lines(), &self.cart.summary());
    }
}
