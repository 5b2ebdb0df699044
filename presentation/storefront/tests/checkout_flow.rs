use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;

use business::application::cart::manager::{CartManager, CheckoutOutcome};
use business::domain::order::errors::OrderServiceError;
use business::domain::order::model::{CheckoutRequest, OrderPage, OrderReceipt};
use business::domain::order::service::OrderService;
use business::domain::shared::value_objects::{ProductId, UserId};
use logger::TracingLogger;
use persistence::cart_store::repository::CartStoreSqlite;
use persistence::db::{DatabaseConfig, create_sqlite_pool, ensure_schema};
use storefront::display::toast::{ToastLevel, ToastQueue};
use storefront::display::view::CartViewModel;
use storefront::session::{Section, StorefrontSession};

/// Order service double: records submissions and answers as configured.
struct StubOrderService {
    requests: Mutex<Vec<CheckoutRequest>>,
    fail: bool,
}

impl StubOrderService {
    fn accepting() -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            fail: false,
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    fn recorded(&self) -> Vec<CheckoutRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderService for StubOrderService {
    async fn create_order(
        &self,
        request: &CheckoutRequest,
    ) -> Result<OrderReceipt, OrderServiceError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(OrderServiceError::Connection);
        }
        Ok(OrderReceipt {
            order_id: Some("1042".to_string()),
        })
    }

    async fn list_orders(&self, _page: u32, _limit: u32) -> Result<OrderPage, OrderServiceError> {
        Ok(OrderPage {
            orders: Vec::new(),
            total_pages: 1,
        })
    }
}

async fn memory_pool() -> sqlx::SqlitePool {
    let config = DatabaseConfig {
        connection_string: "sqlite::memory:".to_string(),
        max_connections: 1,
        acquire_timeout: Duration::from_secs(5),
    };
    let pool = create_sqlite_pool(&config).await.unwrap();
    ensure_schema(&pool).await.unwrap();
    pool
}

struct Harness {
    session: StorefrontSession,
    view: Arc<CartViewModel>,
    toasts: Arc<ToastQueue>,
    pool: sqlx::SqlitePool,
}

async fn wire_session(orders: Arc<StubOrderService>) -> Harness {
    let pool = memory_pool().await;
    let view = Arc::new(CartViewModel::new());
    let toasts = Arc::new(ToastQueue::new());

    let mut cart = CartManager::new(
        Arc::new(CartStoreSqlite::new(pool.clone())),
        orders.clone(),
        view.clone(),
        toasts.clone(),
        Arc::new(TracingLogger),
    );
    cart.initialize(Some(UserId::new("u1"))).await;

    Harness {
        session: StorefrontSession::new(cart, orders, toasts.clone()),
        view,
        toasts,
        pool,
    }
}

async fn reload_lines(pool: sqlx::SqlitePool) -> Vec<business::domain::cart::model::CartLine> {
    let mut cart = CartManager::new(
        Arc::new(CartStoreSqlite::new(pool)),
        StubOrderService::accepting(),
        Arc::new(CartViewModel::new()),
        Arc::new(ToastQueue::new()),
        Arc::new(TracingLogger),
    );
    cart.initialize(Some(UserId::new("u1"))).await;
    cart.lines().to_vec()
}

#[tokio::test]
async fn completed_checkout_clears_cart_and_switches_to_orders() {
    let orders = StubOrderService::accepting();
    let mut harness = wire_session(orders.clone()).await;

    harness
        .session
        .cart_mut()
        .add_item(ProductId::from(5), "Gadget", Decimal::new(750, 2))
        .await;
    harness
        .session
        .cart_mut()
        .set_quantity(&ProductId::from(5), 3)
        .await;

    let outcome = harness.session.checkout().await.unwrap();

    assert_eq!(
        outcome,
        CheckoutOutcome::Completed(OrderReceipt {
            order_id: Some("1042".to_string())
        })
    );
    assert_eq!(harness.session.section(), Section::Orders);

    let submitted = orders.recorded();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].total, Decimal::new(2250, 2));

    let view = harness.view.snapshot();
    assert!(view.lines.is_empty());
    assert_eq!(view.total_item_count, 0);

    let toasts = harness.toasts.drain();
    assert!(toasts
        .iter()
        .any(|t| t.level == ToastLevel::Success && t.message == "order.placed"));

    // The persisted mirror reflects the emptied cart.
    assert!(reload_lines(harness.pool.clone()).await.is_empty());
}

#[tokio::test]
async fn failed_checkout_preserves_cart_and_section() {
    let orders = StubOrderService::failing();
    let mut harness = wire_session(orders.clone()).await;

    harness
        .session
        .cart_mut()
        .add_item(ProductId::from(1), "Widget", Decimal::new(1000, 2))
        .await;
    let before = harness.session.cart().lines().to_vec();
    harness.toasts.drain();

    let result = harness.session.checkout().await;

    assert!(result.is_err());
    assert_eq!(harness.session.section(), Section::Products);
    assert_eq!(harness.session.cart().lines(), before.as_slice());
    assert_eq!(harness.view.snapshot().lines, before);

    let toasts = harness.toasts.drain();
    assert!(toasts
        .iter()
        .any(|t| t.level == ToastLevel::Error && t.message == "order_service.connection"));

    // The retry starts from the same persisted state.
    assert_eq!(reload_lines(harness.pool.clone()).await, before);
}

#[tokio::test]
async fn empty_cart_checkout_never_reaches_the_service() {
    let orders = StubOrderService::accepting();
    let mut harness = wire_session(orders.clone()).await;

    let outcome = harness.session.checkout().await.unwrap();

    assert_eq!(outcome, CheckoutOutcome::NothingToSubmit);
    assert_eq!(harness.session.section(), Section::Products);
    assert!(orders.recorded().is_empty());

    let toasts = harness.toasts.drain();
    assert!(toasts
        .iter()
        .any(|t| t.level == ToastLevel::Warning && t.message == "cart.empty"));
}

#[tokio::test]
async fn persisted_cart_survives_a_new_session() {
    let orders = StubOrderService::accepting();
    let mut harness = wire_session(orders).await;

    harness
        .session
        .cart_mut()
        .add_item(ProductId::from(2), "Widget", Decimal::new(1000, 2))
        .await;
    harness
        .session
        .cart_mut()
        .add_item(ProductId::from(7), "Gadget", Decimal::new(550, 2))
        .await;
    let saved = harness.session.cart().lines().to_vec();

    assert_eq!(reload_lines(harness.pool.clone()).await, saved);
}
