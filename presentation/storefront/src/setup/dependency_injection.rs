use std::sync::Arc;

use business::application::cart::manager::CartManager;
use business::domain::order::service::OrderService;
use logger::TracingLogger;
use order_gateway::client::ApiClient;
use order_gateway::order_service::OrderServiceHttp;
use persistence::cart_store::repository::CartStoreSqlite;
use persistence::db::{DatabaseConfig, create_sqlite_pool, ensure_schema};

use crate::auth::identity::{self, CurrentUser};
use crate::config::app_config::AppConfig;
use crate::display::toast::ToastQueue;
use crate::display::view::CartViewModel;
use crate::session::StorefrontSession;

/// Wired customer session plus the display handles the UI reads from.
pub struct SessionContainer {
    pub session: StorefrontSession,
    pub view: Arc<CartViewModel>,
    pub toasts: Arc<ToastQueue>,
    pub user: Option<CurrentUser>,
}

impl SessionContainer {
    /// Wires the adapters into a customer session and loads the persisted
    /// cart. Without an access token the session is anonymous and the cart
    /// falls back to the shared anonymous key.
    pub async fn new(config: AppConfig, access_token: Option<&str>) -> anyhow::Result<Self> {
        let user = match access_token {
            Some(token) => {
                let user = identity::authenticate(token)?;
                user.require_customer()?;
                Some(user)
            }
            None => None,
        };

        let logger = Arc::new(TracingLogger);
        let view = Arc::new(CartViewModel::new());
        let toasts = Arc::new(ToastQueue::new());

        // Infrastructure adapters
        let pool =
            create_sqlite_pool(&DatabaseConfig::new(config.storage.database_url.clone())).await?;
        ensure_schema(&pool).await?;
        let store = Arc::new(CartStoreSqlite::new(pool));

        let api_client = ApiClient::new(
            config.order_api.base_url.clone(),
            access_token.unwrap_or_default().to_string(),
        );
        let orders: Arc<dyn OrderService> = Arc::new(OrderServiceHttp::new(api_client));

        let mut cart = CartManager::new(
            store,
            orders.clone(),
            view.clone(),
            toasts.clone(),
            logger,
        );
        cart.initialize(user.as_ref().map(|u| u.id.clone())).await;

        let session = StorefrontSession::new(cart, orders, toasts.clone());

        Ok(Self {
            session,
            view,
            toasts,
            user,
        })
    }
}
