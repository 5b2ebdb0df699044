use super::{order_api_config::OrderApiConfig, storage_config::StorageConfig};

pub struct AppConfig {
    pub order_api: OrderApiConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            order_api: OrderApiConfig::from_env(),
            storage: StorageConfig::from_env(),
        }
    }
}
