const DEFAULT_DB_URL: &str = "sqlite://storefront.db?mode=rwc";

/// Configuration for the device-local cart store.
pub struct StorageConfig {
    pub database_url: String,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        let database_url =
            std::env::var("STOREFRONT_DB_URL").unwrap_or_else(|_| DEFAULT_DB_URL.to_string());
        Self { database_url }
    }
}
