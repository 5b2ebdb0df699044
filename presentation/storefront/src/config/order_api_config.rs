use url::Url;

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Configuration for the commerce backend API.
pub struct OrderApiConfig {
    pub base_url: Url,
}

impl OrderApiConfig {
    pub fn from_env() -> Self {
        let raw = std::env::var("ORDER_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw).expect("ORDER_API_BASE_URL must be a valid URL");
        Self { base_url }
    }
}
