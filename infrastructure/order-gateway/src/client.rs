use reqwest::Client;
use url::Url;

/// Shared commerce API HTTP client configuration.
///
/// Connection setup is bounded; an in-flight request is not — a submission
/// either resolves or is abandoned with the session.
pub struct ApiClient {
    pub client: Client,
    pub base_url: Url,
    pub access_token: String,
}

impl ApiClient {
    pub fn new(base_url: Url, access_token: String) -> Self {
        let client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url,
            access_token,
        }
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    /// Returns the order collection endpoint URL.
    pub fn orders_url(&self) -> String {
        format!("{}/pedidos", self.base_url.as_str().trim_end_matches('/'))
    }
}
