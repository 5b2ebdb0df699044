use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::cart::model::CartLine;

#[derive(Debug, FromRow)]
pub struct CartRecord {
    pub storage_key: String,
    pub payload: String,
    pub updated_at: DateTime<Utc>,
}

impl CartRecord {
    /// Decodes the stored line sequence. A payload that no longer parses is
    /// reported as absent so a corrupt mirror cannot take down the session.
    pub fn into_lines(self) -> Option<Vec<CartLine>> {
        match serde_json::from_str(&self.payload) {
            Ok(lines) => Some(lines),
            Err(err) => {
                tracing::warn!(
                    target: "Storefront -- ",
                    "Discarding malformed cart payload under {}: {}",
                    self.storage_key,
                    err
                );
                None
            }
        }
    }
}
