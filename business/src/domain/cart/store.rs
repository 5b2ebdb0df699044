use async_trait::async_trait;

use crate::domain::cart::model::CartLine;
use crate::domain::errors::StorageError;
use crate::domain::shared::value_objects::UserId;

/// Fallback key shared by every unauthenticated context. Carts stored under
/// it are visible to any anonymous session on the same device.
const ANONYMOUS_KEY: &str = "cart";

/// Namespaced key a session's cart is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn for_user(user_id: Option<&UserId>) -> Self {
        match user_id {
            Some(id) => Self(format!("cart_user_{id}")),
            None => Self(ANONYMOUS_KEY.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Device-local persistence store for cart mirrors.
///
/// The in-memory cart is authoritative: adapters only mirror what they are
/// given, and a stored payload that no longer decodes is reported as absent
/// rather than as a failure.
#[async_trait]
pub trait CartStore: Send + Sync {
    async fn load(&self, key: &StorageKey) -> Result<Option<Vec<CartLine>>, StorageError>;
    async fn save(&self, key: &StorageKey, lines: &[CartLine]) -> Result<(), StorageError>;
}
