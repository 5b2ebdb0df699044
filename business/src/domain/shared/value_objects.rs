use serde::{Deserialize, Serialize};

/// Represents an authenticated account identifier.
/// Used to isolate cart data between users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId from any type that can be converted into a String.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Catalog product identifier as issued by the backend.
///
/// The backend is not consistent about the shape: numeric ids in most
/// responses, string ids in some. Both deserialize transparently and two
/// ids are equal only when shape and value both match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{n}"),
            ProductId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ProductId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}
