use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, errors::ErrorKind};
use serde::Deserialize;
use strum_macros::EnumString;

use business::domain::shared::value_objects::UserId;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.invalid_token")]
    InvalidToken,
    #[error("auth.token_expired")]
    Expired,
    #[error("auth.access_denied")]
    AccessDenied,
}

/// Access-token payload as issued by the backend's login endpoint.
#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    #[serde(default)]
    authorities: Vec<String>,
    #[allow(dead_code)]
    exp: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum Role {
    #[strum(serialize = "ADMIN")]
    Admin,
    #[strum(serialize = "DISTRIBUIDOR")]
    Distributor,
    #[strum(serialize = "VENDEDOR")]
    Seller,
    #[strum(serialize = "CLIENTE")]
    Customer,
}

#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: UserId,
    pub role: Option<Role>,
}

impl CurrentUser {
    /// The storefront serves customers only; any other (or unrecognized)
    /// role is turned away before a session is built.
    pub fn require_customer(&self) -> Result<(), AuthError> {
        match self.role {
            Some(Role::Customer) => Ok(()),
            _ => Err(AuthError::AccessDenied),
        }
    }
}

/// Decodes the access-token payload into the current user.
///
/// The signature is NOT verified: the storefront runs on the user's own
/// device and only reads back the identity the backend put in the token it
/// issued. Every request still carries the token for the backend to verify.
/// Expiry is enforced so a stale session falls back to the login screen.
pub fn authenticate(access_token: &str) -> Result<CurrentUser, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_aud = false;

    let token = decode::<Claims>(access_token, &DecodingKey::from_secret(&[]), &validation)
        .map_err(|err| match err.kind() {
            ErrorKind::ExpiredSignature => AuthError::Expired,
            _ => AuthError::InvalidToken,
        })?;

    let role = token
        .claims
        .authorities
        .first()
        .and_then(|authority| authority.parse().ok());

    Ok(CurrentUser {
        id: UserId::new(token.claims.sub),
        role,
    })
}
