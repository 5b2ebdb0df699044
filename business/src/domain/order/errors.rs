/// Order service failures surfaced to the caller for display. Submissions
/// are never retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum OrderServiceError {
    #[error("order_service.connection")]
    Connection,
    #[error("order_service.unauthorized")]
    Unauthorized,
    #[error("order_service.rejected")]
    Rejected(String),
    #[error("order_service.invalid_response")]
    InvalidResponse,
}
