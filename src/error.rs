use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Every way a request can fail, mapped one-to-one onto a status code.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid user ID")]
    InvalidId,
    #[error("Invalid request body")]
    MalformedBody(String),
    #[error("User not found")]
    NotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("{0}")]
    Store(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::MalformedBody(detail) = &self {
            tracing::warn!(%detail, "malformed request body");
        }
        (self.status(), self.to_string()).into_response()
    }
}
