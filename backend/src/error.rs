use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type DocsResult<T> = Result<T, DocsError>;

#[derive(Error, Debug)]
pub enum DocsError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Schema error: {0}")]
    Schema(String),
    #[error("Invalid base: {0}")]
    InvalidBase(String),
    #[error("Path escapes its base directory: {0}")]
    PathTraversal(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DocsError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DocsError::NotFound(_) => StatusCode::NOT_FOUND,
            DocsError::InvalidBase(_) => StatusCode::BAD_REQUEST,
            DocsError::PathTraversal(_) => StatusCode::FORBIDDEN,
            DocsError::Parse(_) | DocsError::Schema(_) => StatusCode::SERVICE_UNAVAILABLE,
            DocsError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DocsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self);
        }
        (status, self.to_string()).into_response()
    }
}
