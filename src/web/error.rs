use crate::sort::ParseSortError;
use crate::store::StoreError;
use crate::template::TemplateError;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum WebError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Sort(#[from] ParseSortError),

    #[error("Malformed upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Failed to build QR code: {0}")]
    Qr(#[from] qrcode::types::QrError),

    #[error("Failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl WebError {
    /// Unknown ids are 404, anything the client can fix is 400.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            WebError::Store(StoreError::InvalidId(_) | StoreError::Image(_))
            | WebError::Sort(_)
            | WebError::Multipart(_)
            | WebError::BadRequest(_) => StatusCode::BAD_REQUEST,
            WebError::Store(
                StoreError::Io { .. }
                | StoreError::Yaml { .. }
                | StoreError::Serialize { .. }
                | StoreError::NamespaceExhausted(_)
                | StoreError::Task(_),
            )
            | WebError::Template(_)
            | WebError::Qr(_)
            | WebError::Image(_)
            | WebError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "Request rejected");
        }
        (status, self.to_string()).into_response()
    }
}
