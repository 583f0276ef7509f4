use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Catalog service error variants.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("user not found")]
    UserNotFound,
    #[error("vinyl not found")]
    VinylNotFound,
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("type must be \"collection\" or \"wishlist\"")]
    InvalidKind,
    #[error("unsupported image extension: {0}")]
    UnsupportedExtension(String),
    #[error("image decode failed: {0}")]
    ImageDecode(String),
    #[error("image upload failed: {0}")]
    Upload(String),
    #[error("storage error")]
    Storage(#[from] sea_orm::DbErr),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CatalogServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::VinylNotFound => "VINYL_NOT_FOUND",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::InvalidKind => "INVALID_KIND",
            Self::UnsupportedExtension(_) => "UNSUPPORTED_EXTENSION",
            Self::ImageDecode(_) => "IMAGE_DECODE",
            Self::Upload(_) => "UPLOAD",
            Self::Storage(_) => "STORAGE",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for CatalogServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound | Self::VinylNotFound => StatusCode::NOT_FOUND,
            Self::MissingField(_)
            | Self::InvalidKind
            | Self::UnsupportedExtension(_)
            | Self::ImageDecode(_) => StatusCode::BAD_REQUEST,
            Self::Upload(_) => StatusCode::BAD_GATEWAY,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are expected client errors; only dependency and server
        // failures get logged here.
        match &self {
            Self::Storage(e) => {
                tracing::error!(error = %e, kind = self.kind(), "storage error");
            }
            Self::Internal(e) => {
                tracing::error!(error = %e, kind = self.kind(), "internal error");
            }
            Self::Upload(msg) => {
                tracing::error!(error = %msg, kind = self.kind(), "upload failed");
            }
            _ => {}
        }
        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
