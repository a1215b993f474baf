//! Error codes and the JSON error body returned by every route.
//!
//! Service errors implement [`ErrorCode`] so handlers can `?` them straight
//! into an [`ApiError`]. Codes are stable and grepable (`E_NOT_FOUND`,
//! `E_PLAN_LIMIT`, ...); messages are for humans and may change.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use palette::PaletteError;
use serde::Serialize;

/// Grepable error code plus the HTTP status a route should answer with.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
    fn status(&self) -> StatusCode;
}

impl ErrorCode for PaletteError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidColor { .. } => "E_INVALID_COLOR",
            Self::UnknownExportFormat(_) => "E_UNKNOWN_FORMAT",
            Self::UnknownMode(_) => "E_UNKNOWN_MODE",
            Self::UnknownHarmony(_) => "E_UNKNOWN_HARMONY",
            Self::UnsupportedVersion(_) => "E_UNSUPPORTED_VERSION",
            Self::InvalidDocument(_) => "E_INVALID_DOCUMENT",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidColor { .. } | Self::InvalidDocument(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::UnknownExportFormat(_)
            | Self::UnknownMode(_)
            | Self::UnknownHarmony(_)
            | Self::UnsupportedVersion(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl ErrorCode for JsonRejection {
    fn error_code(&self) -> &'static str {
        "E_INVALID_BODY"
    }

    fn status(&self) -> StatusCode {
        JsonRejection::status(self)
    }
}

impl ErrorCode for PathRejection {
    fn error_code(&self) -> &'static str {
        "E_INVALID_PATH"
    }

    fn status(&self) -> StatusCode {
        PathRejection::status(self)
    }
}

impl ErrorCode for QueryRejection {
    fn error_code(&self) -> &'static str {
        "E_INVALID_QUERY"
    }

    fn status(&self) -> StatusCode {
        QueryRejection::status(self)
    }
}

/// Body of every non-2xx API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    #[must_use]
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self { status, body: ErrorBody { code, message: message.into() } }
    }
}

impl<E: ErrorCode> From<E> for ApiError {
    fn from(err: E) -> Self {
        let status = err.status();
        if status.is_server_error() {
            tracing::error!(error = %err, code = err.error_code(), "request failed");
        }
        Self::new(status, err.error_code(), err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
