//! Response types and error handling for API endpoints
//!
//! Client-facing errors carry a fixed, route-specific message. Not-found
//! lookups are reported as 400 like any other bad input.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lfg_service::ServiceError;
use serde::Serialize;
use std::fmt::Display;
use thiserror::Error;
use tracing::{error, warn};

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    /// Posting an ad failed for any reason
    #[error("Dados inválidos")]
    InvalidAdData(String),

    /// Listing the ads of a game failed
    #[error("Jogo inválido")]
    InvalidGame(String),

    /// Looking up an ad's contact failed
    #[error("Anúncio inválido")]
    InvalidAd(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    pub fn invalid_ad_data(cause: impl Display) -> Self {
        Self::InvalidAdData(cause.to_string())
    }

    pub fn invalid_game(cause: impl Display) -> Self {
        Self::InvalidGame(cause.to_string())
    }

    pub fn invalid_ad(cause: impl Display) -> Self {
        Self::InvalidAd(cause.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidAdData(_) | Self::InvalidGame(_) | Self::InvalidAd(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAdData(_) => "INVALID_AD_DATA",
            Self::InvalidGame(_) => "INVALID_GAME",
            Self::InvalidAd(_) => "INVALID_AD",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn cause(&self) -> String {
        match self {
            Self::InvalidAdData(cause) | Self::InvalidGame(cause) | Self::InvalidAd(cause) => {
                cause.clone()
            }
            Self::Internal(e) => format!("{e:#}"),
        }
    }
}

/// Describe a service failure for the logs: code, would-be status and message
pub fn service_cause(err: &ServiceError) -> String {
    format!("{} ({}): {err}", err.error_code(), err.status_code())
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        if status.is_server_error() {
            error!(code, cause = %self.cause(), "Server error occurred");
        } else {
            warn!(code, cause = %self.cause(), "Request rejected");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
