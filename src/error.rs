use axum::{
    http::{header::RETRY_AFTER, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::vibe::VibeError;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Vibe(#[from] VibeError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Returns the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Vibe(err) => match err {
                VibeError::EmptyInput => StatusCode::BAD_REQUEST,
                VibeError::UnknownVibe(_) => StatusCode::NOT_FOUND,
                VibeError::ConfigurationGap(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Catalog(err) => match err {
                CatalogError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
                CatalogError::Forbidden(_) => StatusCode::FORBIDDEN,
                CatalogError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
                CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
                CatalogError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
                CatalogError::Network(_) => StatusCode::BAD_GATEWAY,
                CatalogError::Api { .. } | CatalogError::InvalidResponse(_) => {
                    StatusCode::BAD_GATEWAY
                }
            },
        }
    }

    /// Returns a machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Vibe(err) => match err {
                VibeError::EmptyInput => "EMPTY_PALETTE",
                VibeError::UnknownVibe(_) => "UNKNOWN_VIBE",
                VibeError::ConfigurationGap(_) => "CONFIG_ERROR",
            },
            Self::Catalog(err) => match err {
                CatalogError::Unauthorized(_) => "UNAUTHORIZED",
                CatalogError::Forbidden(_) => "FORBIDDEN",
                CatalogError::RateLimited { .. } => "RATE_LIMITED",
                CatalogError::NotFound(_) => "NOT_FOUND",
                CatalogError::InvalidRequest(_) => "BAD_REQUEST",
                CatalogError::Network(_) => "UPSTREAM_UNAVAILABLE",
                CatalogError::Api { .. } | CatalogError::InvalidResponse(_) => "UPSTREAM_ERROR",
            },
        }
    }
}

/// Error response body structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorDetail {
                code: self.code().to_string(),
                message: self.to_string(),
            },
        };

        let mut response = match rmp_serde::to_vec_named(&body) {
            Ok(bytes) => (status, [("content-type", "application/msgpack")], bytes).into_response(),
            Err(_) => {
                // Fallback to JSON if msgpack fails
                let json = serde_json::to_string(&body).unwrap_or_else(|_| {
                    r#"{"error":{"code":"SERIALIZATION_ERROR","message":"Failed to serialize error"}}"#.to_string()
                });
                (status, [("content-type", "application/json")], json).into_response()
            }
        };

        if let Self::Catalog(CatalogError::RateLimited {
            retry_after: Some(secs),
        }) = self
        {
            response
                .headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from(secs));
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vibe::Vibe;

    #[test]
    fn test_bad_request_maps_to_400() {
        let err = AppError::BadRequest("Missing access_token".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "BAD_REQUEST");

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/msgpack"
        );
    }

    #[test]
    fn test_empty_palette_maps_to_bad_request() {
        let err = AppError::from(VibeError::EmptyInput);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), "EMPTY_PALETTE");
    }

    #[test]
    fn test_configuration_gap_is_internal() {
        let err = AppError::from(VibeError::ConfigurationGap(Vibe::Neutral));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("Neutral"));
    }

    #[test]
    fn test_catalog_errors_surface_their_kind() {
        let cases = [
            (CatalogError::Unauthorized("expired".into()), StatusCode::UNAUTHORIZED),
            (CatalogError::Forbidden("scope".into()), StatusCode::FORBIDDEN),
            (
                CatalogError::RateLimited { retry_after: Some(3) },
                StatusCode::TOO_MANY_REQUESTS,
            ),
            (CatalogError::NotFound("user".into()), StatusCode::NOT_FOUND),
            (CatalogError::Network("timeout".into()), StatusCode::BAD_GATEWAY),
            (
                CatalogError::Api {
                    status: 500,
                    message: "boom".into(),
                },
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status_code(), status);
        }
    }

    #[test]
    fn test_rate_limited_response_carries_retry_after() {
        let response =
            AppError::from(CatalogError::RateLimited { retry_after: Some(7) }).into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers().get("retry-after").unwrap(), "7");
    }
}
