//! Maps `wallet_core::Error` and this crate's own I/O and RPC failures to
//! HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("invalid encoding: {0}")]
    InvalidEncoding(wallet_core::Error),

    #[error("invalid derivation path: {0}")]
    InvalidPath(wallet_core::Error),

    #[error("invalid parameter: {0}")]
    InvalidParameter(wallet_core::Error),

    #[error("derivation failed: {0}")]
    DerivationFailure(wallet_core::Error),

    #[error("entropy source failed: {0}")]
    EntropySourceFailure(wallet_core::Error),

    #[error("upstream daemon error: {0}")]
    Upstream(String),

    #[error("{0}")]
    Internal(String),
}

impl From<wallet_core::Error> for AppError {
    fn from(err: wallet_core::Error) -> Self {
        use wallet_core::Error::*;
        match err {
            Base58 | Bech32 | Decode | InvalidExtendedKey => AppError::InvalidEncoding(err),
            InvalidPath => AppError::InvalidPath(err),
            Bip39InvalidEntropySize | Bip39InvalidPhraseSize | Bip39InvalidWord
            | Bip39InvalidChecksum => AppError::InvalidParameter(err),
            DerivationFailure | Depth | Crypto => AppError::DerivationFailure(err),
            EntropySourceFailure => AppError::EntropySourceFailure(err),
            _ => AppError::Internal(err.to_string()),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Upstream(err.to_string())
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidEncoding(_)
            | AppError::InvalidPath(_)
            | AppError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            AppError::DerivationFailure(_) | AppError::EntropySourceFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(error = %self, status = %status, "request failed");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_path_maps_to_bad_request() {
        let err: AppError = wallet_core::Error::InvalidPath.into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn derivation_failure_maps_to_internal_error() {
        let err: AppError = wallet_core::Error::DerivationFailure.into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn upstream_maps_to_bad_gateway() {
        let err = AppError::Upstream("connection refused".into());
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }
}
