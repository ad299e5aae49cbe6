use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ledger_core::{ClientError, InputError, LedgerError};
use thiserror::Error;

use crate::routes::json_response;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("unexpected ledger payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("{0}")]
    BadRequest(String),
}

impl From<ClientError> for ApiError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Ledger(e) => ApiError::Ledger(e),
            ClientError::Payload(e) => ApiError::Payload(e),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Input(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Ledger(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::Ledger(_) => StatusCode::NOT_IMPLEMENTED,
            ApiError::Payload(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        json_response(self.status(), serde_json::json!({ "error": self.to_string() }))
    }
}
