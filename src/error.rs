use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// 小票被拒绝的原因（按校验顺序，第一个失败即返回）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("Invalid request payload")]
    MalformedPayload,

    #[error("Missing or invalid fields")]
    MissingField,

    #[error("Invalid date format")]
    InvalidDate,

    #[error("Date cannot be in the future")]
    FutureDate,

    #[error("Invalid time format")]
    InvalidTime,

    #[error("Invalid Price Format")]
    InvalidPriceFormat,

    #[error("Zero Price error")]
    ZeroOrNegativePrice,
}

/// 存储层错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("No receipt found for that id")]
    NotFound,
}

/// HTTP 层统一错误
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Rejected(#[from] RejectReason),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Content Type not allowed")]
    UnsupportedMediaType,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Rejected(_) => StatusCode::BAD_REQUEST,
            AppError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
            AppError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
