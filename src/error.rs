use std::{error::Error, fmt::Display};

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;

use crate::models::ErrorResponse;

/// Сообщение, которое уходит клиенту вместо причины внутренней ошибки
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    InvalidAmount,
    InvalidCurrency,
    InvalidRate,
}

/// Ошибка проверки входных данных конвертации
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    AmountNotNumeric,
    AmountNotPositive,
    SourceCurrencyNotSupported,
    TargetCurrencyNotSupported,
    RateNotNumeric,
    RateNotPositive,
}

impl ValidationError {
    pub fn kind(&self) -> ValidationKind {
        match self {
            Self::AmountNotNumeric | Self::AmountNotPositive => ValidationKind::InvalidAmount,
            Self::SourceCurrencyNotSupported | Self::TargetCurrencyNotSupported => {
                ValidationKind::InvalidCurrency
            }
            Self::RateNotNumeric | Self::RateNotPositive => ValidationKind::InvalidRate,
        }
    }
    pub fn message(&self) -> &'static str {
        match self {
            Self::AmountNotNumeric => "Amount must be numeric",
            Self::AmountNotPositive => "Amount must be greater than zero",
            Self::SourceCurrencyNotSupported => "source currency not supported",
            Self::TargetCurrencyNotSupported => "target currency not supported",
            Self::RateNotNumeric => "Exchange rate must be numeric",
            Self::RateNotPositive => "Exchange rate must be greater than zero",
        }
    }
}
impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}
impl Error for ValidationError {}

#[derive(Debug)]
pub enum AppError {
    InvalidUrl,
    InvalidUrlFormat,
    Validation(ValidationError),
    Timeout,
    Internal(String),
}

pub type Result<T> = core::result::Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidUrl | Self::InvalidUrlFormat | Self::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Timeout => StatusCode::REQUEST_TIMEOUT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUrl => write!(f, "Invalid URL"),
            Self::InvalidUrlFormat => write!(f, "Invalid URL format"),
            Self::Validation(e) => write!(f, "{e}"),
            Self::Timeout => write!(f, "Request timeout"),
            Self::Internal(e) => write!(f, "internal error: {e}"),
        }
    }
}
impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            _ => None,
        }
    }
}
impl From<ValidationError> for AppError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = match self {
            Self::Internal(cause) => {
                tracing::error!("Внутренняя ошибка при обработке запроса: {cause}");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}
