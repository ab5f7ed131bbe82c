use axum::response::{IntoResponse, Response};
use axum::Json;
use http::{StatusCode, Uri};

use crate::models::{ConversionRequest, ConversionResult};
use crate::{AppError, Result};

const EXCHANGE_SEGMENT: &str = "exchange";

/// Обработчик /exchange/{amount}/{from}/{to}/{rate}, метод запроса не важен
pub async fn exchange(uri: Uri) -> Response {
    match handle(uri.path()) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub fn handle(path: &str) -> Result<ConversionResult> {
    let request = parse_path(path)?;
    let result = request.convert()?;
    if !result.converted_value.is_finite() {
        return Err(AppError::Internal(format!(
            "converted value overflowed: {} * {}",
            request.amount, request.rate
        )));
    }
    Ok(result)
}

pub fn parse_path(path: &str) -> Result<ConversionRequest<'_>> {
    if path.is_empty() {
        return Err(AppError::InvalidUrl);
    }
    let segments = path.trim_matches('/').split('/').collect::<Vec<_>>();
    match segments[..] {
        [EXCHANGE_SEGMENT, amount, source_currency, target_currency, rate] => {
            Ok(ConversionRequest {
                amount,
                source_currency,
                target_currency,
                rate,
            })
        }
        _ => Err(AppError::InvalidUrlFormat),
    }
}
