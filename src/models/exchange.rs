use serde::Serialize;

/// Входные данные конвертации, как они пришли в пути запроса
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionRequest<'a> {
    pub amount: &'a str,
    pub source_currency: &'a str,
    pub target_currency: &'a str,
    pub rate: &'a str,
}

/// Ответ на запрос /exchange/{amount}/{from}/{to}/{rate}
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    #[serde(rename = "valorConvertido")]
    pub converted_value: f64,
    #[serde(rename = "simboloMoeda")]
    pub currency_symbol: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
