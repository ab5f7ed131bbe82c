use crate::{
    error::ValidationError,
    models::{ConversionRequest, ConversionResult, Currency},
};

impl ConversionRequest<'_> {
    pub fn convert(&self) -> Result<ConversionResult, ValidationError> {
        convert(
            self.amount,
            self.source_currency,
            self.target_currency,
            self.rate,
        )
    }
}

/// Проверяет входные данные и конвертирует сумму по переданному курсу.
///
/// Проверки идут строго по порядку: сумма, исходная валюта, целевая
/// валюта, курс. Возвращается первая найденная ошибка.
pub fn convert(
    amount: &str,
    from: &str,
    to: &str,
    rate: &str,
) -> Result<ConversionResult, ValidationError> {
    let amount = parse_positive(
        amount,
        ValidationError::AmountNotNumeric,
        ValidationError::AmountNotPositive,
    )?;
    let source = from
        .parse::<Currency>()
        .map_err(|_| ValidationError::SourceCurrencyNotSupported)?;
    let target = to
        .parse::<Currency>()
        .map_err(|_| ValidationError::TargetCurrencyNotSupported)?;
    let rate = parse_positive(
        rate,
        ValidationError::RateNotNumeric,
        ValidationError::RateNotPositive,
    )?;
    let converted_value = amount * rate;
    tracing::debug!("{amount} {source} -> {converted_value} {target} по курсу {rate}");
    Ok(ConversionResult {
        converted_value,
        currency_symbol: target.symbol(),
    })
}

fn parse_positive(
    input: &str,
    not_numeric: ValidationError,
    not_positive: ValidationError,
) -> Result<f64, ValidationError> {
    let value = parse_number(input).ok_or(not_numeric)?;
    if value <= 0.0 {
        return Err(not_positive);
    }
    Ok(value)
}

// Десятичная запись с необязательными знаком, дробной частью и экспонентой.
// inf и NaN числами не считаются.
fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim_matches(|c: char| c.is_ascii_whitespace());
    if !trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use proptest::prelude::*;

    #[test]
    fn test_convert_usd_to_brl() -> Result<()> {
        let result = convert("100", "USD", "BRL", "5.25")?;
        assert_eq!(result.converted_value, 525.0);
        assert_eq!(result.currency_symbol, "R$");
        Ok(())
    }
    #[test]
    fn test_convert_keeps_raw_float_product() -> Result<()> {
        let result = convert("0.1", "EUR", "USD", "3")?;
        assert_eq!(result.converted_value, 0.1 * 3.0);
        assert_eq!(result.currency_symbol, "$");
        let result = convert("100.50", "BRL", "EUR", "0.17")?;
        assert_eq!(result.converted_value, 100.50 * 0.17);
        assert_eq!(result.currency_symbol, "€");
        Ok(())
    }
    #[test]
    fn test_request_convert_matches_function() -> Result<()> {
        let request = ConversionRequest {
            amount: "10",
            source_currency: "usd",
            target_currency: "eur",
            rate: "0.5",
        };
        assert_eq!(request.convert()?, convert("10", "USD", "EUR", "0.5")?);
        Ok(())
    }
    #[test]
    fn test_amount_errors() {
        assert_eq!(
            convert("abc", "USD", "BRL", "5"),
            Err(ValidationError::AmountNotNumeric)
        );
        assert_eq!(
            convert("0", "USD", "BRL", "5"),
            Err(ValidationError::AmountNotPositive)
        );
        assert_eq!(
            convert("-5", "USD", "BRL", "5"),
            Err(ValidationError::AmountNotPositive)
        );
        assert_eq!(
            convert("", "USD", "BRL", "5"),
            Err(ValidationError::AmountNotNumeric)
        );
    }
    #[test]
    fn test_rate_errors() {
        assert_eq!(
            convert("10", "USD", "BRL", "abc"),
            Err(ValidationError::RateNotNumeric)
        );
        assert_eq!(
            convert("10", "USD", "BRL", "0"),
            Err(ValidationError::RateNotPositive)
        );
        assert_eq!(
            convert("10", "USD", "BRL", "-5"),
            Err(ValidationError::RateNotPositive)
        );
    }
    #[test]
    fn test_currency_errors() {
        assert_eq!(
            convert("10", "GBP", "BRL", "5"),
            Err(ValidationError::SourceCurrencyNotSupported)
        );
        assert_eq!(
            convert("10", "USD", "JPY", "5"),
            Err(ValidationError::TargetCurrencyNotSupported)
        );
        // исходная валюта проверяется первой
        assert_eq!(
            convert("10", "GBP", "JPY", "5"),
            Err(ValidationError::SourceCurrencyNotSupported)
        );
    }
    #[test]
    fn test_validation_order() {
        assert_eq!(
            convert("abc", "GBP", "JPY", "abc"),
            Err(ValidationError::AmountNotNumeric)
        );
        assert_eq!(
            convert("0", "GBP", "JPY", "abc"),
            Err(ValidationError::AmountNotPositive)
        );
        assert_eq!(
            convert("1", "USD", "JPY", "abc"),
            Err(ValidationError::TargetCurrencyNotSupported)
        );
    }
    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("100"), Some(100.0));
        assert_eq!(parse_number("100.50"), Some(100.5));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("+2"), Some(2.0));
        assert_eq!(parse_number(" 7 "), Some(7.0));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("1e999"), None);
        assert_eq!(parse_number("0x1A"), None);
        assert_eq!(parse_number("1,5"), None);
        assert_eq!(parse_number("e"), None);
        assert_eq!(parse_number("."), None);
    }

    proptest! {
        #[test]
        fn round_trip_approximates_amount(amount in 0.01f64..1_000_000.0, rate in 0.001f64..1000.0) {
            let there = convert(&amount.to_string(), "USD", "BRL", &rate.to_string()).unwrap();
            let back_rate = 1.0 / rate;
            let back = convert(
                &there.converted_value.to_string(),
                "BRL",
                "USD",
                &back_rate.to_string(),
            )
            .unwrap();
            prop_assert_eq!(back.currency_symbol, "$");
            prop_assert!((back.converted_value - amount).abs() <= amount * 1e-9);
        }
    }
}
