use crate::types::RatioError;

/// Parses ratio text in either colon form (`"16:9"`) or plain decimal form
/// (`"2.5"`). Surrounding whitespace is ignored on the whole text and on
/// each side of the colon.
///
/// Zero and negative ratios parse fine; rejecting them is up to the
/// operation that consumes the value.
pub fn parse_ratio_text(text: &str) -> Result<f64, RatioError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(RatioError::EmptyInput);
    }

    if !text.contains(':') {
        return parse_numeral(text);
    }

    let parts: Vec<&str> = text.split(':').map(str::trim).collect();
    let (numerator, denominator) = match parts.as_slice() {
        [n, d] if !n.is_empty() && !d.is_empty() => (parse_numeral(n)?, parse_numeral(d)?),
        _ => return Err(RatioError::MalformedColonRatio),
    };

    if denominator == 0.0 {
        return Err(RatioError::DivisionByZero);
    }

    finite(numerator / denominator, text)
}

/// Rejects a quotient that overflowed even though both numerals were finite.
pub(crate) fn finite(value: f64, text: &str) -> Result<f64, RatioError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RatioError::NotANumber(text.to_string()))
    }
}

fn parse_numeral(word: &str) -> Result<f64, RatioError> {
    match word.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RatioError::NotANumber(word.to_string())),
    }
}
