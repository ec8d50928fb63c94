//! Cross-derivation of width, height and aspect ratio.
//!
//! Every function here is pure: no state is kept between calls.

use crate::parser::{finite, parse_ratio_text};
use crate::types::{AspectRatio, Fraction, RatioError};

/// Computes the decimal and simplified aspect ratio of a `width` x `height`
/// frame. A zero height (including `0x0`) is [`RatioError::NotApplicable`].
pub fn compute_ratio(width: i64, height: i64) -> Result<AspectRatio, RatioError> {
    let simplified = Fraction::reduce(width, height).ok_or(RatioError::NotApplicable)?;

    Ok(AspectRatio {
        decimal: width as f64 / height as f64,
        simplified,
    })
}

/// Height of a frame `width` pixels wide at the given ratio. Not rounded.
pub fn derive_height(width: i64, ratio_text: &str) -> Result<f64, RatioError> {
    let ratio = parse_ratio_text(ratio_text)?;
    if ratio == 0.0 {
        return Err(RatioError::NotApplicable);
    }

    finite(width as f64 / ratio, ratio_text.trim())
}

/// Width of a frame `height` pixels tall at the given ratio. A zero ratio
/// yields a zero width.
pub fn derive_width(height: i64, ratio_text: &str) -> Result<f64, RatioError> {
    let ratio = parse_ratio_text(ratio_text)?;
    finite(height as f64 * ratio, ratio_text.trim())
}
