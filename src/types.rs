use std::fmt;
use serde::{Deserialize, Serialize};

/// A width:height pair reduced to lowest terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: i64,
    pub denominator: i64,
}

/// Decimal aspect ratio together with its simplified integer form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub decimal: f64,
    pub simplified: Fraction,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatioError {
    #[error("Invalid Ratio (empty input)")]
    EmptyInput,
    #[error("Invalid Ratio (expected <width>:<height>)")]
    MalformedColonRatio,
    #[error("Invalid Ratio (not a number: {0:?})")]
    NotANumber(String),
    #[error("Invalid Ratio (div by zero)")]
    DivisionByZero,
    #[error("N/A")]
    NotApplicable,
}

impl RatioError {
    pub fn kind(&self) -> &'static str {
        match self {
            RatioError::EmptyInput => "empty_input",
            RatioError::MalformedColonRatio => "malformed_colon_ratio",
            RatioError::NotANumber(_) => "not_a_number",
            RatioError::DivisionByZero => "division_by_zero",
            RatioError::NotApplicable => "not_applicable",
        }
    }
}

impl Fraction {
    /// Reduces `width:height` by their greatest common divisor.
    ///
    /// Returns `None` when `height` is zero, which includes `0:0`. Signs of
    /// the inputs are kept as they are.
    pub fn reduce(width: i64, height: i64) -> Option<Fraction> {
        if height == 0 {
            return None;
        }

        // height != 0, so the divisor is at least 1. It can be 2^63, which
        // only fits in i128; the quotients always fit back in i64.
        let divisor = i128::from(gcd(width.unsigned_abs(), height.unsigned_abs()));

        Some(Fraction {
            numerator: (i128::from(width) / divisor) as i64,
            denominator: (i128::from(height) / divisor) as i64,
        })
    }

    pub fn to_float(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

/// Euclid's algorithm. `gcd(0, 0)` is 0; callers must not divide by it.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.numerator, self.denominator)
    }
}
