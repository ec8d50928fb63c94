use serde::Serialize;

use crate::config::CalculatorConfig;
use crate::engine::{compute_ratio, derive_height, derive_width};
use crate::types::RatioError;

const DECIMAL_PREFIX: &str = "Decimal Ratio: ";
const SIMPLIFIED_PREFIX: &str = "Ratio (Simplified): ";
const NOT_APPLICABLE: &str = "N/A";

/// Form state of the calculator: the three input fields plus the two
/// result labels.
pub struct Calculator {
    width: i64,
    height: i64,
    ratio_text: String,
    decimal_label: String,
    simplified_label: String,
    // numeric result of the last successful calculation
    ratio: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorState {
    pub width: i64,
    pub height: i64,
    pub ratio_text: String,
    pub decimal_label: String,
    pub simplified_label: String,
    pub ratio: Option<f64>,
}

/// Which field a derivation writes into.
#[derive(Clone, Copy)]
enum Target {
    Width,
    Height,
}

impl Calculator {
    pub fn new(config: &CalculatorConfig) -> Self {
        Calculator {
            width: config.width,
            height: config.height,
            ratio_text: config.ratio.clone(),
            decimal_label: DECIMAL_PREFIX.to_string(),
            simplified_label: SIMPLIFIED_PREFIX.to_string(),
            ratio: None,
        }
    }

    pub fn set_width(&mut self, width: i64) {
        self.width = width;
    }

    pub fn set_height(&mut self, height: i64) {
        self.height = height;
    }

    pub fn set_ratio_text(&mut self, text: &str) {
        self.ratio_text = text.to_string();
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn ratio_text(&self) -> &str {
        &self.ratio_text
    }

    pub fn decimal_label(&self) -> &str {
        &self.decimal_label
    }

    pub fn simplified_label(&self) -> &str {
        &self.simplified_label
    }

    /// Decimal ratio of the last successful calculation, if any.
    pub fn ratio(&self) -> Option<f64> {
        self.ratio
    }

    /// Recomputes the ratio from the width and height fields. On success the
    /// ratio field is replaced by the simplified ratio, otherwise it is
    /// cleared.
    pub fn calculate_aspect(&mut self) -> Result<(), RatioError> {
        match compute_ratio(self.width, self.height) {
            Ok(aspect) => {
                let simplified = aspect.simplified.to_string();
                self.decimal_label = format!("{}{:?}", DECIMAL_PREFIX, aspect.decimal);
                self.simplified_label = format!("{}{}", SIMPLIFIED_PREFIX, simplified);
                self.ratio_text = simplified;
                self.ratio = Some(aspect.decimal);
                Ok(())
            },
            Err(e) => {
                self.decimal_label = format!("{}{}", DECIMAL_PREFIX, NOT_APPLICABLE);
                self.simplified_label = format!("{}{}", SIMPLIFIED_PREFIX, NOT_APPLICABLE);
                self.ratio_text.clear();
                self.ratio = None;
                Err(e)
            },
        }
    }

    /// Derives the height field from the width field and the ratio text.
    pub fn calculate_height(&mut self) -> Result<(), RatioError> {
        let derived = derive_height(self.width, &self.ratio_text);
        self.apply_derived(Target::Height, derived)
    }

    /// Derives the width field from the height field and the ratio text.
    pub fn calculate_width(&mut self) -> Result<(), RatioError> {
        let derived = derive_width(self.height, &self.ratio_text);
        self.apply_derived(Target::Width, derived)
    }

    fn apply_derived(&mut self, target: Target, derived: Result<f64, RatioError>) -> Result<(), RatioError> {
        match derived {
            Ok(value) => {
                let pixels = to_pixels(value);
                match target {
                    Target::Width => self.width = pixels,
                    Target::Height => self.height = pixels,
                }
                self.calculate_aspect()
            },
            Err(e) => {
                match target {
                    Target::Width => self.width = 0,
                    Target::Height => self.height = 0,
                }
                self.decimal_label = format!("{}{}", DECIMAL_PREFIX, e);
                self.simplified_label = format!("{}{}", SIMPLIFIED_PREFIX, NOT_APPLICABLE);
                self.ratio = None;
                Err(e)
            },
        }
    }

    pub fn snapshot(&self) -> CalculatorState {
        CalculatorState {
            width: self.width,
            height: self.height,
            ratio_text: self.ratio_text.clone(),
            decimal_label: self.decimal_label.clone(),
            simplified_label: self.simplified_label.clone(),
            ratio: self.ratio,
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new(&CalculatorConfig::default())
    }
}

/// Rounds half to even, saturating at the `i64` range.
pub fn to_pixels(value: f64) -> i64 {
    value.round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_from_config() {
        let calc = Calculator::default();
        assert_eq!(calc.width(), 1920);
        assert_eq!(calc.height(), 1080);
        assert_eq!(calc.ratio_text(), "16:9");
        assert_eq!(calc.decimal_label(), "Decimal Ratio: ");
        assert_eq!(calc.ratio(), None);
    }

    #[test]
    fn aspect_overwrites_ratio_field() {
        let mut calc = Calculator::default();
        calc.set_width(1280);
        calc.set_height(1024);
        calc.calculate_aspect().unwrap();

        assert_eq!(calc.ratio_text(), "5:4");
        assert_eq!(calc.decimal_label(), "Decimal Ratio: 1.25");
        assert_eq!(calc.simplified_label(), "Ratio (Simplified): 5:4");
        assert_eq!(calc.ratio(), Some(1.25));
    }

    #[test]
    fn aspect_with_integral_ratio_keeps_decimal_point() {
        let mut calc = Calculator::default();
        calc.set_width(2000);
        calc.set_height(1000);
        calc.calculate_aspect().unwrap();
        assert_eq!(calc.decimal_label(), "Decimal Ratio: 2.0");
    }

    #[test]
    fn aspect_zero_height_clears_ratio_field() {
        let mut calc = Calculator::default();
        calc.set_height(0);
        assert_eq!(calc.calculate_aspect(), Err(RatioError::NotApplicable));

        assert_eq!(calc.ratio_text(), "");
        assert_eq!(calc.decimal_label(), "Decimal Ratio: N/A");
        assert_eq!(calc.simplified_label(), "Ratio (Simplified): N/A");
        assert_eq!(calc.ratio(), None);
    }

    #[test]
    fn height_is_rounded_and_aspect_follows() {
        let mut calc = Calculator::default();
        calc.set_width(1000);
        calc.set_ratio_text("3:2");
        calc.calculate_height().unwrap();

        // 666.67 rounds up
        assert_eq!(calc.height(), 667);
        assert_eq!(calc.ratio_text(), "1000:667");
    }

    #[test]
    fn width_from_decimal_ratio() {
        let mut calc = Calculator::default();
        calc.set_height(800);
        calc.set_ratio_text("2.39");
        calc.calculate_width().unwrap();

        assert_eq!(calc.width(), 1912);
        assert_eq!(calc.ratio_text(), "239:100");
    }

    #[test]
    fn failed_derivation_zeroes_target() {
        let mut calc = Calculator::default();
        calc.set_ratio_text("16:");
        assert_eq!(calc.calculate_height(), Err(RatioError::MalformedColonRatio));

        assert_eq!(calc.height(), 0);
        assert_eq!(calc.width(), 1920);
        assert_eq!(calc.ratio_text(), "16:");
        assert_eq!(calc.decimal_label(), "Decimal Ratio: Invalid Ratio (expected <width>:<height>)");
        assert_eq!(calc.simplified_label(), "Ratio (Simplified): N/A");
    }

    #[test]
    fn zero_ratio_gives_zero_width() {
        let mut calc = Calculator::default();
        calc.set_ratio_text("0");
        calc.calculate_width().unwrap();
        assert_eq!(calc.width(), 0);
        assert_eq!(calc.ratio_text(), "0:1");
    }

    #[test]
    fn rounding_is_half_even() {
        assert_eq!(to_pixels(2.5), 2);
        assert_eq!(to_pixels(3.5), 4);
        assert_eq!(to_pixels(1079.6), 1080);
        assert_eq!(to_pixels(f64::INFINITY), i64::MAX);
    }
}
