use wasm_bindgen::prelude::*;
use serde::Serialize;

pub mod types;
pub mod parser;
pub mod engine;
pub mod calculator;
pub mod config;
pub mod host;

pub use types::{AspectRatio, Fraction, RatioError};
pub use parser::parse_ratio_text;
pub use engine::{compute_ratio, derive_height, derive_width};

use calculator::Calculator;
use config::CalculatorConfig;
use host::{HostError, RenderResolution, SceneNode};

#[wasm_bindgen]
pub struct AspectRatioCalculator {
    calculator: Calculator,
}

#[wasm_bindgen]
impl AspectRatioCalculator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        AspectRatioCalculator {
            calculator: Calculator::default(),
        }
    }

    /// Builds a calculator from a `{ width, height, ratio }` object; missing
    /// keys take their defaults.
    #[wasm_bindgen]
    pub fn with_config(config: JsValue) -> Result<AspectRatioCalculator, JsValue> {
        let config: CalculatorConfig = if config.is_undefined() || config.is_null() {
            CalculatorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };

        Ok(AspectRatioCalculator {
            calculator: Calculator::new(&config),
        })
    }

    #[wasm_bindgen]
    pub fn set_width(&mut self, width: i64) {
        self.calculator.set_width(width);
    }

    #[wasm_bindgen]
    pub fn set_height(&mut self, height: i64) {
        self.calculator.set_height(height);
    }

    #[wasm_bindgen]
    pub fn set_ratio_text(&mut self, text: &str) {
        self.calculator.set_ratio_text(text);
    }

    #[wasm_bindgen]
    pub fn calculate_aspect(&mut self) -> Result<(), JsValue> {
        self.calculator.calculate_aspect().map_err(|e| ratio_error_to_js(&e))
    }

    #[wasm_bindgen]
    pub fn calculate_height(&mut self) -> Result<(), JsValue> {
        self.calculator.calculate_height().map_err(|e| ratio_error_to_js(&e))
    }

    #[wasm_bindgen]
    pub fn calculate_width(&mut self) -> Result<(), JsValue> {
        self.calculator.calculate_width().map_err(|e| ratio_error_to_js(&e))
    }

    #[wasm_bindgen]
    pub fn get_state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.calculator.snapshot())?)
    }

    /// Writes the form's width and height into `resolution` and returns the
    /// updated settings.
    #[wasm_bindgen]
    pub fn apply_resolution(&self, resolution: JsValue) -> Result<JsValue, JsValue> {
        let mut resolution: RenderResolution = serde_wasm_bindgen::from_value(resolution)?;
        let (width, height) = (self.calculator.width(), self.calculator.height());

        if let Err(e) = host::apply_resolution(&mut resolution, width, height) {
            return Err(warn_host_error(&e));
        }

        web_sys::console::log_1(&format!(
            "Resolution set to {}x{} (Pixel Aspect Ratio: {:?})",
            width, height, resolution.pixel_aspect
        ).into());

        Ok(serde_wasm_bindgen::to_value(&resolution)?)
    }

    /// Applies the last calculated ratio to the first camera of `selection`
    /// and returns the updated selection.
    #[wasm_bindgen]
    pub fn apply_film_aspect(&self, selection: JsValue) -> Result<JsValue, JsValue> {
        let mut selection: Vec<SceneNode> = serde_wasm_bindgen::from_value(selection)?;

        let target = host::first_camera(&mut selection).map_err(|e| warn_host_error(&e))?;
        let ratio = match self.calculator.ratio() {
            Some(ratio) => ratio,
            None => return Err(warn_host_error(&HostError::RatioUnavailable)),
        };

        host::apply_film_aspect(&mut target.camera.aperture, ratio);
        web_sys::console::log_1(&format!(
            "Applied Film Aspect Ratio ({:.2}) to camera '{}'.",
            ratio, target.display_name()
        ).into());

        Ok(serde_wasm_bindgen::to_value(&selection)?)
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.calculator = Calculator::default();
    }
}

impl Default for AspectRatioCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct ComputedRatio {
    decimal: f64,
    simplified: String,
    numerator: i64,
    denominator: i64,
}

#[wasm_bindgen(js_name = computeRatio)]
pub fn compute_ratio_js(width: i64, height: i64) -> Result<JsValue, JsValue> {
    let ratio = engine::compute_ratio(width, height).map_err(|e| ratio_error_to_js(&e))?;

    Ok(serde_wasm_bindgen::to_value(&ComputedRatio {
        decimal: ratio.decimal,
        simplified: ratio.simplified.to_string(),
        numerator: ratio.simplified.numerator,
        denominator: ratio.simplified.denominator,
    })?)
}

#[wasm_bindgen(js_name = parseRatioText)]
pub fn parse_ratio_text_js(text: &str) -> Result<f64, JsValue> {
    parser::parse_ratio_text(text).map_err(|e| ratio_error_to_js(&e))
}

#[wasm_bindgen(js_name = deriveHeight)]
pub fn derive_height_js(width: i64, ratio_text: &str) -> Result<f64, JsValue> {
    engine::derive_height(width, ratio_text).map_err(|e| ratio_error_to_js(&e))
}

#[wasm_bindgen(js_name = deriveWidth)]
pub fn derive_width_js(height: i64, ratio_text: &str) -> Result<f64, JsValue> {
    engine::derive_width(height, ratio_text).map_err(|e| ratio_error_to_js(&e))
}

fn ratio_error_to_js(error: &RatioError) -> JsValue {
    error_to_js(error.kind(), &error.to_string())
}

fn warn_host_error(error: &HostError) -> JsValue {
    web_sys::console::warn_1(&error.to_string().into());
    error_to_js(error.kind(), &error.to_string())
}

fn error_to_js(kind: &str, message: &str) -> JsValue {
    let obj = js_sys::Object::new();

    let built = js_sys::Reflect::set(&obj, &"kind".into(), &kind.into())
        .and_then(|_| js_sys::Reflect::set(&obj, &"message".into(), &message.into()));

    match built {
        Ok(_) => obj.into(),
        Err(thrown) => thrown,
    }
}
