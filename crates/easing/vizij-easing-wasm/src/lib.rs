use js_sys::Array;
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use vizij_easing_core::{
    Easing, EasingError, EasingRegistry, Family, SampleConfig, Variant,
};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn to_js_error(err: EasingError) -> JsError {
    JsError::new(&err.to_string())
}

/// Parse an easing spec: either a name string ("ease_in_quad", "EaseInQuad")
/// or a tagged object ({ type: "ease_out_back", overshoot: 2.0 }).
fn parse_easing(spec: JsValue) -> Result<Easing, JsError> {
    if let Some(name) = spec.as_string() {
        return name.parse::<Easing>().map_err(to_js_error);
    }
    if jsvalue_is_undefined_or_null(&spec) {
        return Err(JsError::new("easing spec is null/undefined"));
    }
    swb::from_value(spec).map_err(|e| JsError::new(&format!("easing spec error: {e}")))
}

#[derive(Serialize)]
struct CurveInfo {
    name: &'static str,
    family: Family,
    variant: Variant,
    overshoots: bool,
}

/// Name-keyed easing table. Custom curves registered from JS are not
/// supported; this wraps the built-ins.
#[wasm_bindgen]
pub struct VizijEasing {
    registry: EasingRegistry,
}

impl Default for VizijEasing {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl VizijEasing {
    #[wasm_bindgen(constructor)]
    pub fn new() -> VizijEasing {
        console_error_panic_hook::set_once();
        VizijEasing {
            registry: EasingRegistry::new(),
        }
    }

    /// Evaluate a named curve at progress `n` in [0, 1].
    pub fn evaluate(&self, name: &str, n: f64) -> Result<f64, JsError> {
        self.registry.evaluate(name, n).map_err(to_js_error)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Array {
        self.registry
            .names()
            .into_iter()
            .map(JsValue::from_str)
            .collect()
    }
}

/// Evaluate an easing spec (name or tagged object) at progress `n`.
#[wasm_bindgen]
pub fn ease(spec: JsValue, n: f64) -> Result<f64, JsError> {
    let easing = parse_easing(spec)?;
    easing.apply(n).map_err(to_js_error)
}

/// All built-in curves with family/variant metadata.
#[wasm_bindgen(js_name = describe_easings)]
pub fn describe_easings() -> Result<JsValue, JsError> {
    let infos: Vec<CurveInfo> = Easing::all()
        .map(|e| CurveInfo {
            name: e.name(),
            family: e.family(),
            variant: e.variant(),
            overshoots: e.overshoots(),
        })
        .collect();
    swb::to_value(&infos).map_err(|e| JsError::new(&format!("serialize error: {e}")))
}

/// Point a proportion `n` along the line (x1, y1) -> (x2, y2), as [x, y].
#[wasm_bindgen(js_name = point_on_line)]
pub fn point_on_line(x1: f64, y1: f64, x2: f64, y2: f64, n: f64) -> Vec<f64> {
    let (x, y) = vizij_easing_core::point_on_line(x1, y1, x2, y2, n);
    vec![x, y]
}

/// Bake a curve into a lookup table. `cfg` is optional JSON matching SampleConfig.
#[wasm_bindgen(js_name = sample_curve)]
pub fn sample_curve(spec: JsValue, cfg: JsValue) -> Result<JsValue, JsError> {
    console_error_panic_hook::set_once();
    let easing = parse_easing(spec)?;
    let cfg: SampleConfig = if jsvalue_is_undefined_or_null(&cfg) {
        SampleConfig::default()
    } else {
        swb::from_value(cfg).map_err(|e| JsError::new(&format!("sample cfg error: {e}")))?
    };
    let curve = vizij_easing_core::sample_curve(&easing, &cfg).map_err(to_js_error)?;
    swb::to_value(&curve).map_err(|e| JsError::new(&format!("serialize error: {e}")))
}

#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}

#[wasm_bindgen(js_name = version)]
pub fn version() -> String {
    vizij_easing_core::VERSION.to_string()
}
