use super::config::ChartConfig;
use crate::shared::number_format::format_currency;
use js_sys::{Object, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

#[wasm_bindgen]
extern "C" {
    /// Global `Chart` class from Chart.js (loaded by index.html)
    pub type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;
}

/// Creates a Chart.js instance on `canvas`.
///
/// The instance is registered by Chart.js itself and lives until the page
/// is unloaded; nothing here destroys it.
pub fn render_chart(canvas: &HtmlCanvasElement, config: &ChartConfig) -> Result<Chart, JsValue> {
    let value = config
        .serialize(&Serializer::json_compatible())
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    for axis in config.currency_axes() {
        install_currency_ticks(&value, axis)?;
    }

    Chart::new(canvas, &value)
}

fn install_currency_ticks(config: &JsValue, axis: &str) -> Result<(), JsValue> {
    let options = Reflect::get(config, &JsValue::from_str("options"))?;
    let scales = Reflect::get(&options, &JsValue::from_str("scales"))?;
    let scale = Reflect::get(&scales, &JsValue::from_str(axis))?;
    if !scale.is_object() {
        return Err(JsValue::from_str(&format!("scale '{}' not found", axis)));
    }

    let callback = Closure::<dyn Fn(f64) -> String>::new(|value: f64| format_currency(value));
    let ticks = Object::new();
    Reflect::set(&ticks, &JsValue::from_str("callback"), callback.as_ref())?;
    Reflect::set(&scale, &JsValue::from_str("ticks"), &ticks)?;

    // Chart.js calls the formatter on every redraw
    callback.forget();
    Ok(())
}
