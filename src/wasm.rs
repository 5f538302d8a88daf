//! Browser-facing exports.
//!
//! In the browser the host page fetches candidate images itself (an `<img crossOrigin =
//! "anonymous">` or `fetch` with CORS), so only the pixel work crosses into wasm.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::aggregate::{ExtractionResult, rank_colors};
use crate::color::HexColor;
use crate::filter::filter_brand_colors;
use crate::quantize::{ImageColors, QuantizeOptions, extract_image_colors};

fn to_js_array<T: ToString>(items: &[T]) -> Array {
    let out = Array::new();
    for item in items {
        out.push(&JsValue::from_str(&item.to_string()));
    }
    out
}

fn strings(values: &Array) -> Vec<String> {
    values.iter().filter_map(|v| v.as_string()).collect()
}

fn image_colors_to_js(colors: &ImageColors) -> Result<Object, JsValue> {
    let result = Object::new();
    Reflect::set(&result, &"dominant".into(), &JsValue::from_str(&colors.dominant.to_string()))?;
    Reflect::set(&result, &"palette".into(), &to_js_array(&colors.palette))?;
    Ok(result)
}

fn image_colors_from_js(value: &JsValue) -> Result<ImageColors, JsValue> {
    let dominant = Reflect::get(value, &"dominant".into())?
        .as_string()
        .ok_or_else(|| JsValue::from_str("dominant must be a string"))?;
    let dominant: HexColor = dominant
        .parse()
        .map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let palette = Reflect::get(value, &"palette".into())?;
    let palette = Array::from(&palette);
    let palette = strings(&palette)
        .iter()
        .map(|s| s.parse::<HexColor>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| JsValue::from_str(&format!("{e}")))?;
    Ok(ImageColors { dominant, palette })
}

fn extraction_to_js(result: &ExtractionResult) -> Result<Object, JsValue> {
    let frequency = Object::new();
    for (color, weight) in &result.color_frequency {
        Reflect::set(&frequency, &JsValue::from_str(&color.to_string()), &JsValue::from(*weight))?;
    }
    let out = Object::new();
    Reflect::set(&out, &"colors".into(), &to_js_array(&result.colors))?;
    Reflect::set(&out, &"colorFrequency".into(), &frequency)?;
    Ok(out)
}

/// Drop near-grayscale and malformed colors. Non-string entries are ignored.
#[wasm_bindgen(js_name = filterBrandColors)]
pub fn filter_brand_colors_js(colors: Array) -> Array {
    to_js_array(&filter_brand_colors(&strings(&colors)))
}

/// Decode one image and return `{ dominant, palette }`.
#[wasm_bindgen(js_name = extractImageColors)]
pub fn extract_image_colors_js(
    input: Vec<u8>,
    palette_size: usize,
    quality: usize,
) -> Result<Object, JsValue> {
    let opts = QuantizeOptions {
        palette_size,
        quality,
    };
    opts.validate().map_err(|e| JsValue::from_str(&e.to_string()))?;

    let img = image::load_from_memory(&input)
        .map_err(|e| JsValue::from_str(&format!("Unable to decode image: {e}")))?;
    let colors = extract_image_colors(&img, opts).map_err(|e| JsValue::from_str(&e.to_string()))?;
    image_colors_to_js(&colors)
}

/// Rank per-image `{ dominant, palette }` results into `{ colors, colorFrequency }`.
#[wasm_bindgen(js_name = rankColors)]
pub fn rank_colors_js(images: Array) -> Result<Object, JsValue> {
    let images = images
        .iter()
        .map(|v| image_colors_from_js(&v))
        .collect::<Result<Vec<_>, _>>()?;
    extraction_to_js(&rank_colors(&images))
}

