//! WASM bindings for the nestcss compiler.
//!
//! Exposes `toCSSText()` to JavaScript via wasm-bindgen. The result is a plain
//! CSS string ready to be inserted into a `<style>` element. Shape errors are
//! thrown.

use wasm_bindgen::prelude::*;

/// Compile a plain JS style object to CSS text.
///
/// Keys are read in `Object.entries` order. Strings and numbers are
/// properties, objects are nested selectors. Anything else throws.
#[wasm_bindgen(js_name = toCSSText)]
pub fn to_css_text(tree: JsValue) -> Result<String, JsError> {
    let value: serde_json::Value =
        serde_wasm_bindgen::from_value(tree).map_err(|e| JsError::new(&e.to_string()))?;
    compile_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Compile a JSON style tree to CSS text.
#[wasm_bindgen(js_name = toCSSTextFromJson)]
pub fn to_css_text_from_json(source: &str) -> Result<String, JsError> {
    compile_json(source).map_err(|e| JsError::new(&e.to_string()))
}

/// Get the compiler version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn compile_value(value: serde_json::Value) -> Result<String, nestcss_tree::TreeError> {
    let tree = nestcss_tree::from_json_value(value)?;
    Ok(nestcss_codegen::to_css_text(&tree))
}

fn compile_json(source: &str) -> Result<String, nestcss_tree::TreeError> {
    let tree = nestcss_tree::from_json(source)?;
    Ok(nestcss_codegen::to_css_text(&tree))
}
