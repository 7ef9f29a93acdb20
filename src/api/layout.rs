//! Layout entry points
//!
//! Inputs and the returned display list are JSON strings. `configJson`,
//! `paramsJson` and `widthTablesJson` may be empty to use the defaults.

use crate::api::helpers::{load_config, load_fonts, load_params, to_js_error, to_json};
use crate::document::{self, Book};
use crate::error::Result;
use crate::models::prayer::Prayer;
use crate::renderers::layout_prayers;
use wasm_bindgen::prelude::*;

/// Lay out a whole book and return the display list as JSON
pub fn layout_book_json(
    book_json: &str,
    config_json: Option<&str>,
    params_json: &str,
    width_tables_json: &str,
) -> Result<String> {
    let config = load_config(config_json)?;
    let params = load_params(params_json)?;
    let fonts = load_fonts(width_tables_json)?;
    let book = Book::from_json_str(book_json, params.style)?;

    let list = document::layout_book(&book, &config, &params, &fonts);
    to_json(&list)
}

/// Lay out a single prayer on fresh pages and return the display list as JSON
///
/// Unlike a book, a lone prayer with no recognizable structure is an error.
pub fn layout_prayer_json(
    prayer_json: &str,
    config_json: Option<&str>,
    params_json: &str,
    width_tables_json: &str,
) -> Result<String> {
    let config = load_config(config_json)?;
    let params = load_params(params_json)?;
    let fonts = load_fonts(width_tables_json)?;
    let prayer = Prayer::from_json_str(prayer_json, params.style)?;

    let list = layout_prayers(std::slice::from_ref(&prayer), &config, &params, &fonts);
    to_json(&list)
}

#[wasm_bindgen(js_name = layoutBook)]
pub fn layout_book(
    book_json: &str,
    config_json: Option<String>,
    params_json: &str,
    width_tables_json: &str,
) -> std::result::Result<String, JsValue> {
    log::info!("layoutBook called ({} bytes)", book_json.len());
    layout_book_json(book_json, config_json.as_deref(), params_json, width_tables_json)
        .map_err(|e| to_js_error("layoutBook failed", e))
}

#[wasm_bindgen(js_name = layoutPrayer)]
pub fn layout_prayer(
    prayer_json: &str,
    config_json: Option<String>,
    params_json: &str,
    width_tables_json: &str,
) -> std::result::Result<String, JsValue> {
    layout_prayer_json(prayer_json, config_json.as_deref(), params_json, width_tables_json)
        .map_err(|e| to_js_error("layoutPrayer failed", e))
}
