//! Shared helpers for the wasm API
//!
//! Inputs arrive as JSON strings. An empty (or whitespace-only) string means
//! "use the defaults", so the host can omit any of the optional inputs.

use crate::error::{LayoutError, Result};
use crate::fonts::{FontSet, GlyphWidthTable, WidthTables};
use crate::models::config::{GenerationParams, LayoutConfig};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Parse `text`, falling back to `T::default()` when it is blank
pub fn parse_or_default<T: DeserializeOwned + Default>(text: &str) -> Result<T> {
    if text.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(serde_json::from_str(text)?)
}

/// Layout config from optional JSON overrides, validated
pub fn load_config(config_json: Option<&str>) -> Result<LayoutConfig> {
    let config = match config_json {
        Some(text) if !text.trim().is_empty() => LayoutConfig::from_json_str(text)?,
        _ => LayoutConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

pub fn load_params(params_json: &str) -> Result<GenerationParams> {
    parse_or_default(params_json)
}

/// Font set from measured width tables; blank input uses the built-in table
pub fn load_fonts(width_tables_json: &str) -> Result<FontSet> {
    if width_tables_json.trim().is_empty() {
        return Ok(FontSet::uniform(GlyphWidthTable::default()));
    }
    let tables: WidthTables = serde_json::from_str(width_tables_json)?;
    Ok(FontSet::from_tables(tables))
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Convert a layout error into a JavaScript exception value
pub fn to_js_error(context: &str, err: LayoutError) -> JsValue {
    let msg = format!("{}: {}", context, err);
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}
