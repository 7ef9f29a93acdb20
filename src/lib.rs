//! Siddur layout core
//!
//! Typesets bilingual (Hebrew/English) prayer books into a page-indexed
//! display list: multi-column mixed-direction text flow, pagination, color
//! mapping of phrases across languages and sentence-level notation. The
//! same core runs natively and as a WASM module behind the JavaScript
//! front end.

pub mod api;
pub mod document;
pub mod error;
pub mod fonts;
pub mod layout;
pub mod mapping;
pub mod models;
pub mod renderers;

// Re-export commonly used types
pub use document::{layout_book, Book, Section, Service};
pub use error::{LayoutError, Result};
pub use fonts::{FontMetrics, FontRole, FontSet, GlyphWidthTable, WidthTables};
pub use layout::display_list::{DisplayList, DrawCommand, Page, Point};
pub use models::*;
pub use renderers::{draw_prayer, layout_prayers};

#[cfg(all(target_arch = "wasm32", feature = "console_log", feature = "console_error_panic_hook"))]
use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[cfg(all(target_arch = "wasm32", feature = "console_log", feature = "console_error_panic_hook"))]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        return;
    }

    log::info!("Siddur layout WASM module initialized");
}
