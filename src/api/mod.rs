//! JavaScript-facing API
//!
//! - `helpers`: JSON parsing of the optional inputs and error conversion
//! - `layout`: book and single-prayer layout entry points
//!
//! Every wasm entry point is a thin wrapper over a native function that
//! returns `crate::error::Result<String>`, so the whole surface is testable
//! without a JavaScript host.

pub mod helpers;
pub mod layout;

pub use layout::{layout_book, layout_book_json, layout_prayer, layout_prayer_json};
