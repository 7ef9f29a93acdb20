//! Data models for the prayer book layout core
//!
//! Prayer records and word mappings, the layout configuration, the
//! per-generation parameters, and palette colors.

pub mod color;
pub mod config;
pub mod prayer;

// Re-export commonly used types
pub use color::{PaletteColor, Rgb};
pub use config::{
    ColorScheme, ColumnLayout, FontSizes, GenerationParams, GuideElement, GuideElements,
    GuideExample, GuideLayout, LayoutConfig, LineSpacing, MappingStyle, MarginPreset, PdfMargins,
    ReadingGuideConfig, VerticalSpacing,
};
pub use prayer::{
    MappingEntry, PartKind, Prayer, PrayerContent, PrayerPart, SubPrayer, TextPair, WordMapping,
};
