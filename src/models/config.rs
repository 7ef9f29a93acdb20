//! Layout configuration and per-generation parameters
//!
//! `LayoutConfig` is loaded once per document and never mutated by the
//! layout core. `GenerationParams` carries the user's choices for one
//! generation run (style, subscripts, margins, monochrome).

use crate::error::{LayoutError, Result};
use crate::models::color::{PaletteColor, Rgb};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Page margins in points
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PdfMargins {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Default for PdfMargins {
    fn default() -> Self {
        Self {
            top: 50.0,
            bottom: 50.0,
            left: 50.0,
            right: 50.0,
        }
    }
}

/// Font sizes per text role
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FontSizes {
    pub prayer_title: f32,
    pub blessing_english: f32,
    pub blessing_hebrew: f32,
    pub prayer_part_english: f32,
    pub prayer_part_hebrew: f32,
    pub prayer_part_source: f32,
    pub section_title: f32,
    pub section_description: f32,
    pub service_heading: f32,
    pub instructions: f32,
    pub page_number: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            prayer_title: 16.0,
            blessing_english: 12.0,
            blessing_hebrew: 14.0,
            prayer_part_english: 12.0,
            prayer_part_hebrew: 14.0,
            prayer_part_source: 9.0,
            section_title: 20.0,
            section_description: 11.0,
            service_heading: 10.0,
            instructions: 10.0,
            page_number: 10.0,
        }
    }
}

/// Line heights per text role
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LineSpacing {
    pub default_english_prayer: f32,
    pub default_hebrew_prayer: f32,
    pub blessing_english: f32,
    pub blessing_hebrew: f32,
    pub prayer_part_english: f32,
    pub prayer_part_hebrew: f32,
    pub prayer_part_source: f32,
    pub prayer_title: f32,
    pub section_title: f32,
    pub section_description: f32,
    pub instructions: f32,
}

impl Default for LineSpacing {
    fn default() -> Self {
        Self {
            default_english_prayer: 16.0,
            default_hebrew_prayer: 18.0,
            blessing_english: 15.0,
            blessing_hebrew: 17.0,
            prayer_part_english: 15.0,
            prayer_part_hebrew: 17.0,
            prayer_part_source: 11.0,
            prayer_title: 20.0,
            section_title: 24.0,
            section_description: 14.0,
            instructions: 13.0,
        }
    }
}

/// Vertical gaps between blocks
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct VerticalSpacing {
    pub before_prayer_title: f32,
    pub after_prayer_text: f32,
    pub after_blessing_group: f32,
    pub after_part_group: f32,
    /// Extra room required below a block that must not be split
    pub page_buffer: f32,
    pub between_instructions: f32,
    pub after_prayer_instruction: f32,
    pub after_section_title_text: f32,
    pub after_section_description: f32,
}

impl Default for VerticalSpacing {
    fn default() -> Self {
        Self {
            before_prayer_title: 10.0,
            after_prayer_text: 15.0,
            after_blessing_group: 10.0,
            after_part_group: 10.0,
            page_buffer: 20.0,
            between_instructions: 5.0,
            after_prayer_instruction: 10.0,
            after_section_title_text: 8.0,
            after_section_description: 10.0,
        }
    }
}

/// Named colors used by the renderers
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorScheme {
    pub default_text: Rgb,
    pub source_text: Rgb,
    pub instructions: Rgb,
    pub section_title: Rgb,
    pub section_description: Rgb,
    pub divider_line: Rgb,
    pub service_heading: Rgb,
    pub word_mapping_colors: Vec<PaletteColor>,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            default_text: Rgb::BLACK,
            source_text: Rgb(0.4, 0.4, 0.4),
            instructions: Rgb(0.3, 0.3, 0.5),
            section_title: Rgb(0.1, 0.1, 0.3),
            section_description: Rgb(0.3, 0.3, 0.3),
            divider_line: Rgb(0.7, 0.7, 0.7),
            service_heading: Rgb(0.2, 0.2, 0.4),
            word_mapping_colors: vec![
                PaletteColor::new("red", Rgb(0.80, 0.10, 0.10)),
                PaletteColor::new("orange", Rgb(0.90, 0.50, 0.00)),
                PaletteColor::new("green", Rgb(0.10, 0.55, 0.15)),
                PaletteColor::new("blue", Rgb(0.10, 0.30, 0.80)),
                PaletteColor::new("purple", Rgb(0.50, 0.15, 0.65)),
                PaletteColor::new("magenta", Rgb(0.85, 0.10, 0.55)),
            ],
        }
    }
}

/// Column geometry knobs
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnLayout {
    pub hebrew_column_x_offset: f32,
    pub column_gutter: f32,
    pub section_title_length_threshold: usize,
    pub section_description_length_threshold: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            hebrew_column_x_offset: 10.0,
            column_gutter: 15.0,
            section_title_length_threshold: 40,
            section_description_length_threshold: 120,
        }
    }
}

/// Offset of one glyph (or box) from an example's origin
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(default)]
pub struct GuideElement {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl GuideElement {
    pub const fn at(x: f32, y: f32) -> Self {
        Self { x, y, w: 0.0, h: 0.0 }
    }

    pub const fn boxed(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Placement of the `ts`, subscript and superscript glyphs in one example
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct GuideElements {
    pub ts: GuideElement,
    pub sub: GuideElement,
    #[serde(rename = "super")]
    pub sup: GuideElement,
    /// Outline around the part the example explains
    #[serde(rename = "box")]
    pub highlight: Option<GuideElement>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct GuideExample {
    pub explanation: String,
    pub elements: GuideElements,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GuideLayout {
    pub example_height: f32,
    pub base_y_offset: f32,
    pub spacing_x: f32,
}

impl Default for GuideLayout {
    fn default() -> Self {
        Self {
            example_height: 90.0,
            base_y_offset: 40.0,
            spacing_x: 170.0,
        }
    }
}

/// Legend page explaining the `ts` phrase notation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ReadingGuideConfig {
    pub title: String,
    pub instruction: String,
    pub layout: GuideLayout,
    pub examples: Vec<GuideExample>,
}

impl Default for ReadingGuideConfig {
    fn default() -> Self {
        let ts = GuideElement::at(0.0, 0.0);
        let sub = GuideElement::at(27.0, -6.0);
        let sup = GuideElement::at(38.0, 14.0);
        let example = |explanation: &str, highlight: GuideElement| GuideExample {
            explanation: explanation.to_string(),
            elements: GuideElements {
                ts,
                sub,
                sup,
                highlight: Some(highlight),
            },
        };

        Self {
            title: "How to Read the Phrase Marks".to_string(),
            instruction: "Phrases that translate each other carry the same mark in every column. \
                          The subscript counts sentences and the superscript counts phrases within \
                          the sentence."
                .to_string(),
            layout: GuideLayout::default(),
            examples: vec![
                example("ts marks a translated phrase", GuideElement::boxed(-3.0, -6.0, 30.0, 30.0)),
                example("Subscript: sentence number", GuideElement::boxed(24.0, -10.0, 14.0, 18.0)),
                example("Superscript: phrase in sentence", GuideElement::boxed(35.0, 10.0, 32.0, 22.0)),
            ],
        }
    }
}

/// Complete layout configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub page_width: f32,
    pub page_height: f32,
    pub pdf_margins: PdfMargins,
    pub font_sizes: FontSizes,
    pub line_spacing: LineSpacing,
    pub vertical_spacing: VerticalSpacing,
    pub colors: ColorScheme,
    pub layout: ColumnLayout,
    pub reading_guide: ReadingGuideConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        // US Letter
        Self {
            page_width: 612.0,
            page_height: 792.0,
            pdf_margins: PdfMargins::default(),
            font_sizes: FontSizes::default(),
            line_spacing: LineSpacing::default(),
            vertical_spacing: VerticalSpacing::default(),
            colors: ColorScheme::default(),
            layout: ColumnLayout::default(),
            reading_guide: ReadingGuideConfig::default(),
        }
    }
}

impl LayoutConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: LayoutConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: LayoutConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.yaml`, `.yml` or `.json` file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&text),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text),
            other => Err(LayoutError::InvalidConfig(format!(
                "unsupported config extension: {:?}",
                other
            ))),
        }
    }

    /// Reject configurations the layout engine cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.colors.word_mapping_colors.is_empty() {
            return Err(LayoutError::InvalidConfig(
                "wordMappingColors must not be empty".to_string(),
            ));
        }
        if self.page_width <= 0.0 || self.page_height <= 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "page size must be positive, got {}x{}",
                self.page_width, self.page_height
            )));
        }
        let usable = self.page_height - self.pdf_margins.top - self.pdf_margins.bottom;
        if usable <= 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "margins leave no vertical room (top {}, bottom {})",
                self.pdf_margins.top, self.pdf_margins.bottom
            )));
        }
        Ok(())
    }
}

/// Layout style requested by the user
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MappingStyle {
    #[serde(rename = "all-transliterated")]
    AllTransliterated,
    #[serde(rename = "sentence based mapping")]
    SentenceBasedMapping,
    #[default]
    #[serde(other)]
    Recommended,
}

/// Page margin preset
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarginPreset {
    Tight,
    #[default]
    Normal,
    Wide,
}

/// Options for one generation run
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationParams {
    pub style: MappingStyle,
    /// Only every Nth phrase carries a subscript
    pub word_mapping_interval: usize,
    /// Phrases before this ordinal are never marked
    pub word_mapping_start_index: usize,
    pub show_word_mapping_subscripts: bool,
    pub font_size_multiplier: f32,
    pub page_margins: MarginPreset,
    pub print_black_and_white: bool,
    pub include_introduction: bool,
    pub include_instructions: bool,
    /// Draw the notation legend before the first service
    pub include_reading_guide: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            style: MappingStyle::Recommended,
            word_mapping_interval: 1,
            word_mapping_start_index: 0,
            show_word_mapping_subscripts: true,
            font_size_multiplier: 1.0,
            page_margins: MarginPreset::Normal,
            print_black_and_white: false,
            include_introduction: true,
            include_instructions: true,
            include_reading_guide: false,
        }
    }
}

impl GenerationParams {
    pub fn is_sentence_mapping(&self) -> bool {
        self.style == MappingStyle::SentenceBasedMapping
    }

    /// Interval clamped to at least 1
    pub fn interval(&self) -> usize {
        self.word_mapping_interval.max(1)
    }

    /// Horizontal margin for the selected preset
    pub fn horizontal_margin(&self, config: &LayoutConfig) -> f32 {
        let left = config.pdf_margins.left;
        match self.page_margins {
            MarginPreset::Tight => left * 0.5,
            MarginPreset::Normal => left,
            MarginPreset::Wide => left * 1.5,
        }
    }

    /// Top margin for the selected preset
    pub fn top_margin(&self, config: &LayoutConfig) -> f32 {
        match self.page_margins {
            MarginPreset::Normal => config.pdf_margins.top,
            MarginPreset::Tight | MarginPreset::Wide => self.horizontal_margin(config),
        }
    }
}
