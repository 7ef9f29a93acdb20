//! Font measurement seam
//!
//! The layout core never touches font files. It only asks "how wide is this
//! text at this size" through `FontMetrics`. The host (a PDF writer on the
//! JS side, or a test) supplies one metrics object per `FontRole`.
//!
//! `GlyphWidthTable` is the serializable implementation: per-character
//! advances in em units measured once by the host and shipped across the
//! wasm boundary, so layout stays synchronous.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Text measurement capability for one font
pub trait FontMetrics {
    /// Advance width of `text` at `size` points
    fn width_of_text_at_size(&self, text: &str, size: f32) -> f32;

    /// Line height of the font at `size` points
    fn height_at_size(&self, size: f32) -> f32 {
        size
    }
}

/// Which font a draw command uses
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum FontRole {
    English,
    EnglishBold,
    Hebrew,
}

/// Per-character advance table
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct GlyphWidthTable {
    /// Advance per character, in em units
    pub advances: HashMap<char, f32>,
    /// Advance for characters missing from `advances`
    pub default_advance: f32,
    /// Ascent + descent in em units
    pub line_height: f32,
}

impl Default for GlyphWidthTable {
    fn default() -> Self {
        Self {
            advances: HashMap::new(),
            default_advance: 0.5,
            line_height: 1.15,
        }
    }
}

impl GlyphWidthTable {
    /// Every character advances by `advance` em
    pub fn fixed(advance: f32) -> Self {
        Self {
            default_advance: advance,
            ..Default::default()
        }
    }

    pub fn with_advance(mut self, ch: char, advance: f32) -> Self {
        self.advances.insert(ch, advance);
        self
    }

    fn advance(&self, ch: char) -> f32 {
        self.advances.get(&ch).copied().unwrap_or(self.default_advance)
    }
}

impl FontMetrics for GlyphWidthTable {
    fn width_of_text_at_size(&self, text: &str, size: f32) -> f32 {
        text.chars().map(|ch| self.advance(ch)).sum::<f32>() * size
    }

    fn height_at_size(&self, size: f32) -> f32 {
        self.line_height * size
    }
}

/// Width tables for every role, as shipped by the host
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct WidthTables {
    pub english: GlyphWidthTable,
    /// Falls back to `english` when absent
    pub english_bold: Option<GlyphWidthTable>,
    pub hebrew: GlyphWidthTable,
}

/// One metrics object per font role
pub struct FontSet {
    english: Box<dyn FontMetrics>,
    english_bold: Box<dyn FontMetrics>,
    hebrew: Box<dyn FontMetrics>,
}

impl FontSet {
    pub fn new(
        english: Box<dyn FontMetrics>,
        english_bold: Box<dyn FontMetrics>,
        hebrew: Box<dyn FontMetrics>,
    ) -> Self {
        Self {
            english,
            english_bold,
            hebrew,
        }
    }

    /// Same table for every role
    pub fn uniform(table: GlyphWidthTable) -> Self {
        Self::new(
            Box::new(table.clone()),
            Box::new(table.clone()),
            Box::new(table),
        )
    }

    pub fn from_tables(tables: WidthTables) -> Self {
        let bold = tables.english_bold.unwrap_or_else(|| tables.english.clone());
        Self::new(
            Box::new(tables.english),
            Box::new(bold),
            Box::new(tables.hebrew),
        )
    }

    pub fn get(&self, role: FontRole) -> &dyn FontMetrics {
        match role {
            FontRole::English => self.english.as_ref(),
            FontRole::EnglishBold => self.english_bold.as_ref(),
            FontRole::Hebrew => self.hebrew.as_ref(),
        }
    }

    pub fn width(&self, role: FontRole, text: &str, size: f32) -> f32 {
        self.get(role).width_of_text_at_size(text, size)
    }

    pub fn height(&self, role: FontRole, size: f32) -> f32 {
        self.get(role).height_at_size(size)
    }
}

impl std::fmt::Debug for FontSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSet").finish_non_exhaustive()
    }
}
