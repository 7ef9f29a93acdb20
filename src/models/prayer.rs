//! Prayer records and word mappings
//!
//! Raw prayer JSON is classified exactly once, at load time, into a
//! `PrayerContent` variant. Renderers match on the variant instead of
//! re-inspecting the record's fields.

use crate::error::{LayoutError, Result};
use crate::models::config::MappingStyle;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One phrase: a Hebrew/English/transliteration triple
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct MappingEntry {
    pub hebrew: String,
    pub english: String,
    #[serde(alias = "Transliteration", skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<String>,
}

impl MappingEntry {
    pub fn new(hebrew: &str, english: &str) -> Self {
        Self {
            hebrew: hebrew.to_string(),
            english: english.to_string(),
            transliteration: None,
        }
    }

    pub fn with_transliteration(mut self, transliteration: &str) -> Self {
        self.transliteration = Some(transliteration.to_string());
        self
    }

    /// Transliteration text, empty when absent
    pub fn transliteration_text(&self) -> &str {
        self.transliteration.as_deref().unwrap_or("")
    }

    fn from_json_value(key: &str, value: &Value) -> Self {
        let text = |names: &[&str]| -> Option<String> {
            names
                .iter()
                .find_map(|name| value.get(*name).and_then(Value::as_str))
                .map(str::to_string)
        };

        let english = text(&["english"]);
        let hebrew = text(&["hebrew"]);
        if english.is_none() || hebrew.is_none() {
            log::warn!(
                "Word mapping entry {} is missing {}; drawing it as empty",
                key,
                if english.is_none() { "english" } else { "hebrew" }
            );
        }

        Self {
            english: english.unwrap_or_default(),
            hebrew: hebrew.unwrap_or_default(),
            transliteration: text(&["transliteration", "Transliteration"])
                .filter(|t| !t.trim().is_empty()),
        }
    }
}

/// Ordered collection of phrases keyed by non-negative integer
///
/// Keys need not be contiguous; iteration is always in ascending key order.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct WordMapping {
    entries: BTreeMap<u64, MappingEntry>,
}

impl WordMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from entries in reading order, keyed 0..N
    pub fn from_entries(entries: impl IntoIterator<Item = MappingEntry>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .enumerate()
                .map(|(idx, entry)| (idx as u64, entry))
                .collect(),
        }
    }

    pub fn insert(&mut self, key: u64, entry: MappingEntry) {
        self.entries.insert(key, entry);
    }

    /// Parse a JSON object keyed by string-encoded integers
    ///
    /// Non-numeric keys are dropped from the reading order.
    pub fn from_json_value(value: &Value) -> Self {
        let mut mapping = WordMapping::new();
        let Some(object) = value.as_object() else {
            log::warn!("Word Mappings is not an object; treating it as empty");
            return mapping;
        };

        for (key, entry) in object {
            match key.trim().parse::<u64>() {
                Ok(numeric) => mapping.insert(numeric, MappingEntry::from_json_value(key, entry)),
                Err(_) => log::warn!("Skipping word mapping with non-numeric key {:?}", key),
            }
        }
        mapping
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in reading order
    pub fn iter(&self) -> impl Iterator<Item = &MappingEntry> {
        self.entries.values()
    }

    /// (key, entry) pairs in reading order
    pub fn keyed(&self) -> impl Iterator<Item = (u64, &MappingEntry)> {
        self.entries.iter().map(|(key, entry)| (*key, entry))
    }

    /// True iff any entry carries a transliteration
    pub fn has_transliteration(&self) -> bool {
        self.entries.values().any(|e| e.transliteration.is_some())
    }
}

impl<'de> Deserialize<'de> for WordMapping {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(WordMapping::from_json_value(&value))
    }
}

/// English/Hebrew pair used by blessings
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct TextPair {
    pub hebrew: String,
    pub english: String,
}

/// Kind of a prayer part
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PartKind {
    Blessing,
    #[default]
    Reading,
}

/// One part of a multi-part prayer
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct PrayerPart {
    #[serde(rename = "type")]
    pub kind: PartKind,
    pub hebrew: String,
    pub english: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// A titled child of a nested prayer
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SubPrayer {
    pub title: String,
    /// `None` when the sub-prayer only carries a title
    pub content: Option<PrayerContent>,
}

/// The structural shape of a prayer, decided once at load time
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", content = "data")]
pub enum PrayerContent {
    Simple { english: String, hebrew: String },
    Blessings(Vec<TextPair>),
    Parts(Vec<PrayerPart>),
    WordMapped(WordMapping),
    SentenceMapped(WordMapping),
    Nested(Vec<SubPrayer>),
}

impl PrayerContent {
    /// Classify a raw record
    ///
    /// Order: sub-prayers, word mappings, blessings, parts, flat text.
    pub fn classify(value: &Value, style: MappingStyle) -> Option<PrayerContent> {
        if let Some(subs) = value.get("sub-prayers") {
            let children = classify_sub_prayers(subs, style);
            if !children.is_empty() {
                return Some(PrayerContent::Nested(children));
            }
        }

        if let Some(raw) = value.get("Word Mappings") {
            let mapping = WordMapping::from_json_value(raw);
            if !mapping.is_empty() {
                return Some(match style {
                    MappingStyle::SentenceBasedMapping => PrayerContent::SentenceMapped(mapping),
                    _ => PrayerContent::WordMapped(mapping),
                });
            }
        }

        if let Some(Value::Array(items)) = value.get("blessings") {
            let blessings = items
                .iter()
                .filter_map(|item| serde_json::from_value::<TextPair>(item.clone()).ok())
                .collect();
            return Some(PrayerContent::Blessings(blessings));
        }

        if let Some(Value::Array(items)) = value.get("parts") {
            let parts = items
                .iter()
                .filter_map(|item| serde_json::from_value::<PrayerPart>(item.clone()).ok())
                .collect();
            return Some(PrayerContent::Parts(parts));
        }

        let english = value.get("english").and_then(Value::as_str);
        let hebrew = value.get("hebrew").and_then(Value::as_str);
        if english.is_some() || hebrew.is_some() {
            return Some(PrayerContent::Simple {
                english: english.unwrap_or_default().to_string(),
                hebrew: hebrew.unwrap_or_default().to_string(),
            });
        }

        None
    }

    /// Rough content height used to decide whether the title starts a new page
    pub fn estimated_height(&self) -> f32 {
        match self {
            PrayerContent::Blessings(items) => items.len() as f32 * 40.0,
            PrayerContent::Parts(items) => items.len() as f32 * 30.0,
            PrayerContent::Simple { english, .. } => english.chars().count() as f32 * 0.5,
            _ => 50.0,
        }
    }
}

fn classify_sub_prayers(value: &Value, style: MappingStyle) -> Vec<SubPrayer> {
    let items: Vec<&Value> = match value {
        Value::Object(map) => map.values().collect(),
        Value::Array(list) => list.iter().collect(),
        _ => Vec::new(),
    };

    items
        .into_iter()
        .map(|item| {
            let title = text_field(item, &["prayer-title", "title"]).unwrap_or_default();
            let content = PrayerContent::classify(item, style);
            if content.is_none() {
                log::debug!("Sub-prayer \"{}\" has no drawable content", title);
            }
            SubPrayer { title, content }
        })
        .collect()
}

fn text_field(value: &Value, names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| value.get(*name).and_then(Value::as_str))
        .map(str::to_string)
}

/// A classified prayer ready for rendering
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Prayer {
    pub title: String,
    pub prayer_id: Option<String>,
    pub source: Option<String>,
    pub introduction: Option<String>,
    pub instruction: Option<String>,
    pub content: PrayerContent,
}

impl Prayer {
    pub fn new(title: &str, content: PrayerContent) -> Self {
        Self {
            title: title.to_string(),
            prayer_id: None,
            source: None,
            introduction: None,
            instruction: None,
            content,
        }
    }

    /// Classify a raw prayer record
    pub fn from_json_value(value: &Value, style: MappingStyle) -> Result<Self> {
        let title = text_field(value, &["title", "prayer-title"]).unwrap_or_default();
        let content = PrayerContent::classify(value, style)
            .ok_or_else(|| LayoutError::UnrecognizedPrayerStructure { title: title.clone() })?;

        Ok(Self {
            title,
            prayer_id: text_field(value, &["prayer-id"]),
            source: text_field(value, &["source"]).filter(|s| !s.is_empty()),
            introduction: text_field(value, &["Introduction", "introduction"]),
            instruction: text_field(value, &["Instruction", "instructions"]),
            content,
        })
    }

    pub fn from_json_str(text: &str, style: MappingStyle) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json_value(&value, style)
    }
}
