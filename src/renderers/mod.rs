//! Prayer renderers
//!
//! `draw_prayer` draws the chrome (title, introduction/instruction, source)
//! and dispatches on the prayer's `PrayerContent` variant, which was fixed
//! when the prayer was loaded.
//!
//! - `text_prayers`: simple, blessings and parts
//! - `word_mapped`: color-mapped phrases in 2 or 3 columns
//! - `sentence_mapped`: phrases grouped into sentences with `ts` marks
//! - `nested`: titled sub-prayers, each dispatched recursively
//! - `reading_guide`: legend for the phrase marks, drawn once per book

pub mod chrome;
pub mod geometry;
pub mod mapped;
pub mod nested;
pub mod reading_guide;
pub mod sentence_mapped;
pub mod text_prayers;
pub mod word_mapped;

use crate::fonts::FontSet;
use crate::layout::context::DrawingContext;
use crate::layout::display_list::DisplayList;
use crate::models::config::{GenerationParams, LayoutConfig};
use crate::models::prayer::{Prayer, PrayerContent};

/// Draw one prayer at the shared cursor
pub fn draw_prayer(ctx: &mut DrawingContext, prayer: &Prayer) {
    log::debug!("Starting prayer \"{}\" on page {}", prayer.title, ctx.page_index + 1);

    chrome::draw_prayer_title(ctx, prayer);
    chrome::draw_introduction_instruction(ctx, prayer.introduction.as_deref(), prayer.instruction.as_deref());

    draw_content(ctx, &prayer.content);
    chrome::draw_source(ctx, prayer.source.as_deref());
    ctx.y -= trailing_gap(ctx, &prayer.content);

    log::debug!("Finished prayer \"{}\" on page {}", prayer.title, ctx.page_index + 1);
}

/// Dispatch on the content variant
pub fn draw_content(ctx: &mut DrawingContext, content: &PrayerContent) {
    match content {
        PrayerContent::Simple { english, hebrew } => text_prayers::draw_simple(ctx, english, hebrew),
        PrayerContent::Blessings(blessings) => text_prayers::draw_blessings(ctx, blessings),
        PrayerContent::Parts(parts) => text_prayers::draw_parts(ctx, parts),
        PrayerContent::WordMapped(mapping) => word_mapped::draw_word_mapped(ctx, mapping),
        PrayerContent::SentenceMapped(mapping) => sentence_mapped::draw_sentence_mapped(ctx, mapping),
        PrayerContent::Nested(children) => nested::draw_sub_prayers(ctx, children),
    }
}

/// Space after a prayer's content; list renderers already space their groups
pub fn trailing_gap(ctx: &DrawingContext, content: &PrayerContent) -> f32 {
    match content {
        PrayerContent::Blessings(_) | PrayerContent::Parts(_) | PrayerContent::Nested(_) => 0.0,
        _ => ctx.config.vertical_spacing.after_prayer_text,
    }
}

/// Lay out prayers in order on fresh pages
pub fn layout_prayers(prayers: &[Prayer], config: &LayoutConfig, params: &GenerationParams, fonts: &FontSet) -> DisplayList {
    let mut ctx = DrawingContext::new(fonts, config, params);
    for prayer in prayers {
        draw_prayer(&mut ctx, prayer);
    }
    ctx.into_display_list()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::GlyphWidthTable;
    use crate::models::prayer::WordMapping;

    #[test]
    fn test_title_then_content() {
        let fonts = FontSet::uniform(GlyphWidthTable::fixed(0.5));
        let config = LayoutConfig::default();
        let params = GenerationParams::default();
        let mut prayer = Prayer::new(
            "Modeh Ani",
            PrayerContent::Simple {
                english: "I thank You".to_string(),
                hebrew: "מודה אני".to_string(),
            },
        );
        prayer.source = Some("Talmud".to_string());

        let list = layout_prayers(&[prayer], &config, &params, &fonts);
        let texts: Vec<&str> = list.pages[0].texts().collect();
        assert_eq!(texts, vec!["Modeh Ani", "I thank You", "מודה אני", "Source: Talmud"]);
    }

    #[test]
    fn test_nested_titles_precede_children() {
        let fonts = FontSet::uniform(GlyphWidthTable::fixed(0.5));
        let config = LayoutConfig::default();
        let params = GenerationParams::default();
        let prayer = Prayer::new(
            "Parent",
            PrayerContent::Nested(vec![
                crate::models::prayer::SubPrayer {
                    title: "Child".to_string(),
                    content: Some(PrayerContent::WordMapped(WordMapping::from_entries(vec![
                        crate::models::prayer::MappingEntry::new("א", "A"),
                    ]))),
                },
                crate::models::prayer::SubPrayer {
                    title: "Empty".to_string(),
                    content: None,
                },
            ]),
        );

        let list = layout_prayers(&[prayer], &config, &params, &fonts);
        let texts: Vec<&str> = list.pages[0].texts().collect();
        assert_eq!(texts, vec!["Parent", "Child", "A", "r1*", "א", "r1*", "Empty"]);
    }
}
