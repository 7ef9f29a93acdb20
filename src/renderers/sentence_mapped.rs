//! Sentence-mapped prayers
//!
//! Phrases are grouped into sentences first. Every phrase is underlined in
//! its color (colors restart with each sentence) and carries a `ts` mark:
//! the English only on the sentence's first phrase, the Hebrew and
//! transliteration on every phrase. In monochrome mode each Hebrew line also
//! gets a margin mark listing the phrase range it holds.

use crate::layout::context::DrawingContext;
use crate::mapping::notation::{phrase_notation, MarginIndex};
use crate::mapping::sentences::group_mappings_by_sentence;
use crate::models::color::Rgb;
use crate::models::prayer::{MappingEntry, WordMapping};
use crate::renderers::mapped::{MappedColumns, PhraseDraw};

/// Gap between the Hebrew column and the margin index
const MARGIN_INDEX_GAP: f32 = 5.0;

pub fn draw_sentence_mapped(ctx: &mut DrawingContext, mapping: &WordMapping) {
    let (config, params) = (ctx.config, ctx.params);
    let palette = &config.colors.word_mapping_colors;
    let show_marks = params.show_word_mapping_subscripts;
    let margin_index = show_marks && params.print_black_and_white;

    let entries: Vec<&MappingEntry> = mapping.iter().collect();
    let sentences = group_mappings_by_sentence(mapping);

    let mut columns = MappedColumns::open(ctx, mapping.has_transliteration());
    let margin_x = columns.hebrew().bounds.end + MARGIN_INDEX_GAP;
    let english_size = columns.english().style.size;
    log::debug!(
        "Sentence-mapped prayer: {} phrases in {} sentences",
        entries.len(),
        sentences.len()
    );

    for sentence in &sentences {
        let mut index = MarginIndex::new();

        for (position, phrase) in sentence.phrases.iter().enumerate() {
            let entry = entries[phrase.entry_index];
            if entry.hebrew.split_whitespace().count() > 1 {
                log::warn!("Hebrew phrase contains multiple words: \"{}\"", entry.hebrew);
            }

            let color = palette
                .get(position % palette.len().max(1))
                .map(|c| ctx.mapping_color(c.rgb))
                .unwrap_or(Rgb::BLACK);
            let notation = show_marks.then(|| phrase_notation(phrase.phrase_index, sentence.display_number()));
            let draw = PhraseDraw {
                color,
                underline: true,
                english_mark: notation.as_deref().filter(|_| phrase.phrase_index == 1),
                column_mark: notation.as_deref(),
            };

            for line in columns.draw_phrase(ctx, entry, &draw) {
                index.record(line, phrase.phrase_index);
            }
        }

        if margin_index && !index.is_empty() {
            index.draw(ctx, margin_x, english_size, sentence.display_number());
        }
    }

    columns.close(ctx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::{FontSet, GlyphWidthTable};
    use crate::models::config::{GenerationParams, LayoutConfig};

    #[test]
    fn test_english_mark_only_on_first_phrase() {
        let fonts = FontSet::uniform(GlyphWidthTable::fixed(0.5));
        let config = LayoutConfig::default();
        let params = GenerationParams::default();
        let mut ctx = DrawingContext::new(&fonts, &config, &params);

        let mapping = WordMapping::from_entries(vec![
            MappingEntry::new("ברוך", "Blessed"),
            MappingEntry::new("אתה", "are You."),
        ]);
        draw_sentence_mapped(&mut ctx, &mapping);

        let texts: Vec<&str> = ctx.pages()[0].texts().collect();
        assert_eq!(
            texts,
            vec!["Blessed", "ts₁⁽¹⁾", "ברוך", "ts₁⁽¹⁾", "are", "You.", "אתה", "ts₂⁽¹⁾"]
        );
    }

    #[test]
    fn test_monochrome_adds_margin_index() {
        let fonts = FontSet::uniform(GlyphWidthTable::fixed(0.5));
        let config = LayoutConfig::default();
        let params = GenerationParams {
            print_black_and_white: true,
            ..Default::default()
        };
        let mut ctx = DrawingContext::new(&fonts, &config, &params);

        let mapping = WordMapping::from_entries(vec![
            MappingEntry::new("ברוך", "Blessed"),
            MappingEntry::new("אתה", "are You."),
        ]);
        draw_sentence_mapped(&mut ctx, &mapping);

        let texts: Vec<&str> = ctx.pages()[0].texts().collect();
        assert_eq!(texts.last(), Some(&"ts₁-₂⁽¹⁾"));
    }
}
