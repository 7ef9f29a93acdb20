//! Color-mapped word-by-word prayers (two or three columns)
//!
//! Each phrase is drawn in its palette color in every column. Marked
//! phrases (per interval/start index) get a bracket underline and the
//! cycle label: once per cycle after the English, every time after the
//! Hebrew and transliteration.

use crate::layout::context::DrawingContext;
use crate::mapping::cycle::CyclePolicy;
use crate::models::prayer::WordMapping;
use crate::renderers::mapped::{MappedColumns, PhraseDraw};

pub fn draw_word_mapped(ctx: &mut DrawingContext, mapping: &WordMapping) {
    let (config, params) = (ctx.config, ctx.params);
    let policy = CyclePolicy::from_config(config, params);
    let mut walker = policy.walker();

    let mut columns = MappedColumns::open(ctx, mapping.has_transliteration());
    log::debug!(
        "Word-mapped prayer: {} phrases in {} columns",
        mapping.len(),
        columns.column_count()
    );

    for (ordinal, entry) in mapping.iter().enumerate() {
        let marks = walker.next_marks(ordinal);
        let draw = PhraseDraw {
            color: marks.color,
            underline: marks.underline,
            english_mark: marks.english_label.as_deref(),
            column_mark: marks.column_label.as_deref(),
        };
        columns.draw_phrase(ctx, entry, &draw);
    }

    columns.close(ctx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::{FontSet, GlyphWidthTable};
    use crate::models::config::{GenerationParams, LayoutConfig};
    use crate::models::prayer::MappingEntry;

    #[test]
    fn test_labels_follow_text() {
        let fonts = FontSet::uniform(GlyphWidthTable::fixed(0.5));
        let config = LayoutConfig::default();
        let params = GenerationParams::default();
        let mut ctx = DrawingContext::new(&fonts, &config, &params);

        let mapping = WordMapping::from_entries(vec![
            MappingEntry::new("ברוך", "Blessed"),
            MappingEntry::new("אתה", "are You"),
        ]);
        draw_word_mapped(&mut ctx, &mapping);

        let texts: Vec<&str> = ctx.pages()[0].texts().collect();
        assert_eq!(texts, vec!["Blessed", "r1*", "ברוך", "r1*", "are", "You", "אתה", "o1"]);
    }
}
