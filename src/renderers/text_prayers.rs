//! Plain two-language prayers: simple text, blessing lists and parts
//!
//! English sits in the left half and Hebrew in the right half, right-aligned
//! to the Hebrew column's end. These flows share the context's single
//! vertical cursor.

use crate::fonts::FontRole;
use crate::layout::context::DrawingContext;
use crate::layout::text_block::{calculate_text_lines, TextBlock};
use crate::models::prayer::{PrayerPart, TextPair};
use crate::renderers::chrome::draw_source;
use crate::renderers::geometry::{half_column_width, two_columns};

struct PairStyle {
    english_size: f32,
    english_line_height: f32,
    hebrew_size: f32,
    hebrew_line_height: f32,
}

/// English and Hebrew blocks for one pair of texts
fn pair_blocks(ctx: &DrawingContext, english: &str, hebrew: &str, style: &PairStyle) -> (TextBlock, TextBlock) {
    let width = half_column_width(ctx);
    let (_, hebrew_bounds) = two_columns(ctx);
    let color = ctx.config.colors.default_text;

    let english_lines = calculate_text_lines(
        english,
        ctx.fonts.get(FontRole::English),
        style.english_size,
        width,
        style.english_line_height,
    );
    let hebrew_lines = calculate_text_lines(
        hebrew,
        ctx.fonts.get(FontRole::Hebrew),
        style.hebrew_size,
        width,
        style.hebrew_line_height,
    );

    (
        TextBlock::new(english_lines, FontRole::English, style.english_size, style.english_line_height, color),
        TextBlock::new(hebrew_lines, FontRole::Hebrew, style.hebrew_size, style.hebrew_line_height, color)
            .aligned_right_to(hebrew_bounds.end),
    )
}

/// Draw a pair as one unit, breaking to a new page first if it does not fit
///
/// Leaves the cursor on the lower of the two last baselines.
fn draw_pair_unit(ctx: &mut DrawingContext, english: &TextBlock, hebrew: &TextBlock, gap_after: f32) {
    let estimated = (english.lines.len() as f32 * english.line_height)
        .max(hebrew.lines.len() as f32 * hebrew.line_height)
        + gap_after;
    let threshold = ctx.bottom_margin + ctx.config.vertical_spacing.page_buffer;
    if ctx.y - estimated < threshold {
        ctx.add_page();
    }

    let (page_index, y) = (ctx.page_index, ctx.y);
    english.draw_at(ctx, page_index, y);
    hebrew.draw_at(ctx, page_index, y);
    ctx.y = y + english.last_offset().min(hebrew.last_offset());
}

/// Simple prayer, drawn row by row so long texts can span pages
pub fn draw_simple(ctx: &mut DrawingContext, english: &str, hebrew: &str) {
    let style = PairStyle {
        english_size: ctx.config.font_sizes.blessing_english,
        english_line_height: ctx.config.line_spacing.default_english_prayer,
        hebrew_size: ctx.config.font_sizes.blessing_hebrew,
        hebrew_line_height: ctx.config.line_spacing.default_hebrew_prayer,
    };
    let (english_block, hebrew_block) = pair_blocks(ctx, english, hebrew, &style);
    let rows = english_block.lines.len().max(hebrew_block.lines.len());
    let row_height = style.english_line_height.max(style.hebrew_line_height);

    for row in 0..rows {
        if row > 0 {
            ctx.y -= row_height;
        }
        if ctx.y < ctx.bottom_margin {
            ctx.add_page();
        }
        let (page_index, y) = (ctx.page_index, ctx.y);

        for block in [&english_block, &hebrew_block] {
            if let Some(line) = block.lines.get(row) {
                let x = match block.align_right_to {
                    Some(right) => right - ctx.fonts.width(block.font, &line.text, block.size),
                    None => ctx.margin,
                };
                ctx.draw_text(page_index, &line.text, x, y, block.font, block.size, block.color);
            }
        }
    }
}

pub fn draw_blessings(ctx: &mut DrawingContext, blessings: &[TextPair]) {
    let style = PairStyle {
        english_size: ctx.config.font_sizes.blessing_english,
        english_line_height: ctx.config.line_spacing.blessing_english,
        hebrew_size: ctx.config.font_sizes.blessing_hebrew,
        hebrew_line_height: ctx.config.line_spacing.blessing_hebrew,
    };
    let gap = ctx.config.vertical_spacing.after_blessing_group;

    for blessing in blessings {
        let (english, hebrew) = pair_blocks(ctx, &blessing.english, &blessing.hebrew, &style);
        draw_pair_unit(ctx, &english, &hebrew, gap);
        ctx.y -= gap;
    }
}

pub fn draw_parts(ctx: &mut DrawingContext, parts: &[PrayerPart]) {
    let style = PairStyle {
        english_size: ctx.config.font_sizes.prayer_part_english,
        english_line_height: ctx.config.line_spacing.prayer_part_english,
        hebrew_size: ctx.config.font_sizes.prayer_part_hebrew,
        hebrew_line_height: ctx.config.line_spacing.prayer_part_hebrew,
    };
    let gap = ctx.config.vertical_spacing.after_part_group;

    for part in parts {
        let (english, hebrew) = pair_blocks(ctx, &part.english, &part.hebrew, &style);
        draw_pair_unit(ctx, &english, &hebrew, gap);
        draw_source(ctx, part.source.as_deref());
        ctx.y -= gap;
    }
}
