//! Prayers made of titled sub-prayers

use crate::fonts::FontRole;
use crate::layout::context::DrawingContext;
use crate::layout::text_block::ensure_space_and_draw;
use crate::models::prayer::SubPrayer;
use crate::renderers::chrome::full_width_block;
use crate::renderers::{draw_content, trailing_gap};

pub fn draw_sub_prayers(ctx: &mut DrawingContext, children: &[SubPrayer]) {
    for child in children {
        ctx.y -= ctx.config.vertical_spacing.after_part_group;

        let block = full_width_block(
            ctx,
            &child.title,
            FontRole::EnglishBold,
            ctx.config.font_sizes.prayer_part_english,
            ctx.config.line_spacing.prayer_title,
            ctx.config.colors.default_text,
        );
        ensure_space_and_draw(ctx, &block, "Sub-prayer title");
        ctx.y -= ctx.config.vertical_spacing.after_prayer_text;

        if let Some(content) = &child.content {
            draw_content(ctx, content);
            ctx.y -= trailing_gap(ctx, content);
        }
    }
}
