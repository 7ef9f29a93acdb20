//! Column geometry for two- and three-column prayers

use crate::fonts::FontRole;
use crate::layout::column::{ColumnBounds, ColumnStyle};
use crate::layout::context::DrawingContext;

/// Width of each half in two-column flows
pub fn half_column_width(ctx: &DrawingContext) -> f32 {
    ctx.width / 2.0 - ctx.margin - ctx.config.layout.hebrew_column_x_offset
}

/// English (LTR) and Hebrew (RTL) halves of the page
pub fn two_columns(ctx: &DrawingContext) -> (ColumnBounds, ColumnBounds) {
    let column_width = half_column_width(ctx);
    let english = ColumnBounds::ltr(ctx.margin, ctx.margin + column_width);
    let hebrew = ColumnBounds::rtl(
        ctx.width / 2.0 + ctx.config.layout.hebrew_column_x_offset,
        ctx.width - ctx.margin,
    );
    (english, hebrew)
}

/// English, transliteration (both LTR) and Hebrew (RTL) thirds
pub fn three_columns(ctx: &DrawingContext) -> (ColumnBounds, ColumnBounds, ColumnBounds) {
    let gutter = ctx.config.layout.column_gutter;
    let width = (ctx.width - 2.0 * ctx.margin - 2.0 * gutter) / 3.0;

    let english_start = ctx.margin;
    let translit_start = english_start + width + gutter;
    let hebrew_start = translit_start + width + gutter;

    (
        ColumnBounds::ltr(english_start, english_start + width),
        ColumnBounds::ltr(translit_start, translit_start + width),
        ColumnBounds::rtl(hebrew_start, ctx.width - ctx.margin),
    )
}

/// Styles for mapped prayers, scaled by the font size multiplier
pub struct MappedStyles {
    pub english: ColumnStyle,
    pub transliteration: ColumnStyle,
    pub hebrew: ColumnStyle,
}

impl MappedStyles {
    pub fn for_context(ctx: &DrawingContext) -> Self {
        let scale = ctx.params.font_size_multiplier;
        let sizes = &ctx.config.font_sizes;
        let spacing = &ctx.config.line_spacing;

        let english = ColumnStyle::new(
            FontRole::English,
            sizes.blessing_english * scale,
            spacing.default_english_prayer * scale,
        );
        Self {
            english,
            transliteration: english,
            hebrew: ColumnStyle::new(
                FontRole::Hebrew,
                sizes.blessing_hebrew * scale,
                spacing.default_hebrew_prayer * scale,
            ),
        }
    }
}
