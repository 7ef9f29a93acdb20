//! Prayer chrome: titles, introduction/instruction text, sources, dividers

use crate::fonts::FontRole;
use crate::layout::context::DrawingContext;
use crate::layout::display_list::Point;
use crate::layout::text_block::{calculate_text_lines, ensure_space_and_draw, TextBlock};
use crate::models::color::Rgb;
use crate::models::prayer::Prayer;

const INSTRUCTION_SIZE: f32 = 10.0;
const INSTRUCTION_LINE_HEIGHT: f32 = 13.0;
const DIVIDER_THICKNESS: f32 = 1.5;

/// Greedy-wrap `text` across the full text width
pub fn full_width_block(ctx: &DrawingContext, text: &str, font: FontRole, size: f32, line_height: f32, color: Rgb) -> TextBlock {
    let max_width = ctx.width - ctx.margin * 2.0;
    let lines = calculate_text_lines(text, ctx.fonts.get(font), size, max_width, line_height);
    TextBlock::new(lines, font, size, line_height, color)
}

/// Title, starting a new page first when the prayer is unlikely to fit
pub fn draw_prayer_title(ctx: &mut DrawingContext, prayer: &Prayer) {
    let sizes = &ctx.config.font_sizes;
    let spacing = &ctx.config.vertical_spacing;
    let title_height = ctx.fonts.height(FontRole::EnglishBold, sizes.prayer_title) + spacing.before_prayer_title;
    let threshold =
        ctx.bottom_margin + title_height + prayer.content.estimated_height() + spacing.page_buffer;
    // a fresh page is never skipped, however long the prayer
    if ctx.y < threshold && ctx.y < ctx.top_y() {
        log::debug!("Prayer \"{}\" starts on a new page", prayer.title);
        ctx.add_page();
    }

    let block = full_width_block(
        ctx,
        &prayer.title,
        FontRole::EnglishBold,
        sizes.prayer_title,
        ctx.config.line_spacing.prayer_title,
        ctx.config.colors.default_text,
    );
    ensure_space_and_draw(ctx, &block, "Prayer title");
    ctx.y -= ctx.config.vertical_spacing.before_prayer_title;
}

/// "Introduction: ..." and "Instruction: ..." lines, per the include toggles
pub fn draw_introduction_instruction(ctx: &mut DrawingContext, introduction: Option<&str>, instruction: Option<&str>) {
    let mut labelled = Vec::new();
    if ctx.params.include_introduction {
        if let Some(text) = introduction.filter(|t| !t.is_empty()) {
            labelled.push(format!("Introduction: {}", text));
        }
    }
    if ctx.params.include_instructions {
        if let Some(text) = instruction.filter(|t| !t.is_empty()) {
            labelled.push(format!("Instruction: {}", text));
        }
    }
    if labelled.is_empty() {
        return;
    }

    let between = ctx.config.vertical_spacing.between_instructions;
    for (idx, text) in labelled.iter().enumerate() {
        if idx > 0 {
            ctx.y -= between;
        }
        let block = full_width_block(
            ctx,
            text,
            FontRole::English,
            INSTRUCTION_SIZE,
            INSTRUCTION_LINE_HEIGHT,
            ctx.config.colors.instructions,
        );
        ensure_space_and_draw(ctx, &block, "Prayer instruction");
    }
    ctx.y -= ctx.config.vertical_spacing.after_prayer_instruction;
}

/// "Source: ..." in small gray text
pub fn draw_source(ctx: &mut DrawingContext, source: Option<&str>) {
    let Some(source) = source.filter(|s| !s.is_empty()) else {
        return;
    };

    ctx.y -= ctx.config.vertical_spacing.after_prayer_text / 2.0;
    let line_height = ctx.config.line_spacing.prayer_part_source;
    let block = full_width_block(
        ctx,
        &format!("Source: {}", source),
        FontRole::English,
        ctx.config.font_sizes.prayer_part_source,
        line_height,
        ctx.config.colors.source_text,
    );

    ctx.break_if_needed(block.lines.len() as f32 * line_height);
    let (page_index, y) = (ctx.page_index, ctx.y);
    block.draw_at(ctx, page_index, y);
    ctx.y += block.last_offset();
}

/// Full-width rule between services
pub fn draw_divider_line(ctx: &mut DrawingContext) {
    let gap = ctx.config.vertical_spacing.after_section_description;
    ctx.break_if_needed(gap * 2.0 + DIVIDER_THICKNESS);

    ctx.y -= gap;
    let (page_index, y) = (ctx.page_index, ctx.y);
    let (left, right) = (ctx.margin, ctx.width - ctx.margin);
    let color = ctx.config.colors.divider_line;
    ctx.draw_line(page_index, Point::new(left, y), Point::new(right, y), DIVIDER_THICKNESS, color);
    ctx.y -= DIVIDER_THICKNESS + gap;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::{FontSet, GlyphWidthTable};
    use crate::layout::display_list::DrawCommand;
    use crate::models::config::{GenerationParams, LayoutConfig};

    #[test]
    fn test_instruction_toggles() {
        let fonts = FontSet::uniform(GlyphWidthTable::fixed(0.5));
        let config = LayoutConfig::default();
        let params = GenerationParams {
            include_introduction: false,
            ..Default::default()
        };
        let mut ctx = DrawingContext::new(&fonts, &config, &params);
        draw_introduction_instruction(&mut ctx, Some("Read quietly"), Some("Stand"));

        let texts: Vec<&str> = ctx.pages()[0].texts().collect();
        assert_eq!(texts, vec!["Instruction: Stand"]);
    }

    #[test]
    fn test_source_is_prefixed() {
        let fonts = FontSet::uniform(GlyphWidthTable::fixed(0.5));
        let config = LayoutConfig::default();
        let params = GenerationParams::default();
        let mut ctx = DrawingContext::new(&fonts, &config, &params);
        draw_source(&mut ctx, Some("Psalms 145"));
        draw_source(&mut ctx, None);

        let texts: Vec<&str> = ctx.pages()[0].texts().collect();
        assert_eq!(texts, vec!["Source: Psalms 145"]);
    }

    #[test]
    fn test_divider_spans_text_width() {
        let fonts = FontSet::uniform(GlyphWidthTable::fixed(0.5));
        let config = LayoutConfig::default();
        let params = GenerationParams::default();
        let mut ctx = DrawingContext::new(&fonts, &config, &params);
        let start_y = ctx.y;
        draw_divider_line(&mut ctx);

        match &ctx.pages()[0].commands[0] {
            DrawCommand::Line { start, end, thickness, .. } => {
                assert_eq!(start.x, 50.0);
                assert_eq!(end.x, 562.0);
                assert_eq!(*thickness, 1.5);
            }
            other => panic!("expected a line, got {:?}", other),
        }
        assert_eq!(ctx.y, start_y - 21.5);
    }
}
