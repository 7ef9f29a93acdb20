//! Reading guide: a legend for the `ts` phrase marks
//!
//! Title and instruction text, then a row of worked examples. Each example
//! draws `ts₂⁽¹⁾` at display size, outlines the part it explains and puts a
//! one-line explanation underneath. Dashed rules separate the examples.

use crate::fonts::FontRole;
use crate::layout::context::DrawingContext;
use crate::layout::display_list::Point;
use crate::layout::text_block::ensure_space_and_draw;
use crate::models::color::Rgb;
use crate::models::config::GuideExample;
use crate::renderers::chrome::full_width_block;

const TS_SIZE: f32 = 30.0;
const SUB_SIZE: f32 = 15.0;
const SUPER_SIZE: f32 = 20.0;
const EXPLANATION_SIZE: f32 = 8.0;
const EXPLANATION_DROP: f32 = 25.0;
const BOX_THICKNESS: f32 = 1.5;
const SEPARATOR_REACH: f32 = 40.0;
const DASH: f32 = 5.0;

pub fn draw_reading_guide(ctx: &mut DrawingContext) {
    let config = ctx.config;
    let guide = &config.reading_guide;
    let black = Rgb::BLACK;

    let title = full_width_block(
        ctx,
        &guide.title,
        FontRole::EnglishBold,
        config.font_sizes.section_title,
        config.line_spacing.section_title,
        black,
    );
    ensure_space_and_draw(ctx, &title, "Reading guide title");
    ctx.y -= config.vertical_spacing.after_section_title_text;

    let instruction = full_width_block(
        ctx,
        &guide.instruction,
        FontRole::English,
        config.font_sizes.section_description,
        config.line_spacing.section_description,
        black,
    );
    ensure_space_and_draw(ctx, &instruction, "Reading guide instruction");
    ctx.y -= config.vertical_spacing.after_section_description;

    let layout = &guide.layout;
    ctx.break_if_needed(layout.example_height);

    let page_index = ctx.page_index;
    let origin_y = ctx.y - layout.base_y_offset;
    for (idx, example) in guide.examples.iter().enumerate() {
        let origin_x = ctx.margin + layout.spacing_x * idx as f32;
        draw_example(ctx, page_index, origin_x, origin_y, example);

        if idx + 1 < guide.examples.len() {
            let x = origin_x + layout.spacing_x / 2.0 + 10.0;
            draw_dashed_rule(ctx, page_index, x, origin_y + SEPARATOR_REACH, origin_y - SEPARATOR_REACH);
        }
    }

    ctx.y -= layout.example_height + 20.0;
    log::debug!("Reading guide drawn with {} examples", guide.examples.len());
}

fn draw_example(ctx: &mut DrawingContext, page_index: usize, x: f32, y: f32, example: &GuideExample) {
    let elements = &example.elements;
    let black = Rgb::BLACK;

    ctx.draw_text(page_index, "ts", x + elements.ts.x, y + elements.ts.y, FontRole::English, TS_SIZE, black);
    ctx.draw_text(page_index, "2", x + elements.sub.x, y + elements.sub.y, FontRole::English, SUB_SIZE, black);
    ctx.draw_text(page_index, "(1)", x + elements.sup.x, y + elements.sup.y, FontRole::EnglishBold, SUPER_SIZE, black);

    if let Some(outline) = elements.highlight {
        ctx.draw_rectangle(page_index, x + outline.x, y + outline.y, outline.w, outline.h, BOX_THICKNESS, black);
    }

    ctx.draw_text(page_index, &example.explanation, x, y - EXPLANATION_DROP, FontRole::English, EXPLANATION_SIZE, black);
}

/// Vertical rule drawn as 5pt dashes with 5pt gaps
fn draw_dashed_rule(ctx: &mut DrawingContext, page_index: usize, x: f32, top: f32, bottom: f32) {
    let count = ((top - bottom + DASH) / (DASH * 2.0)).floor() as usize;
    for idx in 0..count {
        let y = top - idx as f32 * DASH * 2.0;
        let end = (y - DASH).max(bottom);
        ctx.draw_line(page_index, Point::new(x, y), Point::new(x, end), 1.0, Rgb::BLACK);
    }
}
