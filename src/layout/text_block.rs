//! Block text flow for single-column content
//!
//! Titles, instructions, sources and the simple/blessing/part renderers lay
//! out whole blocks: break the text into lines greedily, then draw the lines
//! together, starting a new page first when the block would cross the
//! bottom margin.

use crate::fonts::{FontMetrics, FontRole};
use crate::layout::context::DrawingContext;
use crate::models::color::Rgb;

/// One laid-out line, offset downward from the block's first baseline
#[derive(Clone, Debug, PartialEq)]
pub struct TextLine {
    pub text: String,
    /// 0 for the first line, then `-line_height`, `-2*line_height`, ...
    pub y_offset: f32,
}

/// Greedy line breaking on spaces
///
/// A word wider than `max_width` gets a line of its own.
pub fn calculate_text_lines(
    text: &str,
    font: &dyn FontMetrics,
    size: f32,
    max_width: f32,
    line_height: f32,
) -> Vec<TextLine> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut y_offset = 0.0;

    for word in text.split(' ').filter(|w| !w.is_empty()) {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if !current.is_empty() && font.width_of_text_at_size(&candidate, size) > max_width {
            lines.push(TextLine {
                text: std::mem::take(&mut current),
                y_offset,
            });
            y_offset -= line_height;
            current = word.to_string();
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(TextLine {
            text: current,
            y_offset,
        });
    }
    lines
}

/// Lines plus the style they are drawn with
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    pub lines: Vec<TextLine>,
    pub font: FontRole,
    pub size: f32,
    pub line_height: f32,
    pub color: Rgb,
    /// Right-align every line to this x instead of starting at the margin
    pub align_right_to: Option<f32>,
}

impl TextBlock {
    pub fn new(lines: Vec<TextLine>, font: FontRole, size: f32, line_height: f32, color: Rgb) -> Self {
        Self {
            lines,
            font,
            size,
            line_height,
            color,
            align_right_to: None,
        }
    }

    pub fn aligned_right_to(mut self, x: f32) -> Self {
        self.align_right_to = Some(x);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Vertical space from the first baseline through one more line
    pub fn height(&self) -> f32 {
        match self.lines.last() {
            Some(last) => last.y_offset.abs() + self.line_height,
            None => 0.0,
        }
    }

    /// Offset of the last line's baseline
    pub fn last_offset(&self) -> f32 {
        self.lines.last().map(|l| l.y_offset).unwrap_or(0.0)
    }

    /// Draw at baseline `y` on `page_index`
    pub fn draw_at(&self, ctx: &mut DrawingContext, page_index: usize, y: f32) {
        for line in &self.lines {
            let x = match self.align_right_to {
                Some(right) => right - ctx.fonts.width(self.font, &line.text, self.size),
                None => ctx.margin,
            };
            ctx.draw_text(page_index, &line.text, x, y + line.y_offset, self.font, self.size, self.color);
        }
    }
}

/// Draw a block, breaking to a new page first if it would not fit
///
/// Leaves the shared cursor on the last line's baseline.
pub fn ensure_space_and_draw(ctx: &mut DrawingContext, block: &TextBlock, label: &str) {
    if block.is_empty() {
        return;
    }
    let buffer = ctx.config.vertical_spacing.page_buffer;
    if ctx.y - block.height() < ctx.bottom_margin + buffer {
        log::debug!("{} does not fit on page {}; starting a new page", label, ctx.page_index + 1);
        ctx.add_page();
    }
    let (page_index, y) = (ctx.page_index, ctx.y);
    block.draw_at(ctx, page_index, y);
    ctx.y += block.last_offset();
}
