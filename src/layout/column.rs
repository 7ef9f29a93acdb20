//! Column flow engine
//!
//! Draws a phrase word by word into one column, honoring the column's
//! writing direction. Each column owns its cursor `{x, y, page_index}`;
//! nothing else mutates it except `ColumnArena::synchronize`.
//!
//! Text is split on the literal space character. Space tokens advance the
//! cursor but are never drawn, so every non-empty word is emitted exactly
//! once no matter how many lines or pages it spans.

use crate::fonts::FontRole;
use crate::layout::context::DrawingContext;
use crate::layout::underline::{UnderlineSegment, UnderlineTracker};
use crate::mapping::notation::{notation_size, notation_y};
use crate::models::color::Rgb;
use serde::{Deserialize, Serialize};

/// Writing direction of a column
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

/// Horizontal extent and direction of a column
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ColumnBounds {
    pub start: f32,
    pub end: f32,
    pub direction: Direction,
}

impl ColumnBounds {
    pub fn ltr(start: f32, end: f32) -> Self {
        Self {
            start,
            end,
            direction: Direction::Ltr,
        }
    }

    pub fn rtl(start: f32, end: f32) -> Self {
        Self {
            start,
            end,
            direction: Direction::Rtl,
        }
    }

    pub fn width(&self) -> f32 {
        self.end - self.start
    }

    /// Where a new line begins: `start` for LTR, `end` for RTL
    pub fn line_start(&self) -> f32 {
        match self.direction {
            Direction::Ltr => self.start,
            Direction::Rtl => self.end,
        }
    }

    /// Can `width` more points be placed from `x` on this line
    pub fn fits(&self, x: f32, width: f32) -> bool {
        match self.direction {
            Direction::Ltr => x + width <= self.end,
            Direction::Rtl => x - width >= self.start,
        }
    }
}

/// Font, size and line height used by a column
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnStyle {
    pub font: FontRole,
    pub size: f32,
    pub line_height: f32,
}

impl ColumnStyle {
    pub fn new(font: FontRole, size: f32, line_height: f32) -> Self {
        Self {
            font,
            size,
            line_height,
        }
    }
}

/// Column position
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct ColumnCursor {
    pub x: f32,
    pub y: f32,
    pub page_index: usize,
}

/// A (page, baseline) pair identifying one line of a column
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct LineRef {
    pub page: usize,
    pub y: f32,
}

/// What drawing one phrase produced
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhraseLayout {
    /// Underline segments, empty unless tracking was requested
    pub segments: Vec<UnderlineSegment>,

    /// Lines that received at least one word, in drawing order
    pub lines: Vec<LineRef>,

    pub words_drawn: usize,
}

/// Split on the literal space, keeping one `" "` token per space
pub fn split_words(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for (idx, word) in text.split(' ').enumerate() {
        if idx > 0 {
            tokens.push(" ");
        }
        if !word.is_empty() {
            tokens.push(word);
        }
    }
    tokens
}

/// One column with its own cursor
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    pub bounds: ColumnBounds,
    pub style: ColumnStyle,
    pub cursor: ColumnCursor,
}

impl Column {
    /// Column positioned at the line start of `y` on `page_index`
    pub fn new(bounds: ColumnBounds, style: ColumnStyle, page_index: usize, y: f32) -> Self {
        Self {
            bounds,
            style,
            cursor: ColumnCursor {
                x: bounds.line_start(),
                y,
                page_index,
            },
        }
    }

    pub fn at_line_start(&self) -> bool {
        (self.cursor.x - self.bounds.line_start()).abs() <= f32::EPSILON
    }

    pub fn current_line(&self) -> LineRef {
        LineRef {
            page: self.cursor.page_index,
            y: self.cursor.y,
        }
    }

    fn advance(&mut self, width: f32) {
        match self.bounds.direction {
            Direction::Ltr => self.cursor.x += width,
            Direction::Rtl => self.cursor.x -= width,
        }
    }

    /// Move to the next line, continuing on the next page past the bottom margin
    pub fn wrap(&mut self, ctx: &mut DrawingContext) {
        self.cursor.x = self.bounds.line_start();
        self.cursor.y -= self.style.line_height;
        if self.cursor.y < ctx.bottom_margin {
            self.cursor.page_index += 1;
            ctx.ensure_page(self.cursor.page_index);
            self.cursor.y = ctx.top_y();
        }
    }

    /// Force this column onto `target`, at the top of the page
    ///
    /// Panics if `target` is behind the column: columns never move back.
    pub fn jump_to_page(&mut self, ctx: &mut DrawingContext, target: usize) {
        assert!(
            target >= self.cursor.page_index,
            "column on page {} cannot move back to page {}",
            self.cursor.page_index,
            target
        );
        if target == self.cursor.page_index {
            return;
        }
        ctx.ensure_page(target);
        self.cursor = ColumnCursor {
            x: self.bounds.line_start(),
            y: ctx.top_y(),
            page_index: target,
        };
    }

    /// Wrap first if `width` does not fit on the current line
    ///
    /// A line that is still empty never wraps, so an over-wide word is drawn
    /// overflowing instead of looping.
    fn make_room(&mut self, ctx: &mut DrawingContext, width: f32, tracker: Option<&mut UnderlineTracker>) -> bool {
        if self.bounds.fits(self.cursor.x, width) || self.at_line_start() {
            return false;
        }
        if let Some(tracker) = tracker {
            tracker.wrap_at(self.cursor.x);
            self.wrap(ctx);
            tracker.reopen(self.cursor.x, self.cursor.y, self.cursor.page_index);
        } else {
            self.wrap(ctx);
        }
        true
    }

    /// Draw one phrase's words, wrapping as needed
    pub fn draw_phrase(&mut self, ctx: &mut DrawingContext, text: &str, color: Rgb, underline: bool) -> PhraseLayout {
        let mut tracker = UnderlineTracker::begin(self.cursor.x, self.cursor.y, self.cursor.page_index);
        let mut layout = PhraseLayout::default();

        for token in split_words(text) {
            let width = ctx.fonts.width(self.style.font, token, self.style.size);
            let wrapped = self.make_room(ctx, width, Some(&mut tracker));

            if token == " " {
                // a space that caused a wrap is absorbed by the line break
                if !wrapped {
                    self.advance(width);
                }
                continue;
            }

            let x = match self.bounds.direction {
                Direction::Ltr => self.cursor.x,
                Direction::Rtl => self.cursor.x - width,
            };
            ctx.draw_text(
                self.cursor.page_index,
                token,
                x,
                self.cursor.y,
                self.style.font,
                self.style.size,
                color,
            );
            self.advance(width);
            layout.words_drawn += 1;

            let line = self.current_line();
            if layout.lines.last() != Some(&line) {
                layout.lines.push(line);
            }
        }

        if underline {
            layout.segments = tracker.finish(self.cursor.x);
        }
        layout
    }

    /// Draw a notation mark right after the text, at reduced size
    pub fn draw_mark(&mut self, ctx: &mut DrawingContext, mark: &str) {
        if mark.is_empty() {
            return;
        }
        let size = notation_size(self.style.size);
        let width = ctx.fonts.width(FontRole::English, mark, size);
        self.make_room(ctx, width, None);

        let x = match self.bounds.direction {
            Direction::Ltr => self.cursor.x,
            Direction::Rtl => self.cursor.x - width,
        };
        ctx.draw_text(
            self.cursor.page_index,
            mark,
            x,
            notation_y(self.cursor.y, self.style.size),
            FontRole::English,
            size,
            Rgb::BLACK,
        );
        self.advance(width);
    }

    /// Separate this phrase from the next with one space
    pub fn finish_phrase(&mut self, ctx: &mut DrawingContext) {
        let width = ctx.fonts.width(self.style.font, " ", self.style.size);
        if !self.make_room(ctx, width, None) {
            self.advance(width);
        }
    }
}
