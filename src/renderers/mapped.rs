//! Shared column machinery for word-mapped and sentence-mapped prayers
//!
//! One phrase is drawn column by column: English, then transliteration,
//! then Hebrew. The arena is synchronized after every column, so a column
//! never starts its part of a phrase on an earlier page than a sibling
//! already reached.

use crate::layout::column::{Column, LineRef};
use crate::layout::context::DrawingContext;
use crate::layout::sync::{ColumnArena, ColumnId};
use crate::layout::underline::draw_bracket_underlines;
use crate::models::color::Rgb;
use crate::models::prayer::MappingEntry;
use crate::renderers::geometry::{three_columns, two_columns, MappedStyles};

/// How one phrase is decorated
#[derive(Clone, Copy, Debug, Default)]
pub struct PhraseDraw<'m> {
    pub color: Rgb,
    pub underline: bool,
    /// Mark after the English text
    pub english_mark: Option<&'m str>,
    /// Mark after the Hebrew and transliteration text
    pub column_mark: Option<&'m str>,
}

/// English + Hebrew (+ transliteration) columns for one prayer
#[derive(Debug)]
pub struct MappedColumns {
    arena: ColumnArena,
    english: ColumnId,
    transliteration: Option<ColumnId>,
    hebrew: ColumnId,
}

impl MappedColumns {
    /// Open the columns at the shared cursor
    pub fn open(ctx: &mut DrawingContext, with_transliteration: bool) -> Self {
        ctx.break_if_needed(0.0);

        let styles = MappedStyles::for_context(ctx);
        let (page, y) = (ctx.page_index, ctx.y);
        let mut arena = ColumnArena::new();

        if with_transliteration {
            let (english, translit, hebrew) = three_columns(ctx);
            Self {
                english: arena.push(Column::new(english, styles.english, page, y)),
                transliteration: Some(arena.push(Column::new(translit, styles.transliteration, page, y))),
                hebrew: arena.push(Column::new(hebrew, styles.hebrew, page, y)),
                arena,
            }
        } else {
            let (english, hebrew) = two_columns(ctx);
            Self {
                english: arena.push(Column::new(english, styles.english, page, y)),
                transliteration: None,
                hebrew: arena.push(Column::new(hebrew, styles.hebrew, page, y)),
                arena,
            }
        }
    }

    pub fn column_count(&self) -> usize {
        self.arena.len()
    }

    pub fn english(&self) -> &Column {
        self.arena.column(self.english)
    }

    pub fn hebrew(&self) -> &Column {
        self.arena.column(self.hebrew)
    }

    fn draw_in(
        &mut self,
        ctx: &mut DrawingContext,
        id: ColumnId,
        text: &str,
        mark: Option<&str>,
        draw: &PhraseDraw,
    ) -> Vec<LineRef> {
        let column = self.arena.column_mut(id);
        let layout = column.draw_phrase(ctx, text, draw.color, draw.underline);
        if draw.underline {
            draw_bracket_underlines(ctx, &layout.segments, draw.color);
        }
        if let Some(mark) = mark {
            column.draw_mark(ctx, mark);
        }
        column.finish_phrase(ctx);

        self.arena.synchronize(ctx);
        layout.lines
    }

    /// Draw one phrase across all columns
    ///
    /// Returns the Hebrew lines the phrase touched.
    pub fn draw_phrase(&mut self, ctx: &mut DrawingContext, entry: &MappingEntry, draw: &PhraseDraw) -> Vec<LineRef> {
        self.draw_in(ctx, self.english, &entry.english, draw.english_mark, draw);
        if let Some(translit) = self.transliteration {
            self.draw_in(ctx, translit, entry.transliteration_text(), draw.column_mark, draw);
        }
        let hebrew_lines = self.draw_in(ctx, self.hebrew, &entry.hebrew, draw.column_mark, draw);

        debug_assert!(self.arena.is_synchronized());
        hebrew_lines
    }

    /// Hand the final position back to the shared cursor
    pub fn close(self, ctx: &mut DrawingContext) {
        let page = self.arena.max_page_index();
        let y = self.arena.lowest_y().unwrap_or(ctx.y);
        ctx.move_to(page, y);
    }
}
