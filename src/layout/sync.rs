//! Multi-column synchronization
//!
//! Columns are stored in an arena and addressed by `ColumnId`. After a
//! column finishes its part of a phrase, `synchronize` moves every column
//! that is behind the furthest page onto that page, at its top margin.
//! Once any column overflows, all columns continue on the same page.

use crate::layout::column::Column;
use crate::layout::context::DrawingContext;

/// Handle to a column in a `ColumnArena`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColumnId(usize);

/// Owned column states for one multi-column prayer
#[derive(Clone, Debug, Default)]
pub struct ColumnArena {
    columns: Vec<Column>,
}

impl ColumnArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: Column) -> ColumnId {
        self.columns.push(column);
        ColumnId(self.columns.len() - 1)
    }

    pub fn column(&self, id: ColumnId) -> &Column {
        &self.columns[id.0]
    }

    pub fn column_mut(&mut self, id: ColumnId) -> &mut Column {
        &mut self.columns[id.0]
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    pub fn max_page_index(&self) -> usize {
        self.columns
            .iter()
            .map(|c| c.cursor.page_index)
            .max()
            .unwrap_or(0)
    }

    pub fn is_synchronized(&self) -> bool {
        let target = self.max_page_index();
        self.columns.iter().all(|c| c.cursor.page_index == target)
    }

    /// Advance lagging columns to the furthest page
    ///
    /// Returns the number of columns that moved.
    pub fn synchronize(&mut self, ctx: &mut DrawingContext) -> usize {
        let target = self.max_page_index();
        let mut moved = 0;
        for column in self.columns.iter_mut() {
            if column.cursor.page_index < target {
                log::debug!(
                    "Column at x={} follows its sibling from page {} to {}",
                    column.bounds.start,
                    column.cursor.page_index + 1,
                    target + 1
                );
                column.jump_to_page(ctx, target);
                moved += 1;
            }
        }
        moved
    }

    /// Lowest baseline among the columns on the furthest page
    pub fn lowest_y(&self) -> Option<f32> {
        let target = self.max_page_index();
        self.columns
            .iter()
            .filter(|c| c.cursor.page_index == target)
            .map(|c| c.cursor.y)
            .reduce(f32::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::{FontRole, FontSet, GlyphWidthTable};
    use crate::layout::column::{ColumnBounds, ColumnStyle};
    use crate::models::config::{GenerationParams, LayoutConfig};

    #[test]
    fn test_lagging_column_jumps_to_top_of_furthest_page() {
        let fonts = FontSet::uniform(GlyphWidthTable::fixed(0.5));
        let config = LayoutConfig::default();
        let params = GenerationParams::default();
        let mut ctx = DrawingContext::new(&fonts, &config, &params);

        let style = ColumnStyle::new(FontRole::English, 12.0, 16.0);
        let mut arena = ColumnArena::new();
        let english = arena.push(Column::new(ColumnBounds::ltr(50.0, 296.0), style, 0, 300.0));
        let hebrew = arena.push(Column::new(ColumnBounds::rtl(316.0, 562.0), style, 0, 300.0));

        arena.column_mut(english).cursor.page_index = 2;
        ctx.ensure_page(2);

        assert_eq!(arena.synchronize(&mut ctx), 1);
        assert!(arena.is_synchronized());
        let cursor = arena.column(hebrew).cursor;
        assert_eq!(cursor.page_index, 2);
        assert_eq!(cursor.y, ctx.top_y());
        assert_eq!(cursor.x, 562.0);
    }

    #[test]
    #[should_panic(expected = "cannot move back")]
    fn test_moving_a_column_backwards_panics() {
        let fonts = FontSet::uniform(GlyphWidthTable::fixed(0.5));
        let config = LayoutConfig::default();
        let params = GenerationParams::default();
        let mut ctx = DrawingContext::new(&fonts, &config, &params);
        let style = ColumnStyle::new(FontRole::English, 12.0, 16.0);
        let mut column = Column::new(ColumnBounds::ltr(50.0, 296.0), style, 3, 300.0);
        column.jump_to_page(&mut ctx, 1);
    }
}
