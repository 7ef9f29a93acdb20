//! Drawing context and page manager
//!
//! `DrawingContext` owns the growing page collection and the shared vertical
//! cursor used by single-column flows. Multi-column flows keep their own
//! per-column cursors (see `column.rs`) and hand the final position back
//! here when a prayer is done.
//!
//! Pages are only ever appended. A column that runs past the bottom margin
//! asks for the next page index with `ensure_page`, which allocates pages
//! until that index exists.

use crate::fonts::{FontRole, FontSet};
use crate::layout::display_list::{DisplayList, DrawCommand, Page, Point};
use crate::models::color::Rgb;
use crate::models::config::{GenerationParams, LayoutConfig};

/// Mutable layout state for one generation call
#[derive(Debug)]
pub struct DrawingContext<'a> {
    pub fonts: &'a FontSet,
    pub config: &'a LayoutConfig,
    pub params: &'a GenerationParams,

    pages: Vec<Page>,

    /// Page the shared cursor is on
    pub page_index: usize,

    /// Shared vertical cursor (baseline of the next line)
    pub y: f32,

    pub width: f32,
    pub height: f32,

    /// Horizontal margin after the margin preset is applied
    pub margin: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,

    current_service: Option<String>,

    /// Service active when each page was allocated
    page_services: Vec<Option<String>>,
}

impl<'a> DrawingContext<'a> {
    /// Fresh context with one empty page and the cursor at the top margin
    pub fn new(fonts: &'a FontSet, config: &'a LayoutConfig, params: &'a GenerationParams) -> Self {
        let top_margin = params.top_margin(config);
        let mut ctx = Self {
            fonts,
            config,
            params,
            pages: Vec::new(),
            page_index: 0,
            y: config.page_height - top_margin,
            width: config.page_width,
            height: config.page_height,
            margin: params.horizontal_margin(config),
            top_margin,
            bottom_margin: config.pdf_margins.bottom,
            current_service: None,
            page_services: Vec::new(),
        };
        ctx.push_page();
        ctx
    }

    /// Baseline of the first line on a fresh page
    pub fn top_y(&self) -> f32 {
        self.height - self.top_margin
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    fn push_page(&mut self) -> usize {
        let index = self.pages.len();
        self.pages.push(Page::new(index));
        self.page_services.push(self.current_service.clone());
        log::debug!("Allocated page {}", index + 1);
        index
    }

    /// Move the shared cursor to the top of the page after its current one
    ///
    /// Reuses that page if a column flow already allocated it.
    pub fn add_page(&mut self) -> usize {
        let next = self.page_index + 1;
        self.ensure_page(next);
        self.page_index = next;
        self.y = self.top_y();
        next
    }

    /// Allocate pages until `index` exists
    pub fn ensure_page(&mut self, index: usize) {
        while self.pages.len() <= index {
            self.push_page();
        }
    }

    /// Break to a new page when `needed` points do not fit above the bottom margin
    ///
    /// Returns true when a page was added.
    pub fn break_if_needed(&mut self, needed: f32) -> bool {
        if self.y - needed < self.bottom_margin {
            self.add_page();
            true
        } else {
            false
        }
    }

    /// Move the shared cursor to a position reported by a column flow
    pub fn move_to(&mut self, page_index: usize, y: f32) {
        self.ensure_page(page_index);
        self.page_index = page_index;
        self.y = y;
    }

    /// Collapse a palette color to black in monochrome mode
    pub fn mapping_color(&self, color: Rgb) -> Rgb {
        if self.params.print_black_and_white {
            Rgb::BLACK
        } else {
            color
        }
    }

    pub fn push_command(&mut self, page_index: usize, command: DrawCommand) {
        self.ensure_page(page_index);
        self.pages[page_index].commands.push(command);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_text(
        &mut self,
        page_index: usize,
        text: &str,
        x: f32,
        y: f32,
        font: FontRole,
        size: f32,
        color: Rgb,
    ) {
        self.push_command(
            page_index,
            DrawCommand::Text {
                text: text.to_string(),
                x,
                y,
                font,
                size,
                color,
            },
        );
    }

    pub fn draw_line(&mut self, page_index: usize, start: Point, end: Point, thickness: f32, color: Rgb) {
        self.push_command(
            page_index,
            DrawCommand::Line {
                start,
                end,
                thickness,
                color,
            },
        );
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_rectangle(&mut self, page_index: usize, x: f32, y: f32, width: f32, height: f32, thickness: f32, color: Rgb) {
        self.push_command(
            page_index,
            DrawCommand::Rectangle {
                x,
                y,
                width,
                height,
                thickness,
                color,
            },
        );
    }

    /// Service name stamped on pages allocated from now on
    pub fn set_service(&mut self, name: &str) {
        self.current_service = Some(name.to_string());
        if let Some(slot) = self.page_services.get_mut(self.page_index) {
            if slot.is_none() {
                *slot = Some(name.to_string());
            }
        }
    }

    /// Service for a page; pages with no entry inherit the previous page's
    pub fn service_for_page(&self, index: usize) -> Option<&str> {
        self.page_services
            .iter()
            .take(index + 1)
            .rev()
            .find_map(|service| service.as_deref())
    }

    pub fn into_display_list(self) -> DisplayList {
        DisplayList {
            width: self.width,
            height: self.height,
            pages: self.pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::GlyphWidthTable;

    #[test]
    fn test_new_context_starts_at_top_margin() {
        let fonts = FontSet::uniform(GlyphWidthTable::fixed(0.5));
        let config = LayoutConfig::default();
        let params = GenerationParams::default();
        let ctx = DrawingContext::new(&fonts, &config, &params);
        assert_eq!(ctx.page_count(), 1);
        assert_eq!(ctx.y, 742.0);
    }

    #[test]
    fn test_ensure_page_allocates_until_index_exists() {
        let fonts = FontSet::uniform(GlyphWidthTable::fixed(0.5));
        let config = LayoutConfig::default();
        let params = GenerationParams::default();
        let mut ctx = DrawingContext::new(&fonts, &config, &params);
        ctx.ensure_page(3);
        assert_eq!(ctx.page_count(), 4);
        ctx.ensure_page(1);
        assert_eq!(ctx.page_count(), 4);
    }

    #[test]
    fn test_break_if_needed() {
        let fonts = FontSet::uniform(GlyphWidthTable::fixed(0.5));
        let config = LayoutConfig::default();
        let params = GenerationParams::default();
        let mut ctx = DrawingContext::new(&fonts, &config, &params);
        assert!(!ctx.break_if_needed(100.0));
        ctx.y = 60.0;
        assert!(ctx.break_if_needed(20.0));
        assert_eq!(ctx.page_index, 1);
        assert_eq!(ctx.y, ctx.top_y());
    }

    #[test]
    fn test_service_map_inherits_previous_page() {
        let fonts = FontSet::uniform(GlyphWidthTable::fixed(0.5));
        let config = LayoutConfig::default();
        let params = GenerationParams::default();
        let mut ctx = DrawingContext::new(&fonts, &config, &params);
        ctx.set_service("Shacharit");
        ctx.add_page();
        ctx.set_service("Mincha");
        assert_eq!(ctx.service_for_page(0), Some("Shacharit"));
        assert_eq!(ctx.service_for_page(1), Some("Shacharit"));
        ctx.add_page();
        assert_eq!(ctx.service_for_page(2), Some("Mincha"));
    }
}
