//! Whole-book layout: services, sections, prayers and page footers
//!
//! A book is a list of services, each a list of sections, each a list of
//! prayers. Prayers are classified when the book is loaded; one that
//! matches no known structure is logged and left out so the rest of the
//! book still lays out.

use crate::error::{LayoutError, Result};
use crate::fonts::{FontRole, FontSet};
use crate::layout::context::DrawingContext;
use crate::layout::display_list::{DisplayList, DrawCommand};
use crate::layout::text_block::ensure_space_and_draw;
use crate::models::color::Rgb;
use crate::models::config::{GenerationParams, LayoutConfig, MappingStyle};
use crate::models::prayer::Prayer;
use crate::renderers::chrome::{draw_divider_line, full_width_block};
use crate::renderers::draw_prayer;
use crate::renderers::reading_guide::draw_reading_guide;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct RawBook {
    services: Vec<RawService>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct RawService {
    name: String,
    sections: Vec<RawSection>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct RawSection {
    #[serde(alias = "sectionTitle")]
    title: String,
    description: String,
    prayers: Vec<Value>,
}

/// A run of prayers under a title and description
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub title: String,
    pub description: String,
    pub prayers: Vec<Prayer>,
}

/// A named service (e.g. Shacharit)
#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub name: String,
    pub sections: Vec<Section>,
}

/// A classified book, ready for layout
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Book {
    pub services: Vec<Service>,
    /// Titles of prayers that matched no known structure
    pub skipped: Vec<String>,
}

impl Book {
    pub fn from_json_str(text: &str, style: MappingStyle) -> Result<Self> {
        let raw: RawBook = serde_json::from_str(text)?;
        Ok(Self::from_raw(raw, style))
    }

    pub fn from_value(value: Value, style: MappingStyle) -> Result<Self> {
        let raw: RawBook = serde_json::from_value(value)?;
        Ok(Self::from_raw(raw, style))
    }

    fn from_raw(raw: RawBook, style: MappingStyle) -> Self {
        let mut skipped = Vec::new();
        let services = raw
            .services
            .into_iter()
            .map(|service| Service {
                name: service.name,
                sections: service
                    .sections
                    .into_iter()
                    .map(|section| Section {
                        prayers: section
                            .prayers
                            .iter()
                            .filter_map(|value| match Prayer::from_json_value(value, style) {
                                Ok(prayer) => Some(prayer),
                                Err(LayoutError::UnrecognizedPrayerStructure { title }) => {
                                    log::warn!("Skipping prayer \"{}\": unrecognized structure", title);
                                    skipped.push(title);
                                    None
                                }
                                Err(err) => {
                                    log::warn!("Skipping prayer: {}", err);
                                    None
                                }
                            })
                            .collect(),
                        title: section.title,
                        description: section.description,
                    })
                    .collect(),
            })
            .collect();

        Self { services, skipped }
    }

    pub fn prayer_count(&self) -> usize {
        self.services
            .iter()
            .flat_map(|s| s.sections.iter())
            .map(|s| s.prayers.len())
            .sum()
    }
}

fn draw_section_header(ctx: &mut DrawingContext, section: &Section) {
    let config = ctx.config;
    let sizes = &config.font_sizes;
    let spacing = &config.vertical_spacing;

    let title_lines = if section.title.chars().count() > config.layout.section_title_length_threshold {
        2.0
    } else {
        1.0
    };
    let description_lines =
        if section.description.chars().count() > config.layout.section_description_length_threshold {
            3.0
        } else {
            1.0
        };
    let estimated = ctx.fonts.height(FontRole::EnglishBold, sizes.section_title) * title_lines
        + spacing.after_section_title_text
        + ctx.fonts.height(FontRole::English, sizes.section_description) * description_lines
        + config.line_spacing.section_description
        + spacing.after_section_description;
    if ctx.y < ctx.bottom_margin + estimated + spacing.page_buffer {
        ctx.add_page();
    }

    let title = full_width_block(
        ctx,
        &section.title,
        FontRole::EnglishBold,
        sizes.section_title,
        config.line_spacing.section_title,
        config.colors.section_title,
    );
    ensure_space_and_draw(ctx, &title, "Section title");
    ctx.y -= spacing.after_section_title_text;

    let description = full_width_block(
        ctx,
        &section.description,
        FontRole::English,
        sizes.section_description,
        config.line_spacing.section_description,
        config.colors.section_description,
    );
    ensure_space_and_draw(ctx, &description, "Section description");
    ctx.y -= spacing.after_section_description;
}

/// Stamp `"{n} / {total}"` and the service name at the top of every page
fn apply_page_footers(ctx: &mut DrawingContext) {
    let config = ctx.config;
    let total = ctx.page_count();
    let y = ctx.height - config.pdf_margins.top / 2.0;

    let mut footers = Vec::new();
    for index in 0..total {
        let number = format!("{} / {}", index + 1, total);
        let size = config.font_sizes.page_number;
        let width = ctx.fonts.width(FontRole::English, &number, size);
        footers.push((
            index,
            DrawCommand::Text {
                x: ctx.width - width - ctx.margin,
                y,
                text: number,
                font: FontRole::English,
                size,
                color: Rgb::BLACK,
            },
        ));

        if let Some(service) = ctx.service_for_page(index) {
            let heading = format!("Service: {}", service);
            let size = config.font_sizes.service_heading;
            let width = ctx.fonts.width(FontRole::English, &heading, size);
            footers.push((
                index,
                DrawCommand::Text {
                    x: (ctx.width - width) / 2.0,
                    y,
                    text: heading,
                    font: FontRole::English,
                    size,
                    color: config.colors.service_heading,
                },
            ));
        }
    }

    for (index, command) in footers {
        ctx.push_command(index, command);
    }
}

/// Lay out a whole book
pub fn layout_book(book: &Book, config: &LayoutConfig, params: &GenerationParams, fonts: &FontSet) -> DisplayList {
    let mut ctx = DrawingContext::new(fonts, config, params);

    if params.include_reading_guide {
        draw_reading_guide(&mut ctx);
        draw_divider_line(&mut ctx);
    }

    for (idx, service) in book.services.iter().enumerate() {
        ctx.set_service(&service.name);
        for section in &service.sections {
            draw_section_header(&mut ctx, section);
            for prayer in &section.prayers {
                draw_prayer(&mut ctx, prayer);
            }
        }
        if idx + 1 < book.services.len() {
            draw_divider_line(&mut ctx);
        }
    }

    apply_page_footers(&mut ctx);
    log::info!(
        "Laid out {} prayers across {} pages ({} skipped)",
        book.prayer_count(),
        ctx.page_count(),
        book.skipped.len()
    );
    ctx.into_display_list()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::GlyphWidthTable;

    const BOOK: &str = r#"{
        "services": [
            {"name": "Shacharit", "sections": [
                {"title": "Morning Blessings", "description": "Said on waking", "prayers": [
                    {"title": "Modeh Ani", "english": "I thank You", "hebrew": "מודה אני"},
                    {"title": "Broken"}
                ]}
            ]},
            {"name": "Mincha", "sections": []}
        ]
    }"#;

    #[test]
    fn test_unrecognized_prayers_are_skipped() {
        let book = Book::from_json_str(BOOK, MappingStyle::Recommended).unwrap();
        assert_eq!(book.prayer_count(), 1);
        assert_eq!(book.skipped, vec!["Broken".to_string()]);
    }

    #[test]
    fn test_footers_on_every_page() {
        let book = Book::from_json_str(BOOK, MappingStyle::Recommended).unwrap();
        let fonts = FontSet::uniform(GlyphWidthTable::fixed(0.5));
        let list = layout_book(&book, &LayoutConfig::default(), &GenerationParams::default(), &fonts);

        assert_eq!(list.page_count(), 1);
        let texts: Vec<&str> = list.pages[0].texts().collect();
        assert!(texts.contains(&"1 / 1"));
        assert!(texts.contains(&"Service: Shacharit"));
        assert_eq!(texts[0], "Morning Blessings");
    }
}
