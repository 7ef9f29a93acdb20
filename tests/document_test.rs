// Whole-book generation: sections, services, footers

use serde_json::json;
use siddur_layout::api::layout_book_json;
use siddur_layout::fonts::{FontSet, GlyphWidthTable};
use siddur_layout::layout::{DisplayList, DrawCommand};
use siddur_layout::models::{GenerationParams, LayoutConfig, MappingStyle};
use siddur_layout::{layout_book, Book};

fn blessings(count: usize) -> serde_json::Value {
    let items: Vec<serde_json::Value> = (0..count)
        .map(|i| json!({"hebrew": "ברוך אתה", "english": format!("Blessing {}", i)}))
        .collect();
    json!(items)
}

fn two_service_book() -> serde_json::Value {
    json!({
        "services": [
            {"name": "Shacharit", "sections": [
                {"title": "Morning Blessings", "description": "Said on waking", "prayers": [
                    {"title": "Birchot HaShachar", "blessings": blessings(150)},
                    {"title": "Malformed", "source": "nowhere"}
                ]}
            ]},
            {"name": "Mincha", "sections": [
                {"title": "Afternoon", "description": "", "prayers": [
                    {"title": "Ashrei", "blessings": blessings(150)}
                ]}
            ]}
        ]
    })
}

fn render(value: serde_json::Value) -> (Book, DisplayList) {
    let fonts = FontSet::uniform(GlyphWidthTable::fixed(0.5));
    let config = LayoutConfig::default();
    let params = GenerationParams::default();
    let book = Book::from_value(value, MappingStyle::Recommended).unwrap();
    let list = layout_book(&book, &config, &params, &fonts);
    (book, list)
}

#[test]
fn test_bad_prayer_is_skipped_not_fatal() {
    let (book, list) = render(two_service_book());
    assert_eq!(book.prayer_count(), 2);
    assert_eq!(book.skipped, vec!["Malformed".to_string()]);
    assert!(!list.commands().any(|(_, cmd)| matches!(cmd, DrawCommand::Text { text, .. } if text == "Malformed")));
}

#[test]
fn test_every_page_has_a_page_number() {
    let (_, list) = render(two_service_book());
    let total = list.page_count();
    assert!(total >= 3);

    for page in &list.pages {
        let expected = format!("{} / {}", page.index + 1, total);
        assert!(page.texts().any(|t| t == expected), "page {} has no number", page.index);
    }
}

#[test]
fn test_service_headings_follow_the_service_map() {
    let (_, list) = render(two_service_book());

    let first: Vec<&str> = list.pages[0].texts().collect();
    assert!(first.contains(&"Service: Shacharit"));

    let last: Vec<&str> = list.pages[list.page_count() - 1].texts().collect();
    assert!(last.contains(&"Service: Mincha"));

    for page in &list.pages {
        let headings = page.texts().filter(|t| t.starts_with("Service: ")).count();
        assert_eq!(headings, 1);
    }
}

#[test]
fn test_divider_between_services_only() {
    let (_, list) = render(two_service_book());
    let dividers = list
        .commands()
        .filter(|(_, cmd)| matches!(cmd, DrawCommand::Line { thickness, .. } if *thickness == 1.5))
        .count();
    assert_eq!(dividers, 1);
}

#[test]
fn test_section_header_precedes_prayers() {
    let (_, list) = render(json!({
        "services": [{"name": "Maariv", "sections": [
            {"title": "Evening", "description": "After nightfall", "prayers": [
                {"title": "Barchu", "blessings": blessings(3)}
            ]}
        ]}]
    }));
    let texts: Vec<&str> = list.pages[0].texts().take(4).collect();
    assert_eq!(texts, vec!["Evening", "After nightfall", "Barchu", "Blessing 0"]);
}

#[test]
fn test_long_prayer_title_moves_to_a_new_page() {
    let (_, list) = render(two_service_book());
    let first: Vec<&str> = list.pages[0].texts().collect();
    assert_eq!(&first[..2], &["Morning Blessings", "Said on waking"]);
    assert!(!first.contains(&"Birchot HaShachar"));
    assert_eq!(list.pages[1].texts().next(), Some("Birchot HaShachar"));
}

#[test]
fn test_book_json_is_deterministic() {
    let book = two_service_book().to_string();
    let first = layout_book_json(&book, None, "", "").unwrap();
    let second = layout_book_json(&book, None, "", "").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_malformed_book_json_is_an_error() {
    assert!(layout_book_json("{\"services\": [", None, "", "").is_err());
}

#[test]
fn test_reading_guide_opens_the_book_when_requested() {
    let fonts = FontSet::uniform(GlyphWidthTable::fixed(0.5));
    let config = LayoutConfig::default();
    let params = GenerationParams {
        include_reading_guide: true,
        ..Default::default()
    };
    let book = Book::from_value(two_service_book(), MappingStyle::Recommended).unwrap();
    let list = layout_book(&book, &config, &params, &fonts);

    let first: Vec<&str> = list.pages[0].texts().collect();
    assert_eq!(first[0], config.reading_guide.title);
    let guide_end = first.iter().position(|t| *t == "Superscript: phrase in sentence").unwrap();
    let section = first.iter().position(|t| *t == "Morning Blessings").unwrap();
    assert!(guide_end < section);
    assert_eq!(first.iter().filter(|t| **t == "ts").count(), 3);

    // one rule after the guide, one between the services
    let dividers = list
        .commands()
        .filter(|(_, cmd)| matches!(cmd, DrawCommand::Line { thickness, .. } if *thickness == 1.5))
        .count();
    assert_eq!(dividers, 2);
}

#[test]
fn test_reading_guide_is_off_by_default() {
    let (_, list) = render(two_service_book());
    let title = LayoutConfig::default().reading_guide.title;
    assert!(!list.commands().any(|(_, cmd)| matches!(cmd, DrawCommand::Text { text, .. } if *text == title)));
}
