// Loading layout configuration from YAML and JSON files

use siddur_layout::models::LayoutConfig;
use siddur_layout::LayoutError;
use std::io::Write;

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_yaml_file_overrides_defaults() {
    let file = write_temp(
        ".yaml",
        "pageWidth: 595\npageHeight: 842\nfontSizes:\n  prayerTitle: 18\n",
    );
    let config = LayoutConfig::from_path(file.path()).unwrap();

    assert_eq!(config.page_width, 595.0);
    assert_eq!(config.page_height, 842.0);
    assert_eq!(config.font_sizes.prayer_title, 18.0);
    assert_eq!(config.font_sizes.blessing_english, 12.0);
}

#[test]
fn test_json_file_overrides_palette() {
    let file = write_temp(
        ".json",
        r#"{"colors": {"wordMappingColors": [{"name": "teal", "rgb": [0.0, 0.5, 0.5]}]}}"#,
    );
    let config = LayoutConfig::from_path(file.path()).unwrap();

    assert_eq!(config.colors.word_mapping_colors.len(), 1);
    assert_eq!(config.colors.word_mapping_colors[0].id(), 't');
}

#[test]
fn test_invalid_geometry_is_rejected() {
    let file = write_temp(".yml", "pageHeight: 80\npdfMargins:\n  top: 50\n  bottom: 50\n");
    let err = LayoutConfig::from_path(file.path()).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidConfig(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = LayoutConfig::from_path("/nonexistent/siddur-layout.yaml").unwrap_err();
    assert!(matches!(err, LayoutError::Io(_)));
}
