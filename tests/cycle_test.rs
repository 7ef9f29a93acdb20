// Color cycling, labels and monochrome output

use siddur_layout::mapping::CyclePolicy;
use siddur_layout::models::{GenerationParams, LayoutConfig, Rgb};

#[test]
fn test_labels_follow_palette_cycles() {
    let config = LayoutConfig::default();
    let params = GenerationParams::default();
    let policy = CyclePolicy::from_config(&config, &params);

    assert_eq!(policy.palette_len(), 6);
    assert_eq!(policy.mark(0).label(), "r1*");
    assert_eq!(policy.mark(5).label(), "m1");
    assert_eq!(policy.mark(6).label(), "r2*");

    let mark = policy.mark(7);
    assert_eq!(mark.palette_index, 1);
    assert_eq!(mark.cycle, 2);
    assert_eq!(mark.label(), "o2");
}

#[test]
fn test_monochrome_keeps_labels_but_drops_color() {
    let config = LayoutConfig::default();
    let params = GenerationParams {
        print_black_and_white: true,
        ..Default::default()
    };
    let policy = CyclePolicy::from_config(&config, &params);

    for ordinal in 0..12 {
        assert_eq!(policy.color(ordinal), Rgb::BLACK);
    }
    assert_eq!(policy.mark(8).label(), "g2");
}

#[test]
fn test_interval_and_start_index() {
    let config = LayoutConfig::default();
    let params = GenerationParams {
        word_mapping_interval: 2,
        word_mapping_start_index: 1,
        ..Default::default()
    };
    let policy = CyclePolicy::from_config(&config, &params);

    let marked: Vec<bool> = (0..6).map(|ordinal| policy.is_marked(ordinal)).collect();
    assert_eq!(marked, vec![false, true, false, true, false, true]);
}

#[test]
fn test_english_label_once_per_cycle() {
    let config = LayoutConfig::default();
    let params = GenerationParams::default();
    let policy = CyclePolicy::from_config(&config, &params);
    let mut walker = policy.walker();

    let marks: Vec<_> = (0..13).map(|ordinal| walker.next_marks(ordinal)).collect();
    let english: Vec<usize> = marks
        .iter()
        .enumerate()
        .filter(|(_, m)| m.english_label.is_some())
        .map(|(ordinal, _)| ordinal)
        .collect();
    assert_eq!(english, vec![0, 6, 12]);
    assert!(marks.iter().all(|m| m.column_label.is_some() && m.underline));
}

#[test]
fn test_hidden_subscripts_still_underline() {
    let config = LayoutConfig::default();
    let params = GenerationParams {
        show_word_mapping_subscripts: false,
        ..Default::default()
    };
    let policy = CyclePolicy::from_config(&config, &params);
    let marks = policy.walker().next_marks(0);

    assert!(marks.underline);
    assert_eq!(marks.english_label, None);
    assert_eq!(marks.column_label, None);
}
