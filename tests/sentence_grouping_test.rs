// Sentence grouping and notation marks

use siddur_layout::mapping::{group_mappings_by_sentence, phrase_notation, range_notation};
use siddur_layout::models::{MappingEntry, WordMapping};

fn mapping(english: &[&str]) -> WordMapping {
    WordMapping::from_entries(english.iter().map(|text| MappingEntry::new("א", text)))
}

#[test]
fn test_terminal_punctuation_closes_sentence() {
    let sentences = group_mappings_by_sentence(&mapping(&["Hello", "world.", "Next"]));
    let groups: Vec<Vec<usize>> = sentences.iter().map(|s| s.entry_indices()).collect();
    assert_eq!(groups, vec![vec![0, 1], vec![2]]);
    assert_eq!(sentences[1].display_number(), 2);
}

#[test]
fn test_question_and_exclamation_marks() {
    let sentences = group_mappings_by_sentence(&mapping(&["Who?", "Praise!", "and", "more"]));
    let groups: Vec<Vec<usize>> = sentences.iter().map(|s| s.entry_indices()).collect();
    assert_eq!(groups, vec![vec![0], vec![1], vec![2, 3]]);
}

#[test]
fn test_phrase_indices_restart_per_sentence() {
    let sentences = group_mappings_by_sentence(&mapping(&["a", "b.", "c", "d", "e."]));
    let indices: Vec<Vec<usize>> = sentences
        .iter()
        .map(|s| s.phrases.iter().map(|p| p.phrase_index).collect())
        .collect();
    assert_eq!(indices, vec![vec![1, 2], vec![1, 2, 3]]);
}

#[test]
fn test_trailing_whitespace_and_inner_periods() {
    let sentences = group_mappings_by_sentence(&mapping(&["the end. ", "Mr. Smith", "said"]));
    let groups: Vec<Vec<usize>> = sentences.iter().map(|s| s.entry_indices()).collect();
    assert_eq!(groups, vec![vec![0], vec![1, 2]]);
}

#[test]
fn test_empty_mapping_has_no_sentences() {
    assert!(group_mappings_by_sentence(&WordMapping::new()).is_empty());
}

#[test]
fn test_notation_marks() {
    assert_eq!(phrase_notation(1, 2), "ts₁⁽²⁾");
    assert_eq!(phrase_notation(12, 3), "ts₁₂⁽³⁾");
    assert_eq!(range_notation(1, 3, 4), "ts₁-₃⁽⁴⁾");
    assert_eq!(range_notation(2, 2, 1), "ts₂⁽¹⁾");
}
