//! Sentence grouping for sentence-mapped prayers
//!
//! Phrases are walked in reading order. A phrase whose English ends in
//! `.`, `!` or `?` closes its sentence; the next phrase opens a new one.

use crate::models::prayer::{MappingEntry, WordMapping};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static TERMINAL_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]$").expect("terminal punctuation pattern is valid"));

/// True when the trimmed text ends a sentence
pub fn ends_with_terminal_punctuation(text: &str) -> bool {
    TERMINAL_PUNCTUATION.is_match(text.trim())
}

/// A phrase's place inside its sentence
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SentencePhrase {
    /// Dense 0-based position in the word mapping
    pub entry_index: usize,
    /// Original mapping key
    pub key: u64,
    /// 1-based position within the sentence
    pub phrase_index: usize,
}

/// A contiguous run of phrases
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Sentence {
    /// 0-based sentence number
    pub number: usize,
    pub phrases: Vec<SentencePhrase>,
}

impl Sentence {
    /// 1-based number shown in notation marks
    pub fn display_number(&self) -> usize {
        self.number + 1
    }

    pub fn entry_indices(&self) -> Vec<usize> {
        self.phrases.iter().map(|p| p.entry_index).collect()
    }
}

/// Partition a word mapping into sentences, in reading order
pub fn group_mappings_by_sentence(mapping: &WordMapping) -> Vec<Sentence> {
    let mut sentences: Vec<Sentence> = Vec::new();
    let mut previous_ended = false;

    for (entry_index, (key, entry)) in mapping.keyed().enumerate() {
        if entry_index == 0 || previous_ended {
            sentences.push(Sentence {
                number: sentences.len(),
                phrases: Vec::new(),
            });
        }

        if let Some(current) = sentences.last_mut() {
            current.phrases.push(SentencePhrase {
                entry_index,
                key,
                phrase_index: current.phrases.len() + 1,
            });
        }

        previous_ended = ends_sentence(entry);
    }

    sentences
}

fn ends_sentence(entry: &MappingEntry) -> bool {
    !entry.english.is_empty() && ends_with_terminal_punctuation(&entry.english)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(english: &[&str]) -> WordMapping {
        WordMapping::from_entries(english.iter().map(|e| MappingEntry::new("", e)))
    }

    #[test]
    fn test_boundary_after_punctuation() {
        let sentences = group_mappings_by_sentence(&mapping(&["Hello", "world.", "Next"]));
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].entry_indices(), vec![0, 1]);
        assert_eq!(sentences[1].entry_indices(), vec![2]);
        assert_eq!(sentences[1].display_number(), 2);
    }

    #[test]
    fn test_phrase_indices_restart_per_sentence() {
        let sentences = group_mappings_by_sentence(&mapping(&["a", "b!", "c", "d?", "e"]));
        let indices: Vec<Vec<usize>> = sentences
            .iter()
            .map(|s| s.phrases.iter().map(|p| p.phrase_index).collect())
            .collect();
        assert_eq!(indices, vec![vec![1, 2], vec![1, 2], vec![1]]);
    }

    #[test]
    fn test_trailing_whitespace_is_trimmed() {
        assert!(ends_with_terminal_punctuation("Amen.  "));
        assert!(!ends_with_terminal_punctuation("Amen,"));
        assert!(!ends_with_terminal_punctuation(""));
    }

    #[test]
    fn test_empty_english_never_ends_a_sentence() {
        let sentences = group_mappings_by_sentence(&mapping(&["", "", "x."]));
        assert_eq!(sentences.len(), 1);
    }

    #[test]
    fn test_last_phrase_punctuation_opens_nothing() {
        let sentences = group_mappings_by_sentence(&mapping(&["One.", "Two."]));
        assert_eq!(sentences.len(), 2);
        assert!(group_mappings_by_sentence(&WordMapping::new()).is_empty());
    }
}
