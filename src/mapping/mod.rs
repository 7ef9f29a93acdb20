//! Phrase annotation: sentences, notation marks and color cycling

pub mod cycle;
pub mod notation;
pub mod sentences;

pub use cycle::{CycleMark, CyclePolicy, CycleWalker, PhraseMarks};
pub use notation::{phrase_notation, range_notation, to_subscript, to_superscript, MarginIndex};
pub use sentences::{group_mappings_by_sentence, Sentence, SentencePhrase};
