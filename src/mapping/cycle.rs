//! Color / monochrome cycling for word-mapped prayers
//!
//! Phrase ordinals index the palette modulo its size. One full pass over
//! the palette is a cycle; the subscript label is the palette letter, the
//! 1-based cycle number and a `*` on the cycle's first color (`r2*`).
//!
//! In monochrome mode every color is black but the labels are unchanged,
//! so the cross-reference survives printing.

use crate::models::color::{PaletteColor, Rgb};
use crate::models::config::{GenerationParams, LayoutConfig};
use serde::Serialize;

/// Palette position of one phrase
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleMark {
    pub palette_index: usize,
    /// 1-based
    pub cycle: usize,
    pub letter: char,
    pub first_of_cycle: bool,
}

impl CycleMark {
    pub fn label(&self) -> String {
        format!(
            "{}{}{}",
            self.letter,
            self.cycle,
            if self.first_of_cycle { "*" } else { "" }
        )
    }
}

/// What the renderers draw for one phrase
#[derive(Clone, Debug, PartialEq)]
pub struct PhraseMarks {
    pub color: Rgb,
    /// Drawn after the English text
    pub english_label: Option<String>,
    /// Drawn after the Hebrew and transliteration text
    pub column_label: Option<String>,
    /// Marked phrases get a bracket underline
    pub underline: bool,
}

/// Deterministic ordinal -> color/label policy
#[derive(Clone, Debug)]
pub struct CyclePolicy<'a> {
    palette: &'a [PaletteColor],
    interval: usize,
    start_index: usize,
    show_subscripts: bool,
    monochrome: bool,
}

impl<'a> CyclePolicy<'a> {
    pub fn new(palette: &'a [PaletteColor], params: &GenerationParams) -> Self {
        Self {
            palette,
            interval: params.interval(),
            start_index: params.word_mapping_start_index,
            show_subscripts: params.show_word_mapping_subscripts,
            monochrome: params.print_black_and_white,
        }
    }

    pub fn from_config(config: &'a LayoutConfig, params: &GenerationParams) -> Self {
        Self::new(&config.colors.word_mapping_colors, params)
    }

    pub fn palette_len(&self) -> usize {
        self.palette.len().max(1)
    }

    pub fn mark(&self, ordinal: usize) -> CycleMark {
        let n = self.palette_len();
        let palette_index = ordinal % n;
        CycleMark {
            palette_index,
            cycle: ordinal / n + 1,
            letter: self.palette.get(palette_index).map(|c| c.id()).unwrap_or('?'),
            first_of_cycle: palette_index == 0,
        }
    }

    /// Palette color, or black in monochrome mode
    pub fn color(&self, ordinal: usize) -> Rgb {
        if self.monochrome {
            return Rgb::BLACK;
        }
        self.palette
            .get(ordinal % self.palette_len())
            .map(|c| c.rgb)
            .unwrap_or(Rgb::BLACK)
    }

    /// Only every `interval`-th phrase from `start_index` on is marked
    pub fn is_marked(&self, ordinal: usize) -> bool {
        ordinal >= self.start_index && (ordinal - self.start_index) % self.interval == 0
    }

    /// Walk phrases in order, tracking the English once-per-cycle label
    pub fn walker(&self) -> CycleWalker<'_, 'a> {
        CycleWalker {
            policy: self,
            english_shown_in_cycle: None,
        }
    }
}

/// Stateful pass over a prayer's phrases
#[derive(Debug)]
pub struct CycleWalker<'p, 'a> {
    policy: &'p CyclePolicy<'a>,
    english_shown_in_cycle: Option<usize>,
}

impl CycleWalker<'_, '_> {
    pub fn next_marks(&mut self, ordinal: usize) -> PhraseMarks {
        let policy = self.policy;
        let marked = policy.is_marked(ordinal);
        let mark = policy.mark(ordinal);

        let labelled = marked && policy.show_subscripts;
        let english_label = if labelled && self.english_shown_in_cycle != Some(mark.cycle) {
            self.english_shown_in_cycle = Some(mark.cycle);
            Some(mark.label())
        } else {
            None
        };

        PhraseMarks {
            color: policy.color(ordinal),
            english_label,
            column_label: labelled.then(|| mark.label()),
            underline: marked,
        }
    }
}
