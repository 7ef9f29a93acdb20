//! Notation marks: `ts₁⁽²⁾`
//!
//! The subscript is the phrase's position in its sentence and the
//! superscript is the sentence number. Marks are drawn at 60% of the text
//! size, centered vertically against the full-size line.

use crate::fonts::FontRole;
use crate::layout::column::LineRef;
use crate::layout::context::DrawingContext;
use crate::models::color::Rgb;

pub const NOTATION_SCALE: f32 = 0.6;

/// Margin marks sit this far above the line's baseline
const MARGIN_MARK_RISE: f32 = 2.0;

const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

fn map_digits(value: usize, digits: &[char; 10]) -> String {
    value
        .to_string()
        .chars()
        .map(|ch| ch.to_digit(10).map(|d| digits[d as usize]).unwrap_or(ch))
        .collect()
}

pub fn to_subscript(value: usize) -> String {
    map_digits(value, &SUBSCRIPT_DIGITS)
}

pub fn to_superscript(value: usize) -> String {
    map_digits(value, &SUPERSCRIPT_DIGITS)
}

/// `ts{phrase}⁽{sentence}⁾` with both numbers 1-based
pub fn phrase_notation(phrase_index: usize, sentence_number: usize) -> String {
    format!("ts{}⁽{}⁾", to_subscript(phrase_index), to_superscript(sentence_number))
}

/// `ts{min}-{max}⁽{sentence}⁾`, or a single index when `min == max`
pub fn range_notation(min: usize, max: usize, sentence_number: usize) -> String {
    let range = if min == max {
        to_subscript(min)
    } else {
        format!("{}-{}", to_subscript(min), to_subscript(max))
    };
    format!("ts{}⁽{}⁾", range, to_superscript(sentence_number))
}

pub fn notation_size(base_size: f32) -> f32 {
    base_size * NOTATION_SCALE
}

/// Baseline for a mark placed on a line with baseline `y`
pub fn notation_y(y: f32, base_size: f32) -> f32 {
    y - (base_size - notation_size(base_size)) * 0.5
}

/// Phrase indices per Hebrew line, for the margin index of one sentence
#[derive(Clone, Debug, Default)]
pub struct MarginIndex {
    lines: Vec<(LineRef, Vec<usize>)>,
}

impl MarginIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, line: LineRef, phrase_index: usize) {
        let slot = match self.lines.iter().position(|(l, _)| *l == line) {
            Some(pos) => &mut self.lines[pos].1,
            None => {
                self.lines.push((line, Vec::new()));
                let last = self.lines.len() - 1;
                &mut self.lines[last].1
            }
        };
        if !slot.contains(&phrase_index) {
            slot.push(phrase_index);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Mark text per line, in page order then top to bottom
    pub fn marks(&self, sentence_number: usize) -> Vec<(LineRef, String)> {
        let mut lines: Vec<&(LineRef, Vec<usize>)> = self.lines.iter().collect();
        lines.sort_by(|(a, _), (b, _)| a.page.cmp(&b.page).then(b.y.total_cmp(&a.y)));

        lines
            .into_iter()
            .filter_map(|(line, indices)| {
                let min = indices.iter().min()?;
                let max = indices.iter().max()?;
                Some((*line, range_notation(*min, *max, sentence_number)))
            })
            .collect()
    }

    /// Draw every line's mark at `x`
    pub fn draw(&self, ctx: &mut DrawingContext, x: f32, base_size: f32, sentence_number: usize) {
        let size = notation_size(base_size);
        for (line, mark) in self.marks(sentence_number) {
            ctx.draw_text(line.page, &mark, x, line.y + MARGIN_MARK_RISE, FontRole::English, size, Rgb::BLACK);
        }
    }
}
