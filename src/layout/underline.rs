//! Bracket underlines beneath phrases
//!
//! A phrase that wraps produces one segment per line it touches. Only the
//! first segment gets the opening tick and only the last gets the closing
//! tick, so a wrapped phrase still reads as a single bracket.
//!
//! Segment `start_x`/`end_x` are in reading order: for a right-to-left
//! column `start_x` is the right end of the segment.

use crate::layout::context::DrawingContext;
use crate::layout::display_list::Point;
use crate::models::color::Rgb;
use serde::Serialize;

/// Distance from the baseline down to the underline
pub const UNDERLINE_DROP: f32 = 2.0;

/// Height of the bracket end ticks
pub const TICK_HEIGHT: f32 = 3.36;

pub const UNDERLINE_THICKNESS: f32 = 1.0;

/// One horizontal run of a phrase's underline
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct UnderlineSegment {
    pub start_x: f32,
    pub end_x: f32,
    /// Baseline of the line the segment sits under
    pub y: f32,
    pub is_first: bool,
    pub is_last: bool,
    pub page: usize,
}

impl UnderlineSegment {
    pub fn length(&self) -> f32 {
        (self.end_x - self.start_x).abs()
    }
}

/// Accumulates segments while a column draws one phrase
#[derive(Debug)]
pub struct UnderlineTracker {
    segments: Vec<UnderlineSegment>,
    start_x: f32,
    y: f32,
    page: usize,
}

impl UnderlineTracker {
    /// Open the first segment at the cursor position before the phrase
    pub fn begin(x: f32, y: f32, page: usize) -> Self {
        Self {
            segments: Vec::new(),
            start_x: x,
            y,
            page,
        }
    }

    fn close(&mut self, end_x: f32) {
        if (end_x - self.start_x).abs() <= f32::EPSILON {
            return;
        }
        let is_first = self.segments.is_empty();
        self.segments.push(UnderlineSegment {
            start_x: self.start_x,
            end_x,
            y: self.y,
            is_first,
            is_last: false,
            page: self.page,
        });
    }

    /// The column is about to wrap at `x`
    pub fn wrap_at(&mut self, x: f32) {
        self.close(x);
    }

    /// The column wrapped; the next segment starts at the new cursor
    pub fn reopen(&mut self, x: f32, y: f32, page: usize) {
        self.start_x = x;
        self.y = y;
        self.page = page;
    }

    /// Close the final segment at `x` and return all segments
    pub fn finish(mut self, x: f32) -> Vec<UnderlineSegment> {
        self.close(x);
        if let Some(last) = self.segments.last_mut() {
            last.is_last = true;
        }
        self.segments
    }
}

/// Draw the bracket shape for a phrase's segments
pub fn draw_bracket_underlines(ctx: &mut DrawingContext, segments: &[UnderlineSegment], color: Rgb) {
    for seg in segments {
        let underline_y = seg.y - UNDERLINE_DROP;
        ctx.draw_line(
            seg.page,
            Point::new(seg.start_x, underline_y),
            Point::new(seg.end_x, underline_y),
            UNDERLINE_THICKNESS,
            color,
        );

        if seg.is_first {
            ctx.draw_line(
                seg.page,
                Point::new(seg.start_x, underline_y),
                Point::new(seg.start_x, underline_y + TICK_HEIGHT),
                UNDERLINE_THICKNESS,
                color,
            );
        }

        if seg.is_last {
            ctx.draw_line(
                seg.page,
                Point::new(seg.end_x, underline_y),
                Point::new(seg.end_x, underline_y + TICK_HEIGHT),
                UNDERLINE_THICKNESS,
                color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_phrase_is_first_and_last() {
        let tracker = UnderlineTracker::begin(50.0, 700.0, 0);
        let segments = tracker.finish(120.0);
        assert_eq!(segments.len(), 1);
        assert!(segments[0].is_first && segments[0].is_last);
    }

    #[test]
    fn test_wrapped_phrase_has_one_segment_per_line() {
        let mut tracker = UnderlineTracker::begin(200.0, 700.0, 0);
        tracker.wrap_at(280.0);
        tracker.reopen(50.0, 684.0, 0);
        tracker.wrap_at(280.0);
        tracker.reopen(50.0, 668.0, 0);
        let segments = tracker.finish(90.0);

        assert_eq!(segments.len(), 3);
        assert!(segments[0].is_first && !segments[0].is_last);
        assert!(!segments[1].is_first && !segments[1].is_last);
        assert!(!segments[2].is_first && segments[2].is_last);
    }

    #[test]
    fn test_wrap_before_first_word_skips_empty_segment() {
        let mut tracker = UnderlineTracker::begin(270.0, 700.0, 0);
        tracker.wrap_at(270.0);
        tracker.reopen(50.0, 684.0, 0);
        let segments = tracker.finish(100.0);

        assert_eq!(segments.len(), 1);
        assert!(segments[0].is_first && segments[0].is_last);
        assert_eq!(segments[0].start_x, 50.0);
    }

    #[test]
    fn test_empty_final_segment_moves_last_flag_back() {
        let mut tracker = UnderlineTracker::begin(50.0, 700.0, 0);
        tracker.wrap_at(260.0);
        tracker.reopen(50.0, 684.0, 0);
        let segments = tracker.finish(50.0);

        assert_eq!(segments.len(), 1);
        assert!(segments[0].is_first && segments[0].is_last);
    }

    #[test]
    fn test_rtl_segment_runs_right_to_left() {
        let tracker = UnderlineTracker::begin(560.0, 700.0, 0);
        let segments = tracker.finish(480.0);
        assert_eq!(segments[0].start_x, 560.0);
        assert_eq!(segments[0].end_x, 480.0);
        assert_eq!(segments[0].length(), 80.0);
    }
}
