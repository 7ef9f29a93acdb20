//! Layout engine: pages, columns, underlines and block text
//!
//! - `context`: drawing context and page manager
//! - `display_list`: serializable output (pages of draw commands)
//! - `column`: direction-aware word wrapping for one column
//! - `sync`: keeps 2 or 3 columns on the same page
//! - `underline`: bracket underlines for wrapped phrases
//! - `text_block`: greedy line breaking for single-column blocks

pub mod column;
pub mod context;
pub mod display_list;
pub mod sync;
pub mod text_block;
pub mod underline;

pub use column::{Column, ColumnBounds, ColumnCursor, ColumnStyle, Direction, LineRef, PhraseLayout};
pub use context::DrawingContext;
pub use display_list::{DisplayList, DrawCommand, Page, Point};
pub use sync::{ColumnArena, ColumnId};
pub use text_block::{calculate_text_lines, ensure_space_and_draw, TextBlock, TextLine};
pub use underline::{draw_bracket_underlines, UnderlineSegment, UnderlineTracker};
