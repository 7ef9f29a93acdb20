//! Display list produced by the layout engine
//!
//! Every page holds absolute-positioned draw commands in PDF user space
//! (origin bottom-left, y grows upward). The host replays the commands into
//! a PDF writer without doing any layout of its own.

use crate::fonts::FontRole;
use crate::models::color::Rgb;
use serde::{Deserialize, Serialize};

/// A point in page coordinates
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One drawing primitive
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DrawCommand {
    Text {
        text: String,
        x: f32,
        y: f32,
        font: FontRole,
        size: f32,
        color: Rgb,
    },
    Line {
        start: Point,
        end: Point,
        thickness: f32,
        color: Rgb,
    },
    /// Stroked outline; `(x, y)` is the bottom-left corner
    Rectangle {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        thickness: f32,
        color: Rgb,
    },
}

/// A single output page
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Page {
    /// 0-based page index
    pub index: usize,

    /// Draw commands in emission order
    pub commands: Vec<DrawCommand>,
}

impl Page {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            commands: Vec::new(),
        }
    }

    /// Text of every text command, in emission order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Complete layout output for one generation call
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    /// Page width in points
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Pages in document order
    pub pages: Vec<Page>,
}

impl DisplayList {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All commands across all pages, in document order
    pub fn commands(&self) -> impl Iterator<Item = (usize, &DrawCommand)> {
        self.pages
            .iter()
            .flat_map(|page| page.commands.iter().map(move |cmd| (page.index, cmd)))
    }
}
