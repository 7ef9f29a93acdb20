//! RGB colors and the word-mapping palette
//!
//! Components are in the 0..=1 range, the way PDF writers expect them.

use serde::{Deserialize, Serialize};

/// An RGB color with components in 0..=1
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::BLACK
    }
}

/// One named entry of the word-mapping palette
///
/// The first letter of `name` is the id used in cycle subscripts
/// (e.g. "red" -> `r1*`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PaletteColor {
    pub name: String,
    pub rgb: Rgb,
}

impl PaletteColor {
    pub fn new(name: &str, rgb: Rgb) -> Self {
        Self {
            name: name.to_string(),
            rgb,
        }
    }

    /// Notation letter for this color
    pub fn id(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_serializes_as_triple() {
        let json = serde_json::to_string(&Rgb(0.5, 0.25, 1.0)).unwrap();
        assert_eq!(json, "[0.5,0.25,1.0]");
    }

    #[test]
    fn test_palette_id_is_first_letter() {
        assert_eq!(PaletteColor::new("orange", Rgb::BLACK).id(), 'o');
        assert_eq!(PaletteColor::new("", Rgb::BLACK).id(), '?');
    }
}
