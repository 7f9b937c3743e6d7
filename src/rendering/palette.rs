//! # Tile Palette
//!
//! Maps tile labels to draw colours.

use crate::TileLabel;
use macroquad::color::{self, Color};

/// Resolves a tile label to a colour.
///
/// Accepts a fixed set of colour names (case-insensitive) and `#rrggbb` hex.
/// Any other label gets a stable colour derived from its text, so a map with
/// unfamiliar labels still renders and equal labels always share a colour.
///
/// # Examples
///
/// ```
/// use tilecast::{tile_color, TileLabel};
///
/// assert_eq!(tile_color(&TileLabel::new("red")), macroquad::color::RED);
/// assert_eq!(
///     tile_color(&TileLabel::new("brick")),
///     tile_color(&TileLabel::new("brick"))
/// );
/// ```
pub fn tile_color(label: &TileLabel) -> Color {
    let name = label.as_str().trim();

    if let Some(color) = name.strip_prefix('#').and_then(parse_hex) {
        return color;
    }

    match name.to_ascii_lowercase().as_str() {
        "red" => color::RED,
        "green" => color::GREEN,
        "blue" => color::BLUE,
        "yellow" => color::YELLOW,
        "purple" => color::PURPLE,
        "orange" => color::ORANGE,
        "gray" | "grey" => color::GRAY,
        "white" => color::WHITE,
        "brown" => color::BROWN,
        "pink" => color::PINK,
        _ => hashed_color(name),
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::from_rgba(
        channel(0..2)?,
        channel(2..4)?,
        channel(4..6)?,
        255,
    ))
}

/// FNV-1a over the label bytes, spread into channels kept above 64 so
/// fallback tiles stay visible against the dark background.
fn hashed_color(name: &str) -> Color {
    let hash = name.bytes().fold(0x811c_9dc5u32, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(0x0100_0193)
    });
    let channel = |shift: u32| 64 + ((hash >> shift) & 0xff) as u8 % 192;
    Color::from_rgba(channel(0), channel(8), channel(16), 255)
}

/// Scales a colour's RGB channels, keeping alpha.
pub fn shade(color: Color, factor: f32) -> Color {
    Color::new(color.r * factor, color.g * factor, color.b * factor, color.a)
}
