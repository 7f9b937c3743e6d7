//! # Built-in Levels
//!
//! Maps shipped with the crate, used when no map file is supplied.

use crate::{LevelData, TileLabel, TilecastResult, Vector2};
use std::collections::HashMap;

/// Layout of the demo map. Each letter is a coloured wall.
const DEMO_ROWS: [&str; 10] = [
    "rrrrrrrrrr",
    "r........b",
    "r..gg....b",
    "r..g.....b",
    "r......y.b",
    "r......y.b",
    "r.....pp.b",
    "r........b",
    "r........b",
    "oooooooooo",
];

fn demo_legend() -> HashMap<char, TileLabel> {
    HashMap::from([
        ('r', TileLabel::new("red")),
        ('b', TileLabel::new("blue")),
        ('g', TileLabel::new("green")),
        ('y', TileLabel::new("yellow")),
        ('p', TileLabel::new("purple")),
        ('o', TileLabel::new("orange")),
    ])
}

/// The 10x10 demo map with the player at (2.5, 6.5) facing up.
pub fn demo() -> TilecastResult<LevelData> {
    let level = crate::Level::from_ascii(&DEMO_ROWS, &demo_legend())?;
    let mut data = level.to_data();
    data.spawn = Some(Vector2::new(2.5, 6.5));
    data.facing = Some(Vector2::new(0.0, -1.0));
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_level_is_valid() {
        let data = demo().unwrap();
        assert_eq!(data.width, 10);
        assert_eq!(data.height, 10);

        let spawn = data.spawn.unwrap();
        let level = data.into_level().unwrap();
        assert_eq!(level.tile(spawn).unwrap(), None);
        assert_eq!(
            level.tile(Vector2::new(0.0, 0.0)).unwrap(),
            Some(&TileLabel::new("red"))
        );
    }
}
