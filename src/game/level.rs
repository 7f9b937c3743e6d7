//! # Level Representation
//!
//! A fixed-size rectangular grid of optional tile labels.
//!
//! Rows are addressed by the y coordinate and columns by the x coordinate. A
//! continuous position maps to the cell containing it, so `(2.5, 6.5)` lies in
//! row 6, column 2.

use crate::{TilecastError, TilecastResult, Vector2};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Opaque material or colour identifier occupying a grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileLabel(String);

impl TileLabel {
    /// Creates a label from any string-like value.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the label text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TileLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TileLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// One grid row; `None` cells are passable space.
pub type TileRow = Vec<Option<TileLabel>>;

/// An immutable tile grid with bounds-checked lookup.
///
/// # Examples
///
/// ```
/// use tilecast::{Level, TileLabel, Vector2};
///
/// let tiles = vec![
///     vec![Some(TileLabel::new("red")), None],
///     vec![None, Some(TileLabel::new("blue"))],
/// ];
/// let level = Level::new(tiles, 2, 2).unwrap();
///
/// assert_eq!(level.tile(Vector2::new(0.5, 0.5)).unwrap(), Some(&TileLabel::new("red")));
/// assert_eq!(level.tile(Vector2::new(1.5, 0.5)).unwrap(), None);
/// assert!(level.tile(Vector2::new(0.5, 2.0)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    tiles: Vec<TileRow>,
    width: usize,
    height: usize,
}

impl Level {
    /// Creates a level, validating the declared dimensions against the grid.
    ///
    /// Fails with [`TilecastError::HeightMismatch`] when the row count differs
    /// from `height`, and with [`TilecastError::WidthMismatch`] naming the first
    /// row whose length differs from `width`.
    pub fn new(tiles: Vec<TileRow>, width: usize, height: usize) -> TilecastResult<Self> {
        if tiles.len() != height {
            return Err(TilecastError::HeightMismatch {
                expected: height,
                actual: tiles.len(),
            });
        }

        if let Some((row, actual)) = tiles
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(TilecastError::WidthMismatch {
                row,
                expected: width,
                actual,
            });
        }

        log::debug!("Created {}x{} level", width, height);

        Ok(Self {
            tiles,
            width,
            height,
        })
    }

    /// Builds a level from text rows.
    ///
    /// `.` and space are empty cells; every other character is looked up in
    /// `legend`. The width is taken from the first row.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use tilecast::{Level, TileLabel, Vector2};
    ///
    /// let legend = HashMap::from([('#', TileLabel::new("gray"))]);
    /// let level = Level::from_ascii(&["###", "#.#", "###"], &legend).unwrap();
    ///
    /// assert_eq!(level.width(), 3);
    /// assert_eq!(level.tile(Vector2::new(1.0, 1.0)).unwrap(), None);
    /// ```
    pub fn from_ascii(rows: &[&str], legend: &HashMap<char, TileLabel>) -> TilecastResult<Self> {
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);

        let tiles = rows
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.chars()
                    .enumerate()
                    .map(|(x, symbol)| match symbol {
                        '.' | ' ' => Ok(None),
                        _ => legend.get(&symbol).cloned().map(Some).ok_or_else(|| {
                            TilecastError::InvalidMap(format!(
                                "unknown tile symbol '{}' at ({}, {})",
                                symbol, x, y
                            ))
                        }),
                    })
                    .collect::<TilecastResult<TileRow>>()
            })
            .collect::<TilecastResult<Vec<TileRow>>>()?;

        Self::new(tiles, width, rows.len())
    }

    /// Parses a level from its JSON form (see [`LevelData`]).
    pub fn from_json(json: &str) -> TilecastResult<Self> {
        LevelData::from_json(json)?.into_level()
    }

    /// Loads a level from a JSON map file.
    pub fn load(path: impl AsRef<Path>) -> TilecastResult<Self> {
        LevelData::load(path)?.into_level()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the tile label at the cell containing `position`.
    ///
    /// `position.y` selects the row and `position.x` the column, each floored
    /// to its integer cell. Fails with [`TilecastError::RowOutOfBounds`] when the
    /// row does not exist and [`TilecastError::ColumnOutOfBounds`] when the
    /// column does not exist within that row. Non-finite coordinates are out of
    /// bounds.
    pub fn tile(&self, position: Vector2) -> TilecastResult<Option<&TileLabel>> {
        let row = cell_index(position.y, self.height).ok_or(TilecastError::RowOutOfBounds {
            y: position.y,
            height: self.height,
        })?;

        let column = cell_index(position.x, self.width).ok_or(
            TilecastError::ColumnOutOfBounds {
                x: position.x,
                row,
                width: self.width,
            },
        )?;

        Ok(self.tiles[row][column].as_ref())
    }

    /// Returns true if `position` falls inside an existing cell.
    pub fn contains(&self, position: Vector2) -> bool {
        self.tile(position).is_ok()
    }

    /// Iterates over the grid rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<TileLabel>]> {
        self.tiles.iter().map(Vec::as_slice)
    }

    /// Iterates over every occupied cell as `(column, row, label)`.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize, &TileLabel)> {
        self.tiles.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, tile)| tile.as_ref().map(|label| (x, y, label)))
        })
    }

    /// Converts the level back into its serializable form.
    pub fn to_data(&self) -> LevelData {
        LevelData {
            width: self.width,
            height: self.height,
            tiles: self.tiles.clone(),
            spawn: None,
            facing: None,
        }
    }
}

/// Maps a continuous coordinate to a cell index in `0..len`.
fn cell_index(coordinate: f32, len: usize) -> Option<usize> {
    let cell = coordinate.floor();
    if cell >= 0.0 && cell < len as f32 {
        Some(cell as usize)
    } else {
        None
    }
}

/// Serializable map description.
///
/// ```json
/// {
///   "width": 2,
///   "height": 1,
///   "tiles": [["red", null]],
///   "spawn": { "x": 1.5, "y": 0.5 },
///   "facing": { "x": 0.0, "y": -1.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    /// Declared number of columns
    pub width: usize,
    /// Declared number of rows
    pub height: usize,
    /// Row-major grid of labels
    pub tiles: Vec<TileRow>,
    /// Player start position, if the map specifies one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spawn: Option<Vector2>,
    /// Player start facing, if the map specifies one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facing: Option<Vector2>,
}

impl LevelData {
    /// Parses map data from JSON without validating the grid.
    pub fn from_json(json: &str) -> TilecastResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads map data from a file.
    pub fn load(path: impl AsRef<Path>) -> TilecastResult<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Read map file {}", path.as_ref().display());
        Self::from_json(&json)
    }

    /// Validates the grid and builds a [`Level`].
    pub fn into_level(self) -> TilecastResult<Level> {
        Level::new(self.tiles, self.width, self.height)
    }
}
