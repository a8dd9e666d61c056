//! Brick-type matrix loading
//!
//! Level files are two lines: the grid size `W H`, then `W*H` brick type
//! digits in row-major order.
//!
//! ```text
//! 3 2
//! 0 1 0 2 0 3
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{MAX_GRID_HEIGHT, MAX_GRID_WIDTH};
use crate::sim::state::BrickKind;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing grid size header")]
    MissingHeader,
    #[error("invalid number `{0}`")]
    InvalidNumber(String),
    #[error("expected {expected} brick types, found {found}")]
    TooFewBricks { expected: usize, found: usize },
    #[error("unknown brick type {kind} at row {row}, column {col}")]
    UnknownBrickType { kind: u8, row: usize, col: usize },
    #[error("grid {width}x{height} exceeds the {max_w}x{max_h} limit")]
    TooLarge {
        width: usize,
        height: usize,
        max_w: usize,
        max_h: usize,
    },
}

/// A validated brick-type matrix
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickLayout {
    pub width: usize,
    pub height: usize,
    /// Row-major type indices, every one a valid `BrickKind`
    types: Vec<u8>,
}

impl BrickLayout {
    /// Validate an already-parsed matrix
    pub fn new(width: usize, height: usize, types: Vec<u8>) -> Result<Self, LevelError> {
        if width > MAX_GRID_WIDTH || height > MAX_GRID_HEIGHT {
            return Err(LevelError::TooLarge {
                width,
                height,
                max_w: MAX_GRID_WIDTH,
                max_h: MAX_GRID_HEIGHT,
            });
        }
        let expected = width * height;
        if types.len() < expected {
            return Err(LevelError::TooFewBricks {
                expected,
                found: types.len(),
            });
        }
        let mut types = types;
        types.truncate(expected);
        for (i, &kind) in types.iter().enumerate() {
            if BrickKind::from_index(kind).is_none() {
                return Err(LevelError::UnknownBrickType {
                    kind,
                    row: i / width,
                    col: i % width,
                });
            }
        }
        Ok(Self {
            width,
            height,
            types,
        })
    }

    /// Parse the two-line level format. Oversized grids are clamped.
    pub fn parse(text: &str) -> Result<Self, LevelError> {
        let mut lines = text.lines().filter(|l| !l.trim().is_empty());

        let header = lines.next().ok_or(LevelError::MissingHeader)?;
        let mut dims = header.split_whitespace().map(parse_number::<i64>);
        let raw_width = dims.next().ok_or(LevelError::MissingHeader)??;
        let raw_height = dims.next().ok_or(LevelError::MissingHeader)??;

        let width = clamp_dimension(raw_width, MAX_GRID_WIDTH);
        let height = clamp_dimension(raw_height, MAX_GRID_HEIGHT);
        if (width as i64, height as i64) != (raw_width, raw_height) {
            log::warn!(
                "Level grid {}x{} clamped to {}x{}",
                raw_width,
                raw_height,
                width,
                height
            );
        }

        let types = lines
            .flat_map(str::split_whitespace)
            .take(width * height)
            .map(parse_number::<u8>)
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(width, height, types)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let layout = Self::parse(&text)?;
        log::info!(
            "Loaded {}x{} level from {}",
            layout.width,
            layout.height,
            path.as_ref().display()
        );
        Ok(layout)
    }

    /// Brick type at a cell (row-major). Out-of-range cells read as ordinary.
    pub fn kind_at(&self, row: usize, col: usize) -> BrickKind {
        if row >= self.height || col >= self.width {
            return BrickKind::Ordinary;
        }
        self.types
            .get(row * self.width + col)
            .and_then(|&t| BrickKind::from_index(t))
            .unwrap_or_default()
    }
}

fn parse_number<T: std::str::FromStr>(token: &str) -> Result<T, LevelError> {
    token
        .parse()
        .map_err(|_| LevelError::InvalidNumber(token.to_string()))
}

fn clamp_dimension(raw: i64, max: usize) -> usize {
    raw.clamp(0, max as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        let layout = BrickLayout::parse("3 2\n0 1 2 3 4 5\n").unwrap();
        assert_eq!((layout.width, layout.height), (3, 2));
        assert_eq!(layout.kind_at(0, 1), BrickKind::Indestructible);
        assert_eq!(layout.kind_at(1, 2), BrickKind::FasterBall);
        assert_eq!(layout.kind_at(5, 5), BrickKind::Ordinary);
    }

    #[test]
    fn test_parse_clamps_oversized_grid() {
        let types = vec!["0"; 20 * 12].join(" ");
        let layout = BrickLayout::parse(&format!("20 12\n{types}")).unwrap();
        assert_eq!((layout.width, layout.height), (15, 9));

        let layout = BrickLayout::parse("-3 2\n").unwrap();
        assert_eq!((layout.width, layout.height), (0, 2));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(BrickLayout::parse(""), Err(LevelError::MissingHeader)));
        assert!(matches!(BrickLayout::parse("3\n0 0 0"), Err(LevelError::MissingHeader)));
        assert!(matches!(
            BrickLayout::parse("2 1\n0 x"),
            Err(LevelError::InvalidNumber(t)) if t == "x"
        ));
        assert!(matches!(
            BrickLayout::parse("2 2\n0 0 0"),
            Err(LevelError::TooFewBricks { expected: 4, found: 3 })
        ));
        assert!(matches!(
            BrickLayout::parse("2 1\n0 7"),
            Err(LevelError::UnknownBrickType { kind: 7, row: 0, col: 1 })
        ));
    }

    #[test]
    fn test_new_rejects_oversized() {
        assert!(matches!(
            BrickLayout::new(16, 1, vec![0; 16]),
            Err(LevelError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_layout_json_round_trip() {
        let layout = BrickLayout::new(2, 1, vec![4, 6]).unwrap();
        let json = serde_json::to_string(&layout).unwrap();
        let back: BrickLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, layout);
    }
}
