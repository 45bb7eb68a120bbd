//! Board geometry: where each square sits in world space.

use serde::{Deserialize, Serialize};

use crate::core::Point3;

/// Lookup from square number to world-space anchor.
///
/// Squares are 1-indexed: `1..=square_count()`. Square `0` is "off the
/// board" and never has an anchor.
pub trait BoardGeometry {
    /// Number of squares on the board.
    fn square_count(&self) -> u32;

    /// Anchor of `square`, `None` if there is no such square or its anchor
    /// is missing.
    fn position_of(&self, square: u32) -> Option<Point3>;
}

/// Board backed by an explicit list of anchors, square 1 first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnchorBoard {
    anchors: Vec<Point3>,
}

impl AnchorBoard {
    #[must_use]
    pub fn new(anchors: Vec<Point3>) -> Self {
        Self { anchors }
    }

    /// Serpentine (boustrophedon) layout on the XZ plane.
    ///
    /// Square 1 sits at the origin, row 0 runs along +X, row 1 comes back
    /// along -X one `spacing` further along +Z, and so on. A 12 x 10 board
    /// gives the classic 120 squares.
    ///
    /// ```
    /// use rust_dicerace::board::{AnchorBoard, BoardGeometry};
    /// use rust_dicerace::core::Point3;
    ///
    /// let board = AnchorBoard::serpentine(3, 2, 1.0);
    /// assert_eq!(board.square_count(), 6);
    /// assert_eq!(board.position_of(3), Some(Point3::new(2.0, 0.0, 0.0)));
    /// assert_eq!(board.position_of(4), Some(Point3::new(2.0, 0.0, 1.0)));
    /// ```
    #[must_use]
    pub fn serpentine(columns: u32, rows: u32, spacing: f32) -> Self {
        let mut anchors = Vec::with_capacity((columns * rows) as usize);
        for row in 0..rows {
            for step in 0..columns {
                let column = if row % 2 == 0 { step } else { columns - 1 - step };
                anchors.push(Point3::new(
                    column as f32 * spacing,
                    0.0,
                    row as f32 * spacing,
                ));
            }
        }
        Self { anchors }
    }

    /// A straight line of `squares` anchors along +X.
    #[must_use]
    pub fn line(squares: u32, spacing: f32) -> Self {
        Self::serpentine(squares, 1, spacing)
    }

    #[must_use]
    pub fn anchors(&self) -> &[Point3] {
        &self.anchors
    }
}

impl BoardGeometry for AnchorBoard {
    fn square_count(&self) -> u32 {
        self.anchors.len() as u32
    }

    fn position_of(&self, square: u32) -> Option<Point3> {
        let index = square.checked_sub(1)?;
        self.anchors.get(index as usize).copied()
    }
}

impl<B: BoardGeometry + ?Sized> BoardGeometry for Box<B> {
    fn square_count(&self) -> u32 {
        (**self).square_count()
    }

    fn position_of(&self, square: u32) -> Option<Point3> {
        (**self).position_of(square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squares_are_one_indexed() {
        let board = AnchorBoard::new(vec![Point3::new(1.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0)]);

        assert_eq!(board.square_count(), 2);
        assert_eq!(board.position_of(0), None);
        assert_eq!(board.position_of(1), Some(Point3::new(1.0, 0.0, 0.0)));
        assert_eq!(board.position_of(2), Some(Point3::new(2.0, 0.0, 0.0)));
        assert_eq!(board.position_of(3), None);
    }

    #[test]
    fn test_serpentine_classic_board() {
        let board = AnchorBoard::serpentine(12, 10, 1.0);
        assert_eq!(board.square_count(), 120);

        // End of the first row, then the turn back.
        assert_eq!(board.position_of(12), Some(Point3::new(11.0, 0.0, 0.0)));
        assert_eq!(board.position_of(13), Some(Point3::new(11.0, 0.0, 1.0)));
        assert_eq!(board.position_of(24), Some(Point3::new(0.0, 0.0, 1.0)));
        // Last square: row 9 runs backwards.
        assert_eq!(board.position_of(120), Some(Point3::new(0.0, 0.0, 9.0)));
    }

    #[test]
    fn test_adjacent_squares_are_one_spacing_apart() {
        let board = AnchorBoard::serpentine(5, 4, 2.0);
        for square in 1..board.square_count() {
            let a = board.position_of(square).unwrap();
            let b = board.position_of(square + 1).unwrap();
            assert!((a.distance(b) - 2.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_line() {
        let board = AnchorBoard::line(6, 1.5);
        assert_eq!(board.square_count(), 6);
        assert_eq!(board.position_of(6), Some(Point3::new(7.5, 0.0, 0.0)));
    }

    #[test]
    fn test_board_serialization() {
        let board = AnchorBoard::line(3, 1.0);
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: AnchorBoard = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
