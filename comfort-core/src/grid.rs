//! Grid model: fixed positions of a rectangular room
//!
//! Positions are numbered column by column, starting at 1:
//!
//! ```text
//!            col 0  col 1  col 2  ...
//!   row 0      1      6     11
//!   row 1      2      7     12
//!   row 2      3      8     13
//!   row 3      4      9     14
//!   row 4      5     10     15
//! ```
//!
//! `id = column * rows + row + 1`, and back again
//! `column = (id - 1) / rows`, `row = (id - 1) % rows`. The two conversions
//! are mutual inverses over the whole grid.

use core::fmt;

use crate::errors::{ComfortError, ComfortResult};

/// Coordinate pair on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Zero-based column (x)
    pub column: u16,
    /// Zero-based row (y)
    pub row: u16,
}

impl Position {
    /// Position at `(column, row)`
    pub const fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }

    /// Euclidean distance in grid cells
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = f64::from(self.column) - f64::from(other.column);
        let dy = f64::from(self.row) - f64::from(other.row);
        libm::hypot(dx, dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Linear 1-based position identifier (the seat number)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PositionId(pub u32);

impl PositionId {
    /// Raw id value
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rectangular grid of `columns x rows` positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    columns: u16,
    rows: u16,
}

impl Grid {
    /// Grid with `columns` (W) and `rows` (H); both must be non-zero
    pub fn new(columns: u16, rows: u16) -> ComfortResult<Self> {
        if columns == 0 || rows == 0 {
            return Err(ComfortError::InvalidConfig {
                reason: "grid must have at least one column and one row",
            });
        }
        Ok(Self { columns, rows })
    }

    /// Number of columns (W)
    pub const fn columns(&self) -> u16 {
        self.columns
    }

    /// Number of rows (H)
    pub const fn rows(&self) -> u16 {
        self.rows
    }

    /// `(W, H)`
    pub const fn dimensions(&self) -> (u16, u16) {
        (self.columns, self.rows)
    }

    /// Total number of positions, `W * H`
    pub fn len(&self) -> u32 {
        u32::from(self.columns) * u32::from(self.rows)
    }

    /// Always false for a constructed grid
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `position` lies on the grid
    pub fn contains(&self, position: Position) -> bool {
        position.column < self.columns && position.row < self.rows
    }

    /// Whether `id` is in `1..=W*H`
    pub fn contains_id(&self, id: PositionId) -> bool {
        id.0 >= 1 && id.0 <= self.len()
    }

    /// Linear id of an on-grid position
    pub fn position_to_id(&self, position: Position) -> PositionId {
        debug_assert!(self.contains(position));
        PositionId(u32::from(position.column) * u32::from(self.rows) + u32::from(position.row) + 1)
    }

    /// Coordinates of an on-grid id
    pub fn id_to_position(&self, id: PositionId) -> Position {
        debug_assert!(self.contains_id(id));
        let index = id.0 - 1;
        let rows = u32::from(self.rows);
        // Both quotient and remainder are bounded by the u16 grid dimensions.
        Position {
            column: (index / rows) as u16,
            row: (index % rows) as u16,
        }
    }

    /// Validate a caller-supplied position
    pub fn resolve_position(&self, position: Position) -> ComfortResult<Position> {
        if self.contains(position) {
            Ok(position)
        } else {
            Err(ComfortError::UnknownPosition {
                column: position.column,
                row: position.row,
            })
        }
    }

    /// Validate a caller-supplied id and return its coordinates
    pub fn resolve_id(&self, id: PositionId) -> ComfortResult<Position> {
        if self.contains_id(id) {
            Ok(self.id_to_position(id))
        } else {
            Err(ComfortError::UnknownPositionId { id: id.0 })
        }
    }

    /// Every position in id order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (1..=self.len()).map(move |id| self.id_to_position(PositionId(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn classroom_numbering() {
        let grid = Grid::new(6, 5).unwrap();
        assert_eq!(grid.len(), 30);
        assert_eq!(grid.position_to_id(Position::new(0, 0)), PositionId(1));
        assert_eq!(grid.position_to_id(Position::new(1, 0)), PositionId(6));
        assert_eq!(grid.position_to_id(Position::new(1, 4)), PositionId(10));
        assert_eq!(grid.position_to_id(Position::new(5, 4)), PositionId(30));
        assert_eq!(grid.id_to_position(PositionId(11)), Position::new(2, 0));
    }

    #[test]
    fn conversions_are_inverse() {
        let grid = Grid::new(6, 5).unwrap();
        for id in 1..=grid.len() {
            let position = grid.id_to_position(PositionId(id));
            assert!(grid.contains(position));
            assert_eq!(grid.position_to_id(position), PositionId(id));
        }
    }

    #[test]
    fn positions_follow_id_order() {
        let grid = Grid::new(2, 3).unwrap();
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(
            positions,
            [
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 0),
                Position::new(1, 1),
                Position::new(1, 2),
            ]
        );
    }

    #[test]
    fn off_grid_input_is_rejected() {
        let grid = Grid::new(6, 5).unwrap();
        assert_eq!(
            grid.resolve_position(Position::new(6, 0)),
            Err(ComfortError::UnknownPosition { column: 6, row: 0 })
        );
        assert_eq!(
            grid.resolve_id(PositionId(0)),
            Err(ComfortError::UnknownPositionId { id: 0 })
        );
        assert_eq!(
            grid.resolve_id(PositionId(31)),
            Err(ComfortError::UnknownPositionId { id: 31 })
        );
        assert_eq!(grid.resolve_id(PositionId(30)), Ok(Position::new(5, 4)));
    }

    #[test]
    fn empty_grid_is_invalid() {
        assert!(Grid::new(0, 5).is_err());
        assert!(Grid::new(6, 0).is_err());
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0, 0);
        let b = Position::new(3, 4);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance_to(&a), 0.0);
    }
}
