use crate::models::{grid::LetterGrid, Coordinate};

/// The four orthogonal directions, in the order the matcher tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
    ];

    /// The neighbouring cell in this direction, if it lies inside the grid.
    pub fn step(self, grid: &LetterGrid, at: Coordinate) -> Option<(Coordinate, char)> {
        match self {
            Direction::Top => top(grid, at),
            Direction::Right => right(grid, at),
            Direction::Bottom => bottom(grid, at),
            Direction::Left => left(grid, at),
        }
    }
}

pub fn top(grid: &LetterGrid, at: Coordinate) -> Option<(Coordinate, char)> {
    let row = at.row.checked_sub(1)?;
    grid.lookup(Coordinate::new(row, at.col))
}

pub fn right(grid: &LetterGrid, at: Coordinate) -> Option<(Coordinate, char)> {
    grid.lookup(Coordinate::new(at.row, at.col.checked_add(1)?))
}

pub fn bottom(grid: &LetterGrid, at: Coordinate) -> Option<(Coordinate, char)> {
    grid.lookup(Coordinate::new(at.row.checked_add(1)?, at.col))
}

pub fn left(grid: &LetterGrid, at: Coordinate) -> Option<(Coordinate, char)> {
    let col = at.col.checked_sub(1)?;
    grid.lookup(Coordinate::new(at.row, col))
}

/// In-bounds neighbours of `at` with their characters: top, right, bottom, left.
pub fn neighbors(
    grid: &LetterGrid,
    at: Coordinate,
) -> impl Iterator<Item = (Coordinate, char)> + '_ {
    Direction::ALL
        .into_iter()
        .filter_map(move |direction| direction.step(grid, at))
}
