use crate::models::{grid::LetterGrid, Coordinate};

/// Cells already used by the path under construction.
///
/// Cells are pushed as the path grows and popped as it backtracks, so the
/// trail is always the current path and a sibling branch never sees marks
/// left by an abandoned one.
#[derive(Debug)]
pub(crate) struct VisitedSet {
    rows: usize,
    cols: usize,
    marks: Vec<bool>,
    trail: Vec<Coordinate>,
}

impl VisitedSet {
    pub(crate) fn for_grid(grid: &LetterGrid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            marks: vec![false; grid.len()],
            trail: Vec::with_capacity(grid.len()),
        }
    }

    fn index(&self, at: Coordinate) -> Option<usize> {
        (at.row < self.rows && at.col < self.cols).then(|| at.row * self.cols + at.col)
    }

    pub(crate) fn contains(&self, at: Coordinate) -> bool {
        self.index(at).is_some_and(|i| self.marks[i])
    }

    /// Extends the path with `at`. Returns false, leaving the set unchanged,
    /// when `at` is outside the grid or already on the path.
    pub(crate) fn push(&mut self, at: Coordinate) -> bool {
        match self.index(at) {
            Some(i) if !self.marks[i] => {
                self.marks[i] = true;
                self.trail.push(at);
                true
            }
            _ => false,
        }
    }

    /// Releases the most recently pushed cell.
    pub(crate) fn pop(&mut self) -> Option<Coordinate> {
        let at = self.trail.pop()?;
        if let Some(i) = self.index(at) {
            self.marks[i] = false;
        }
        Some(at)
    }

    /// Cells on the path, oldest first.
    pub(crate) fn path(&self) -> &[Coordinate] {
        &self.trail
    }
}
