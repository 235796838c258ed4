use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::GridError,
    models::{Coordinate, Matrix},
};

/// Immutable rectangular grid of characters.
///
/// Serialises as a JSON array of row strings, e.g. `["AB", "CD"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct LetterGrid {
    rows: usize,
    cols: usize,
    cells: Matrix<char>,
}

impl LetterGrid {
    /// Builds a grid from its rows, rejecting empty or ragged input.
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let cells: Matrix<char> = rows.iter().map(|r| r.as_ref().chars().collect()).collect();
        let Some(first) = cells.first() else {
            return Err(GridError::Empty);
        };
        let cols = first.len();
        if cols == 0 {
            return Err(GridError::NoColumns);
        }
        if let Some((row, found)) = cells
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != cols)
        {
            return Err(GridError::Ragged {
                row,
                expected: cols,
                found,
            });
        }
        Ok(Self {
            rows: cells.len(),
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells, which is also the longest possible path.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Always false: a constructed grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, at: Coordinate) -> Option<char> {
        if at.row < self.rows && at.col < self.cols {
            Some(self.cells[at.row][at.col])
        } else {
            None
        }
    }

    /// Like [`get`](Self::get), paired with the coordinate that was probed.
    pub fn lookup(&self, at: Coordinate) -> Option<(Coordinate, char)> {
        self.get(at).map(|ch| (at, ch))
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, char)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &ch)| (Coordinate::new(r, c), ch))
        })
    }

    pub fn row_str(&self, row: usize) -> Option<String> {
        self.cells.get(row).map(|r| r.iter().collect())
    }
}

impl TryFrom<Vec<String>> for LetterGrid {
    type Error = GridError;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(rows.as_slice())
    }
}

impl From<LetterGrid> for Vec<String> {
    fn from(grid: LetterGrid) -> Self {
        grid.cells.into_iter().map(|r| r.into_iter().collect()).collect()
    }
}

/// Parses newline-separated rows.
///
/// Blank lines before the first row and after the last are skipped, and
/// leading whitespace shared by every row is taken as indentation. All other
/// whitespace belongs to the grid, so a row's trailing spaces are kept and
/// `Display` output parses back unchanged unless every row starts with whitespace.
impl FromStr for LetterGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        let first = lines.iter().position(|l| !is_blank(l)).unwrap_or(lines.len());
        let last = lines.iter().rposition(|l| !is_blank(l)).map_or(first, |i| i + 1);
        let body = &lines[first..last];

        let indent = body
            .iter()
            .filter(|l| !is_blank(l))
            .map(|l| l.chars().take_while(|c| c.is_whitespace()).count())
            .min()
            .unwrap_or(0);
        let rows: Vec<&str> = body.iter().map(|l| strip_indent(l, indent)).collect();
        Self::new(rows.as_slice())
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn strip_indent(line: &str, indent: usize) -> &str {
    line.char_indices().nth(indent).map_or("", |(i, _)| &line[i..])
}

impl fmt::Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
