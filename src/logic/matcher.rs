use log::{debug, trace};

use crate::error::GridError;
use crate::logic::{adjacency::Direction, feasibility::is_feasible, visited::VisitedSet};
use crate::models::{
    grid::LetterGrid,
    search::{SearchOptions, SearchOutcome, SearchReport},
    Coordinate,
};

/// Returns true if some simple path through orthogonally adjacent cells spells `query`.
///
/// An empty query always matches.
pub fn exists(grid: &LetterGrid, query: &str) -> bool {
    search(grid, query, &SearchOptions::default()).outcome.is_found()
}

/// Validates `rows` as a grid, then runs [`exists`].
pub fn exists_in_rows<S: AsRef<str>>(rows: &[S], query: &str) -> Result<bool, GridError> {
    let grid = LetterGrid::new(rows)?;
    Ok(exists(&grid, query))
}

/// The first path spelling `query`, scanning start cells row-major and
/// neighbours top, right, bottom, left.
pub fn find_path(grid: &LetterGrid, query: &str) -> Option<Vec<Coordinate>> {
    search(grid, query, &SearchOptions::default()).path
}

/// Backtracking search with full control over budget and pruning.
pub fn search(grid: &LetterGrid, query: &str, options: &SearchOptions) -> SearchReport {
    let letters: Vec<char> = query.chars().collect();
    debug!(
        "searching {}x{} grid for {query:?} (budget {:?}, prune {})",
        grid.rows(),
        grid.cols(),
        options.step_budget,
        options.prune
    );

    if options.prune && !is_feasible(grid, &letters) {
        debug!("{query:?} rejected: grid cannot supply its letters");
        return SearchReport {
            query: query.to_string(),
            outcome: SearchOutcome::Absent,
            path: None,
            steps: 0,
        };
    }

    let mut matcher = Matcher::new(grid, options.step_budget);
    let outcome = match matcher.run(&letters) {
        Extension::Matched => SearchOutcome::Found,
        Extension::DeadEnd => SearchOutcome::Absent,
        Extension::OverBudget => SearchOutcome::BudgetExhausted,
    };
    debug!("{query:?} → {outcome:?} after {} step(s)", matcher.steps);

    SearchReport {
        query: query.to_string(),
        outcome,
        path: matcher.path,
        steps: matcher.steps,
    }
}

enum Extension {
    Matched,
    DeadEnd,
    OverBudget,
}

struct Matcher<'g> {
    grid: &'g LetterGrid,
    budget: Option<u64>,
    steps: u64,
    path: Option<Vec<Coordinate>>,
}

impl<'g> Matcher<'g> {
    fn new(grid: &'g LetterGrid, budget: Option<u64>) -> Self {
        Self {
            grid,
            budget,
            steps: 0,
            path: None,
        }
    }

    /// Spends one step, or returns false if the budget is used up.
    fn charge(&mut self) -> bool {
        if self.budget.is_some_and(|budget| self.steps >= budget) {
            return false;
        }
        self.steps += 1;
        true
    }

    fn run(&mut self, query: &[char]) -> Extension {
        let Some(&first) = query.first() else {
            self.path = Some(Vec::new());
            return Extension::Matched;
        };

        let grid = self.grid;
        for (start, ch) in grid.cells() {
            if ch != first {
                continue;
            }
            if !self.charge() {
                return Extension::OverBudget;
            }
            trace!("trying start {start:?}");
            // Each start cell gets its own visited set.
            let mut visited = VisitedSet::for_grid(grid);
            visited.push(start);
            match self.extend(start, query, &mut visited) {
                Extension::DeadEnd => {}
                done => return done,
            }
        }
        Extension::DeadEnd
    }

    /// Depth-first walk from `start`, which must already be on `visited`.
    ///
    /// Runs on an explicit stack of frames so the path length is bounded by
    /// the grid size rather than the thread's stack. Popping a frame releases
    /// its cell.
    fn extend(&mut self, start: Coordinate, query: &[char], visited: &mut VisitedSet) -> Extension {
        let grid = self.grid;
        let mut stack = vec![Frame::new(start)];

        loop {
            let depth = stack.len();
            if depth == query.len() {
                self.path = Some(visited.path().to_vec());
                return Extension::Matched;
            }
            let Some(frame) = stack.last_mut() else {
                return Extension::DeadEnd;
            };

            let wanted = query[depth];
            let mut advance = None;
            while let Some(direction) = Direction::ALL.get(frame.next_direction) {
                frame.next_direction += 1;
                match direction.step(grid, frame.at) {
                    Some((neighbor, ch)) if ch == wanted && !visited.contains(neighbor) => {
                        advance = Some(neighbor);
                        break;
                    }
                    _ => {}
                }
            }

            match advance {
                Some(neighbor) => {
                    if !self.charge() {
                        return Extension::OverBudget;
                    }
                    visited.push(neighbor);
                    stack.push(Frame::new(neighbor));
                }
                None => {
                    stack.pop();
                    visited.pop();
                }
            }
        }
    }
}

/// One cell of the path under construction and the next direction to try from it.
struct Frame {
    at: Coordinate,
    next_direction: usize,
}

impl Frame {
    fn new(at: Coordinate) -> Self {
        Self {
            at,
            next_direction: 0,
        }
    }
}
