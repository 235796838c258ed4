use std::collections::HashMap;

use crate::models::grid::LetterGrid;

/// Number of occurrences of each character.
pub fn letter_counts(chars: impl IntoIterator<Item = char>) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for ch in chars {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

/// Returns false when no path can possibly spell `query`: it is longer than the
/// grid has cells, or asks for some character more often than the grid holds it.
/// A true result only means the search is worth running.
pub fn is_feasible(grid: &LetterGrid, query: &[char]) -> bool {
    if query.len() > grid.len() {
        return false;
    }
    let available = letter_counts(grid.cells().map(|(_, ch)| ch));
    letter_counts(query.iter().copied())
        .into_iter()
        .all(|(ch, needed)| available.get(&ch).copied().unwrap_or(0) >= needed)
}
